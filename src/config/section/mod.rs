//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module  | TOML Section | Purpose                                  |
//! |---------|--------------|------------------------------------------|
//! | `build` | `[build]`    | Content/output paths, URLs, drafts       |
//! | `site`  | `[site]`     | Site info, nav, head tags, feed, SEO     |
//! | `theme` | `[theme]`    | Sidebar, footer, search, outline         |

mod build;
pub mod site;
pub mod theme;

// Re-export section configs
pub use build::BuildSectionConfig;
pub use site::SiteSectionConfig;
pub use theme::ThemeSectionConfig;
