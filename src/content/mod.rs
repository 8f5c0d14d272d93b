//! Markdown content loading.
//!
//! | Module        | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `frontmatter` | YAML-like and TOML front matter parsing        |
//! | `markdown`    | Excerpt rendering and first-heading lookup     |
//! | `loader`      | Directory walk producing the page store        |

mod frontmatter;
mod loader;
mod markdown;

pub use loader::{load_item, load_pages};
