//! `[site]` section configuration.
//!
//! Contains site metadata, navigation, global head tags, feed and SEO settings.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "Mao Ya"
//! description = "3D visualization engineer"
//! language = "zh-CN"
//! author = "Mao Ya"
//! url = "https://maoya.dev"
//!
//! [site.nav]
//! items = [{ text = "Research", link = "/" }, { text = "Contact", link = "/contact" }]
//!
//! [[site.header.tags]]
//! tag = "link"
//! attrs = { rel = "icon", href = "/favicon.ico" }
//!
//! [site.feed]
//! exclude = ["contact"]
//!
//! [site.seo]
//! home_layout = "home"
//! ```

mod feed;
mod header;
mod info;
mod nav;
mod seo;

pub use feed::FeedConfig;
pub use header::HeaderConfig;
pub use info::SiteInfoConfig;
pub use nav::NavConfig;
pub use seo::SeoConfig;

use serde::{Deserialize, Serialize};

/// Site section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (title, author, description, etc.)
    pub info: SiteInfoConfig,

    /// Navigation bar entries.
    pub nav: NavConfig,

    /// Global `<head>` tags.
    pub header: HeaderConfig,

    /// Feed generation settings.
    pub feed: FeedConfig,

    /// Per-page SEO tag settings.
    pub seo: SeoConfig,
}
