//! `[site.header]` configuration: global `<head>` tags.
//!
//! # Example
//!
//! ```toml
//! [[site.header.tags]]
//! tag = "link"
//! attrs = { rel = "icon", href = "/favicon.ico" }
//!
//! [[site.header.tags]]
//! tag = "script"
//! attrs = { src = "/analytics.js", defer = "" }
//! ```

use crate::seo::HeadTag;
use serde::{Deserialize, Serialize};

/// Tags appended to every page's `<head>`, before page-specific tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub tags: Vec<HeadTag>,
}
