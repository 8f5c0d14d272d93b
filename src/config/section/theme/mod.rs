//! `[theme]` section configuration.
//!
//! Presentation settings consumed by page templates.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! sidebar = true
//!
//! [theme.outline]
//! level = "deep"
//!
//! [theme.doc_footer]
//! next = false
//! ```

mod footer;
mod outline;
mod search;

pub use footer::FooterConfig;
pub use outline::OutlineConfig;
pub use search::SearchConfig;

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Theme section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Show the sidebar.
    pub sidebar: bool,

    pub footer: FooterConfig,

    pub search: SearchConfig,

    pub outline: OutlineConfig,

    /// Previous/next links below each document.
    pub doc_footer: DocFooterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocFooterConfig {
    pub prev: bool,
    pub next: bool,
}

impl Default for DocFooterConfig {
    fn default() -> Self {
        Self {
            prev: true,
            next: true,
        }
    }
}

impl ThemeSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.outline.validate(diag);
    }
}
