//! `[site.nav]` configuration for the top navigation bar.
//!
//! # Example
//!
//! ```toml
//! [site.nav]
//! items = [
//!     { text = "Research", link = "/" },
//!     { text = "Contact", link = "/contact" },
//! ]
//! social = [{ icon = "github", link = "https://github.com/alice" }]
//! ```

use serde::{Deserialize, Serialize};

/// Navigation bar configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Ordered navigation entries.
    pub items: Vec<NavItem>,

    /// Social icon links shown next to the navigation.
    pub social: Vec<SocialLink>,
}

/// A single `(label, link)` navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

/// Social icon link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name (e.g., "github", "x").
    pub icon: String,
    pub link: String,
}
