//! `[theme.footer]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.footer]
//! message = "Built with folio"
//! copyright = "Copyright © 2024 Mao Ya"   # computed from the author when omitted
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub message: String,

    /// Filled in at load time when unset.
    pub copyright: Option<String>,
}

impl FooterConfig {
    /// Set `copyright` to `Copyright © <year> <author>` unless configured.
    pub fn fill_copyright(&mut self, year: u16, author: &str) {
        if self.copyright.is_none() {
            self.copyright = Some(format!("Copyright © {year} {author}").trim_end().to_string());
        }
    }
}
