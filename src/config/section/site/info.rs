//! `[site.info]` configuration.
//!
//! Basic site information: title, description, language, base URL and the
//! author identity used by the feed and structured data.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site metadata shared by head tags and the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Language code (e.g., "en", "zh-CN").
    pub language: String,

    /// Canonical base URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// Author name, used for the structured-data identity and copyright.
    pub author: String,

    /// Site image (absolute URL or path under the site root), used as feed image.
    pub image: Option<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            language: "en".into(),
            url: None,
            author: String::new(),
            image: None,
        }
    }
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.info.url");

    /// Base URL without trailing slash, or `""` when unset.
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Resolve a site path (`/logo.png`) or absolute URL against the base URL.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `feed_enabled`, `url` must be set
    /// - `url` must be a valid URL with scheme (e.g., `https://example.com`)
    pub fn validate(&self, feed_enabled: bool, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            if feed_enabled {
                diag.error_with_hint(
                    Self::URL,
                    "feed generation is enabled but no site url is configured",
                    format!("set {}, e.g.: \"https://example.com\"", Self::URL),
                );
            } else {
                diag.warn(Self::URL, "not set, canonical URLs will be path-only");
            }
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}
