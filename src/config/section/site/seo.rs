//! `[site.seo]` configuration for per-page head tags.

use serde::{Deserialize, Serialize};

/// SEO settings used by the head tag transformer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Front matter `layout` value marking the home page (`WebSite` JSON-LD).
    pub home_layout: String,

    /// `twitter:card` value.
    pub twitter_card: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            home_layout: "home".into(),
            twitter_card: "summary".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.seo.home_layout, "home");
        assert_eq!(config.site.seo.twitter_card, "summary");
    }

    #[test]
    fn test_custom() {
        let config = test_parse_config(
            "[site.seo]\nhome_layout = \"landing\"\ntwitter_card = \"summary_large_image\"",
        );
        assert_eq!(config.site.seo.home_layout, "landing");
        assert_eq!(config.site.seo.twitter_card, "summary_large_image");
    }
}
