//! `[site.feed]` RSS feed configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Generate the feed at build completion.
    pub enable: bool,
    /// Output path, relative to the output directory.
    pub path: PathBuf,
    /// Page names never syndicated (matched against the end of the URL).
    pub exclude: Vec<String>,
    /// Line separating the excerpt from the rest of a document.
    pub excerpt_separator: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "feed.xml".into(),
            exclude: vec!["contact".into(), "about".into()],
            excerpt_separator: "---".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.site.feed.enable);
        assert_eq!(config.site.feed.path, PathBuf::from("feed.xml"));
        assert_eq!(config.site.feed.exclude, ["contact", "about"]);
        assert_eq!(config.site.feed.excerpt_separator, "---");
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[site.feed]\nenable = false\npath = \"rss.xml\"\nexclude = [\"contact\"]\nexcerpt_separator = \"<!-- more -->\"",
        );
        assert!(!config.site.feed.enable);
        assert_eq!(config.site.feed.path, PathBuf::from("rss.xml"));
        assert_eq!(config.site.feed.exclude, ["contact"]);
        assert_eq!(config.site.feed.excerpt_separator, "<!-- more -->");
    }
}
