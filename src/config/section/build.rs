//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"   # Markdown sources (relative to site root)
//! output = "public"     # Rendered site (relative to site root)
//! clean_urls = true     # `/blog/post` instead of `/blog/post.html`
//! minify = true         # Minify generated XML
//! drafts = false        # Include `draft: true` documents
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content source directory (Markdown files).
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Derive page URLs without the `.html` extension.
    pub clean_urls: bool,

    /// Minify generated XML.
    pub minify: bool,

    /// Include documents marked `draft: true`.
    pub drafts: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            clean_urls: false,
            minify: false,
            drafts: false,
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
        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(!config.build.clean_urls);
        assert!(!config.build.minify);
        assert!(!config.build.drafts);
    }

    #[test]
    fn test_custom_paths() {
        let config = test_parse_config(
            "[build]\ncontent = \"docs\"\noutput = \"dist\"\nclean_urls = true\nminify = true",
        );
        assert_eq!(config.build.content, PathBuf::from("docs"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(config.build.clean_urls);
        assert!(config.build.minify);
    }
}
