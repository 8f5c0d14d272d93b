//! `folio build`: inject head tags into rendered pages and write the feed.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::site::{BuildReport, Site};

/// Build the site with the default hooks registered.
pub fn build_site(config: SiteConfig) -> Result<BuildReport> {
    Site::with_default_hooks(config).build()
}
