//! Feed generation (RSS 2.0).
//!
//! Runs as a build-completion hook over the loaded content items.

mod common;
pub mod rss;

use crate::hooks::BuildContext;
use anyhow::Result;

/// Build the feed if enabled in config.
pub fn build_feed(ctx: &BuildContext<'_>) -> Result<()> {
    if ctx.config.site.feed.enable {
        rss::build_rss(ctx)?;
    }
    Ok(())
}
