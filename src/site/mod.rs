//! Site build lifecycle.
//!
//! ```text
//! load pages ─► per page: global tags + head transformers ─► inject into HTML
//!            └► build-end hooks (feed)
//! ```

use anyhow::{Context, Result};
use std::fs;

use crate::config::SiteConfig;
use crate::content;
use crate::generator::{feed::build_feed, write_atomic};
use crate::hooks::{BuildContext, Hooks};
use crate::page::ContentItem;
use crate::seo::{self, HeadTag, PageContext};
use crate::utils::date::DateTimeUtc;
use crate::{debug, log};

/// Summary of one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: usize,
    /// Output files that received head tags.
    pub injected: usize,
    /// Pages without an output file or without `</head>`.
    pub skipped: usize,
}

pub struct Site {
    config: SiteConfig,
    hooks: Hooks,
}

impl Site {
    /// A site with no hooks registered.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            hooks: Hooks::default(),
        }
    }

    /// A site with the SEO head transformer and the feed builder registered.
    pub fn with_default_hooks(config: SiteConfig) -> Self {
        let mut site = Self::new(config);
        site.on_transform_head("seo", seo::transform_head);
        site.on_build_end("feed", build_feed);
        site
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn on_transform_head<F>(&mut self, name: &'static str, hook: F)
    where
        F: Fn(&PageContext<'_>, &SiteConfig) -> Vec<HeadTag> + 'static,
    {
        self.hooks.on_transform_head(name, hook);
    }

    pub fn on_build_end<F>(&mut self, name: &'static str, hook: F)
    where
        F: Fn(&BuildContext<'_>) -> Result<()> + 'static,
    {
        self.hooks.on_build_end(name, hook);
    }

    /// Global `[site.header]` tags followed by transformer output.
    pub fn head_tags(&self, item: &ContentItem) -> Vec<HeadTag> {
        let page = PageContext::new(item, &self.config);
        let mut tags = self.config.site.header.tags.clone();
        tags.extend(self.hooks.transform_head(&page, &self.config));
        tags
    }

    /// Run the full build.
    pub fn build(&self) -> Result<BuildReport> {
        let now = DateTimeUtc::now();
        let pages = content::load_pages(&self.config)?;
        if pages.is_empty() {
            log!("build"; "no pages found in {}", self.config.build.content.display());
        }
        let mut report = BuildReport {
            pages: pages.len(),
            ..Default::default()
        };

        for item in pages.iter() {
            if self.inject(item)? {
                report.injected += 1;
            } else {
                report.skipped += 1;
            }
        }

        let ctx = BuildContext {
            config: &self.config,
            pages: pages.as_slice(),
            output_dir: &self.config.build.output,
            now,
        };
        self.hooks.run_build_end(&ctx)?;

        log!(
            "build";
            "{} pages, head tags injected into {} ({} skipped)",
            report.pages, report.injected, report.skipped
        );
        Ok(report)
    }

    /// Inject head tags into the page's rendered HTML, if present.
    fn inject(&self, item: &ContentItem) -> Result<bool> {
        let output = &item.route.output_file;
        if !output.is_file() {
            debug!("head"; "{}: no rendered output at {}", item.route.relative, output.display());
            return Ok(false);
        }

        let html = fs::read_to_string(output)
            .with_context(|| format!("failed to read {}", output.display()))?;
        let rendered = seo::render_tags(&self.head_tags(item))?;

        let Some(updated) = seo::inject_head(&html, &rendered) else {
            debug!("head"; "{}: no </head> found, skipped", output.display());
            return Ok(false);
        };
        write_atomic(output, updated.as_bytes())?;
        debug!("head"; "{}", item.route.url);
        Ok(true)
    }
}
