//! Lifecycle hooks.
//!
//! Two extension points, each run in registration order:
//!
//! - **transform head**: per page, returns extra `<head>` tags
//! - **build end**: once, after every page has been processed

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::SiteConfig;
use crate::page::ContentItem;
use crate::seo::{HeadTag, PageContext};
use crate::utils::date::DateTimeUtc;

/// Per-page head tag transformer.
pub type HeadTransform = Box<dyn Fn(&PageContext<'_>, &SiteConfig) -> Vec<HeadTag>>;

/// Build-completion hook; an error fails the build.
pub type BuildEndHook = Box<dyn Fn(&BuildContext<'_>) -> Result<()>>;

/// Everything a build-completion hook can see.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    pub config: &'a SiteConfig,
    /// Loaded pages in discovery order.
    pub pages: &'a [ContentItem],
    pub output_dir: &'a Path,
    /// Build start time.
    pub now: DateTimeUtc,
}

/// Registered hooks, keyed by a name used in logs and errors.
#[derive(Default)]
pub struct Hooks {
    transform_head: Vec<(&'static str, HeadTransform)>,
    build_end: Vec<(&'static str, BuildEndHook)>,
}

impl Hooks {
    pub fn on_transform_head<F>(&mut self, name: &'static str, hook: F)
    where
        F: Fn(&PageContext<'_>, &SiteConfig) -> Vec<HeadTag> + 'static,
    {
        self.transform_head.push((name, Box::new(hook)));
    }

    pub fn on_build_end<F>(&mut self, name: &'static str, hook: F)
    where
        F: Fn(&BuildContext<'_>) -> Result<()> + 'static,
    {
        self.build_end.push((name, Box::new(hook)));
    }

    /// Concatenated output of every head transformer.
    pub fn transform_head(&self, page: &PageContext<'_>, config: &SiteConfig) -> Vec<HeadTag> {
        self.transform_head
            .iter()
            .flat_map(|(_, hook)| hook(page, config))
            .collect()
    }

    /// Run build-completion hooks, stopping at the first failure.
    pub fn run_build_end(&self, ctx: &BuildContext<'_>) -> Result<()> {
        for (name, hook) in &self.build_end {
            crate::debug!("build"; "running `{}` hook", name);
            hook(ctx).with_context(|| format!("`{name}` hook failed"))?;
        }
        Ok(())
    }
}
