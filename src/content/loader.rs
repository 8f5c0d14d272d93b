//! Content discovery: walks the content directory for Markdown documents.

use anyhow::{Context, Result};
use jwalk::WalkDir;
use std::fs;
use std::path::{Path, PathBuf};

use super::{frontmatter, markdown};
use crate::config::SiteConfig;
use crate::page::{ContentItem, PageRoute, PageStore};
use crate::{debug, log};

/// Load every Markdown document under the content directory.
///
/// Documents are returned in sorted path order, which is the discovery order
/// used for stable tie-breaking. Drafts are skipped unless `build.drafts`.
pub fn load_pages(config: &SiteConfig) -> Result<PageStore> {
    let content_dir = &config.build.content;
    if !content_dir.is_dir() {
        log!("build"; "content directory {} not found, no pages loaded", content_dir.display());
        return Ok(PageStore::new());
    }

    let mut store = PageStore::new();
    for path in collect_markdown_files(content_dir) {
        let item = load_item(config, &path)?;
        if item.meta.draft && !config.build.drafts {
            debug!("build"; "skipping draft {}", item.route.relative);
            continue;
        }
        store.push(item);
    }

    debug!("build"; "loaded {} pages from {}", store.len(), content_dir.display());
    Ok(store)
}

/// Load a single Markdown document.
pub fn load_item(config: &SiteConfig, path: &Path) -> Result<ContentItem> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let (meta, body) = frontmatter::extract(&source);
    if let Some(date) = meta.date.as_deref()
        && meta.parsed_date().is_none()
    {
        debug!("meta"; "{}: unparseable date '{}', treated as absent", path.display(), date);
    }

    let relative = config.content_relative(path);
    let route = PageRoute::new(&relative, &config.build.output, config.build.clean_urls);

    Ok(ContentItem {
        route,
        heading: markdown::first_heading(body),
        excerpt: markdown::excerpt(body, &config.site.feed.excerpt_separator),
        meta,
    })
}

/// Collect `.md` files in sorted order, skipping hidden entries.
fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect()
}
