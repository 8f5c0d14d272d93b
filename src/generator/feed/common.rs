//! Feed item selection: exclusion filter and date ordering.

use crate::page::ContentItem;

/// Whether a URL is kept out of the feed.
///
/// The site root is always excluded; other URLs are excluded when, with a
/// trailing `.html` and `/` removed, they end with one of `exclude`.
pub fn is_excluded(url: &str, exclude: &[String]) -> bool {
    if url == "/" {
        return true;
    }
    let stem = url.strip_suffix(".html").unwrap_or(url).trim_end_matches('/');
    exclude
        .iter()
        .filter(|name| !name.is_empty())
        .any(|name| stem.ends_with(name.as_str()))
}

/// Feed entries: non-excluded pages, newest first.
///
/// The sort is stable, so undated pages (and equal dates) keep discovery
/// order, with undated pages last.
pub fn select_items<'a>(pages: &'a [ContentItem], exclude: &[String]) -> Vec<&'a ContentItem> {
    let mut items: Vec<_> = pages
        .iter()
        .filter(|page| !is_excluded(page.url(), exclude))
        .collect();
    items.sort_by_key(|page| std::cmp::Reverse(page.date()));
    items
}
