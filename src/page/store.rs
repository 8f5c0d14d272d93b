//! Loaded content items, kept in discovery order.

use serde::Serialize;

use super::{PageMeta, PageRoute};
use crate::utils::date::DateTimeUtc;

/// One published document.
#[derive(Debug, Clone)]
pub struct ContentItem {
    pub route: PageRoute,
    pub meta: PageMeta,
    /// Text of the first level-1 heading.
    pub heading: Option<String>,
    /// HTML rendered from the Markdown before the excerpt separator.
    pub excerpt: Option<String>,
}

impl ContentItem {
    #[inline]
    pub fn url(&self) -> &str {
        &self.route.url
    }

    /// Front matter title, falling back to the URL.
    pub fn title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or_else(|| self.url())
    }

    #[inline]
    pub fn date(&self) -> Option<DateTimeUtc> {
        self.meta.parsed_date()
    }
}

/// JSON view of a content item for `folio head`.
#[derive(Debug, Serialize)]
pub struct ItemSummary<'a> {
    pub path: &'a str,
    pub url: &'a str,
    #[serde(flatten)]
    pub meta: &'a PageMeta,
}

impl<'a> From<&'a ContentItem> for ItemSummary<'a> {
    fn from(item: &'a ContentItem) -> Self {
        Self {
            path: &item.route.relative,
            url: item.url(),
            meta: &item.meta,
        }
    }
}

/// Ordered page collection.
#[derive(Debug, Default)]
pub struct PageStore {
    items: Vec<ContentItem>,
}

impl PageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ContentItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[ContentItem] {
        &self.items
    }
}

impl FromIterator<ContentItem> for PageStore {
    fn from_iter<I: IntoIterator<Item = ContentItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
