//! Per-page head tags: canonical URL, Open Graph, Twitter and JSON-LD.

use super::{
    HeadTag,
    jsonld::{SchemaType, StructuredData},
};
use crate::config::SiteConfig;
use crate::page::{ContentItem, PageMeta, canonical_path};

/// The page being rendered, as seen by head transformers.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Source path relative to the content directory (`blog/post.md`).
    pub relative_path: &'a str,
    /// Computed title: first level-1 heading, else the site title.
    pub title: &'a str,
    pub meta: &'a PageMeta,
}

impl<'a> PageContext<'a> {
    pub fn new(item: &'a ContentItem, config: &'a SiteConfig) -> Self {
        Self {
            relative_path: &item.route.relative,
            title: item
                .heading
                .as_deref()
                .unwrap_or(config.site.info.title.as_str()),
            meta: &item.meta,
        }
    }

    /// Front matter title, else the computed title.
    pub fn effective_title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or(self.title)
    }
}

/// Base URL + `/` + canonical form of the relative path.
///
/// Always uses the `.html` form, independent of `build.clean_urls`.
pub fn canonical_url(relative_path: &str, config: &SiteConfig) -> String {
    format!(
        "{}/{}",
        config.site.info.base_url(),
        canonical_path(relative_path)
    )
}

/// Compute the page-specific head tags.
///
/// Order: canonical link, `og:url`, descriptions (when present), titles,
/// JSON-LD, `twitter:card`.
pub fn transform_head(page: &PageContext<'_>, config: &SiteConfig) -> Vec<HeadTag> {
    let url = canonical_url(page.relative_path, config);
    let mut tags = vec![
        HeadTag::new("link")
            .with_attr("rel", "canonical")
            .with_attr("href", url.as_str()),
        HeadTag::meta_property("og:url", url.as_str()),
    ];

    let description = page.meta.description();
    if let Some(description) = description {
        tags.push(HeadTag::meta_property("og:description", description));
        tags.push(HeadTag::meta_name("twitter:description", description));
    }

    let title = page.effective_title();
    tags.push(HeadTag::meta_property("og:title", title));
    tags.push(HeadTag::meta_name("twitter:title", title));

    let seo = &config.site.seo;
    let kind = if page.meta.layout.as_deref() == Some(seo.home_layout.as_str()) {
        SchemaType::WebSite
    } else {
        SchemaType::Article
    };
    let info = &config.site.info;
    tags.push(
        StructuredData {
            kind,
            name: title,
            description: description.unwrap_or_default(),
            url: &url,
            author_name: &info.author,
            author_url: info.base_url(),
        }
        .to_tag(),
    );

    tags.push(HeadTag::meta_name("twitter:card", seo.twitter_card.as_str()));
    tags
}
