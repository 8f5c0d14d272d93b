//! RSS 2.0 feed generation.

use super::common::select_items;
use crate::{
    config::SiteConfig,
    generator::{minify_xml, write_atomic},
    hooks::BuildContext,
    log,
    page::ContentItem,
    utils::date::DateTimeUtc,
};
use anyhow::{Context, Result, anyhow};
use rss::{Channel, ChannelBuilder, GuidBuilder, ImageBuilder, ItemBuilder, validation::Validate};
use std::path::PathBuf;

/// Build the RSS 2.0 feed and write it to `<output>/<site.feed.path>`.
pub fn build_rss(ctx: &BuildContext<'_>) -> Result<PathBuf> {
    let config = ctx.config;
    let channel = build_channel(ctx.pages, config, ctx.now)?;

    let xml = channel.to_string();
    let xml = minify_xml(xml.as_bytes(), config.build.minify)?;
    let rss_path = ctx.output_dir.join(&config.site.feed.path);
    write_atomic(&rss_path, &xml).context("failed to write feed")?;

    log!("feed"; "{} ({} items)", rss_path.display(), channel.items().len());
    Ok(rss_path)
}

/// Assemble and validate the channel.
pub fn build_channel(
    pages: &[ContentItem],
    config: &SiteConfig,
    now: DateTimeUtc,
) -> Result<Channel> {
    let info = &config.site.info;
    let items: Vec<_> = select_items(pages, &config.site.feed.exclude)
        .into_iter()
        .map(|page| page_to_rss_item(page, config, now))
        .collect();

    let image = info.image.as_deref().map(|image| {
        ImageBuilder::default()
            .url(info.absolute_url(image))
            .title(info.title.clone())
            .link(info.base_url().to_string())
            .build()
    });

    let channel = ChannelBuilder::default()
        .title(info.title.clone())
        .link(info.base_url().to_string())
        .description(info.description.clone())
        .language(Some(info.language.clone()))
        .copyright(config.theme.footer.copyright.clone())
        .image(image)
        .generator(Some("folio".to_string()))
        .last_build_date(Some(now.to_rfc2822()))
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel)
}

fn page_to_rss_item(page: &ContentItem, config: &SiteConfig, now: DateTimeUtc) -> rss::Item {
    let link = format!("{}{}", config.site.info.base_url(), page.url());

    let description = page
        .meta
        .description()
        .map(str::to_string)
        .or_else(|| page.excerpt.clone())
        .unwrap_or_default();

    let pub_date = page.date().unwrap_or(now).to_rfc2822();

    ItemBuilder::default()
        .title(Some(page.title().to_string()))
        .link(Some(link.clone()))
        .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
        .description(Some(description))
        .pub_date(Some(pub_date))
        .categories(
            page.meta
                .tags
                .iter()
                .map(|tag| rss::CategoryBuilder::default().name(tag.clone()).build())
                .collect::<Vec<_>>(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::page::{PageMeta, PageRoute};
    use std::path::Path;

    const NOW: DateTimeUtc = DateTimeUtc::new(2024, 7, 1, 12, 0, 0);

    fn config() -> SiteConfig {
        let mut config = test_parse_config(
            "url = \"https://maoya.dev\"\nauthor = \"Mao Ya\"\nimage = \"/logo.png\"",
        );
        config.theme.footer.fill_copyright(2024, "Mao Ya");
        config
    }

    fn page(path: &str, meta: PageMeta, excerpt: Option<&str>) -> ContentItem {
        ContentItem {
            route: PageRoute::new(Path::new(path), Path::new("/out"), true),
            meta,
            heading: None,
            excerpt: excerpt.map(str::to_string),
        }
    }

    #[test]
    fn test_channel_metadata() {
        let channel = build_channel(&[], &config(), NOW).unwrap();
        assert_eq!(channel.title(), "Test");
        assert_eq!(channel.description(), "Test");
        assert_eq!(channel.link(), "https://maoya.dev");
        assert_eq!(channel.language(), Some("en"));
        assert_eq!(channel.copyright(), Some("Copyright © 2024 Mao Ya"));
        assert_eq!(channel.generator(), Some("folio"));
        assert_eq!(channel.image().map(|i| i.url()), Some("https://maoya.dev/logo.png"));
        assert_eq!(channel.last_build_date(), Some("Mon, 01 Jul 2024 12:00:00 GMT"));
        assert!(channel.items().is_empty());
    }

    #[test]
    fn test_item_fields() {
        let meta = PageMeta {
            title: Some("Post".into()),
            description: Some("Described".into()),
            date: Some("2024-06-15".into()),
            ..Default::default()
        };
        let pages = [page("blog/post.md", meta, Some("<p>x</p>"))];
        let channel = build_channel(&pages, &config(), NOW).unwrap();

        let item = &channel.items()[0];
        assert_eq!(item.title(), Some("Post"));
        assert_eq!(item.link(), Some("https://maoya.dev/blog/post"));
        assert_eq!(item.guid().map(|g| g.value()), Some("https://maoya.dev/blog/post"));
        assert!(item.guid().unwrap().is_permalink());
        assert_eq!(item.description(), Some("Described"));
        assert_eq!(item.pub_date(), Some("Sat, 15 Jun 2024 00:00:00 GMT"));
    }

    #[test]
    fn test_item_fallbacks() {
        let with_excerpt = page("a.md", PageMeta::default(), Some("<p>Lead</p>"));
        let bare = page("b.md", PageMeta::default(), None);
        let channel = build_channel(&[with_excerpt, bare], &config(), NOW).unwrap();

        let items = channel.items();
        assert_eq!(items[0].title(), Some("/a"));
        assert_eq!(items[0].description(), Some("<p>Lead</p>"));
        assert_eq!(items[0].pub_date(), Some("Mon, 01 Jul 2024 12:00:00 GMT"));
        assert_eq!(items[1].title(), Some("/b"));
        assert_eq!(items[1].description(), Some(""));
    }

    #[test]
    fn test_xml_output_order() {
        let a = PageMeta {
            date: Some("2024-01-01".into()),
            ..Default::default()
        };
        let b = PageMeta {
            date: Some("2024-06-01".into()),
            ..Default::default()
        };
        let pages = [
            page("a.md", a, None),
            page("b.md", b, None),
            page("index.md", PageMeta::default(), None),
        ];
        let xml = build_channel(&pages, &config(), NOW).unwrap().to_string();

        let pos_a = xml.find("https://maoya.dev/a<").unwrap();
        let pos_b = xml.find("https://maoya.dev/b<").unwrap();
        assert!(pos_b < pos_a);
        assert!(!xml.contains("<link>https://maoya.dev/</link>"));
    }

    #[test]
    fn test_minified_feed_keeps_excerpt_line_breaks() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = config();
        config.build.minify = true;
        let excerpt = "<p>line one\nline two</p>";
        let pages = [page("post.md", PageMeta::default(), Some(excerpt))];
        let ctx = BuildContext {
            config: &config,
            pages: &pages,
            output_dir: dir.path(),
            now: NOW,
        };

        let path = build_rss(&ctx).unwrap();
        assert_eq!(path, dir.path().join("feed.xml"));
        let xml = std::fs::read_to_string(path).unwrap();
        assert!(xml.contains("line one\nline two"));
        assert!(!xml.contains(">\n"));
    }
}
