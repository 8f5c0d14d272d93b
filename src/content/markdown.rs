//! Markdown helpers built on pulldown-cmark: excerpts and the fallback title.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Render the Markdown preceding the first `separator` line to HTML.
///
/// Returns `None` when the separator is empty, never occurs, or nothing
/// precedes it.
pub fn excerpt(body: &str, separator: &str) -> Option<String> {
    let separator = separator.trim();
    if separator.is_empty() {
        return None;
    }

    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if line.trim() == separator {
            let before = body[..offset].trim();
            if before.is_empty() {
                return None;
            }
            let mut out = String::new();
            html::push_html(&mut out, Parser::new_ext(before, options()));
            return Some(out.trim_end().to_string());
        }
        offset += line.len();
    }

    None
}

/// Plain text of the first level-1 heading.
pub fn first_heading(body: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut text = String::new();

    for event in Parser::new_ext(body, options()) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_h1 = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = text.trim();
                if !title.is_empty() {
                    return Some(title.to_string());
                }
                in_h1 = false;
                text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_h1 => text.push_str(&t),
            _ => {}
        }
    }

    None
}
