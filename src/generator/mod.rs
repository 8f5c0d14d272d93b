//! Content generators for static site output.
//!
//! Generates auxiliary files from loaded page metadata:
//!
//! - **Feed**: RSS 2.0 feed for blog readers (`feed.xml`)

pub mod feed;

use anyhow::{Context, Result};
use quick_xml::{Reader, Writer, events::Event};
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Minify XML content if enabled.
///
/// Only whitespace-only text between markup is dropped. Text content, CDATA
/// sections and whitespace between entity references are written unchanged.
pub fn minify_xml(content: &[u8], enabled: bool) -> Result<Cow<'_, [u8]>> {
    if !enabled {
        return Ok(Cow::Borrowed(content));
    }

    let xml = std::str::from_utf8(content).context("XML is not valid UTF-8")?;
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::with_capacity(content.len()));
    // Blank text after markup, kept only if more text follows it.
    let mut pending: Option<Event<'_>> = None;
    let mut after_markup = true;

    loop {
        let event = reader
            .read_event()
            .with_context(|| format!("invalid XML at byte {}", reader.buffer_position()))?;
        if matches!(event, Event::Eof) {
            break;
        }

        let blank = matches!(&event, Event::Text(t) if t.iter().all(u8::is_ascii_whitespace));
        if blank && after_markup {
            pending = Some(event);
            continue;
        }

        let is_text = matches!(event, Event::Text(_) | Event::GeneralRef(_));
        if let Some(space) = pending.take()
            && is_text
        {
            writer.write_event(space)?;
        }
        after_markup = !is_text;
        writer.write_event(event)?;
    }

    Ok(Cow::Owned(writer.into_inner()))
}

/// Write `content` to `path` all-or-nothing.
///
/// Content goes to a temporary file in the destination directory which is
/// then renamed over `path`. On any error the target is left untouched.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(content)
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
