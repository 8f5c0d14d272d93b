//! Read-only commands: `folio config` and `folio head`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::cli::HeadArgs;
use crate::config::SiteConfig;
use crate::content::load_item;
use crate::page::ItemSummary;
use crate::seo::{HeadTag, render_tags};
use crate::site::Site;
use crate::utils::path::resolve_path;

/// Print the resolved configuration as JSON.
pub fn run_config(config: &SiteConfig, pretty: bool) -> Result<()> {
    write_output(&to_json(config, pretty)?)
}

/// Result for `folio head`
#[derive(Debug, Serialize)]
struct HeadResult<'a> {
    #[serde(flatten)]
    page: ItemSummary<'a>,
    head: &'a [HeadTag],
}

/// Print the head tags generated for one content file.
pub fn run_head(args: &HeadArgs, site: &Site) -> Result<()> {
    let config = site.config();
    let path = resolve_path(&args.file, &config.build.content);
    if !path.is_file() {
        anyhow::bail!("content file not found: {}", args.file.display());
    }

    let item = load_item(config, &path)?;
    let tags = site.head_tags(&item);

    let output = if args.html {
        render_tags(&tags)?
    } else {
        let result = HeadResult {
            page: ItemSummary::from(&item),
            head: &tags,
        };
        to_json(&result, args.pretty)?
    };
    write_output(&output)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to serialize JSON")
}

fn write_output(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end())?;
    Ok(())
}
