//! folio - head tags and RSS feed for a Markdown personal site.

mod cli;
mod config;
mod content;
mod generator;
mod hooks;
mod logger;
mod page;
mod seo;
mod site;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use site::Site;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(config).map(|_| ()),
        Commands::Config { pretty } => cli::query::run_config(&config, *pretty),
        Commands::Head { args } => cli::query::run_head(args, &Site::with_default_hooks(config)),
    }
}
