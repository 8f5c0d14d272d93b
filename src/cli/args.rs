//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// folio static site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Inject head tags into rendered pages and write the feed
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the resolved configuration as JSON
    Config {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the head tags generated for one content file
    Head {
        #[command(flatten)]
        args: HeadArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Minify generated XML
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable RSS feed generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub rss: Option<bool>,

    /// Override site URL for deployment.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    ///
    /// Example:
    ///   folio build --site-url "https://maoya.dev"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Include draft documents
    #[arg(short = 'D', long)]
    pub drafts: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Head command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct HeadArgs {
    /// Markdown file (relative to the content directory or the current directory)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Print rendered HTML instead of JSON
    #[arg(long)]
    pub html: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_flags() {
        let cli = Cli::parse_from(["folio", "build", "--rss=false", "-m", "-U", "https://a.dev"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(build_args.rss, Some(false));
        assert_eq!(build_args.minify, Some(true));
        assert_eq!(build_args.site_url.as_deref(), Some("https://a.dev"));
        assert!(!build_args.drafts);
    }

    #[test]
    fn test_global_paths() {
        let cli = Cli::parse_from(["folio", "-C", "site.toml", "-o", "dist", "config"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert_eq!(cli.output, Some(PathBuf::from("dist")));
        assert!(matches!(cli.command, Commands::Config { pretty: false }));
    }

    #[test]
    fn test_head_args() {
        let cli = Cli::parse_from(["folio", "head", "blog/post.md", "--html"]);
        let Commands::Head { args } = cli.command else {
            panic!("expected head command");
        };
        assert_eq!(args.file, PathBuf::from("blog/post.md"));
        assert!(args.html);
    }
}
