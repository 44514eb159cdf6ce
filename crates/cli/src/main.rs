//! Lambari logo report - logo-report command

use clap::Parser;
use anyhow::Result;
use cli_lib::render::Style;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::Level;

mod cmd;

/// Report the brand logo's file size and how to slim it down
#[derive(Parser)]
#[command(name = "logo-report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root the logo path is resolved against (default: nearest
    /// ancestor of the current directory holding the logo directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// TOML file overriding `logo_path` and `threshold_bytes`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print debug logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let style = Style {
        color: !cli.no_color && std::io::stdout().is_terminal(),
    };

    cmd::report::run(cli.root, cli.config, style)
}
