//! storydocs CLI - Component documentation pages.
//!
//! Provides commands for:
//! - `list`: Show component paths and their example ids
//! - `page`: Render one documentation page to stdout
//! - `build`: Render a page for every component path

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, ListArgs, PageArgs};
use output::Output;

/// storydocs - Component documentation pages.
#[derive(Parser)]
#[command(name = "storydocs", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List component paths and their examples.
    List(ListArgs),
    /// Render one documentation page.
    Page(PageArgs),
    /// Render documentation pages for every component.
    Build(BuildArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::List(args) => args.execute(),
        Commands::Page(args) => args.execute(),
        Commands::Build(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
