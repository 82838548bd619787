//! Bulletin CLI - Email newsletter renderer.
//!
//! Provides commands for:
//! - `render` / `plaintext`: Compose the HTML or plain-text view of a document
//! - `export`: Write a downloadable HTML file with the document embedded
//! - `import`: Recover the document from an exported HTML file
//! - `defaults`: Print a starter document for a template
//! - `validate` / `stats`: Audit a document before sending

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    DefaultsArgs, ExportArgs, ImportArgs, PlainTextArgs, RenderArgs, StatsArgs, ValidateArgs,
};
use output::Output;

/// Bulletin - Email newsletter renderer.
#[derive(Parser)]
#[command(name = "bulletin", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover bulletin.toml).
    #[arg(short, long, global = true, env = "BULLETIN_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document to email HTML.
    Render(RenderArgs),
    /// Render the plain-text alternative of a document.
    #[command(name = "plaintext")]
    PlainText(PlainTextArgs),
    /// Export a document as a downloadable HTML file.
    Export(ExportArgs),
    /// Recover the document embedded in an exported HTML file.
    Import(ImportArgs),
    /// Print the starter document for a template.
    Defaults(DefaultsArgs),
    /// Check a document for accessibility and content issues.
    Validate(ValidateArgs),
    /// Print content statistics for a document.
    Stats(StatsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Render(args) => args.execute(config),
        Commands::PlainText(args) => args.execute(config),
        Commands::Export(args) => args.execute(config),
        Commands::Import(args) => args.execute(),
        Commands::Defaults(args) => args.execute(config),
        Commands::Validate(args) => args.execute(config),
        Commands::Stats(args) => args.execute(config),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
