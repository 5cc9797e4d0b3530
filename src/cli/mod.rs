//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod boundary;
pub mod config;
pub mod generate;
pub mod map;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Synthetic call detail record generator
#[derive(Parser)]
#[command(name = "cdr-gen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log progress and sampled locations to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate call detail records
    Generate(generate::GenerateArgs),

    /// Convert a CSV of coordinates to GeoJSON points
    Map(map::MapArgs),

    /// Summarize GeoJSON boundary files
    Boundary(boundary::BoundaryArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Initialize logging to stderr so stdout only carries data
///
/// `RUST_LOG` wins when set.
fn init_logging(verbose: bool) {
    let default = if verbose { "cdr_gen=debug,info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI
pub fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Map(args) => map::run(args),
        Commands::Boundary(args) => boundary::run(args),
        Commands::Config(args) => config::run(args),
    }
}

/// Write to a file when a path is given, otherwise to stdout
pub(crate) fn emit(output: &str, path: Option<&std::path::Path>) -> crate::error::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, output)?;
            eprintln!("Output written to {}", path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}
