//! Cloak CLI - command-line interface for the coherent profile engine
//!
//! Two consumer surfaces over the pure engine:
//! - `cloak randomize` picks a brand-new plausible identity (optionally
//!   seeded for reproducibility);
//! - `cloak check` inspects an arbitrary, possibly user-edited attribute
//!   bag and reports combinations that would betray spoofing.
//!
//! All I/O lives here; the engine and bridge stay side-effect-free.

use clap::{Parser, Subcommand};
use cloak_identity_types::PlatformFamily;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use commands::{check, platforms, randomize};
pub use error::{CliError, CliResult};

/// Cloak CLI application
#[derive(Parser)]
#[command(name = "cloak")]
#[command(about = "Cloak - coherent device-identity profiles", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh coherent identity profile
    Randomize {
        /// Platform family to generate for (windows-like, mac-like, linux-like)
        #[arg(long, value_parser = parse_platform)]
        platform: Option<PlatformFamily>,

        /// Seed for reproducible generation
        #[arg(long)]
        seed: Option<u32>,
    },

    /// Check an attribute bag for coherence problems
    Check {
        /// Path to a JSON attribute bag, or `-` for stdin
        input: PathBuf,

        /// Treat the input as a settings fragment instead of a raw bag
        #[arg(long)]
        settings: bool,
    },

    /// List platform families and their catalog sizes
    Platforms,
}

fn parse_platform(label: &str) -> Result<PlatformFamily, String> {
    label.parse().map_err(|err| format!("{err}"))
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // Catalog defects should surface before any command runs.
    cloak_identity_engine::catalog::verify()?;

    match cli.command {
        Commands::Randomize { platform, seed } => randomize::execute(platform, seed, cli.output),
        Commands::Check { input, settings } => check::execute(&input, settings, cli.output),
        Commands::Platforms => platforms::execute(cli.output),
    }
}
