//! Command-line interface for PDM (Platform Dependency Manager).
//!
//! The CLI exposes the three pipeline stages as subcommands, in the order the
//! surrounding build graph consumes them:
//!
//! - `resolve` - classify an artifact path and print its canonical
//!   extraction-target name
//! - `extract` - idempotently extract an archive into its target directory
//! - `collect` - list the classpath jars of an extracted dependency root
//!
//! Each command is implemented in its own module with its own argument
//! struct. All commands are synchronous: a call either completes before
//! returning or the failure is the full observable outcome.
//!
//! # Usage
//!
//! ```bash
//! # Stage 1: derive the canonical name
//! pdm resolve ~/.m2/com.jetbrains.intellij.idea/ideaIC/2024.2/9f8a/ideaIC-2024.2.zip \
//!     --platform ~/.m2/com.jetbrains.intellij.idea/ideaIC/2024.2/9f8a/ideaIC-2024.2.zip
//!
//! # Stage 2: extract into the cache
//! pdm extract ideaIC-2024.2.zip --name IC-2024.2
//!
//! # Stage 3: collect classpath jars
//! pdm collect ~/.pdm/cache/IC-2024.2
//! ```

mod collect;
mod extract;
mod resolve;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Main CLI application structure for PDM.
///
/// Handles global flags and delegates to subcommands for the individual
/// pipeline stages.
#[derive(Parser)]
#[command(
    name = "pdm",
    about = "Platform Dependency Manager - resolve, extract, and collect platform dependencies",
    version,
    long_about = "PDM turns resolved IntelliJ Platform dependencies (SDK distributions, \
                  marketplace plugins, JetBrains Runtime archives) into a flat set of \
                  classpath library files."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    ///
    /// Equivalent to setting `RUST_LOG=debug`. Mutually exclusive with
    /// `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors for automation
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Cache root directory for extraction targets
    ///
    /// Overrides both the `PDM_CACHE_DIR` environment variable and the
    /// default `~/.pdm/cache` location.
    #[arg(long, global = true, value_name = "DIR")]
    cache_dir: Option<PathBuf>,
}

/// Available subcommands, one per pipeline stage.
#[derive(Subcommand)]
enum Commands {
    /// Resolve the canonical extraction-target name for an artifact path.
    ///
    /// See [`resolve::ResolveCommand`] for detailed options.
    Resolve(resolve::ResolveCommand),

    /// Extract an archive into its target directory, idempotently.
    ///
    /// See [`extract::ExtractCommand`] for detailed options.
    Extract(extract::ExtractCommand),

    /// Collect the classpath jars of an extracted dependency root.
    ///
    /// See [`collect::CollectCommand`] for detailed options.
    Collect(collect::CollectCommand),
}

impl Cli {
    /// Initialize the tracing subscriber according to the verbosity flags.
    ///
    /// `--verbose` forces debug-level output and `--quiet` disables logging
    /// entirely; otherwise an existing `RUST_LOG` value wins, with `info` as
    /// the default. Safe to call once per process.
    pub fn init_logging(&self) {
        let filter = if self.quiet {
            return;
        } else if self.verbose {
            EnvFilter::new("debug")
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new("info")
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Execute the selected subcommand.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Resolve(cmd) => cmd.execute(),
            Commands::Extract(cmd) => cmd.execute(self.cache_dir),
            Commands::Collect(cmd) => cmd.execute(),
        }
    }
}
