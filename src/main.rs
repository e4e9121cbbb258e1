//! PDM CLI entry point.
//!
//! Handles command-line argument parsing, logging setup, error display, and
//! command execution. The pipeline stages are exposed as subcommands:
//! - `resolve` - derive the canonical extraction-target name for an artifact
//! - `extract` - idempotently extract an archive into its target directory
//! - `collect` - list the classpath jars of an extracted dependency root

use anyhow::Result;
use clap::Parser;
use pdm_cli::cli::Cli;
use pdm_cli::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    cli.init_logging();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
