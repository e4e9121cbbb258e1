//! Collect the classpath jars of an extracted dependency root.
//!
//! Prints one absolute jar path per line. The collector itself returns an
//! unordered set; the CLI sorts the output so it is stable across runs and
//! usable in shell pipelines.
//!
//! # Examples
//!
//! ```bash
//! pdm collect ~/.pdm/cache/IC-2024.2
//! pdm collect ~/.pdm/cache/com.jetbrains.plugins-org.intellij.scala-2024.2.5
//! ```

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::collector;

/// Arguments for the `collect` command.
#[derive(Args)]
pub struct CollectCommand {
    /// Root of the extracted (or directory-shaped) dependency
    root: PathBuf,
}

impl CollectCommand {
    /// Execute the collect command.
    pub fn execute(self) -> Result<()> {
        let jars = collector::collect(&self.root)
            .with_context(|| format!("collecting classpath jars under '{}'", self.root.display()))?;

        let mut sorted: Vec<PathBuf> = jars.into_iter().collect();
        sorted.sort();
        for jar in sorted {
            println!("{}", jar.display());
        }
        Ok(())
    }
}
