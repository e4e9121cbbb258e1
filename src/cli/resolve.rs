//! Resolve the canonical extraction-target name for an artifact path.
//!
//! The recognized dependency sets arrive as repeatable `--platform`,
//! `--plugin`, and `--runtime` flags; in a real build graph they are computed
//! by the dependency-resolution collaborator. The command prints the
//! canonical name on stdout, suitable for feeding into `pdm extract --name`.
//!
//! # Examples
//!
//! ```bash
//! pdm resolve "$artifact" --platform "$artifact"
//! # IC-2024.2
//!
//! pdm resolve "$plugin_zip" --plugin "$plugin_zip"
//! # com.jetbrains.plugins-org.intellij.scala-2024.2.5
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::resolver::{RecognizedPaths, TargetResolver};

/// Arguments for the `resolve` command.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path of the resolved dependency artifact to classify
    artifact: PathBuf,

    /// Member of the platform distribution dependency set (repeatable)
    #[arg(long = "platform", value_name = "PATH")]
    platform: Vec<PathBuf>,

    /// Member of the platform plugin dependency set (repeatable)
    #[arg(long = "plugin", value_name = "PATH")]
    plugin: Vec<PathBuf>,

    /// Member of the bundled runtime dependency set (repeatable)
    #[arg(long = "runtime", value_name = "PATH")]
    runtime: Vec<PathBuf>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self) -> Result<()> {
        let resolver = TargetResolver::new(RecognizedPaths::new(
            self.platform,
            self.plugin,
            self.runtime,
        ));
        let name = resolver.resolve(&self.artifact)?;
        println!("{name}");
        Ok(())
    }
}
