//! Extract an archive into its target directory, idempotently.
//!
//! The target is either given explicitly with `--target-dir` or shaped as
//! `<cache-root>/<name>` from a canonical name produced by `pdm resolve`.
//! A repeated invocation with an unchanged archive is a no-op thanks to the
//! extraction marker; `--check-freshness` additionally re-extracts when the
//! archive is newer than the marker.
//!
//! # Examples
//!
//! ```bash
//! pdm extract ideaIC-2024.2.zip --name IC-2024.2
//! pdm extract jbr-17.0.1.tar.gz --target-dir /tmp/jbr --check-freshness
//! ```

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::cache;
use crate::extractor;

/// Arguments for the `extract` command.
#[derive(Args)]
pub struct ExtractCommand {
    /// Path of the archive to extract (.zip, .sit, or .tar.gz)
    archive: PathBuf,

    /// Explicit target directory for the extracted contents
    #[arg(long, value_name = "DIR", conflicts_with = "name")]
    target_dir: Option<PathBuf>,

    /// Canonical dependency name; the target becomes <cache-root>/<name>
    #[arg(long, value_name = "NAME", required_unless_present = "target_dir")]
    name: Option<String>,

    /// Re-extract when the archive is newer than the extraction marker
    #[arg(long)]
    check_freshness: bool,
}

impl ExtractCommand {
    /// Execute the extract command with an optional cache-root override.
    pub fn execute(self, cache_dir_override: Option<PathBuf>) -> Result<()> {
        let target_directory = match (self.target_dir, &self.name) {
            (Some(dir), _) => dir,
            (None, Some(name)) => {
                let cache_root = match cache_dir_override {
                    Some(dir) => dir,
                    None => cache::cache_dir()?,
                };
                cache::target_dir(&cache_root, name)
            }
            // clap enforces that one of the two is present
            (None, None) => unreachable!("--name is required without --target-dir"),
        };

        let archive = self.archive.clone();
        let freshness = move |marker: &std::path::Path| cache::marker_is_fresh(marker, &archive);
        let validator: Option<extractor::UpToDateValidator<'_>> =
            if self.check_freshness { Some(&freshness) } else { None };

        let target = extractor::extract(&self.archive, &target_directory, validator, None)
            .with_context(|| format!("extracting '{}'", self.archive.display()))?;

        println!("{}", target.display());
        Ok(())
    }
}
