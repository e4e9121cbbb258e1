//! Extraction cache location and staleness helpers.
//!
//! Target directories for extracted dependencies live under a single cache
//! root, one directory per canonical name:
//!
//! ```text
//! ~/.pdm/cache/
//! ├── IC-2024.2/                                  # platform distribution
//! │   └── .extracted                              # completion marker
//! ├── com.jetbrains.plugins-org.intellij.scala-2024.2.5/
//! └── 17.0.1/                                     # JetBrains Runtime
//! ```
//!
//! The root defaults to `~/.pdm/cache` and can be overridden with the
//! `PDM_CACHE_DIR` environment variable. The cache root's lifetime belongs to
//! the caller; the extractor only ever owns the contents of a single target
//! directory per invocation.

use std::path::{Path, PathBuf};

use crate::constants::CACHE_DIR_ENV;
use crate::core::PdmError;

/// Resolve the cache root directory.
///
/// Order of precedence: `PDM_CACHE_DIR` environment variable, then
/// `~/.pdm/cache`.
///
/// # Errors
///
/// Returns [`PdmError::CacheDirUnavailable`] when no override is set and the
/// home directory cannot be determined.
pub fn cache_dir() -> Result<PathBuf, PdmError> {
    if let Ok(dir) = std::env::var(CACHE_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    dirs::home_dir()
        .map(|home| home.join(".pdm").join("cache"))
        .ok_or_else(|| PdmError::CacheDirUnavailable {
            reason: "home directory could not be determined".to_string(),
        })
}

/// Shape the target directory for a canonical dependency name.
#[must_use]
pub fn target_dir(cache_root: &Path, canonical_name: &str) -> PathBuf {
    cache_root.join(canonical_name)
}

/// Marker freshness validator comparing marker and archive mtimes.
///
/// A marker is fresh when it is at least as new as the archive it certifies.
/// Any metadata failure counts as stale, which errs toward redoing work
/// rather than trusting an unreadable marker.
#[must_use]
pub fn marker_is_fresh(marker: &Path, archive: &Path) -> bool {
    let mtime = |path: &Path| path.metadata().and_then(|m| m.modified()).ok();

    match (mtime(marker), mtime(archive)) {
        (Some(marker_time), Some(archive_time)) => marker_time >= archive_time,
        _ => false,
    }
}
