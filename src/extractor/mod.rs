//! Idempotent archive extraction with marker-file caching.
//!
//! [`extract`] turns an archive into a populated target directory exactly
//! once. Completion is recorded by a sentinel marker file written only after
//! every entry has been extracted, so a target directory either carries the
//! marker and is fully trustworthy, or carries no marker and is rebuilt from
//! scratch on the next call. Partial failures never poison the cache: the
//! marker is the last thing written, and the first thing a re-run destroys.
//!
//! # Supported formats
//!
//! Format is dispatched purely on the file-name suffix:
//!
//! | Suffix | Codec |
//! |---|---|
//! | `.zip`, `.sit` | zip |
//! | `.tar.gz` | gzip-compressed tar |
//!
//! Anything else fails with [`PdmError::UnsupportedArchive`]. Content is
//! never sniffed.
//!
//! # Concurrency
//!
//! The marker check-then-act sequence is not atomic across processes. The
//! caller owns arbitration: two invocations must never extract into the same
//! target directory at the same time. PDM's host scheduler serializes
//! extractions per canonical target name; no lock is taken here.

use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::MARKER_FILE_NAME;
use crate::core::PdmError;


/// Validator deciding whether an existing marker is still current.
///
/// Invoked with the marker path on the cache-hit path. Returning `false`
/// forces re-extraction. See [`crate::cache::marker_is_fresh`] for the
/// mtime-based implementation the CLI uses.
pub type UpToDateValidator<'a> = &'a dyn Fn(&Path) -> bool;

/// Callback invoked after a successful extraction with
/// `(target_directory, marker_file)`, letting the caller synchronize its own
/// incremental-state tracking with the marker's identity.
pub type MarkUpToDate<'a> = &'a dyn Fn(&Path, &Path);

/// Extract `archive` into `target_directory`, idempotently.
///
/// On a cache hit (marker present and accepted by the validator, if any) the
/// function returns immediately without touching the filesystem. Otherwise
/// the target directory is deleted, recreated, and repopulated from the
/// archive; the marker file is created only after full success.
///
/// Returns the target directory on success, for call chaining.
///
/// # Errors
///
/// - [`PdmError::UnsupportedArchive`] for unrecognized file suffixes. By
///   contract this is raised *after* the delete-and-recreate step, so the
///   prior contents of the target directory are gone.
/// - [`PdmError::ExtractionFailed`] for any I/O failure during
///   delete/recreate/extract, wrapping the underlying cause. The target is
///   left without a marker, so a later call retries from scratch.
pub fn extract(
    archive: &Path,
    target_directory: &Path,
    is_up_to_date: Option<UpToDateValidator<'_>>,
    mark_up_to_date: Option<MarkUpToDate<'_>>,
) -> Result<PathBuf, PdmError> {
    let name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let marker_file = target_directory.join(MARKER_FILE_NAME);

    if marker_file.exists() && is_up_to_date.is_none_or(|validator| validator(&marker_file)) {
        debug!(target = %target_directory.display(), "Extraction marker present, skipping");
        return Ok(target_directory.to_path_buf());
    }

    let extraction_failure = |source: PdmError| PdmError::ExtractionFailed {
        archive: archive.display().to_string(),
        target: target_directory.display().to_string(),
        source: Box::new(source),
    };

    // Discard partial or stale state before repopulating. This runs before
    // format dispatch, so even an unsupported archive empties the target.
    if target_directory.exists() {
        fs::remove_dir_all(target_directory).map_err(|e| extraction_failure(e.into()))?;
    }
    fs::create_dir_all(target_directory).map_err(|e| extraction_failure(e.into()))?;

    debug!(archive = %name, target = %target_directory.display(), "Extracting");

    if name.ends_with(".zip") || name.ends_with(".sit") {
        extract_zip(archive, target_directory).map_err(extraction_failure)?;
    } else if name.ends_with(".tar.gz") {
        extract_tar_gz(archive, target_directory).map_err(extraction_failure)?;
    } else {
        return Err(PdmError::UnsupportedArchive { file_name: name });
    }

    debug!(archive = %name, "Extracted");

    // The marker comes last: its presence certifies a complete extraction.
    File::create(&marker_file).map_err(|e| extraction_failure(e.into()))?;
    if let Some(mark) = mark_up_to_date {
        mark(target_directory, &marker_file);
    }

    Ok(target_directory.to_path_buf())
}

fn extract_zip(archive: &Path, target_directory: &Path) -> Result<(), PdmError> {
    let file = File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file)?;
    zip.extract(target_directory)?;
    Ok(())
}

fn extract_tar_gz(archive: &Path, target_directory: &Path) -> Result<(), PdmError> {
    let file = File::open(archive)?;
    let mut tar = tar::Archive::new(GzDecoder::new(file));
    tar.unpack(target_directory)?;
    Ok(())
}
