//! Error handling for PDM.
//!
//! The error system is built around two types:
//! - [`PdmError`] - strongly-typed failure taxonomy for the resolution pipeline
//! - [`ErrorContext`] - wrapper that adds user-friendly suggestions for CLI display
//!
//! # Error Categories
//!
//! Every failure in the pipeline falls into one of four classes:
//! - **Coordinate parsing**: [`PdmError::CoordinateParse`] - the artifact path does
//!   not have the `<group>/<artifact>/<version>/<hash>/<file>` shape.
//! - **Classification**: [`PdmError::Classification`] - the path parses but belongs
//!   to no recognized dependency set, or fails its type-specific validation.
//! - **Archive format**: [`PdmError::UnsupportedArchive`] - file suffix is not one
//!   of `.zip`, `.sit`, `.tar.gz`. No content sniffing fallback exists.
//! - **Extraction I/O**: [`PdmError::ExtractionFailed`] - delete/create/extract
//!   failed mid-flight. The target directory is left without a marker so the next
//!   invocation redoes the work from scratch.
//!
//! None of these are recovered silently; each carries the offending path so it is
//! actionable at the host-scheduler boundary. Use [`user_friendly_error`] to turn
//! any [`anyhow::Error`] into a colored, suggestion-bearing CLI message.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for PDM operations.
///
/// Each variant represents one failure mode of the resolution pipeline and
/// carries enough context (artifact path, underlying reason) to diagnose the
/// failure without re-running it.
#[derive(Error, Debug)]
pub enum PdmError {
    /// Artifact path does not encode Maven-style coordinates
    ///
    /// Raised when fewer than three path segments remain after dropping the
    /// file name and its wrapper directory. A malformed path is always fatal
    /// to that resolution; it is never treated as a different dependency type.
    #[error("Unknown structure of the artifact path: {path}")]
    CoordinateParse {
        /// The artifact path that could not be parsed
        path: String,
    },

    /// Artifact could not be classified into a recognized dependency kind
    ///
    /// Either the path belongs to none of the recognized dependency sets, or
    /// it was pre-classified but failed its type-specific coordinate
    /// validation (unknown platform product, undefined plugin channel,
    /// non-`jbr` runtime coordinates).
    #[error("Cannot resolve extraction target for: {path} ({reason})")]
    Classification {
        /// The artifact path that failed classification
        path: String,
        /// Why classification failed
        reason: String,
    },

    /// Archive file suffix is not a supported format
    ///
    /// Supported suffixes are `.zip`, `.sit`, and `.tar.gz`. Format is decided
    /// purely by file name; extraction never guesses from content.
    #[error("Unknown archive type: {file_name}")]
    UnsupportedArchive {
        /// Name of the file with the unrecognized suffix
        file_name: String,
    },

    /// Archive extraction failed partway through
    ///
    /// The target directory is left in an indeterminate state without a
    /// marker file, so a subsequent call detects "not complete" and retries
    /// from the delete-and-recreate step.
    #[error("Failed to extract '{archive}' into {target}")]
    ExtractionFailed {
        /// The archive being extracted
        archive: String,
        /// The target directory being populated
        target: String,
        /// The underlying failure
        #[source]
        source: Box<PdmError>,
    },

    /// Cache root directory could not be determined
    #[error("Cannot determine cache directory: {reason}")]
    CacheDirUnavailable {
        /// Why no cache root is available
        reason: String,
    },

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Zip archive is corrupt or unreadable
    #[error("Zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Product descriptor file is not valid JSON
    #[error("Invalid product-info.json: {0}")]
    ProductInfoParse(#[from] serde_json::Error),
}

/// Rich error context for user-friendly CLI display.
///
/// Wraps a [`PdmError`] with an optional actionable suggestion and optional
/// extra details. Built via [`user_friendly_error`] at the CLI boundary;
/// library code raises plain [`PdmError`] values.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying PDM error
    pub error: PdmError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: PdmError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, shown in green in the terminal.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add explanatory details, shown in yellow in the terminal.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details, and suggestion to stderr with color coding.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Convert any error into a user-friendly [`ErrorContext`] with suggestions.
///
/// Downcasts to [`PdmError`] when possible and attaches a per-variant
/// suggestion; unrecognized errors are wrapped with their full cause chain so
/// the CLI always has something displayable.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let error = match error.downcast::<PdmError>() {
        Ok(pdm_error) => return create_error_context(pdm_error),
        Err(error) => error,
    };

    let error = match error.downcast::<std::io::Error>() {
        Ok(io_error) => {
            let kind = io_error.kind();
            let ctx = ErrorContext::new(PdmError::Io(io_error));
            return match kind {
                std::io::ErrorKind::PermissionDenied => ctx
                    .with_suggestion(
                        "Check file ownership or re-run with permissions to write the cache directory",
                    )
                    .with_details("PDM could not read or write a file it needs"),
                std::io::ErrorKind::NotFound => ctx
                    .with_suggestion("Check that the path exists and is spelled correctly")
                    .with_details("A required file or directory could not be found"),
                _ => ctx,
            };
        }
        Err(error) => error,
    };

    // Fall back to a classification wrapper carrying the full error chain so
    // nothing is lost at the CLI boundary.
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(PdmError::Classification {
        path: "unknown".to_string(),
        reason: message,
    })
}

fn create_error_context(error: PdmError) -> ErrorContext {
    let (suggestion, details) = match &error {
        PdmError::CoordinateParse { .. } => (
            Some(
                "Artifact paths must end with <group>/<artifact>/<version>/<hash>/<file>; \
                 pass the path of a resolved repository artifact, not an arbitrary file",
            ),
            Some("Coordinates are parsed positionally from the artifact path"),
        ),
        PdmError::Classification { .. } => (
            Some(
                "Register the artifact in one of the recognized dependency sets \
                 (--platform, --plugin, or --runtime)",
            ),
            Some("Only recognized platform, plugin, and runtime dependencies can be resolved"),
        ),
        PdmError::UnsupportedArchive { .. } => (
            Some("Only .zip, .sit, and .tar.gz archives are supported"),
            Some("Archive format is decided by file suffix; content is never sniffed"),
        ),
        PdmError::ExtractionFailed { .. } => (
            Some("Re-run the command; extraction restarts from scratch after a failure"),
            Some("The target directory holds no completion marker, so no stale state is trusted"),
        ),
        PdmError::CacheDirUnavailable { .. } => (
            Some("Set PDM_CACHE_DIR to a writable directory"),
            None,
        ),
        _ => (None, None),
    };

    let mut ctx = ErrorContext::new(error);
    if let Some(s) = suggestion {
        ctx = ctx.with_suggestion(s);
    }
    if let Some(d) = details {
        ctx = ctx.with_details(d);
    }
    ctx
}
