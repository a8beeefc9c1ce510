//! Error types for job parsing and program generation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the crate.
///
/// Domain-expected outcomes (pieces that do not fit, invalid cut
/// parameters) are reported as data, not through this type: unplaceable
/// pieces land in `NestingResult::unplaced` and bad depth configurations
/// produce a textual error program. `NestError` covers the file boundary
/// and genuine caller mistakes only.
#[derive(Debug, Error)]
pub enum NestError {
    #[error("Job file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty job file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid job JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, NestError>;
