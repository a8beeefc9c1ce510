//! JSON job-file parsing.

use std::path::Path;

use tracing::debug;

use crate::error::{NestError, Result};
use crate::model::JobRequest;

/// Parse a job request from a JSON string.
///
/// Missing optional sections and fields take the documented defaults;
/// unknown fields are ignored so callers can carry extra metadata in
/// the same document.
pub fn parse_job(content: &str) -> Result<JobRequest> {
    let request: JobRequest = serde_json::from_str(content)?;
    debug!(pieces = request.pieces.len(), method = %request.method, "parsed job");
    Ok(request)
}

/// Parse a job request from a JSON file.
pub fn parse_job_file(path: &Path) -> Result<JobRequest> {
    if !path.exists() {
        return Err(NestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(NestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_job(&content)
}
