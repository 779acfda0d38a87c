//! Review reports: rejected records, and optional values dropped from
//! accepted ones.

use std::path::Path;

use crm_model::{RejectedRecord, SoftFailure};
use tracing::debug;

use crate::error::OutputError;

/// Renders rejected records as a pretty-printed JSON array.
pub fn render_rejection_report(rejected: &[RejectedRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rejected)
}

/// Writes the rejection report, replacing any previous one.
pub fn write_rejection_report(path: &Path, rejected: &[RejectedRecord]) -> Result<(), OutputError> {
    let json = render_rejection_report(rejected).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|e| OutputError::io(path, e))?;
    debug!(path = %path.display(), records = rejected.len(), "wrote rejection report");
    Ok(())
}

pub fn render_soft_failure_report(dropped: &[SoftFailure]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(dropped)
}

/// Writes the dropped-value report, replacing any previous one.
pub fn write_soft_failure_report(path: &Path, dropped: &[SoftFailure]) -> Result<(), OutputError> {
    let json = render_soft_failure_report(dropped).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|e| OutputError::io(path, e))?;
    debug!(path = %path.display(), values = dropped.len(), "wrote dropped-value report");
    Ok(())
}
