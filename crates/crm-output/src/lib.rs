//! Load-side outputs of a migration batch.

pub mod customers;
pub mod error;
pub mod report;

use std::path::{Path, PathBuf};

use crm_model::BatchResult;
use tracing::info;

pub use customers::{WriteMode, write_accepted_csv, write_customers};
pub use error::OutputError;
pub use report::{
    render_rejection_report, render_soft_failure_report, write_rejection_report,
    write_soft_failure_report,
};

pub const ACCEPTED_FILE_NAME: &str = "customers.csv";
pub const REJECTED_FILE_NAME: &str = "rejected.json";
pub const DROPPED_FILE_NAME: &str = "dropped.json";

/// Paths produced by [`write_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOutputs {
    pub accepted_csv: PathBuf,
    pub rejection_report: PathBuf,
    /// Optional values accepted records lost under lenient validation.
    pub dropped_report: PathBuf,
}

/// Writes accepted records and both review reports into `output_dir`.
pub fn write_batch(
    output_dir: &Path,
    result: &BatchResult,
    mode: WriteMode,
) -> Result<MigrationOutputs, OutputError> {
    std::fs::create_dir_all(output_dir).map_err(|e| OutputError::io(output_dir, e))?;
    let outputs = MigrationOutputs {
        accepted_csv: output_dir.join(ACCEPTED_FILE_NAME),
        rejection_report: output_dir.join(REJECTED_FILE_NAME),
        dropped_report: output_dir.join(DROPPED_FILE_NAME),
    };
    write_accepted_csv(&outputs.accepted_csv, &result.accepted, mode)?;
    write_rejection_report(&outputs.rejection_report, &result.rejected)?;
    write_soft_failure_report(&outputs.dropped_report, &result.soft_failures)?;
    info!(
        output_dir = %output_dir.display(),
        accepted = result.accepted.len(),
        rejected = result.rejected.len(),
        dropped_values = result.soft_failures.len(),
        "outputs written"
    );
    Ok(outputs)
}
