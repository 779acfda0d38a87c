//! Canonical customer CSV, the load file for `crm.customers`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crm_model::{CanonicalCustomer, CanonicalField};
use csv::WriterBuilder;
use tracing::debug;

use crate::error::OutputError;

/// What happens to an existing load file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and rewrite, header included.
    #[default]
    Replace,
    /// Add rows to the end; the header is written only if the file is empty.
    Append,
}

/// Serializes customers as CSV rows, optionally preceded by the header row.
///
/// The header is written even when `customers` is empty.
pub fn write_customers<W: Write>(
    writer: W,
    customers: &[CanonicalCustomer],
    include_header: bool,
) -> csv::Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    if include_header {
        csv_writer.write_record(CanonicalField::ALL.map(CanonicalField::as_str))?;
    }
    for customer in customers {
        csv_writer.serialize(customer)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes accepted customers to `path` and returns the number of rows written.
pub fn write_accepted_csv(
    path: &Path,
    customers: &[CanonicalCustomer],
    mode: WriteMode,
) -> Result<usize, OutputError> {
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Replace => options.write(true).truncate(true),
        WriteMode::Append => options.append(true),
    };
    let file = options.open(path).map_err(|e| OutputError::io(path, e))?;
    let existing_len = file.metadata().map_err(|e| OutputError::io(path, e))?.len();
    let include_header = existing_len == 0;

    write_customers(file, customers, include_header).map_err(|e| OutputError::csv(path, e))?;
    debug!(
        path = %path.display(),
        rows = customers.len(),
        mode = ?mode,
        "wrote accepted customers"
    );
    Ok(customers.len())
}
