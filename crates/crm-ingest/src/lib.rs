//! Readers for legacy customer dumps.
//!
//! The legacy extraction step exported `raw_data.legacy` either as CSV (comma
//! or semicolon separated) or as a JSON array of row objects.

pub mod csv_reader;
pub mod error;
pub mod json_reader;

use std::path::Path;

use crm_model::RawRecord;

pub use csv_reader::{detect_delimiter, parse_csv_records, read_csv_records};
pub use error::IngestError;
pub use json_reader::{parse_json_records, read_json_records};

/// Input formats understood by [`read_records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// Infers the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" | "txt" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Reads a legacy dump, dispatching on the file extension.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    match InputFormat::from_path(path) {
        Some(InputFormat::Csv) => read_csv_records(path),
        Some(InputFormat::Json) => read_json_records(path),
        None => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
