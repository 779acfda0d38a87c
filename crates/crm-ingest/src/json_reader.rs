use std::path::Path;

use crm_model::RawRecord;
use tracing::debug;

use crate::error::IngestError;

/// Parses a JSON array of objects into raw records.
pub fn parse_json_records(contents: &str, path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let records: Vec<RawRecord> =
        serde_json::from_str(contents).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), records = records.len(), "parsed json dump");
    Ok(records)
}

pub fn read_json_records(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json_records(&contents, path)
}
