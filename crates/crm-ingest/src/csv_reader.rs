use std::path::Path;

use crm_model::{RawRecord, RawValue};
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::IngestError;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> RawValue {
    let cell = raw.trim_matches('\u{feff}');
    if cell.trim().is_empty() {
        RawValue::Null
    } else {
        RawValue::Text(cell.to_string())
    }
}

/// Picks `;` or `,` from the header line, whichever splits it into more
/// columns. Legacy dumps were written with both.
pub fn detect_delimiter(contents: &str) -> u8 {
    let header = contents.lines().next().unwrap_or_default();
    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    if semicolons > commas { b';' } else { b',' }
}

/// Parses CSV text into raw records.
///
/// Empty cells become null; everything else stays text so that values such
/// as phone numbers keep their leading zeros.
pub fn parse_csv_records(contents: &str, path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let delimiter = detect_delimiter(contents);
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let csv_error = |source: csv::Error| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();

    let mut records = Vec::new();
    for (row_index, row) in reader.records().enumerate() {
        let row = row.map_err(csv_error)?;
        if row.len() != headers.len() {
            return Err(IngestError::RaggedRow {
                path: path.to_path_buf(),
                line: row
                    .position()
                    .map_or(row_index as u64 + 2, |position| position.line()),
                expected: headers.len(),
                found: row.len(),
            });
        }
        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(name, cell)| (name.clone(), normalize_cell(cell)))
            .collect();
        records.push(record);
    }

    debug!(
        path = %path.display(),
        delimiter = %char::from(delimiter),
        columns = headers.len(),
        records = records.len(),
        "parsed csv dump"
    );
    Ok(records)
}

pub fn read_csv_records(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv_records(&contents, path)
}
