use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: line {line} has {found} cells, header has {expected}")]
    RaggedRow {
        path: PathBuf,
        /// 1-based line in the file, header included.
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("unsupported input format for {path} (expected .csv or .json)")]
    UnsupportedFormat { path: PathBuf },
}
