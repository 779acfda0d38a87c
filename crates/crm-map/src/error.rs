use std::path::PathBuf;

use crm_model::MappingSpecError;

#[derive(Debug, thiserror::Error)]
pub enum MappingFileError {
    #[error("failed to read mapping file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse mapping file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid mapping: {0}")]
    Invalid(#[from] MappingSpecError),
}

impl MappingFileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
