use thiserror::Error;

use crate::field::CanonicalField;

/// Configuration errors detected while building a [`crate::MappingSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingSpecError {
    #[error("legacy field name must not be empty")]
    EmptyLegacyField,

    #[error("legacy field '{legacy}' is mapped more than once")]
    DuplicateLegacyField { legacy: String },

    #[error("canonical field '{field}' is produced by both '{first}' and '{second}'")]
    DuplicateCanonicalField {
        field: CanonicalField,
        first: String,
        second: String,
    },

    #[error("split of '{legacy}' needs at least two target fields, got {count}")]
    SplitTooFewTargets { legacy: String, count: usize },

    #[error("unknown canonical field: {0}")]
    UnknownCanonicalField(String),
}
