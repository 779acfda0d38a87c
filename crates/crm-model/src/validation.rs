use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::CanonicalField;

/// Field name used for errors that concern the record as a whole.
pub const RECORD_FIELD: &str = "record";

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// A required field is absent or empty.
    MissingValue,
    InvalidEmail,
    UnresolvableStatus,
    /// A value was present but could not be normalized.
    InvalidValue,
}

/// A single field-level violation found in one input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("record {record_index}: {field}: {reason}")]
pub struct ValidationError {
    /// Position of the record in the input batch.
    pub record_index: usize,
    /// Canonical field name, or [`RECORD_FIELD`].
    pub field: String,
    pub kind: ValidationErrorKind,
    pub reason: String,
}

impl ValidationError {
    pub fn new(
        record_index: usize,
        field: impl Into<String>,
        kind: ValidationErrorKind,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            record_index,
            field: field.into(),
            kind,
            reason: reason.into(),
        }
    }

    pub fn for_field(
        record_index: usize,
        field: CanonicalField,
        kind: ValidationErrorKind,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(record_index, field.as_str(), kind, reason)
    }

    pub fn for_record(record_index: usize, kind: ValidationErrorKind, reason: impl Into<String>) -> Self {
        Self::new(record_index, RECORD_FIELD, kind, reason)
    }
}
