//! Outcome of pushing one batch through the migration pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::customer::CanonicalCustomer;
use crate::field::CanonicalField;
use crate::raw::RawRecord;
use crate::validation::ValidationError;

/// An input record that failed validation, kept with its errors for review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedRecord {
    pub record_index: usize,
    pub raw: RawRecord,
    pub errors: Vec<ValidationError>,
}

/// A present optional value that could not be normalized and was left empty
/// on an accepted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftFailure {
    pub record_index: usize,
    pub field: String,
    /// The source value as read, before normalization.
    pub raw: String,
    pub reason: String,
}

impl SoftFailure {
    pub fn new(
        record_index: usize,
        field: CanonicalField,
        raw: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            record_index,
            field: field.as_str().to_string(),
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}

/// Accepted and rejected records of a batch, both in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub accepted: Vec<CanonicalCustomer>,
    pub rejected: Vec<RejectedRecord>,
    pub input_count: usize,
    /// Values dropped from accepted records, in input order.
    #[serde(default)]
    pub soft_failures: Vec<SoftFailure>,
}

impl BatchResult {
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            input: self.input_count,
            accepted: self.accepted.len(),
            rejected: self.rejected.len(),
            errors: self.rejected.iter().map(|r| r.errors.len()).sum(),
            soft_failures: self.soft_failures.len(),
        }
    }

    /// Checks that every input record ended up in exactly one partition.
    pub fn is_consistent(&self) -> bool {
        self.accepted.len() + self.rejected.len() == self.input_count
    }

    /// Error counts grouped by `(field, reason)`.
    pub fn error_breakdown(&self) -> BTreeMap<(String, String), usize> {
        let mut breakdown = BTreeMap::new();
        for error in self.rejected.iter().flat_map(|r| r.errors.iter()) {
            *breakdown
                .entry((error.field.clone(), error.reason.clone()))
                .or_insert(0) += 1;
        }
        breakdown
    }
}

/// Aggregate counts of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub input: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Total validation errors across rejected records.
    pub errors: usize,
    /// Optional values dropped from accepted records.
    pub soft_failures: usize,
}
