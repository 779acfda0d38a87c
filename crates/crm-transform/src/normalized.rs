//! Explicit outcome of normalizing one field.

use std::fmt;

/// Why a present value could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationIssue {
    /// The offending value rendered as text.
    pub raw: String,
    pub reason: &'static str,
}

impl NormalizationIssue {
    pub fn new(raw: impl Into<String>, reason: &'static str) -> Self {
        Self {
            raw: raw.into(),
            reason,
        }
    }
}

impl fmt::Display for NormalizationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: '{}'", self.reason, self.raw)
    }
}

/// A normalized field value.
///
/// `Absent` and `Invalid` are kept apart: an absent optional field is fine,
/// while an invalid one may still be worth reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized<T> {
    /// Missing, null, or empty in the source.
    Absent,
    Value(T),
    /// Present in the source but not coercible to the target type.
    Invalid(NormalizationIssue),
}

impl<T> Normalized<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Normalized::Absent)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Normalized::Invalid(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Normalized::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Collapses `Invalid` into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Normalized::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn issue(&self) -> Option<&NormalizationIssue> {
        match self {
            Normalized::Invalid(issue) => Some(issue),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Normalized<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Normalized::Absent, Normalized::Value)
    }
}
