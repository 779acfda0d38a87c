//! Field-level checks.
//!
//! Each check pushes its findings onto the shared error list instead of
//! returning early, so a record collects every applicable error.

use crm_model::{CanonicalField, ValidationError, ValidationErrorKind};
use crm_transform::Normalized;
use tracing::debug;

/// Exactly one `@` with non-empty local and domain parts.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

pub(crate) fn required_text(
    value: &Normalized<String>,
    field: CanonicalField,
    label: &str,
    record_index: usize,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match value {
        Normalized::Value(text) if !text.is_empty() => Some(text.clone()),
        _ => {
            errors.push(ValidationError::for_field(
                record_index,
                field,
                ValidationErrorKind::MissingValue,
                format!("{label} is required"),
            ));
            None
        }
    }
}

pub(crate) fn email(
    value: &Normalized<String>,
    record_index: usize,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match value {
        Normalized::Value(text) if is_valid_email(text) => Some(text.clone()),
        _ => {
            errors.push(ValidationError::for_field(
                record_index,
                CanonicalField::Email,
                ValidationErrorKind::InvalidEmail,
                "invalid email",
            ));
            None
        }
    }
}

pub(crate) fn account_status(
    value: &Normalized<bool>,
    record_index: usize,
    errors: &mut Vec<ValidationError>,
) -> Option<bool> {
    match value {
        Normalized::Value(flag) => Some(*flag),
        _ => {
            errors.push(ValidationError::for_field(
                record_index,
                CanonicalField::IsActive,
                ValidationErrorKind::UnresolvableStatus,
                "unresolvable account status",
            ));
            None
        }
    }
}

/// Optional fields: absent is fine; invalid is an error only when `strict`.
pub(crate) fn optional<T: Clone>(
    value: &Normalized<T>,
    field: CanonicalField,
    strict: bool,
    record_index: usize,
    errors: &mut Vec<ValidationError>,
) -> Option<T> {
    match value {
        Normalized::Value(inner) => Some(inner.clone()),
        Normalized::Absent => None,
        Normalized::Invalid(issue) => {
            if strict {
                errors.push(ValidationError::for_field(
                    record_index,
                    field,
                    ValidationErrorKind::InvalidValue,
                    issue.to_string(),
                ));
            } else {
                debug!(
                    record_index,
                    field = field.as_str(),
                    reason = issue.reason,
                    "optional value dropped"
                );
            }
            None
        }
    }
}
