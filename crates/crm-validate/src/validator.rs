use crm_model::{
    CanonicalCustomer, CanonicalField, SoftFailure, ValidationError, ValidationErrorKind,
};
use crm_transform::{NormalizationIssue, NormalizedRecord};
use tracing::trace;

use crate::checks;

/// Knobs for [`validate_with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject records whose optional fields are present but unparseable,
    /// instead of loading them with the field left empty.
    pub strict_optional: bool,
}

impl ValidationOptions {
    pub fn strict() -> Self {
        Self {
            strict_optional: true,
        }
    }
}

/// Validates a normalized record with default options.
pub fn validate(
    normalized: &NormalizedRecord,
    record_index: usize,
) -> Result<CanonicalCustomer, Vec<ValidationError>> {
    validate_with_options(normalized, record_index, &ValidationOptions::default())
}

/// Checks a normalized record against the canonical schema.
///
/// Every check runs; the record is accepted only when none of them report an
/// error.
pub fn validate_with_options(
    normalized: &NormalizedRecord,
    record_index: usize,
    options: &ValidationOptions,
) -> Result<CanonicalCustomer, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if normalized.is_empty() {
        errors.push(ValidationError::for_record(
            record_index,
            ValidationErrorKind::MissingValue,
            "no legacy fields could be mapped",
        ));
    }

    let first_name = checks::required_text(
        &normalized.first_name,
        CanonicalField::FirstName,
        "first name",
        record_index,
        &mut errors,
    );
    let last_name = checks::required_text(
        &normalized.last_name,
        CanonicalField::LastName,
        "last name",
        record_index,
        &mut errors,
    );
    let email = checks::email(&normalized.email, record_index, &mut errors);
    let is_active = checks::account_status(&normalized.is_active, record_index, &mut errors);

    let strict = options.strict_optional;
    let phone_number = checks::optional(
        &normalized.phone_number,
        CanonicalField::PhoneNumber,
        strict,
        record_index,
        &mut errors,
    );
    let registration_date = checks::optional(
        &normalized.registration_date,
        CanonicalField::RegistrationDate,
        strict,
        record_index,
        &mut errors,
    );
    let source_system_id = checks::optional(
        &normalized.source_system_id,
        CanonicalField::SourceSystemId,
        strict,
        record_index,
        &mut errors,
    );

    match (first_name, last_name, email, is_active) {
        (Some(first_name), Some(last_name), Some(email), Some(is_active)) if errors.is_empty() => {
            Ok(CanonicalCustomer {
                first_name,
                last_name,
                email,
                phone_number,
                registration_date,
                is_active,
                source_system_id,
            })
        }
        _ => {
            trace!(record_index, errors = errors.len(), "record failed validation");
            Err(errors)
        }
    }
}

/// Optional fields whose present source value could not be normalized.
///
/// Under lenient validation these are loaded empty; the returned records are
/// the audit trail for what was dropped.
pub fn soft_failures(normalized: &NormalizedRecord, record_index: usize) -> Vec<SoftFailure> {
    let optional: [(CanonicalField, Option<&NormalizationIssue>); 3] = [
        (CanonicalField::PhoneNumber, normalized.phone_number.issue()),
        (
            CanonicalField::RegistrationDate,
            normalized.registration_date.issue(),
        ),
        (
            CanonicalField::SourceSystemId,
            normalized.source_system_id.issue(),
        ),
    ];
    optional
        .into_iter()
        .filter_map(|(field, issue)| {
            issue.map(|issue| {
                SoftFailure::new(record_index, field, issue.raw.as_str(), issue.reason)
            })
        })
        .collect()
}
