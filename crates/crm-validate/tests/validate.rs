//! Tests for canonical record validation.

use chrono::NaiveDate;
use crm_model::{CanonicalField, RECORD_FIELD, ValidationErrorKind};
use crm_transform::{NormalizationIssue, Normalized, NormalizedRecord};
use crm_validate::{ValidationOptions, soft_failures, validate, validate_with_options};

fn valid_record() -> NormalizedRecord {
    NormalizedRecord {
        first_name: Normalized::Value("Grace".to_string()),
        last_name: Normalized::Value("Hopper".to_string()),
        email: Normalized::Value("g@h.com".to_string()),
        phone_number: Normalized::Absent,
        registration_date: Normalized::Value(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        is_active: Normalized::Value(true),
        source_system_id: Normalized::Value(7),
    }
}

fn fields(errors: &[crm_model::ValidationError]) -> Vec<&str> {
    errors.iter().map(|e| e.field.as_str()).collect()
}

#[test]
fn valid_record_is_accepted() {
    let customer = validate(&valid_record(), 0).unwrap();
    assert_eq!(customer.first_name, "Grace");
    assert_eq!(customer.last_name, "Hopper");
    assert!(customer.is_active);
    assert_eq!(customer.phone_number, None);
    assert_eq!(customer.source_system_id, Some(7));
}

#[test]
fn collects_every_error() {
    let record = NormalizedRecord {
        first_name: Normalized::Absent,
        last_name: Normalized::Absent,
        email: Normalized::Value("no-at-symbol".to_string()),
        is_active: Normalized::Invalid(NormalizationIssue::new("Pending", "unknown account status")),
        ..valid_record()
    };

    let errors = validate(&record, 4).unwrap_err();

    assert_eq!(
        fields(&errors),
        vec!["first_name", "last_name", "email", "is_active"]
    );
    assert!(errors.iter().all(|e| e.record_index == 4));
    assert_eq!(errors[2].reason, "invalid email");
    assert_eq!(errors[3].reason, "unresolvable account status");
    assert_eq!(errors[3].kind, ValidationErrorKind::UnresolvableStatus);
}

#[test]
fn absent_status_is_unresolvable() {
    let record = NormalizedRecord {
        is_active: Normalized::Absent,
        ..valid_record()
    };
    let errors = validate(&record, 0).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, CanonicalField::IsActive.as_str());
}

#[test]
fn absent_email_is_invalid_email() {
    let record = NormalizedRecord {
        email: Normalized::Absent,
        ..valid_record()
    };
    let errors = validate(&record, 0).unwrap_err();
    assert_eq!(errors[0].kind, ValidationErrorKind::InvalidEmail);
}

#[test]
fn invalid_optional_field_is_soft_by_default() {
    let record = NormalizedRecord {
        registration_date: Normalized::Invalid(NormalizationIssue::new(
            "Jan 15th",
            "unrecognized date format",
        )),
        ..valid_record()
    };

    let customer = validate(&record, 0).unwrap();
    assert_eq!(customer.registration_date, None);

    let errors = validate_with_options(&record, 0, &ValidationOptions::strict()).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "registration_date");
    assert_eq!(errors[0].kind, ValidationErrorKind::InvalidValue);
    assert_eq!(errors[0].reason, "unrecognized date format: 'Jan 15th'");
}

#[test]
fn soft_failures_list_dropped_optional_values() {
    let record = NormalizedRecord {
        phone_number: Normalized::Invalid(NormalizationIssue::new("n/a", "no digits in phone number")),
        registration_date: Normalized::Invalid(NormalizationIssue::new(
            "2024/13/45",
            "unrecognized date format",
        )),
        ..valid_record()
    };

    let dropped = soft_failures(&record, 4);
    assert_eq!(dropped.len(), 2);
    assert_eq!(dropped[0].field, "phone_number");
    assert_eq!(dropped[0].raw, "n/a");
    assert_eq!(dropped[1].field, "registration_date");
    assert_eq!(dropped[1].reason, "unrecognized date format");
    assert!(dropped.iter().all(|failure| failure.record_index == 4));

    assert!(soft_failures(&valid_record(), 0).is_empty());
}

#[test]
fn empty_record_gets_record_level_error() {
    let record = NormalizedRecord {
        first_name: Normalized::Absent,
        last_name: Normalized::Absent,
        email: Normalized::Absent,
        phone_number: Normalized::Absent,
        registration_date: Normalized::Absent,
        is_active: Normalized::Absent,
        source_system_id: Normalized::Absent,
    };
    let errors = validate(&record, 9).unwrap_err();
    assert_eq!(errors[0].field, RECORD_FIELD);
    assert_eq!(errors.len(), 5);
}
