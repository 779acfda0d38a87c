//! Tests for crm-model types.

use crm_model::{
    CanonicalField, MappingSpec, MappingSpecError, RawRecord, RawValue, RenameEntry, SplitEntry,
    SplitRule,
};

fn name_split() -> SplitEntry {
    SplitEntry::new(
        "full_name",
        vec![CanonicalField::FirstName, CanonicalField::LastName],
        SplitRule::Whitespace,
    )
}

#[test]
fn duplicate_canonical_field_is_rejected() {
    let err = MappingSpec::new(
        vec![
            RenameEntry::new("email", CanonicalField::Email),
            RenameEntry::new("mail_address", CanonicalField::Email),
        ],
        vec![],
    )
    .unwrap_err();
    assert_eq!(
        err,
        MappingSpecError::DuplicateCanonicalField {
            field: CanonicalField::Email,
            first: "email".to_string(),
            second: "mail_address".to_string(),
        }
    );
}

#[test]
fn split_target_clashing_with_rename_is_rejected() {
    let err = MappingSpec::new(
        vec![RenameEntry::new("given_name", CanonicalField::FirstName)],
        vec![name_split()],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        MappingSpecError::DuplicateCanonicalField {
            field: CanonicalField::FirstName,
            ..
        }
    ));
}

#[test]
fn duplicate_legacy_field_is_rejected() {
    let err = MappingSpec::new(
        vec![RenameEntry::new("full_name", CanonicalField::Email)],
        vec![name_split()],
    )
    .unwrap_err();
    assert_eq!(
        err,
        MappingSpecError::DuplicateLegacyField {
            legacy: "full_name".to_string()
        }
    );
}

#[test]
fn split_needs_two_targets() {
    let err = MappingSpec::new(
        vec![],
        vec![SplitEntry::new(
            "full_name",
            vec![CanonicalField::FirstName],
            SplitRule::Whitespace,
        )],
    )
    .unwrap_err();
    assert_eq!(
        err,
        MappingSpecError::SplitTooFewTargets {
            legacy: "full_name".to_string(),
            count: 1
        }
    );
}

#[test]
fn empty_legacy_name_is_rejected() {
    let err = MappingSpec::new(vec![RenameEntry::new("  ", CanonicalField::Email)], vec![])
        .unwrap_err();
    assert_eq!(err, MappingSpecError::EmptyLegacyField);
}

#[test]
fn missing_required_fields_are_reported() {
    let spec = MappingSpec::new(vec![RenameEntry::new("email", CanonicalField::Email)], vec![])
        .unwrap();
    assert_eq!(
        spec.unproduced_required_fields(),
        vec![
            CanonicalField::FirstName,
            CanonicalField::LastName,
            CanonicalField::IsActive
        ]
    );
}

#[test]
fn canonical_field_parses_legacy_alias() {
    assert_eq!(
        "_source_system_id".parse::<CanonicalField>().unwrap(),
        CanonicalField::SourceSystemId
    );
    assert_eq!(
        "phone_number".parse::<CanonicalField>().unwrap(),
        CanonicalField::PhoneNumber
    );
    assert!("phone".parse::<CanonicalField>().is_err());

    let field: CanonicalField = serde_json::from_str("\"_source_system_id\"").unwrap();
    assert_eq!(field, CanonicalField::SourceSystemId);
}

#[test]
fn raw_record_deserializes_mixed_values() {
    let record: RawRecord = serde_json::from_str(
        r#"{"client_id": "7", "account_status": 1, "phone": null, "score": 1.5, "vip": true}"#,
    )
    .unwrap();
    assert_eq!(record.len(), 5);
    assert_eq!(record.get("client_id"), Some(&RawValue::Text("7".to_string())));
    assert_eq!(record.get("account_status"), Some(&RawValue::Integer(1)));
    assert_eq!(record.get("phone"), Some(&RawValue::Null));
    assert_eq!(record.get("score"), Some(&RawValue::Float(1.5)));
    assert_eq!(record.get("vip"), Some(&RawValue::Bool(true)));
}

#[test]
fn raw_record_serializes_in_field_order() {
    let record: RawRecord = [
        ("phone", RawValue::Null),
        ("email", RawValue::from("g@h.com")),
    ]
    .into_iter()
    .collect();
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"email":"g@h.com","phone":null}"#);
}
