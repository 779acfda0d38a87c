use chrono::NaiveDate;
use crm_map::MappedRecord;
use crm_model::CanonicalField;

use crate::normalization::{
    normalize_date, normalize_identifier, normalize_phone, normalize_status, normalize_text,
};
use crate::normalized::Normalized;

/// A mapped record with every canonical field coerced to its target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub first_name: Normalized<String>,
    pub last_name: Normalized<String>,
    pub email: Normalized<String>,
    pub phone_number: Normalized<String>,
    pub registration_date: Normalized<NaiveDate>,
    pub is_active: Normalized<bool>,
    pub source_system_id: Normalized<i64>,
}

impl NormalizedRecord {
    /// True when no canonical field carries anything, valid or not.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_absent()
            && self.last_name.is_absent()
            && self.email.is_absent()
            && self.phone_number.is_absent()
            && self.registration_date.is_absent()
            && self.is_active.is_absent()
            && self.source_system_id.is_absent()
    }
}

/// Normalizes every canonical field of a mapped record. Never fails.
pub fn normalize(mapped: &MappedRecord) -> NormalizedRecord {
    NormalizedRecord {
        first_name: normalize_text(mapped.get(CanonicalField::FirstName)),
        last_name: normalize_text(mapped.get(CanonicalField::LastName)),
        email: normalize_text(mapped.get(CanonicalField::Email)),
        phone_number: normalize_phone(mapped.get(CanonicalField::PhoneNumber)),
        registration_date: normalize_date(mapped.get(CanonicalField::RegistrationDate)),
        is_active: normalize_status(mapped.get(CanonicalField::IsActive)),
        source_system_id: normalize_identifier(mapped.get(CanonicalField::SourceSystemId)),
    }
}
