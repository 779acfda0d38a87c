//! Canonical field names of the target CRM schema.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MappingSpecError;

/// A column of the `crm.customers` target table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    RegistrationDate,
    IsActive,
    /// Identifier of the record in the legacy system.
    #[serde(alias = "_source_system_id")]
    SourceSystemId,
}

impl CanonicalField {
    /// All canonical fields in target schema order.
    pub const ALL: [CanonicalField; 7] = [
        CanonicalField::FirstName,
        CanonicalField::LastName,
        CanonicalField::Email,
        CanonicalField::PhoneNumber,
        CanonicalField::RegistrationDate,
        CanonicalField::IsActive,
        CanonicalField::SourceSystemId,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::RegistrationDate => "registration_date",
            Self::IsActive => "is_active",
            Self::SourceSystemId => "source_system_id",
        }
    }

    /// Returns true when the target schema has no absent state for this field.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Self::FirstName | Self::LastName | Self::Email | Self::IsActive
        )
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = MappingSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "_source_system_id" {
            return Ok(Self::SourceSystemId);
        }
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == trimmed)
            .ok_or_else(|| MappingSpecError::UnknownCanonicalField(trimmed.to_string()))
    }
}
