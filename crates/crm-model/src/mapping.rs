//! Legacy-to-canonical mapping configuration.
//!
//! A [`MappingSpec`] is built once, validated once, and then shared read-only
//! by every record of a batch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MappingSpecError;
use crate::field::CanonicalField;

/// How a single legacy value is decomposed into several canonical fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitRule {
    /// Split on runs of whitespace; the last target takes the remainder.
    #[default]
    Whitespace,
    /// Split on a literal separator; the last target takes the remainder.
    Delimiter(char),
}

/// One-to-one rename of a legacy field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameEntry {
    pub legacy: String,
    pub canonical: CanonicalField,
}

impl RenameEntry {
    pub fn new(legacy: impl Into<String>, canonical: CanonicalField) -> Self {
        Self {
            legacy: legacy.into(),
            canonical,
        }
    }
}

/// One-to-many decomposition of a legacy field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitEntry {
    pub legacy: String,
    /// Target fields, in the order the decomposed parts fill them.
    pub targets: Vec<CanonicalField>,
    #[serde(default)]
    pub rule: SplitRule,
}

impl SplitEntry {
    pub fn new(legacy: impl Into<String>, targets: Vec<CanonicalField>, rule: SplitRule) -> Self {
        Self {
            legacy: legacy.into(),
            targets,
            rule,
        }
    }
}

/// Validated mapping from legacy columns to canonical fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingSpec {
    renames: Vec<RenameEntry>,
    splits: Vec<SplitEntry>,
}

impl MappingSpec {
    /// Builds a spec, rejecting configurations that would produce the same
    /// canonical field twice or consume the same legacy field twice.
    pub fn new(
        renames: Vec<RenameEntry>,
        splits: Vec<SplitEntry>,
    ) -> Result<Self, MappingSpecError> {
        check_entries(&renames, &splits)?;
        Ok(Self { renames, splits })
    }

    /// The column mapping of the legacy `raw_data.legacy` table.
    pub fn legacy_default() -> Self {
        Self {
            renames: vec![
                RenameEntry::new("client_id", CanonicalField::SourceSystemId),
                RenameEntry::new("email", CanonicalField::Email),
                RenameEntry::new("phone", CanonicalField::PhoneNumber),
                RenameEntry::new("registration_date", CanonicalField::RegistrationDate),
                RenameEntry::new("account_status", CanonicalField::IsActive),
            ],
            splits: vec![SplitEntry::new(
                "full_name",
                vec![CanonicalField::FirstName, CanonicalField::LastName],
                SplitRule::Whitespace,
            )],
        }
    }

    pub fn renames(&self) -> &[RenameEntry] {
        &self.renames
    }

    pub fn splits(&self) -> &[SplitEntry] {
        &self.splits
    }

    /// Canonical fields this spec can populate.
    pub fn produced_fields(&self) -> Vec<CanonicalField> {
        let mut fields: Vec<CanonicalField> = self
            .renames
            .iter()
            .map(|entry| entry.canonical)
            .chain(self.splits.iter().flat_map(|entry| entry.targets.iter().copied()))
            .collect();
        fields.sort();
        fields
    }

    /// Required canonical fields that no entry of this spec produces.
    ///
    /// Records mapped with such a spec can never be accepted.
    pub fn unproduced_required_fields(&self) -> Vec<CanonicalField> {
        let produced = self.produced_fields();
        CanonicalField::ALL
            .into_iter()
            .filter(|field| field.is_required() && !produced.contains(field))
            .collect()
    }
}

impl Default for MappingSpec {
    fn default() -> Self {
        Self::legacy_default()
    }
}

fn check_entries(renames: &[RenameEntry], splits: &[SplitEntry]) -> Result<(), MappingSpecError> {
    for split in splits {
        if split.targets.len() < 2 {
            return Err(MappingSpecError::SplitTooFewTargets {
                legacy: split.legacy.clone(),
                count: split.targets.len(),
            });
        }
    }

    let sources = renames
        .iter()
        .map(|entry| (entry.legacy.as_str(), std::slice::from_ref(&entry.canonical)))
        .chain(
            splits
                .iter()
                .map(|entry| (entry.legacy.as_str(), entry.targets.as_slice())),
        );

    let mut legacy_seen: Vec<&str> = Vec::new();
    let mut produced: BTreeMap<CanonicalField, &str> = BTreeMap::new();
    for (legacy, targets) in sources {
        if legacy.trim().is_empty() {
            return Err(MappingSpecError::EmptyLegacyField);
        }
        if legacy_seen.contains(&legacy) {
            return Err(MappingSpecError::DuplicateLegacyField {
                legacy: legacy.to_string(),
            });
        }
        legacy_seen.push(legacy);
        for &field in targets {
            if let Some(first) = produced.insert(field, legacy) {
                return Err(MappingSpecError::DuplicateCanonicalField {
                    field,
                    first: first.to_string(),
                    second: legacy.to_string(),
                });
            }
        }
    }
    Ok(())
}
