//! Field mapping: legacy record shape to canonical field names.

use std::collections::BTreeMap;

use crm_model::{CanonicalField, MappingSpec, RawRecord, RawValue, SplitEntry, SplitRule};
use tracing::trace;

/// A record keyed by canonical field name.
///
/// A field missing from the record is absent: either the legacy column was
/// missing or null, or a split could not decompose its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedRecord {
    values: BTreeMap<CanonicalField, RawValue>,
}

impl MappedRecord {
    pub fn get(&self, field: CanonicalField) -> Option<&RawValue> {
        self.values.get(&field)
    }

    pub fn is_absent(&self, field: CanonicalField) -> bool {
        !self.values.contains_key(&field)
    }

    /// Number of canonical fields holding a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn set(&mut self, field: CanonicalField, value: RawValue) {
        if value.is_null() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
    }
}

impl FromIterator<(CanonicalField, RawValue)> for MappedRecord {
    fn from_iter<I: IntoIterator<Item = (CanonicalField, RawValue)>>(iter: I) -> Self {
        let mut record = MappedRecord::default();
        for (field, value) in iter {
            record.set(field, value);
        }
        record
    }
}

/// Maps a raw legacy record onto canonical field names.
///
/// Unmapped legacy fields are dropped. Nothing here fails: missing or
/// undecomposable values are left absent for the validator to judge.
pub fn map_record(raw: &RawRecord, spec: &MappingSpec) -> MappedRecord {
    let mut mapped = MappedRecord::default();

    for entry in spec.renames() {
        if let Some(value) = raw.get(&entry.legacy) {
            mapped.set(entry.canonical, value.clone());
        }
    }

    for entry in spec.splits() {
        let Some(parts) = raw.get(&entry.legacy).and_then(|value| split_value(value, entry)) else {
            trace!(legacy = %entry.legacy, "split left targets absent");
            continue;
        };
        for (field, part) in entry.targets.iter().zip(parts) {
            mapped.set(*field, RawValue::Text(part));
        }
    }

    mapped
}

fn split_value(value: &RawValue, entry: &SplitEntry) -> Option<Vec<String>> {
    let text = value.to_text()?;
    decompose(&text, entry.rule, entry.targets.len())
}

/// Decomposes `value` into exactly `parts` pieces.
///
/// The first `parts - 1` pieces are single tokens; the last one takes the
/// remainder. Returns `None` when the value has fewer tokens than `parts`.
/// A delimiter remainder keeps its original text, separators and spacing
/// included, trimmed only at its ends.
pub fn decompose(value: &str, rule: SplitRule, parts: usize) -> Option<Vec<String>> {
    if parts == 0 {
        return None;
    }
    match rule {
        SplitRule::Whitespace => {
            let tokens: Vec<&str> = value.split_whitespace().collect();
            if tokens.len() < parts {
                return None;
            }
            let (head, tail) = tokens.split_at(parts - 1);
            let mut out: Vec<String> = head.iter().map(|token| (*token).to_string()).collect();
            out.push(tail.join(" "));
            Some(out)
        }
        SplitRule::Delimiter(separator) => {
            if value.split(separator).any(|token| token.trim().is_empty()) {
                return None;
            }
            let out: Vec<String> = value
                .splitn(parts, separator)
                .map(|piece| piece.trim().to_string())
                .collect();
            (out.len() == parts).then_some(out)
        }
    }
}
