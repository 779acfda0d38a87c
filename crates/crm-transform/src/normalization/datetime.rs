//! Registration date parsing.
//!
//! Legacy dumps carry dates in three textual encodings. Patterns are tried in
//! a fixed priority order and the first match wins:
//!
//! 1. `YYYY-MM-DD` (ISO 8601 extended)
//! 2. `DD/MM/YYYY`
//! 3. `DD.MM.YYYY`
//!
//! `MM/DD/YYYY` is never attempted, so `03/04/2024` is always 3 April.

use chrono::NaiveDate;
use crm_model::RawValue;

use crate::normalized::{NormalizationIssue, Normalized};

/// An accepted textual date encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePattern {
    /// chrono format string.
    pub format: &'static str,
    pub separator: char,
    /// Position of the four-digit year among the three components.
    year_position: usize,
}

/// Accepted encodings in priority order.
pub const DATE_PATTERNS: [DatePattern; 3] = [
    DatePattern {
        format: "%Y-%m-%d",
        separator: '-',
        year_position: 0,
    },
    DatePattern {
        format: "%d/%m/%Y",
        separator: '/',
        year_position: 2,
    },
    DatePattern {
        format: "%d.%m.%Y",
        separator: '.',
        year_position: 2,
    },
];

impl DatePattern {
    /// Checks the component shape before handing off to chrono, which would
    /// otherwise accept two-digit or signed years.
    fn has_expected_shape(&self, value: &str) -> bool {
        let parts: Vec<&str> = value.split(self.separator).collect();
        if parts.len() != 3 {
            return false;
        }
        parts.iter().enumerate().all(|(index, part)| {
            let width_ok = if index == self.year_position {
                part.len() == 4
            } else {
                (1..=2).contains(&part.len())
            };
            width_ok && part.chars().all(|c| c.is_ascii_digit())
        })
    }

    pub fn parse(&self, value: &str) -> Option<NaiveDate> {
        if !self.has_expected_shape(value) {
            return None;
        }
        NaiveDate::parse_from_str(value, self.format).ok()
    }
}

/// Parses a legacy date string, returning `None` when no pattern matches.
pub fn parse_legacy_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.parse(trimmed))
}

pub fn normalize_date(value: Option<&RawValue>) -> Normalized<NaiveDate> {
    let Some(value) = value.filter(|v| !v.is_blank()) else {
        return Normalized::Absent;
    };
    let Some(text) = value.to_text() else {
        return Normalized::Absent;
    };
    match parse_legacy_date(&text) {
        Some(date) => Normalized::Value(date),
        None => Normalized::Invalid(NormalizationIssue::new(
            text.trim(),
            "unrecognized date format",
        )),
    }
}
