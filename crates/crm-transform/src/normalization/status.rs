//! Account status coercion.
//!
//! The legacy `account_status` column mixes numeric flags, `Y`/`N` codes and
//! free text. Only the closed set below resolves; anything else is invalid.

use crm_model::RawValue;

use crate::normalized::{NormalizationIssue, Normalized};

/// Tokens (compared uppercase) meaning an active account.
pub const ACTIVE_TOKENS: &[&str] = &["1", "Y", "YES", "T", "TRUE", "ACTIVE"];

/// Tokens meaning an inactive account.
pub const INACTIVE_TOKENS: &[&str] = &["0", "N", "NO", "F", "FALSE", "INACTIVE"];

fn resolve_numeric(value: f64) -> Option<bool> {
    if value == 1.0 {
        Some(true)
    } else if value == 0.0 {
        Some(false)
    } else {
        None
    }
}

/// Resolves a textual status token, or `None` when it is outside the known set.
pub fn resolve_status_token(value: &str) -> Option<bool> {
    let trimmed = value.trim();
    let key = trimmed.to_ascii_uppercase();
    if key.is_empty() {
        return None;
    }
    if ACTIVE_TOKENS.contains(&key.as_str()) {
        return Some(true);
    }
    if INACTIVE_TOKENS.contains(&key.as_str()) {
        return Some(false);
    }
    // as written by tools that float-ify integer columns
    match trimmed {
        "1.0" => Some(true),
        "0.0" => Some(false),
        _ => None,
    }
}

pub fn normalize_status(value: Option<&RawValue>) -> Normalized<bool> {
    let Some(value) = value.filter(|v| !v.is_blank()) else {
        return Normalized::Absent;
    };
    let resolved = match value {
        RawValue::Bool(flag) => Some(*flag),
        RawValue::Integer(number) => match number {
            1 => Some(true),
            0 => Some(false),
            _ => None,
        },
        RawValue::Float(number) => resolve_numeric(*number),
        RawValue::Text(text) => resolve_status_token(text),
        RawValue::Null => None,
    };
    match resolved {
        Some(flag) => Normalized::Value(flag),
        None => Normalized::Invalid(NormalizationIssue::new(
            value.to_text().unwrap_or_default().trim(),
            "unknown account status",
        )),
    }
}
