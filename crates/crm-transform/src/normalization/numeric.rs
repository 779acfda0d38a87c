//! Numeric normalization utilities.

use crm_model::RawValue;

use crate::normalized::{NormalizationIssue, Normalized};

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

/// Converts a float to i64 when it has no fractional part and fits.
fn integral_f64(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// Coerces a legacy identifier to an integer.
///
/// Accepts integers, numeric-looking text (`"1000"`, `"1000.0"`) and
/// integral floats.
pub fn normalize_identifier(value: Option<&RawValue>) -> Normalized<i64> {
    let Some(value) = value.filter(|v| !v.is_blank()) else {
        return Normalized::Absent;
    };
    let resolved = match value {
        RawValue::Integer(number) => Some(*number),
        RawValue::Float(number) => integral_f64(*number),
        RawValue::Text(text) => parse_i64(text).or_else(|| {
            text.trim()
                .parse::<f64>()
                .ok()
                .and_then(integral_f64)
        }),
        RawValue::Bool(_) | RawValue::Null => None,
    };
    match resolved {
        Some(id) => Normalized::Value(id),
        None => Normalized::Invalid(NormalizationIssue::new(
            value.to_text().unwrap_or_default().trim(),
            "identifier is not an integer",
        )),
    }
}
