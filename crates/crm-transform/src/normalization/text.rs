//! Free-text fields: names, email, phone.

use crm_model::RawValue;

use crate::normalized::Normalized;

/// Trims surrounding whitespace; blank values become absent.
///
/// Case is preserved, so email addresses are passed through unchanged apart
/// from the trimming.
pub fn normalize_text(value: Option<&RawValue>) -> Normalized<String> {
    let text = value
        .and_then(RawValue::to_text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());
    text.into()
}

/// Phone numbers are a loose field: no structural check, only blank → absent.
pub fn normalize_phone(value: Option<&RawValue>) -> Normalized<String> {
    normalize_text(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_preserves_case() {
        assert_eq!(
            normalize_text(Some(&RawValue::from("  Grace.Hopper@Navy.MIL "))),
            Normalized::Value("Grace.Hopper@Navy.MIL".to_string())
        );
    }

    #[test]
    fn blank_phone_is_absent() {
        assert_eq!(normalize_phone(Some(&RawValue::from(" \t "))), Normalized::Absent);
        assert_eq!(normalize_phone(Some(&RawValue::Null)), Normalized::Absent);
        assert_eq!(normalize_phone(None), Normalized::Absent);
    }

    #[test]
    fn numeric_phone_becomes_text() {
        assert_eq!(
            normalize_phone(Some(&RawValue::Integer(5550100))),
            Normalized::Value("5550100".to_string())
        );
    }
}
