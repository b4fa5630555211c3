pub mod lab;

use crate::model::{FormatType, ParsedRecord};

/// Field names of the medical record placeholder.
pub const MEDICAL_FIELDS: [&str; 3] = ["patient_name", "test_date", "test_results"];

/// Field names of the invoice record placeholder.
pub const INVOICE_FIELDS: [&str; 4] = ["invoice_number", "date", "amount", "vendor"];

/// Parse extracted text into a single flat record for the given format.
pub fn parse_record(text: &str, format: FormatType) -> ParsedRecord {
    match format {
        FormatType::Generic => parse_generic(text),
        FormatType::Medical => placeholder(format, &MEDICAL_FIELDS),
        FormatType::Invoice => placeholder(format, &INVOICE_FIELDS),
    }
}

/// Split every `key: value` line on its first colon.
///
/// Lines without a colon are ignored. Later duplicates overwrite earlier
/// values.
pub fn parse_generic(text: &str) -> ParsedRecord {
    let mut record = ParsedRecord::new();
    for line in text.lines() {
        if let Some((key, value)) = line.split_once(':') {
            record.insert(key.trim(), value.trim());
        }
    }
    record
}

// Medical and invoice extraction have no field rules yet; callers get the
// fixed field set with empty values.
fn placeholder(format: FormatType, fields: &[&str]) -> ParsedRecord {
    log::warn!("{} parsing is not implemented, emitting empty fields", format);
    ParsedRecord::with_empty_fields(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_splits_on_first_colon() {
        let record = parse_generic("Time: 10:30\nPatient :  Jane Roe \nno colon here");
        assert_eq!(record.get("Time"), Some("10:30"));
        assert_eq!(record.get("Patient"), Some("Jane Roe"));
        assert_eq!(record.len(), 2);
        assert!(record.keys().all(|k| k != "no colon here"));
    }

    #[test]
    fn test_generic_is_idempotent() {
        let text = "Age: 34\nHeight: 170cm\nAge: 35";
        assert_eq!(parse_generic(text), parse_generic(text));
        assert_eq!(parse_generic(text).get("Age"), Some("35"));
    }

    #[test]
    fn test_medical_is_empty_placeholder() {
        let record = parse_record("Patient Name: Jane\nDate: 2024-01-01", FormatType::Medical);
        assert_eq!(record.keys().collect::<Vec<_>>(), MEDICAL_FIELDS.to_vec());
        assert!(record.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn test_invoice_is_empty_placeholder() {
        let record = parse_record("Invoice #: 42", FormatType::Invoice);
        assert_eq!(record.keys().collect::<Vec<_>>(), INVOICE_FIELDS.to_vec());
        assert!(record.iter().all(|(_, v)| v.is_empty()));
    }
}
