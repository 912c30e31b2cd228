//! Free-text matching over displayed entry fields

use crate::model::LedgerEntry;

/// Trim and lowercase a search term. Blank terms become `None` (no filter).
pub fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Plain string forms of every displayed field, in column order.
///
/// Numbers use their shortest form (`12000`, `12000.5`), dates are ISO.
pub fn searchable_fields(entry: &LedgerEntry) -> [String; 7] {
    [
        entry.plate_number().to_string(),
        entry.gross_weight().to_string(),
        entry.tare_weight().to_string(),
        entry.net_weight().to_string(),
        entry.date().to_string(),
        entry.price().to_string(),
        entry.check_number().to_string(),
    ]
}

/// Whether any field contains `needle`. `needle` must already be normalized.
pub fn entry_matches(entry: &LedgerEntry, needle: &str) -> bool {
    searchable_fields(entry)
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use weighmaster_types::EntryId;

    fn entry() -> LedgerEntry {
        LedgerEntry::new(
            EntryId::new(),
            "AB-777-CD".to_string(),
            12000.0,
            8000.0,
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            35000.0,
            "Chk-42".to_string(),
        )
    }

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("  AB "), Some("ab".to_string()));
        assert_eq!(normalize_term("   "), None);
        assert_eq!(normalize_term(""), None);
    }

    #[test]
    fn test_fields_use_plain_number_forms() {
        let fields = searchable_fields(&entry());
        assert_eq!(fields[1], "12000");
        assert_eq!(fields[3], "4000");
        assert_eq!(fields[4], "2026-03-14");
        assert_eq!(fields[5], "35000");
    }

    #[test]
    fn test_matches_plate_case_insensitively() {
        assert!(entry_matches(&entry(), "777"));
        assert!(entry_matches(&entry(), "ab-777"));
        assert!(!entry_matches(&entry(), "999"));
    }

    #[test]
    fn test_matches_other_columns() {
        assert!(entry_matches(&entry(), "4000"));
        assert!(entry_matches(&entry(), "2026-03"));
        assert!(entry_matches(&entry(), "chk-4"));
        assert!(entry_matches(&entry(), "350"));
    }
}
