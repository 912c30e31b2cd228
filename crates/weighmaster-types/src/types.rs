//! Identifiers and field names shared across crates

use uuid::Uuid;

/// Opaque identity of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Allocate a fresh identity (UUID v4, never reused)
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editable fields of the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    PlateNumber,
    GrossWeight,
    TareWeight,
    Date,
    Price,
    CheckNumber,
}

impl FormField {
    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            FormField::PlateNumber => "Plate Number",
            FormField::GrossWeight => "Gross weight (kg)",
            FormField::TareWeight => "Tare weight (kg)",
            FormField::Date => "Date",
            FormField::Price => "Price",
            FormField::CheckNumber => "Check Number",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ids_are_unique() {
        let a = EntryId::new();
        let b = EntryId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_entry_id_display_is_uuid() {
        let id = EntryId::new();
        assert_eq!(id.to_string().len(), 36);
    }
}
