//! End-to-end ledger editing through the controller

use weighmaster_app::config::AudioKind;
use weighmaster_app::{Config, LedgerController};
use weighmaster_types::{FormField, ValidationError};

fn quiet_controller() -> LedgerController {
    let config = Config {
        audio: AudioKind::Silent,
        ..Config::default()
    };
    LedgerController::new(&config)
}

#[test]
fn test_create_then_edit_price() {
    let mut c = quiet_controller();
    assert_eq!(c.total_entries(), 0);

    c.set_field(FormField::PlateNumber, "01A123BC");
    c.set_field(FormField::GrossWeight, "15000");
    c.set_field(FormField::TareWeight, "9000");
    c.set_field(FormField::Price, "32000");
    let id = c.submit().expect("valid draft");

    assert_eq!(c.total_entries(), 1);
    let entry = c.entry(id).expect("stored");
    assert_eq!(entry.net_weight(), 6000.0);
    assert_eq!(entry.price(), 32000.0);

    assert!(c.begin_edit(id));
    c.set_field(FormField::Price, "31000");
    let same = c.submit().expect("valid edit");

    assert_eq!(same, id);
    assert_eq!(c.total_entries(), 1);
    let entry = c.entry(id).expect("still stored");
    assert_eq!(entry.price(), 31000.0);
    assert_eq!(entry.net_weight(), 6000.0);
    assert!(!c.form().is_editing());
}

#[test]
fn test_edit_keeps_row_position() {
    let mut c = quiet_controller();
    let mut ids = Vec::new();
    for (plate, gross) in [("AAA", "10000"), ("BBB", "11000"), ("CCC", "12000")] {
        c.set_field(FormField::PlateNumber, plate);
        c.set_field(FormField::GrossWeight, gross);
        c.set_field(FormField::TareWeight, "8000");
        ids.push(c.submit().unwrap());
    }

    c.begin_edit(ids[1]);
    c.set_field(FormField::PlateNumber, "BBB-2");
    c.set_field(FormField::TareWeight, "12000");
    c.submit().unwrap();

    let plates: Vec<&str> = c.displayed_entries().iter().map(|e| e.plate_number()).collect();
    assert_eq!(plates, vec!["AAA", "BBB-2", "CCC"]);
    assert_eq!(c.entry(ids[1]).unwrap().net_weight(), 0.0);
    assert_eq!(c.entry(ids[0]).unwrap().net_weight(), 2000.0);
}

#[test]
fn test_validation_order_and_store_untouched() {
    let mut c = quiet_controller();
    c.set_field(FormField::Price, "not money");
    assert_eq!(c.submit(), Err(ValidationError::PlateRequired));

    c.set_field(FormField::PlateNumber, "01A123BC");
    assert_eq!(c.submit(), Err(ValidationError::InvalidWeights));

    c.set_field(FormField::GrossWeight, "15000");
    c.set_field(FormField::TareWeight, "9000");
    assert_eq!(c.submit(), Err(ValidationError::InvalidPrice));
    assert_eq!(
        c.form_error().map(|e| e.to_string()).as_deref(),
        Some("Price must be a valid number.")
    );

    assert_eq!(c.total_entries(), 0);
}

#[test]
fn test_search_across_fields() {
    let mut c = quiet_controller();
    c.set_field(FormField::PlateNumber, "AB-777-CD");
    c.set_field(FormField::GrossWeight, "12000");
    c.set_field(FormField::TareWeight, "8000");
    c.set_field(FormField::Price, "35000");
    c.submit().unwrap();

    for term in ["777", "ab-777", "AB-777", "35000", "4000"] {
        c.set_search_term(term);
        assert_eq!(c.displayed_entries().len(), 1, "term {term:?}");
    }
    c.set_search_term("999");
    assert!(c.displayed_entries().is_empty());
}
