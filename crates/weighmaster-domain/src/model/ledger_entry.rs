//! Weight ledger entry

use chrono::NaiveDate;
use weighmaster_types::EntryId;

use crate::service::net_weight::calculate_net_weight;

/// One recorded weighing.
///
/// Entries are immutable once built. An edit replaces the whole entry under the
/// same id, so `net_weight` always reflects the weights it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    id: EntryId,
    plate_number: String,
    gross_weight: f64,
    tare_weight: f64,
    net_weight: f64,
    date: NaiveDate,
    price: f64,
    check_number: String,
}

impl LedgerEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EntryId,
        plate_number: String,
        gross_weight: f64,
        tare_weight: f64,
        date: NaiveDate,
        price: f64,
        check_number: String,
    ) -> Self {
        Self {
            id,
            plate_number,
            gross_weight,
            tare_weight,
            net_weight: calculate_net_weight(gross_weight, tare_weight),
            date,
            price,
            check_number,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn plate_number(&self) -> &str {
        &self.plate_number
    }

    /// Loaded weight in kg
    pub fn gross_weight(&self) -> f64 {
        self.gross_weight
    }

    /// Empty weight in kg
    pub fn tare_weight(&self) -> f64 {
        self.tare_weight
    }

    /// Cargo weight in kg, `max(gross - tare, 0)`
    pub fn net_weight(&self) -> f64 {
        self.net_weight
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Check number, empty when none was given
    pub fn check_number(&self) -> &str {
        &self.check_number
    }
}
