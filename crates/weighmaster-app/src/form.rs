//! Entry form state: draft values, derived net weight, validation, modes

use chrono::{Local, NaiveDate};
use weighmaster_domain::service::{net_weight_of, parse_number, price_hint, PriceHint};
use weighmaster_domain::LedgerEntry;
use weighmaster_types::{EntryId, FormField, ValidationError};

/// Raw operator input, exactly as typed
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub plate_number: String,
    pub gross_weight: String,
    pub tare_weight: String,
    pub date: NaiveDate,
    pub price: String,
    pub check_number: String,
}

impl Draft {
    /// Empty draft dated `today` with the default price filled in
    pub fn blank(today: NaiveDate, default_price: f64) -> Self {
        Self {
            plate_number: String::new(),
            gross_weight: String::new(),
            tare_weight: String::new(),
            date: today,
            price: default_price.to_string(),
            check_number: String::new(),
        }
    }

    fn from_entry(entry: &LedgerEntry) -> Self {
        Self {
            plate_number: entry.plate_number().to_string(),
            gross_weight: entry.gross_weight().to_string(),
            tare_weight: entry.tare_weight().to_string(),
            date: entry.date(),
            price: entry.price().to_string(),
            check_number: entry.check_number().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(EntryId),
}

/// Outcome of a successful submit
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// New entry, to be appended
    Created(LedgerEntry),
    /// Replacement for the entry being edited
    Updated(LedgerEntry),
}

impl Submission {
    pub fn entry(&self) -> &LedgerEntry {
        match self {
            Submission::Created(entry) | Submission::Updated(entry) => entry,
        }
    }
}

/// Form state manager
#[derive(Debug, Clone)]
pub struct FormState {
    draft: Draft,
    mode: FormMode,
    default_price: f64,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl FormState {
    pub fn new(default_price: f64) -> Self {
        Self {
            draft: Draft::blank(today(), default_price),
            mode: FormMode::Create,
            default_price,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn editing_id(&self) -> Option<EntryId> {
        match self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    /// Update one draft field. Dates take `YYYY-MM-DD`; anything else is ignored.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::PlateNumber => self.draft.plate_number = value.to_string(),
            FormField::GrossWeight => self.draft.gross_weight = value.to_string(),
            FormField::TareWeight => self.draft.tare_weight = value.to_string(),
            FormField::Price => self.draft.price = value.to_string(),
            FormField::CheckNumber => self.draft.check_number = value.to_string(),
            FormField::Date => {
                if let Ok(date) = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
                    self.draft.date = date;
                }
            }
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.draft.date = date;
    }

    /// Load `entry` for editing
    pub fn begin_edit(&mut self, entry: &LedgerEntry) {
        self.draft = Draft::from_entry(entry);
        self.mode = FormMode::Edit(entry.id());
    }

    /// Back to a blank draft in Create mode
    pub fn reset(&mut self) {
        self.draft = Draft::blank(today(), self.default_price);
        self.mode = FormMode::Create;
    }

    /// Live net weight; `None` while either weight is blank or not a number
    pub fn net_weight(&self) -> Option<f64> {
        net_weight_of(&self.draft.gross_weight, &self.draft.tare_weight)
    }

    pub fn price_hint(&self) -> PriceHint {
        price_hint(parse_number(&self.draft.price))
    }

    /// Build an entry from the draft without touching state
    pub fn validate(&self) -> Result<LedgerEntry, ValidationError> {
        let plate_number = self.draft.plate_number.trim();
        if plate_number.is_empty() {
            return Err(ValidationError::PlateRequired);
        }

        let (Some(gross), Some(tare)) = (
            parse_number(&self.draft.gross_weight),
            parse_number(&self.draft.tare_weight),
        ) else {
            return Err(ValidationError::InvalidWeights);
        };

        let price = parse_number(&self.draft.price).ok_or(ValidationError::InvalidPrice)?;

        let id = self.editing_id().unwrap_or_default();
        Ok(LedgerEntry::new(
            id,
            plate_number.to_string(),
            gross,
            tare,
            self.draft.date,
            price,
            self.draft.check_number.trim().to_string(),
        ))
    }

    /// Validate, emit the entry and reset. On error nothing changes.
    pub fn submit(&mut self) -> Result<Submission, ValidationError> {
        let entry = self.validate()?;
        let submission = match self.mode {
            FormMode::Create => Submission::Created(entry),
            FormMode::Edit(_) => Submission::Updated(entry),
        };
        self.reset();
        Ok(submission)
    }
}
