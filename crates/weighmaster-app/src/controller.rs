//! Ledger controller: the single owner of form, store and indicator state
//!
//! Built when the window opens and dropped when it closes or reloads.

use chrono::{DateTime, Local, NaiveDate};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use weighmaster_domain::service::{normalize_term, PriceHint};
use weighmaster_domain::{LedgerEntry, LedgerRepository};
use weighmaster_store::LedgerStore;
use weighmaster_types::{EntryId, FormField, ValidationError};

use crate::audio::{host_for, AudioHost};
use crate::config::Config;
use crate::form::{FormState, Submission};
use crate::indicator::AlarmIndicator;
use crate::report::render_view;

pub struct LedgerController {
    form: FormState,
    store: LedgerStore,
    alarm: AlarmIndicator,
    search_term: String,
    form_error: Option<ValidationError>,
    relay_confirmed_at: Option<DateTime<Local>>,
}

impl LedgerController {
    /// Controller with the audio host named in `config`
    pub fn new(config: &Config) -> Self {
        Self::with_audio(config, host_for(config.audio))
    }

    pub fn with_audio(config: &Config, audio: Box<dyn AudioHost>) -> Self {
        info!(
            interval_ms = config.alarm_interval_ms,
            muted = config.start_muted,
            "ledger editor opened"
        );
        let alarm = AlarmIndicator::new(config.alarm_interval(), config.tone(), audio)
            .with_muted(config.start_muted);
        Self {
            form: FormState::new(config.default_price),
            store: LedgerStore::new(),
            alarm,
            search_term: String::new(),
            form_error: None,
            relay_confirmed_at: None,
        }
    }

    // ----- form -----

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn set_field(&mut self, field: FormField, value: &str) {
        self.form.set_field(field, value);
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.form.set_date(date);
    }

    pub fn net_weight(&self) -> Option<f64> {
        self.form.net_weight()
    }

    pub fn price_hint(&self) -> PriceHint {
        self.form.price_hint()
    }

    /// Load an entry into the form. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: EntryId) -> bool {
        match self.store.get(id) {
            Some(entry) => {
                self.form.begin_edit(entry);
                debug!(%id, "editing entry");
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    pub fn clear_form(&mut self) {
        self.form.reset();
    }

    /// Validate the draft and insert or replace the resulting entry.
    ///
    /// A rejection is kept for display until the next successful submit.
    pub fn submit(&mut self) -> Result<EntryId, ValidationError> {
        let submission = match self.form.submit() {
            Ok(submission) => submission,
            Err(err) => {
                debug!(error = %err, "submission rejected");
                self.form_error = Some(err);
                return Err(err);
            }
        };

        let id = submission.entry().id();
        match submission {
            Submission::Created(entry) => {
                self.store.insert(entry);
                debug!(%id, total = self.store.len(), "entry added");
            }
            Submission::Updated(entry) => {
                let replaced = self.store.replace(id, entry);
                debug!(%id, replaced, "entry updated");
            }
        }
        self.form_error = None;
        Ok(id)
    }

    pub fn form_error(&self) -> Option<ValidationError> {
        self.form_error
    }

    /// Delete an entry; editing it at the time resets the form
    pub fn delete(&mut self, id: EntryId) -> bool {
        let removed = self.store.remove(id);
        if self.form.editing_id() == Some(id) {
            self.form.reset();
        }
        debug!(%id, removed, "entry deleted");
        removed
    }

    // ----- view -----

    pub fn entry(&self, id: EntryId) -> Option<&LedgerEntry> {
        self.store.get(id)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn is_search_active(&self) -> bool {
        normalize_term(&self.search_term).is_some()
    }

    /// Entries passing the current search, in ledger order
    pub fn displayed_entries(&self) -> Vec<&LedgerEntry> {
        self.store.query(&self.search_term)
    }

    /// Unfiltered count
    pub fn total_entries(&self) -> usize {
        self.store.len()
    }

    /// Text of the current view for the host print facility
    pub fn print_view(&self) -> String {
        let shown = self.displayed_entries();
        let term = self.search_term.trim();
        let search = (!term.is_empty()).then_some(term);
        render_view(&shown, self.store.len(), search)
    }

    // ----- relay -----

    pub fn relay(&mut self) {
        self.relay_at(Local::now());
    }

    pub fn relay_at(&mut self, at: DateTime<Local>) {
        info!(at = %at, "data relay confirmed");
        self.relay_confirmed_at = Some(at);
    }

    pub fn relay_message(&self) -> Option<String> {
        self.relay_confirmed_at
            .map(|at| format!("Data relay confirmed at {}", at.format("%Y-%m-%d %H:%M:%S")))
    }

    // ----- alarm -----

    pub fn alarm(&self) -> &AlarmIndicator {
        &self.alarm
    }

    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.alarm.toggle_mute();
        debug!(muted, "alarm mute toggled");
        muted
    }

    /// Drive the alarm; returns how long until it next needs polling
    pub fn poll_alarm(&mut self, now: Instant) -> Option<Duration> {
        self.alarm.poll(now);
        self.alarm.time_until_next(now)
    }
}
