//! Application layer - ledger controller, form state, alarm indicator, config

pub mod audio;
pub mod config;
pub mod controller;
pub mod form;
pub mod indicator;
pub mod logging;
pub mod report;

pub use config::Config;
pub use controller::LedgerController;
pub use form::{Draft, FormMode, FormState, Submission};
pub use indicator::{AlarmIndicator, Tone};
