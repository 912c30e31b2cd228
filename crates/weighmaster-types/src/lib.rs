//! Core types for the weigh-station ledger

mod error;
mod types;

pub use error::*;
pub use types::*;
