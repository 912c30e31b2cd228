//! Domain module containing the ledger entry model and its pure services

pub mod model;
pub mod repository;
pub mod service;

pub use model::LedgerEntry;
pub use repository::LedgerRepository;
