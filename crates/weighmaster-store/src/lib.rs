//! Ledger store for recorded weighings
//!
//! Session scoped: created empty, discarded with its owner.

use weighmaster_domain::service::{entry_matches, normalize_term};
use weighmaster_domain::{LedgerEntry, LedgerRepository};
use weighmaster_types::EntryId;

/// In-memory ledger, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerStore {
    entries: Vec<LedgerEntry>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }
}

impl LedgerRepository for LedgerStore {
    fn insert(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    fn replace(&mut self, id: EntryId, entry: LedgerEntry) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries[index] = entry;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: EntryId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    fn get(&self, id: EntryId) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    fn query(&self, term: &str) -> Vec<&LedgerEntry> {
        match normalize_term(term) {
            None => self.entries.iter().collect(),
            Some(needle) => self
                .entries
                .iter()
                .filter(|e| entry_matches(e, &needle))
                .collect(),
        }
    }

    fn all(&self) -> &[LedgerEntry] {
        &self.entries
    }
}
