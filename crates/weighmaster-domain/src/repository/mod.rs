//! Repository trait definitions for ledger storage

use weighmaster_types::EntryId;

use crate::model::LedgerEntry;

/// Ordered collection of ledger entries.
///
/// Missing identities are never an error: `replace` and `remove` report
/// `false` and leave the collection untouched.
pub trait LedgerRepository {
    /// Append an entry at the end
    fn insert(&mut self, entry: LedgerEntry);

    /// Overwrite the entry with `id` in place, keeping its position
    fn replace(&mut self, id: EntryId, entry: LedgerEntry) -> bool;

    /// Delete the entry with `id`
    fn remove(&mut self, id: EntryId) -> bool;

    /// Find an entry by id
    fn get(&self, id: EntryId) -> Option<&LedgerEntry>;

    /// Entries whose displayed fields contain `term`, case-insensitively, in
    /// insertion order. A blank term returns everything.
    fn query(&self, term: &str) -> Vec<&LedgerEntry>;

    /// All entries in insertion order
    fn all(&self) -> &[LedgerEntry];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
