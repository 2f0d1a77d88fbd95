//! The ledger store: where the full, ordered list of expenses lives between operations.
//!
//! A store only knows how to load and save the whole collection. Every mutation is done by
//! loading everything, changing it in memory, and saving everything back, see `Ledger`.

mod json_file;
mod memory;

use crate::model::Expense;
use crate::Result;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// A persistence backend for the ledger.
#[async_trait::async_trait]
pub trait LedgerStore {
    /// Returns every expense in insertion order. A store that has no data yet, or whose data
    /// cannot be read, returns an empty list rather than an error.
    async fn load_all(&mut self) -> Vec<Expense>;

    /// Replaces everything in the store with `records`.
    async fn save_all(&mut self, records: &[Expense]) -> Result<()>;
}

/// The id to give the next expense added to `records`.
pub fn next_id(records: &[Expense]) -> u64 {
    records.iter().map(Expense::id).max().unwrap_or(0) + 1
}

/// Reassigns ids `1..=N` in the current order of `records`.
pub fn renumber(records: &mut [Expense]) {
    for (ix, expense) in records.iter_mut().enumerate() {
        expense.id = ix as u64 + 1;
    }
}
