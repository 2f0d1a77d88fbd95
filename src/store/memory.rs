//! Implements the `LedgerStore` trait using data held in memory.

use crate::model::Expense;
use crate::store::LedgerStore;
use crate::Result;

/// A store that keeps the ledger for as long as the value lives. Useful for tests and for callers
/// that do their own persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Expense>,
}

impl MemoryStore {
    pub fn new(records: Vec<Expense>) -> Self {
        Self { records }
    }
}

#[async_trait::async_trait]
impl LedgerStore for MemoryStore {
    async fn load_all(&mut self) -> Vec<Expense> {
        self.records.clone()
    }

    async fn save_all(&mut self, records: &[Expense]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }
}
