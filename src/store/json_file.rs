//! Implements the `LedgerStore` trait on top of a pretty-printed JSON file.

use crate::model::Expense;
use crate::store::LedgerStore;
use crate::{utils, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Stores the ledger as a JSON array in a single file, e.g. `$EXPENSE_HOME/expenses.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl LedgerStore for JsonFileStore {
    async fn load_all(&mut self) -> Vec<Expense> {
        if !self.path.is_file() {
            debug!("No ledger file at {}, starting empty", self.path.display());
            return Vec::new();
        }
        match utils::deserialize::<Vec<Expense>>(&self.path).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Ignoring unreadable ledger file: {e:#}");
                Vec::new()
            }
        }
    }

    async fn save_all(&mut self, records: &[Expense]) -> Result<()> {
        let json = serde_json::to_string_pretty(records).context("Unable to serialize expenses")?;
        utils::write_replace(&self.path, json)
            .await
            .with_context(|| format!("Unable to save the ledger to {}", self.path.display()))?;
        debug!("Saved {} expenses to {}", records.len(), self.path.display());
        Ok(())
    }
}
