//! Shared test utilities for creating test environments.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::model::{Expense, ExpenseInput};
use crate::Config;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment that sets up an expense home directory with a Config and an empty ledger.
/// Holds TempDir to keep the directory alive for the duration of the test.
pub struct TestEnv {
    temp_dir: TempDir,
    config: Config,
}

impl TestEnv {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("expenses");
        let config = Config::create(&root).await.unwrap();
        Self { temp_dir, config }
    }

    /// Returns a clone of the Config. Clones share the same ledger.
    pub fn config(&self) -> Config {
        self.config.clone()
    }

    /// A path inside the temp dir but outside the expense home.
    pub fn scratch(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn home(&self) -> &Path {
        self.config.root()
    }

    /// Adds an expense through the ledger.
    pub async fn add(&self, item: &str, amount: &str, category: &str, date: &str) -> Expense {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        self.config
            .ledger()
            .add(
                ExpenseInput::new(item, amount)
                    .category(category)
                    .date(date),
            )
            .await
            .unwrap()
    }

    /// Lunch 100 Food, Dinner 50 Food, Taxi 30 Travel, spread over January and February 2025.
    pub async fn add_sample(&self) {
        self.add("Lunch", "100", "Food", "2025-01-10").await;
        self.add("Dinner", "50", "Food", "2025-02-01").await;
        self.add("Taxi", "30", "Travel", "2025-02-03").await;
    }
}
