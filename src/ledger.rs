//! The `Ledger` owns a store and runs every read and every load-modify-save cycle against it
//! while holding a single exclusive lock.

use crate::engine;
use crate::model::{Expense, ExpenseInput, ExpenseUpdate};
use crate::store::{next_id, renumber, LedgerStore};
use crate::Result;
use chrono::Local;
use std::collections::BTreeSet;
use tokio::sync::Mutex;
use tracing::debug;

pub struct Ledger {
    store: Mutex<Box<dyn LedgerStore + Send>>,
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger").finish_non_exhaustive()
    }
}

impl Ledger {
    pub fn new(store: impl LedgerStore + Send + 'static) -> Self {
        Self {
            store: Mutex::new(Box::new(store)),
        }
    }

    /// Every expense in insertion order.
    pub async fn all(&self) -> Vec<Expense> {
        self.store.lock().await.load_all().await
    }

    /// The expense with `id`, if there is one.
    pub async fn get(&self, id: u64) -> Option<Expense> {
        self.all().await.into_iter().find(|e| e.id() == id)
    }

    /// The expenses in `category`, or all of them when `category` is `None` or empty.
    pub async fn list(&self, category: Option<&str>) -> Vec<Expense> {
        let records = self.all().await;
        engine::filter_by_category(&records, category)
            .into_iter()
            .cloned()
            .collect()
    }

    /// The categories currently in use, sorted.
    pub async fn categories(&self) -> BTreeSet<String> {
        engine::distinct_categories(&self.all().await)
    }

    /// Adds a new expense at the end of the ledger and returns it.
    pub async fn add(&self, input: ExpenseInput) -> Result<Expense> {
        let mut store = self.store.lock().await;
        let mut records = store.load_all().await;
        let now = Local::now();
        let expense =
            Expense::from_input(next_id(&records), input, now.date_naive(), now.naive_local())?;
        records.push(expense.clone());
        store.save_all(&records).await?;
        debug!("Added expense {}: {}", expense.id(), expense.item());
        Ok(expense)
    }

    /// Applies `update` to the expense with `id`. Returns `None`, and writes nothing, when there is
    /// no such expense.
    pub async fn edit(&self, id: u64, update: &ExpenseUpdate) -> Result<Option<Expense>> {
        let mut store = self.store.lock().await;
        let mut records = store.load_all().await;
        let Some(expense) = records.iter_mut().find(|e| e.id() == id) else {
            debug!("Edit of unknown expense {id} ignored");
            return Ok(None);
        };
        update.apply(expense)?;
        let updated = expense.clone();
        store.save_all(&records).await?;
        debug!("Updated expense {id}");
        Ok(Some(updated))
    }

    /// Removes the expense with `id` and renumbers the rest `1..=N`. Returns the removed expense
    /// as it was before removal, or `None`, writing nothing, when there is no such expense.
    pub async fn delete(&self, id: u64) -> Result<Option<Expense>> {
        let mut store = self.store.lock().await;
        let mut records = store.load_all().await;
        let Some(ix) = records.iter().position(|e| e.id() == id) else {
            debug!("Delete of unknown expense {id} ignored");
            return Ok(None);
        };
        let removed = records.remove(ix);
        renumber(&mut records);
        store.save_all(&records).await?;
        debug!("Deleted expense {id}, {} remain", records.len());
        Ok(Some(removed))
    }

    /// Adds each of `inputs` only if the ledger is empty. Returns the expenses that were added.
    pub async fn seed_if_empty(&self, inputs: Vec<ExpenseInput>) -> Result<Vec<Expense>> {
        let mut store = self.store.lock().await;
        let mut records = store.load_all().await;
        if !records.is_empty() {
            debug!("Ledger already has {} expenses, not seeding", records.len());
            return Ok(Vec::new());
        }
        let now = Local::now();
        let mut added = Vec::with_capacity(inputs.len());
        for input in inputs {
            let expense =
                Expense::from_input(next_id(&records), input, now.date_naive(), now.naive_local())?;
            records.push(expense.clone());
            added.push(expense);
        }
        store.save_all(&records).await?;
        Ok(added)
    }
}
