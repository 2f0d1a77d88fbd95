use crate::commands::{plural, Out};
use crate::error::{ErrorType, IntoResult};
use crate::model::Expense;
use crate::seed::demo_seed;
use crate::{Config, Result};
use anyhow::Context;
use chrono::Local;
use std::path::Path;

/// Creates the expense home directory and an initial `config.json` with default settings.
///
/// # Arguments
/// - `expense_home` - The directory that will hold the config and ledger, e.g. `$HOME/expenses`
/// - `seed` - Also add the three demo expenses to the new ledger.
///
/// # Errors
/// - Returns an error if a config already exists in `expense_home`.
/// - Returns an error if any file operations fail.
pub async fn init(expense_home: &Path, seed: bool) -> Result<Out<Vec<Expense>>> {
    let config = Config::create(expense_home)
        .await
        .context("Unable to create the expense directory and config")
        .pub_result(ErrorType::Config)?;
    let message = format!(
        "Successfully created the expense directory at '{}'",
        config.root().display()
    );
    if !seed {
        return Ok(message.into());
    }

    let seeded = config
        .ledger()
        .seed_if_empty(demo_seed(Local::now().date_naive()))
        .await
        .pub_result(ErrorType::Storage)?;
    let message = format!(
        "{message} and added {}",
        plural(seeded.len(), "sample expense", "sample expenses")
    );
    Ok(Out::new(message, seeded))
}
