use crate::args::{ListArgs, OutputFormat};
use crate::commands::render::expense_table;
use crate::commands::{plural, Out};
use crate::error::{ErrorType, IntoResult};
use crate::model::{Expense, DEFAULT_CATEGORIES};
use crate::{Config, Result};
use anyhow::Context;

/// Lists expenses in ledger order, optionally only those whose category matches exactly.
pub async fn list(config: Config, args: ListArgs) -> Result<Out<Vec<Expense>>> {
    let records = config.ledger().list(args.category()).await;
    let message = match args.format() {
        OutputFormat::Json => serde_json::to_string_pretty(&records)
            .context("Unable to serialize expenses")
            .pub_result(ErrorType::Request)?,
        OutputFormat::Table if records.is_empty() => match args.category() {
            Some(category) if !category.is_empty() => {
                format!("No expenses in category '{category}'")
            }
            _ => "No expenses recorded yet".to_string(),
        },
        OutputFormat::Table => format!(
            "{}\n{}",
            expense_table(&records, config.currency_symbol()),
            plural(records.len(), "expense", "expenses")
        ),
    };
    Ok(Out::new(message, records))
}

/// The categories in use, sorted, followed by the suggested ones that are not yet used.
pub async fn categories(config: Config) -> Result<Out<Vec<String>>> {
    let used: Vec<String> = config.ledger().categories().await.into_iter().collect();
    let unused: Vec<&str> = DEFAULT_CATEGORIES
        .iter()
        .copied()
        .filter(|c| !used.iter().any(|u| u == c))
        .collect();

    let mut message = if used.is_empty() {
        "No categories in use yet".to_string()
    } else {
        format!("In use: {}", used.join(", "))
    };
    if !unused.is_empty() {
        message.push_str(&format!("\nSuggested: {}", unused.join(", ")));
    }
    Ok(Out::new(message, used))
}
