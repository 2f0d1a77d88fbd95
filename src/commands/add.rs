use crate::args::AddArgs;
use crate::commands::Out;
use crate::error::{ErrorType, IntoResult};
use crate::model::{Expense, ExpenseInput};
use crate::{Config, Result};

/// Adds an expense to the end of the ledger. A missing date becomes today and an amount that is
/// not a non-negative number is recorded as zero.
///
/// # Errors
/// - Returns an error if the item is empty.
/// - Returns an error if the ledger cannot be saved.
pub async fn add(config: Config, args: AddArgs) -> Result<Out<Expense>> {
    let expense = config
        .ledger()
        .add(ExpenseInput::from(args))
        .await
        .pub_result(ErrorType::Request)?;
    let message = format!(
        "Added expense {}: {} for {} on {}",
        expense.id(),
        expense.item(),
        expense.amount().with_symbol(config.currency_symbol()),
        expense.date()
    );
    Ok(Out::new(message, expense))
}
