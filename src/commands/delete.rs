//! Delete command handler.

use crate::args::DeleteArgs;
use crate::commands::Out;
use crate::error::{ErrorType, IntoResult};
use crate::model::Expense;
use crate::{Config, Result};

/// Deletes one expense and renumbers the remaining ones `1..=N` in their existing order.
///
/// An unknown id is not an error: nothing is written and the message says so. The deleted expense,
/// with its old id, is returned as structured output.
pub async fn delete(config: Config, args: DeleteArgs) -> Result<Out<Expense>> {
    let id = args.id();
    let removed = config
        .ledger()
        .delete(id)
        .await
        .pub_result(ErrorType::Storage)?;
    match removed {
        Some(expense) => {
            let message = format!("Deleted expense {id}: {}", expense.item());
            Ok(Out::new(message, expense))
        }
        None => Ok(format!("Expense {id} not found").into()),
    }
}
