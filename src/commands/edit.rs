use crate::args::EditArgs;
use crate::commands::Out;
use crate::error::{ErrorType, IntoResult};
use crate::model::Expense;
use crate::{Config, Result};
use tracing::warn;

/// Changes the given fields of one expense. Its id and creation time never change.
///
/// An unknown id is not an error: nothing is written and the message says so.
pub async fn edit(config: Config, args: EditArgs) -> Result<Out<Expense>> {
    let id = args.id();
    let update = args.update();
    if update.is_empty() {
        warn!("No fields given to change on expense {id}");
        return Ok(format!("Nothing to change for expense {id}").into());
    }

    let edited = config
        .ledger()
        .edit(id, &update)
        .await
        .pub_result(ErrorType::Request)?;
    match edited {
        Some(expense) => Ok(Out::new(format!("Updated expense {id}"), expense)),
        None => Ok(format!("Expense {id} not found").into()),
    }
}
