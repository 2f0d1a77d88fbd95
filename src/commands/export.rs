use crate::args::ExportArgs;
use crate::commands::{plural, Out};
use crate::engine::{dated_file_name, to_csv, CSV_CONTENT_TYPE, CSV_FILE_NAME};
use crate::error::{ErrorType, IntoResult};
use crate::{utils, Config, Result};
use anyhow::Context;
use chrono::Local;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// What `export` did.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    /// The ledger had no expenses so no file was written.
    Empty,
}

/// Writes every expense, in ledger order, to a CSV file. The file goes to `--output`, or to
/// `expenses.csv` (`expenses-YYYY-MM-DD.csv` with `--dated`) in the current directory. An existing
/// file is replaced.
pub async fn export(config: Config, args: ExportArgs) -> Result<Out<ExportOutcome>> {
    let records = config.ledger().all().await;
    if records.is_empty() {
        return Ok(Out::new("No expenses to export", ExportOutcome::Empty));
    }

    let path = match args.output() {
        Some(p) => p.to_path_buf(),
        None if args.dated() => PathBuf::from(dated_file_name(Local::now().date_naive())),
        None => PathBuf::from(CSV_FILE_NAME),
    };
    let csv = to_csv(&records).pub_result(ErrorType::Export)?;
    debug!(
        "Writing {} bytes of {CSV_CONTENT_TYPE} to {}",
        csv.len(),
        path.display()
    );
    utils::write_replace(&path, csv)
        .await
        .with_context(|| format!("Unable to write '{}'", path.display()))
        .pub_result(ErrorType::Export)?;

    let rows = records.len();
    let message = format!(
        "Exported {} to '{}'",
        plural(rows, "expense", "expenses"),
        path.display()
    );
    Ok(Out::new(message, ExportOutcome::Written { path, rows }))
}
