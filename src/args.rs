//! These structs provide the CLI interface for the expense CLI.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing::level_filters::LevelFilter;

use crate::model::{ExpenseInput, ExpenseUpdate};

/// expense: A command-line ledger for personal expenses.
///
/// Record what you spend with an item, amount, category, date, payment method and notes. List
/// and filter expenses by category, see totals broken down by category and by month, and export
/// everything to CSV.
///
/// Data lives in a JSON file under --expense-home (default $HOME/expenses). Run `expense init`
/// once before anything else.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the home directory and its config.json.
    ///
    /// Pass --seed to start the ledger with three sample expenses.
    Init(InitArgs),
    /// Add an expense.
    Add(AddArgs),
    /// Change fields of an existing expense. Fields that are not given keep their value.
    Edit(EditArgs),
    /// Delete an expense. Remaining expenses are renumbered 1..N.
    Delete(DeleteArgs),
    /// List expenses, optionally only those in one category.
    List(ListArgs),
    /// Show the categories used by your expenses along with the suggested defaults.
    Categories,
    /// Show total, count and average with breakdowns by category and by month.
    Summary(SummaryArgs),
    /// Write all expenses to a CSV file.
    Export(ExportArgs),
    /// Add three sample expenses if the ledger is empty.
    Seed,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where the config and ledger are held. Defaults to ~/expenses
    #[arg(long, env = "EXPENSE_HOME", default_value_t = default_expense_home())]
    expense_home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, expense_home: PathBuf) -> Self {
        Self {
            log_level,
            expense_home: expense_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn expense_home(&self) -> &DisplayPath {
        &self.expense_home
    }
}

/// (Not shown): Args for the `expense init` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct InitArgs {
    /// Add three sample expenses to the new ledger.
    #[arg(long)]
    seed: bool,
}

impl InitArgs {
    pub fn new(seed: bool) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> bool {
        self.seed
    }
}

/// (Not shown): Args for the `expense add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// What the money was spent on.
    item: String,

    /// How much was spent. Anything that is not a non-negative number is recorded as 0.
    #[arg(allow_hyphen_values = true)]
    amount: String,

    /// Defaults to "Other".
    #[arg(long, short)]
    category: Option<String>,

    /// YYYY-MM-DD. Defaults to today.
    #[arg(long, short)]
    date: Option<NaiveDate>,

    /// Defaults to "Cash".
    #[arg(long, short)]
    payment_method: Option<String>,

    #[arg(long, short)]
    notes: Option<String>,
}

impl AddArgs {
    pub fn new(item: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            amount: amount.into(),
            category: None,
            date: None,
            payment_method: None,
            notes: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl From<AddArgs> for ExpenseInput {
    fn from(args: AddArgs) -> Self {
        ExpenseInput {
            item: args.item,
            amount: args.amount,
            category: args.category,
            date: args.date,
            payment_method: args.payment_method,
            notes: args.notes,
        }
    }
}

/// (Not shown): Args for the `expense edit` command.
#[derive(Debug, Parser, Clone)]
pub struct EditArgs {
    /// The ID of the expense to change, as shown by `expense list`.
    id: u64,

    #[arg(long, short)]
    item: Option<String>,

    /// Anything that is not a non-negative number is recorded as 0.
    #[arg(long, short, allow_hyphen_values = true)]
    amount: Option<String>,

    /// An empty value resets the category to "Other".
    #[arg(long, short)]
    category: Option<String>,

    /// YYYY-MM-DD.
    #[arg(long, short)]
    date: Option<NaiveDate>,

    /// An empty value resets the payment method to "Cash".
    #[arg(long, short)]
    payment_method: Option<String>,

    #[arg(long, short)]
    notes: Option<String>,
}

impl EditArgs {
    pub fn new(id: u64, update: ExpenseUpdate) -> Self {
        Self {
            id,
            item: update.item,
            amount: update.amount,
            category: update.category,
            date: update.date,
            payment_method: update.payment_method,
            notes: update.notes,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn update(&self) -> ExpenseUpdate {
        ExpenseUpdate {
            item: self.item.clone(),
            amount: self.amount.clone(),
            category: self.category.clone(),
            date: self.date,
            payment_method: self.payment_method.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// (Not shown): Args for the `expense delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The ID of the expense to delete, as shown by `expense list`.
    id: u64,
}

impl DeleteArgs {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// How `list` and `summary` print their results.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

serde_plain::derive_display_from_serialize!(OutputFormat);
serde_plain::derive_fromstr_from_deserialize!(OutputFormat);

/// (Not shown): Args for the `expense list` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct ListArgs {
    /// Only show expenses whose category is exactly this (case-sensitive).
    #[arg(long, short)]
    category: Option<String>,

    /// "table" or "json"
    #[arg(long, short, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl ListArgs {
    pub fn new(category: Option<String>, format: OutputFormat) -> Self {
        Self { category, format }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// (Not shown): Args for the `expense summary` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct SummaryArgs {
    /// Summarize only expenses whose category is exactly this.
    #[arg(long, short)]
    category: Option<String>,

    /// "table" or "json"
    #[arg(long, short, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl SummaryArgs {
    pub fn new(category: Option<String>, format: OutputFormat) -> Self {
        Self { category, format }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// (Not shown): Args for the `expense export` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct ExportArgs {
    /// Where to write the CSV. Defaults to ./expenses.csv
    #[arg(long, short, conflicts_with = "dated")]
    output: Option<PathBuf>,

    /// Name the file after today's date, e.g. ./expenses-2025-01-31.csv
    #[arg(long)]
    dated: bool,
}

impl ExportArgs {
    pub fn new(output: Option<PathBuf>, dated: bool) -> Self {
        Self { output, dated }
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn dated(&self) -> bool {
        self.dated
    }
}

fn default_expense_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("expenses"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --expense-home or EXPENSE_HOME instead of relying on the \
                default directory.",
            );
            PathBuf::from("expenses")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
