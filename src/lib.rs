//! A command-line ledger for personal expenses.
//!
//! Expenses are kept in a JSON file under the expense home directory. The `Ledger` serializes all
//! reads and writes to that file, the `engine` turns lists of expenses into filtered views, totals
//! and CSV, and `commands` wires both to the `expense` binary.

pub mod args;
pub mod commands;
mod config;
pub mod engine;
mod error;
mod ledger;
pub mod model;
pub mod seed;
pub mod store;
#[cfg(test)]
mod test;
mod utils;

pub use config::Config;
pub use error::{Error, ErrorType, IntoResult, Result};
pub use ledger::Ledger;
