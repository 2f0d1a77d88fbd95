//! Types that represent the core data model, such as `Expense` and `Amount`.
mod amount;
mod category;
mod expense;

pub use amount::{Amount, AmountError};
pub use category::{CASH, DEFAULT_CATEGORIES, OTHER};
pub use expense::{Expense, ExpenseInput, ExpenseUpdate, DATE_FORMAT};

#[cfg(test)]
pub(crate) use expense::test_expense;
