//! Demo data offered to a brand new ledger.

use crate::model::ExpenseInput;
use chrono::{Duration, NaiveDate};

/// Three sample expenses dated relative to `today`. They go through the same validation as
/// anything a user types in.
pub fn demo_seed(today: NaiveDate) -> Vec<ExpenseInput> {
    vec![
        ExpenseInput::new("Groceries", "1250.50")
            .category("Food & Dining")
            .date(today - Duration::days(2))
            .payment_method("Card")
            .notes("Weekly shopping"),
        ExpenseInput::new("Bus pass", "500")
            .category("Transportation")
            .date(today - Duration::days(1))
            .payment_method("Cash"),
        ExpenseInput::new("Electricity bill", "1800")
            .category("Bills & Utilities")
            .date(today)
            .payment_method("UPI")
            .notes("Paid online"),
    ]
}
