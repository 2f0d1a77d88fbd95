/// The categories offered to the user when entering an expense. Records are free to carry any
/// other category text; these are only suggestions.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    OTHER,
];

/// The category given to an expense entered without one.
pub const OTHER: &str = "Other";

/// The payment method given to an expense entered without one.
pub const CASH: &str = "Cash";

pub(crate) fn default_category() -> String {
    OTHER.to_string()
}

pub(crate) fn default_payment_method() -> String {
    CASH.to_string()
}

/// Trims `value` and substitutes `default` when nothing is left.
pub(crate) fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

#[test]
fn test_or_default() {
    assert_eq!(or_default("  ", OTHER), "Other");
    assert_eq!(or_default(" Travel ", OTHER), "Travel");
    assert_eq!(or_default("", CASH), "Cash");
}
