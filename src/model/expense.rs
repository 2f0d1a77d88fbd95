use crate::model::category::{default_category, default_payment_method, or_default, CASH, OTHER};
use crate::model::Amount;
use crate::Result;
use anyhow::ensure;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The date format used for `Expense::date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Represents a single user-entered expense.
///
/// Field names match the persisted JSON. Fields missing from a persisted record take the same
/// defaults that an empty form field would.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Expense {
    /// Dense 1-based position in the ledger, assigned by the store.
    #[serde(default)]
    pub(crate) id: u64,
    #[serde(default)]
    pub(crate) item: String,
    #[serde(default)]
    pub(crate) amount: Amount,
    #[serde(default = "default_category")]
    pub(crate) category: String,
    /// `YYYY-MM-DD`. May be empty in persisted data.
    #[serde(default)]
    pub(crate) date: String,
    #[serde(default = "default_payment_method")]
    pub(crate) payment_method: String,
    #[serde(default)]
    pub(crate) notes: String,
    /// Set once when the expense is added.
    #[serde(default)]
    pub(crate) created_at: Option<NaiveDateTime>,
}

impl Expense {
    /// Builds a new expense from user input. `today` fills in a missing date and `now` becomes
    /// `created_at`.
    pub fn from_input(
        id: u64,
        input: ExpenseInput,
        today: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<Self> {
        let item = validate_item(&input.item)?;
        Ok(Self {
            id,
            item,
            amount: Amount::lenient(&input.amount),
            category: or_default(input.category.as_deref().unwrap_or_default(), OTHER),
            date: input.date.unwrap_or(today).format(DATE_FORMAT).to_string(),
            payment_method: or_default(
                input.payment_method.as_deref().unwrap_or_default(),
                CASH,
            ),
            notes: input.notes.as_deref().unwrap_or_default().trim().to_string(),
            created_at: Some(now),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }

    /// The first seven characters of `date`, i.e. `YYYY-MM` for a well formed date, or `None`
    /// when the expense has no date. The text is taken as stored.
    pub fn month_key(&self) -> Option<String> {
        if self.date.is_empty() {
            None
        } else {
            Some(self.date.chars().take(7).collect())
        }
    }
}

/// The raw values a user supplies when adding an expense. Only `item` and `amount` are required;
/// the amount is kept as text because it is coerced leniently when the expense is built.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ExpenseInput {
    pub item: String,
    pub amount: String,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

impl ExpenseInput {
    pub fn new(item: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            amount: amount.into(),
            ..Default::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = Some(payment_method.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Field changes for an existing expense. `None` leaves the field as it is. `id` and
/// `created_at` can never be changed.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ExpenseUpdate {
    pub item: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

impl ExpenseUpdate {
    /// Returns true if the update would not change any field.
    pub fn is_empty(&self) -> bool {
        self == &ExpenseUpdate::default()
    }

    /// Applies the changes to `expense`. Nothing is changed if an error is returned.
    pub fn apply(&self, expense: &mut Expense) -> Result<()> {
        let item = match &self.item {
            Some(item) => Some(validate_item(item)?),
            None => None,
        };
        if let Some(item) = item {
            expense.item = item;
        }
        if let Some(amount) = &self.amount {
            expense.amount = Amount::lenient(amount);
        }
        if let Some(category) = &self.category {
            expense.category = or_default(category, OTHER);
        }
        if let Some(date) = &self.date {
            expense.date = date.format(DATE_FORMAT).to_string();
        }
        if let Some(payment_method) = &self.payment_method {
            expense.payment_method = or_default(payment_method, CASH);
        }
        if let Some(notes) = &self.notes {
            expense.notes = notes.trim().to_string();
        }
        Ok(())
    }
}

fn validate_item(item: &str) -> Result<String> {
    let item = item.trim();
    ensure!(!item.is_empty(), "An expense must have an item description");
    Ok(item.to_string())
}

#[cfg(test)]
pub(crate) fn test_expense(
    id: u64,
    item: &str,
    amount: u64,
    category: &str,
    date: &str,
) -> Expense {
    Expense {
        id,
        item: item.to_string(),
        amount: Amount::whole(amount),
        category: category.to_string(),
        date: date.to_string(),
        payment_method: CASH.to_string(),
        notes: String::new(),
        created_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn now() -> NaiveDateTime {
        today().and_hms_opt(9, 30, 0).unwrap()
    }

    #[test]
    fn test_from_input_applies_defaults() {
        let e = Expense::from_input(4, ExpenseInput::new("  Tea ", "50"), today(), now()).unwrap();
        assert_eq!(e.id(), 4);
        assert_eq!(e.item(), "Tea");
        assert_eq!(e.amount(), Amount::whole(50));
        assert_eq!(e.category(), "Other");
        assert_eq!(e.date(), "2025-03-14");
        assert_eq!(e.payment_method(), "Cash");
        assert_eq!(e.notes(), "");
        assert_eq!(e.created_at(), Some(now()));
    }

    #[test]
    fn test_from_input_blank_fields_take_defaults() {
        let input = ExpenseInput::new("Tea", "50")
            .category("   ")
            .payment_method("");
        let e = Expense::from_input(1, input, today(), now()).unwrap();
        assert_eq!(e.category(), "Other");
        assert_eq!(e.payment_method(), "Cash");
    }

    #[test]
    fn test_from_input_non_numeric_amount_is_zero() {
        let e = Expense::from_input(1, ExpenseInput::new("Tea", "abc"), today(), now()).unwrap();
        assert!(e.amount().is_zero());
    }

    #[test]
    fn test_from_input_rejects_empty_item() {
        assert!(Expense::from_input(1, ExpenseInput::new("  ", "5"), today(), now()).is_err());
    }

    #[test]
    fn test_deserialize_missing_fields_take_defaults() {
        let json = r#"{"id": 3, "item": "Bus", "amount": 20.5}"#;
        let e: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(e.id(), 3);
        assert_eq!(e.amount().value(), Decimal::new(205, 1));
        assert_eq!(e.category(), "Other");
        assert_eq!(e.payment_method(), "Cash");
        assert_eq!(e.date(), "");
        assert_eq!(e.notes(), "");
        assert_eq!(e.created_at(), None);
    }

    #[test]
    fn test_deserialize_python_style_created_at() {
        let json = r#"{"id": 1, "item": "Tea", "amount": 50, "category": "Food & Dining",
            "date": "2025-01-01", "payment_method": "UPI", "notes": "",
            "created_at": "2025-01-01T10:15:30.123456"}"#;
        let e: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(e.payment_method(), "UPI");
        assert!(e.created_at().is_some());
    }

    #[test]
    fn test_serialize_uses_snake_case_wire_names() {
        let e = Expense::from_input(1, ExpenseInput::new("Tea", "50"), today(), now()).unwrap();
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["payment_method"], "Cash");
        assert_eq!(json["amount"], 50);
        assert!(json.get("created_at").is_some());
    }

    #[test]
    fn test_month_key() {
        assert_eq!(
            test_expense(1, "a", 1, "Food", "2025-01-31").month_key(),
            Some("2025-01".to_string())
        );
        assert_eq!(test_expense(1, "a", 1, "Food", "").month_key(), None);
        assert_eq!(
            test_expense(1, "a", 1, "Food", "2025").month_key(),
            Some("2025".to_string())
        );
        assert_eq!(
            test_expense(1, "a", 1, "Food", " 2025-01-05").month_key(),
            Some(" 2025-0".to_string())
        );
        assert_eq!(
            test_expense(1, "a", 1, "Food", "   ").month_key(),
            Some("   ".to_string())
        );
    }

    #[test]
    fn test_update_keeps_absent_fields() {
        let mut e = test_expense(2, "Lunch", 120, "Food & Dining", "2025-02-01");
        let update = ExpenseUpdate {
            amount: Some("150".to_string()),
            ..Default::default()
        };
        update.apply(&mut e).unwrap();
        assert_eq!(e.amount(), Amount::whole(150));
        assert_eq!(e.item(), "Lunch");
        assert_eq!(e.category(), "Food & Dining");
        assert_eq!(e.date(), "2025-02-01");
        assert_eq!(e.id(), 2);
    }

    #[test]
    fn test_update_coerces_bad_amount_and_blank_category() {
        let mut e = test_expense(2, "Lunch", 120, "Food & Dining", "2025-02-01");
        let update = ExpenseUpdate {
            amount: Some("twelve".to_string()),
            category: Some(String::new()),
            ..Default::default()
        };
        update.apply(&mut e).unwrap();
        assert!(e.amount().is_zero());
        assert_eq!(e.category(), "Other");
    }

    #[test]
    fn test_update_with_empty_item_changes_nothing() {
        let mut e = test_expense(2, "Lunch", 120, "Food & Dining", "2025-02-01");
        let before = e.clone();
        let update = ExpenseUpdate {
            item: Some(" ".to_string()),
            amount: Some("5".to_string()),
            ..Default::default()
        };
        assert!(update.apply(&mut e).is_err());
        assert_eq!(e, before);
    }
}
