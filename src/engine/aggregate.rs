use crate::model::{Amount, Expense};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Overall figures for a set of expenses.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct Totals {
    pub total: Amount,
    pub count: usize,
    /// `total / count`, or zero when there are no expenses.
    pub average: Amount,
}

/// Sums, counts and averages `records`.
pub fn totals<'a>(records: impl IntoIterator<Item = &'a Expense>) -> Totals {
    let (total, count) = records
        .into_iter()
        .fold((Amount::ZERO, 0usize), |(total, count), e| {
            (total + e.amount(), count + 1)
        });
    let average = if count == 0 {
        Amount::ZERO
    } else {
        Amount::new(total.value() / Decimal::from(count))
    };
    Totals {
        total,
        count,
        average,
    }
}

/// Sums amounts per exact category text. Categories with no expenses are absent.
pub fn by_category<'a>(
    records: impl IntoIterator<Item = &'a Expense>,
) -> BTreeMap<String, Amount> {
    let mut sums = BTreeMap::new();
    for e in records {
        *sums.entry(e.category().to_string()).or_insert(Amount::ZERO) += e.amount();
    }
    sums
}

/// Sums amounts per `YYYY-MM`. Expenses without a date are left out.
pub fn by_month<'a>(records: impl IntoIterator<Item = &'a Expense>) -> BTreeMap<String, Amount> {
    let mut sums = BTreeMap::new();
    for e in records {
        if let Some(month) = e.month_key() {
            *sums.entry(month).or_insert(Amount::ZERO) += e.amount();
        }
    }
    sums
}

/// `amount` as a percentage of `total`, or zero when `total` is zero.
pub fn share(amount: Amount, total: Amount) -> Decimal {
    if total.is_zero() {
        Decimal::ZERO
    } else {
        amount.value() / total.value() * Decimal::ONE_HUNDRED
    }
}

/// Largest amount first. Equal amounts are ordered by key.
pub fn ranked_by_amount(sums: &BTreeMap<String, Amount>) -> Vec<(String, Amount)> {
    let mut rows: Vec<(String, Amount)> = sums.iter().map(|(k, v)| (k.clone(), *v)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// Most recent month first.
pub fn ranked_by_month(sums: &BTreeMap<String, Amount>) -> Vec<(String, Amount)> {
    sums.iter().rev().map(|(k, v)| (k.clone(), *v)).collect()
}

/// One line of a breakdown, ready for display.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub key: String,
    pub amount: Amount,
    /// Percentage of the summary's total, rounded to two places. Written as a JSON number like
    /// `amount`.
    #[serde(with = "rust_decimal::serde::float")]
    pub percent: Decimal,
}

/// Everything the summary view shows: overall totals plus the category and month breakdowns in
/// display order.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Summary {
    pub totals: Totals,
    pub by_category: Vec<BreakdownRow>,
    pub by_month: Vec<BreakdownRow>,
}

impl Summary {
    pub fn build<'a>(records: impl IntoIterator<Item = &'a Expense>) -> Self {
        let records: Vec<&Expense> = records.into_iter().collect();
        let totals = totals(records.iter().copied());
        let rows = |ranked: Vec<(String, Amount)>| -> Vec<BreakdownRow> {
            ranked
                .into_iter()
                .map(|(key, amount)| BreakdownRow {
                    key,
                    amount,
                    percent: share(amount, totals.total).round_dp(2),
                })
                .collect()
        };
        Self {
            totals,
            by_category: rows(ranked_by_amount(&by_category(records.iter().copied()))),
            by_month: rows(ranked_by_month(&by_month(records.iter().copied()))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.totals.count == 0
    }
}
