//! Plain-text tables for the terminal.

use crate::engine::{BreakdownRow, Summary};
use crate::model::Expense;

const EXPENSE_HEADERS: [&str; 7] = [
    "ID",
    "Date",
    "Item",
    "Category",
    "Amount",
    "Payment Method",
    "Notes",
];

/// One line per expense, amounts prefixed with `symbol`.
pub(super) fn expense_table(records: &[Expense], symbol: &str) -> String {
    let rows: Vec<[String; 7]> = records
        .iter()
        .map(|e| {
            [
                e.id().to_string(),
                e.date().to_string(),
                e.item().to_string(),
                e.category().to_string(),
                e.amount().with_symbol(symbol),
                e.payment_method().to_string(),
                e.notes().to_string(),
            ]
        })
        .collect();
    table(&EXPENSE_HEADERS, &rows)
}

/// The totals line followed by the category and month breakdowns.
pub(super) fn summary_text(summary: &Summary, symbol: &str) -> String {
    let totals = &summary.totals;
    let mut out = format!(
        "Total: {} across {} (average {})\n",
        totals.total.with_symbol(symbol),
        super::plural(totals.count, "expense", "expenses"),
        totals.average.with_symbol(symbol),
    );
    out.push_str("\nBy category\n");
    out.push_str(&breakdown(&summary.by_category, "Category", symbol));
    out.push_str("\nBy month\n");
    out.push_str(&breakdown(&summary.by_month, "Month", symbol));
    out
}

fn breakdown(rows: &[BreakdownRow], key_header: &str, symbol: &str) -> String {
    let rows: Vec<[String; 3]> = rows
        .iter()
        .map(|r| {
            [
                r.key.clone(),
                r.amount.with_symbol(symbol),
                format!("{:.2}%", r.percent),
            ]
        })
        .collect();
    table(&[key_header, "Amount", "Share"], &rows)
}

fn table<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let mut out = String::new();
    push_line(&mut out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}", width = *width))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_expense;

    #[test]
    fn test_expense_table_aligns_columns() {
        let records = vec![
            test_expense(1, "Tea", 50, "Food", "2025-01-01"),
            test_expense(2, "Train ticket", 1200, "Travel", "2025-01-02"),
        ];
        let text = expense_table(&records, "Rs.");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID  Date        Item          Category  Amount"));
        assert!(lines[1].starts_with("--  ----------  ------------"));
        assert!(lines[3].contains("Train ticket  Travel    Rs. 1,200.00"));
    }

    #[test]
    fn test_summary_text() {
        let records = vec![
            test_expense(1, "a", 100, "Food", "2025-01-01"),
            test_expense(2, "b", 50, "Food", "2025-02-01"),
            test_expense(3, "c", 30, "Travel", "2025-02-03"),
        ];
        let text = summary_text(&Summary::build(&records), "");
        assert!(text.starts_with("Total: 180.00 across 3 expenses (average 60.00)\n"));
        assert!(text.contains("Food      150.00  83.33%"));
        assert!(text.contains("Travel    30.00   16.67%"));
        let feb = text.find("2025-02").unwrap();
        let jan = text.find("2025-01").unwrap();
        assert!(feb < jan);
    }
}
