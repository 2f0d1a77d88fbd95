use crate::model::{Expense, DATE_FORMAT};
use crate::Result;
use anyhow::Context;
use chrono::NaiveDate;

pub const CSV_HEADER: [&str; 7] = [
    "ID",
    "Item",
    "Amount",
    "Category",
    "Date",
    "Payment Method",
    "Notes",
];

/// The default name of an exported file.
pub const CSV_FILE_NAME: &str = "expenses.csv";

pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// The export file name stamped with `date`, e.g. `expenses-2025-01-31.csv`.
pub fn dated_file_name(date: NaiveDate) -> String {
    format!("expenses-{}.csv", date.format(DATE_FORMAT))
}

/// Renders `records` as CSV in ledger order.
///
/// Only the notes column is quoted, with embedded quotes doubled. The other columns are written
/// as they are, so an item or category containing a comma will shift the columns of that line.
pub fn to_csv<'a>(records: impl IntoIterator<Item = &'a Expense>) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)
        .context("Unable to write the CSV header")?;
    for e in records {
        wtr.write_record([
            e.id().to_string().as_str(),
            e.item(),
            e.amount().plain().as_str(),
            e.category(),
            e.date(),
            e.payment_method(),
            quote(e.notes()).as_str(),
        ])
        .with_context(|| format!("Unable to write expense {} as CSV", e.id()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| e.into_error())
        .context("Unable to finish writing CSV")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_expense;

    #[test]
    fn test_header_only_when_empty() {
        let csv = to_csv(&Vec::new()).unwrap();
        assert_eq!(csv, "ID,Item,Amount,Category,Date,Payment Method,Notes\n");
    }

    #[test]
    fn test_notes_quotes_are_doubled() {
        let mut e = test_expense(1, "Tea", 50, "Food", "2025-01-01");
        e.notes = r#"He said "hi""#.to_string();
        let csv = to_csv(&vec![e]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Item,Amount,Category,Date,Payment Method,Notes")
        );
        assert_eq!(
            lines.next(),
            Some(r#"1,Tea,50.00,Food,2025-01-01,Cash,"He said ""hi""""#)
        );
        assert!(csv.contains(r#""He said ""hi""""#));
    }

    #[test]
    fn test_item_and_category_are_not_quoted() {
        let e = test_expense(3, "Pens, paper", 15, "Food & Dining", "2025-01-01");
        let csv = to_csv(&vec![e]).unwrap();
        assert!(csv.contains("3,Pens, paper,15.00,Food & Dining,2025-01-01,Cash,\"\"\n"));
    }

    #[test]
    fn test_rows_follow_ledger_order() {
        let records = vec![
            test_expense(1, "B", 2, "Food", "2025-02-01"),
            test_expense(2, "A", 1, "Food", "2025-01-01"),
        ];
        let csv = to_csv(&records).unwrap();
        let items: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|l| l.split(',').nth(1).unwrap())
            .collect();
        assert_eq!(items, vec!["B", "A"]);
    }

    #[test]
    fn test_dated_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(dated_file_name(date), "expenses-2025-01-31.csv");
    }
}
