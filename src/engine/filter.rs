use crate::model::Expense;
use std::collections::BTreeSet;

/// Returns the expenses whose category is exactly `category`. An absent or empty filter returns
/// every expense. Order is preserved.
pub fn filter_by_category<'a>(records: &'a [Expense], category: Option<&str>) -> Vec<&'a Expense> {
    match category {
        None | Some("") => records.iter().collect(),
        Some(category) => records
            .iter()
            .filter(|e| e.category() == category)
            .collect(),
    }
}

/// The sorted, de-duplicated categories that appear in `records`.
pub fn distinct_categories(records: &[Expense]) -> BTreeSet<String> {
    records.iter().map(|e| e.category().to_string()).collect()
}
