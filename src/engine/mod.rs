//! Pure functions that turn a list of expenses into filtered views, totals, breakdowns and CSV.
//!
//! Nothing in here touches storage; callers decide whether to pass the full ledger or a filtered
//! view.

mod aggregate;
mod export;
mod filter;

pub use aggregate::{
    by_category, by_month, ranked_by_amount, ranked_by_month, share, totals, BreakdownRow, Summary,
    Totals,
};
pub use export::{dated_file_name, to_csv, CSV_CONTENT_TYPE, CSV_FILE_NAME, CSV_HEADER};
pub use filter::{distinct_categories, filter_by_category};
