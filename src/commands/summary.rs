use crate::args::{OutputFormat, SummaryArgs};
use crate::commands::render::summary_text;
use crate::commands::Out;
use crate::engine::Summary;
use crate::error::{ErrorType, IntoResult};
use crate::{Config, Result};
use anyhow::Context;

/// Totals with per-category and per-month breakdowns. With a category, only that category's
/// expenses are summarized and percentages are relative to their total.
pub async fn summary(config: Config, args: SummaryArgs) -> Result<Out<Summary>> {
    let records = config.ledger().list(args.category()).await;
    let summary = Summary::build(&records);
    let message = match args.format() {
        OutputFormat::Json => serde_json::to_string_pretty(&summary)
            .context("Unable to serialize the summary")
            .pub_result(ErrorType::Request)?,
        OutputFormat::Table if summary.is_empty() => "No expenses to summarize".to_string(),
        OutputFormat::Table => summary_text(&summary, config.currency_symbol()),
    };
    Ok(Out::new(message, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;
    use crate::test::TestEnv;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_summary_totals_and_breakdowns() {
        let env = TestEnv::new().await;
        env.add_sample().await;
        let out = summary(env.config(), SummaryArgs::default()).await.unwrap();
        let s = out.structure().unwrap();
        assert_eq!(s.totals.total, Amount::whole(180));
        assert_eq!(s.totals.count, 3);
        assert_eq!(s.totals.average, Amount::whole(60));

        let categories: Vec<(&str, Amount)> = s
            .by_category
            .iter()
            .map(|r| (r.key.as_str(), r.amount))
            .collect();
        assert_eq!(
            categories,
            vec![("Food", Amount::whole(150)), ("Travel", Amount::whole(30))]
        );
        let months: Vec<&str> = s.by_month.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(months, vec!["2025-02", "2025-01"]);
        assert!(out.message().starts_with("Total: Rs. 180.00 across 3 expenses"));
    }

    #[tokio::test]
    async fn test_summary_for_one_category() {
        let env = TestEnv::new().await;
        env.add_sample().await;
        let args = SummaryArgs::new(Some("Travel".to_string()), OutputFormat::Table);
        let out = summary(env.config(), args).await.unwrap();
        let s = out.structure().unwrap();
        assert_eq!(s.totals.total, Amount::whole(30));
        assert_eq!(s.by_category.len(), 1);
        assert_eq!(s.by_category[0].percent, Decimal::ONE_HUNDRED);
    }

    #[tokio::test]
    async fn test_summary_empty() {
        let env = TestEnv::new().await;
        let out = summary(env.config(), SummaryArgs::default()).await.unwrap();
        assert_eq!(out.message(), "No expenses to summarize");
        let s = out.structure().unwrap();
        assert!(s.is_empty());
        assert!(s.totals.average.is_zero());
    }

    #[tokio::test]
    async fn test_summary_json() {
        let env = TestEnv::new().await;
        env.add_sample().await;
        let args = SummaryArgs::new(None, OutputFormat::Json);
        let out = summary(env.config(), args).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(out.message()).unwrap();
        assert_eq!(json["totals"]["count"], 3);
        assert_eq!(json["by_category"][0]["key"], "Food");
        assert_eq!(json["by_category"][0]["amount"], 150);
        assert_eq!(json["by_category"][0]["percent"], 83.33);
    }
}
