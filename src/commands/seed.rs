use crate::commands::{plural, Out};
use crate::error::{ErrorType, IntoResult};
use crate::model::Expense;
use crate::seed::demo_seed;
use crate::{Config, Result};
use chrono::Local;

/// Adds the three demo expenses, but only when the ledger is empty.
pub async fn seed(config: Config) -> Result<Out<Vec<Expense>>> {
    let seeded = config
        .ledger()
        .seed_if_empty(demo_seed(Local::now().date_naive()))
        .await
        .pub_result(ErrorType::Storage)?;
    if seeded.is_empty() {
        return Ok("The ledger already has expenses, nothing was added".into());
    }
    let message = format!(
        "Added {}",
        plural(seeded.len(), "sample expense", "sample expenses")
    );
    Ok(Out::new(message, seeded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_seed_empty_ledger() {
        let env = TestEnv::new().await;
        let out = seed(env.config()).await.unwrap();
        assert_eq!(out.message(), "Added 3 sample expenses");
        let items: Vec<String> = env
            .config()
            .ledger()
            .all()
            .await
            .iter()
            .map(|e| e.item().to_string())
            .collect();
        assert_eq!(items, vec!["Groceries", "Bus pass", "Electricity bill"]);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let env = TestEnv::new().await;
        seed(env.config()).await.unwrap();
        let out = seed(env.config()).await.unwrap();
        assert!(out.structure().is_none());
        assert_eq!(env.config().ledger().all().await.len(), 3);
    }

    #[tokio::test]
    async fn test_seed_skips_non_empty_ledger() {
        let env = TestEnv::new().await;
        env.add("Tea", "5", "Food", "2025-03-01").await;
        seed(env.config()).await.unwrap();
        assert_eq!(env.config().ledger().all().await.len(), 1);
    }
}
