//! Configuration file handling for the expense tracker.
//!
//! The configuration file is stored at `$EXPENSE_HOME/config.json` and names the ledger data file
//! and the currency symbol used when printing amounts.

use crate::ledger::Ledger;
use crate::store::JsonFileStore;
use crate::{utils, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const APP_NAME: &str = "expense-tracker";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";
const EXPENSES_JSON: &str = "expenses.json";
const CURRENCY_SYMBOL: &str = "Rs.";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to `$EXPENSE_HOME` and from there it loads `$EXPENSE_HOME/config.json`. It owns the
/// `Ledger` for the configured data file.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
    data_path: PathBuf,
    ledger: Arc<Ledger>,
}

impl Config {
    /// Creates the home directory, if needed, and writes an initial `config.json` with default
    /// settings. The ledger data file is not created until the first expense is saved.
    ///
    /// # Errors
    /// - Returns an error if a `config.json` already exists in `dir`.
    /// - Returns an error if any file operations fail.
    pub async fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the expense home directory")?;
        let root = utils::canonicalize(&maybe_relative).await?;

        let config_path = root.join(CONFIG_JSON);
        if config_path.exists() {
            bail!(
                "A config file already exists at '{}'",
                config_path.display()
            )
        }
        let config_file = ConfigFile::default();
        config_file.save(&config_path).await?;
        Ok(Self::from_parts(root, config_path, config_file))
    }

    /// This will
    /// - validate that `expense_home` exists and that the config file exists
    /// - load the config file
    /// - return the loaded configuration object
    pub async fn load(expense_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = expense_home.into();
        let root = utils::canonicalize(&maybe_relative)
            .await
            .context("Expense home is missing, run 'expense init' first")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!(
                "The config file is missing '{}', run 'expense init' first",
                config_path.display()
            )
        }
        let config_file = ConfigFile::load(&config_path).await?;
        Ok(Self::from_parts(root, config_path, config_file))
    }

    fn from_parts(root: PathBuf, config_path: PathBuf, config_file: ConfigFile) -> Self {
        let data_path = resolve(&root, &config_file.data_file);
        let ledger = Arc::new(Ledger::new(JsonFileStore::new(&data_path)));
        Self {
            root,
            config_path,
            config_file,
            data_path,
            ledger,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The ledger JSON file.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config_file.currency_symbol
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

/// Returns `p` if it is absolute, otherwise `p` relative to `root`.
fn resolve(root: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "expense-tracker",
///   "config_version": 1,
///   "data_file": "expenses.json",
///   "currency_symbol": "Rs."
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "expense-tracker"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Path to the ledger file, relative to the home directory or absolute
    #[serde(default = "default_data_file")]
    data_file: PathBuf,

    /// Printed in front of amounts. May be empty.
    #[serde(default = "default_currency_symbol")]
    currency_symbol: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(EXPENSES_JSON)
}

fn default_currency_symbol() -> String {
    CURRENCY_SYMBOL.to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            data_file: default_data_file(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if it belongs to another app.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: ConfigFile = utils::deserialize(path)
            .await
            .context("Failed to load config file")?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data)
            .await
            .context("Unable to write config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_config_create_then_load() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("expenses");

        let created = Config::create(&home).await.unwrap();
        assert!(created.config_path().is_file());
        assert_eq!(created.currency_symbol(), "Rs.");
        assert_eq!(created.data_path(), created.root().join("expenses.json"));
        assert!(!created.data_path().exists());

        let loaded = Config::load(&home).await.unwrap();
        assert_eq!(loaded.root(), created.root());
        assert_eq!(loaded.data_path(), created.data_path());
    }

    #[tokio::test]
    async fn test_config_create_twice_fails() {
        let dir = TempDir::new().unwrap();
        Config::create(dir.path()).await.unwrap();
        assert!(Config::create(dir.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_config_load_missing_home() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(dir.path().join("nope")).await.unwrap_err();
        assert!(format!("{err:#}").contains("expense init"));
    }

    #[tokio::test]
    async fn test_config_load_missing_config_file() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load(dir.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_config_file_load_with_minimal_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        utils::write(&path, r#"{"app_name": "expense-tracker", "config_version": 1}"#)
            .await
            .unwrap();
        let config = ConfigFile::load(&path).await.unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[tokio::test]
    async fn test_config_file_load_invalid_app_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        utils::write(&path, r#"{"app_name": "other-app", "config_version": 1}"#)
            .await
            .unwrap();
        let err = ConfigFile::load(&path).await.unwrap_err();
        assert!(err.to_string().contains("Invalid app_name"));
    }

    #[tokio::test]
    async fn test_config_absolute_data_file() {
        let dir = TempDir::new().unwrap();
        let elsewhere = dir.path().join("elsewhere.json");
        let config_file = ConfigFile {
            data_file: elsewhere.clone(),
            currency_symbol: "$".to_string(),
            ..ConfigFile::default()
        };
        config_file.save(dir.path().join("config.json")).await.unwrap();
        let config = Config::load(dir.path()).await.unwrap();
        assert_eq!(config.data_path(), elsewhere);
        assert_eq!(config.currency_symbol(), "$");
    }

    #[test]
    fn test_resolve() {
        let root = Path::new("/home/me/expenses");
        assert_eq!(
            resolve(root, Path::new("data.json")),
            PathBuf::from("/home/me/expenses/data.json")
        );
        assert_eq!(resolve(root, Path::new("/tmp/x.json")), PathBuf::from("/tmp/x.json"));
    }
}
