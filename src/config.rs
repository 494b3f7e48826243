//! Locations of the files the finance manager reads and writes.
//!
//! Everything lives in a single home directory, `$FINANCE_HOME`, which defaults to
//! `$HOME/finance`. The only persisted state is `$FINANCE_HOME/transactions.json`.

use crate::{utils, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};

const TRANSACTIONS_JSON: &str = "transactions.json";
const SCRATCH_SUFFIX: &str = ".tmp";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to `$FINANCE_HOME` and from there it provides the paths to the data file and the
/// scratch file that saves are staged in.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    data_path: PathBuf,
    scratch_path: PathBuf,
}

impl Config {
    /// This will
    /// - create `finance_home` if it does not exist
    /// - canonicalize it
    /// - return the configuration object
    ///
    /// The data file itself is not touched. It is fine for it to be missing.
    pub async fn load(finance_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = finance_home.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the finance home directory")?;
        let root = utils::canonicalize(&maybe_relative).await?;
        Ok(Self::with_root(root))
    }

    fn with_root(root: PathBuf) -> Self {
        let data_path = root.join(TRANSACTIONS_JSON);
        let scratch_path = root.join(format!(".{TRANSACTIONS_JSON}{SCRATCH_SUFFIX}"));
        Self {
            root,
            data_path,
            scratch_path,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The JSON file holding every transaction.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// A sibling of the data file. Saves are written here first and then renamed over the data
    /// file.
    pub fn scratch_path(&self) -> &Path {
        &self.scratch_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_config_load_creates_home() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("nested").join("finance");
        let config = Config::load(&home).await.unwrap();

        assert!(config.root().is_dir());
        assert!(config.root().is_absolute());
        assert_eq!(config.data_path(), config.root().join("transactions.json"));
        assert!(!config.data_path().exists());
    }

    #[tokio::test]
    async fn test_config_scratch_path_is_sibling() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).await.unwrap();
        assert_eq!(config.scratch_path().parent(), config.data_path().parent());
        assert_ne!(config.scratch_path(), config.data_path());
    }

    #[tokio::test]
    async fn test_config_load_existing_home() {
        let dir = TempDir::new().unwrap();
        let first = Config::load(dir.path()).await.unwrap();
        let second = Config::load(dir.path()).await.unwrap();
        assert_eq!(first.root(), second.root());
    }
}
