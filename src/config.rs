/// Store configuration
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for opening the page store.
///
/// `db_path` of `None` opens an in-memory database, which is what the tests
/// use; deployments point it at a file. `busy_timeout_ms` bounds how long a
/// connection waits on a locked database before the call fails.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub db_path: Option<PathBuf>,
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            db_path: None,
            busy_timeout_ms: 5_000,
        }
    }
}

impl StoreConfig {
    /// Load configuration from a JSON file. Missing fields take their
    /// defaults.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }
}
