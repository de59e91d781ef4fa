use crate::error::{Result, StockroomError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORAGE_KEY: &str = "inventory";
const DEFAULT_EXPORT_FILENAME: &str = "inventory_export.csv";
const DEFAULT_OP_DELAY_MS: u64 = 2000;

/// Configuration for the tracker, stored as `config.json` in its data
/// directory. Every field has a default, so a missing or partial file is
/// fine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// The one canonical key the collection persists under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Fixed name of the delimited export file.
    #[serde(default = "default_export_filename")]
    pub export_filename: String,

    /// Delay before a submitted add/edit takes effect.
    #[serde(default = "default_op_delay_ms")]
    pub commit_delay_ms: u64,

    /// Delay before a confirmed removal takes effect.
    #[serde(default = "default_op_delay_ms")]
    pub removal_delay_ms: u64,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_export_filename() -> String {
    DEFAULT_EXPORT_FILENAME.to_string()
}

fn default_op_delay_ms() -> u64 {
    DEFAULT_OP_DELAY_MS
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            export_filename: default_export_filename(),
            commit_delay_ms: DEFAULT_OP_DELAY_MS,
            removal_delay_ms: DEFAULT_OP_DELAY_MS,
        }
    }
}

impl TrackerConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockroomError::Io)?;
        let config: TrackerConfig =
            serde_json::from_str(&content).map_err(StockroomError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockroomError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockroomError::Serialization)?;
        fs::write(config_path, content).map_err(StockroomError::Io)?;
        Ok(())
    }

    pub fn commit_delay(&self) -> Duration {
        Duration::from_millis(self.commit_delay_ms)
    }

    pub fn removal_delay(&self) -> Duration {
        Duration::from_millis(self.removal_delay_ms)
    }
}
