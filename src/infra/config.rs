// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::infra::paths;
use crate::recipes::query::{RecipeQuery, SortOrder};
use crate::recipes::Difficulty;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub browse: BrowseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key the recipe collection is stored under.
    pub recipes_key: String,
    /// Overrides the default database location.
    #[serde(default)]
    pub database: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            recipes_key: "recipes".into(),
            database: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub tick_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseConfig {
    #[serde(default)]
    pub sort: SortOrder,
    /// Initial difficulty filter; empty shows everything.
    #[serde(default)]
    pub difficulties: Vec<Difficulty>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            file: None,
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(paths::db_path)
    }

    pub fn tick_interval(&self) -> Duration {
        // A zero period would spin the ticker.
        Duration::from_millis(self.session.tick_interval_ms.max(1))
    }

    pub fn initial_query(&self) -> RecipeQuery {
        RecipeQuery {
            difficulties: self.browse.difficulties.clone(),
            sort: self.browse.sort,
        }
    }
}
