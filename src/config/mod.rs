use crate::datastore::{DatastoreCache, ObjectStore, DEFAULT_FETCH_COMMAND, DEFAULT_SCHEMES};
use crate::global;
use crate::manifest::{PathResolver, DEFAULT_LENGTH_LIMIT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub resolver: ResolverConfig,
    pub datastore: DatastoreConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Candidate paths this long or longer are never joined onto the
    /// manifest directory.
    pub length_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatastoreConfig {
    /// Local cache root for object-store references.
    /// Defaults to the platform cache directory.
    pub cache_dir: Option<String>,
    /// URL schemes treated as object-store references (e.g. "ais").
    pub schemes: Vec<String>,
    /// Program used to download uncached objects. Empty disables fetching.
    pub fetch_command: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            length_limit: DEFAULT_LENGTH_LIMIT,
        }
    }
}

impl Default for DatastoreConfig {
    fn default() -> Self {
        Self {
            cache_dir: None,
            schemes: DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect(),
            fetch_command: DEFAULT_FETCH_COMMAND.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        global::config_file()
    }

    pub fn object_store(&self) -> Arc<dyn ObjectStore> {
        Arc::new(DatastoreCache::from_config(&self.datastore))
    }

    pub fn path_resolver(&self) -> PathResolver {
        PathResolver::new(self.object_store()).with_length_limit(self.resolver.length_limit)
    }
}
