//! Configuration management for sifcache

pub mod schema;

pub use schema::Config;

use crate::cache::CacheDir;
use crate::error::{CacheError, CacheResult};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sifcache")
            .join("config.toml")
    }

    /// Load configuration, falling back to defaults if the file is missing
    pub async fn load(&self) -> CacheResult<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> CacheResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| CacheError::io("reading config", path, e))?;

        toml::from_str(&content).map_err(|e| CacheError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the cache directory resolver for a loaded config.
///
/// A non-empty `override_dir` (from `--cache-dir` or `SINGULARITY_CACHEDIR`)
/// wins over `cache.dir` in the config file.
pub fn resolve_cache_dir(config: &Config, override_dir: Option<PathBuf>) -> CacheDir {
    let chosen = override_dir
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| config.cache.dir.clone());
    CacheDir::new(chosen)
}
