use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct QuotebookConfig {
    pub cli: CliConfig,
    pub storage: StorageConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CliConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub store_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for QuotebookConfig {
    fn default() -> Self {
        Self {
            cli: CliConfig::default(),
            storage: StorageConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let store_path = default_quotebook_dir()
            .join("store.db")
            .to_string_lossy()
            .into_owned();
        Self { store_path }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".into(),
            model: "gpt-4o-mini".into(),
            timeout_secs: 30,
        }
    }
}

/// Returns `~/.quotebook/`
pub fn default_quotebook_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".quotebook")
}

/// Returns the default config file path: `~/.quotebook/config.toml`
pub fn default_config_path() -> PathBuf {
    default_quotebook_dir().join("config.toml")
}

impl QuotebookConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            QuotebookConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (QUOTEBOOK_STORE, QUOTEBOOK_MODEL,
    /// QUOTEBOOK_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("QUOTEBOOK_STORE") {
            self.storage.store_path = val;
        }
        if let Ok(val) = std::env::var("QUOTEBOOK_MODEL") {
            self.generation.model = val;
        }
        if let Ok(val) = std::env::var("QUOTEBOOK_LOG_LEVEL") {
            self.cli.log_level = val;
        }
    }

    /// Resolve the store path, expanding `~` if needed.
    pub fn resolved_store_path(&self) -> PathBuf {
        expand_tilde(&self.storage.store_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
