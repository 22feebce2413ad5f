//! `verseforge-config` — typed YAML configuration.
//!
//! Load order: explicit path if given, else `~/.verseforge/config.yaml`,
//! else all defaults. String values support `${ENV_VAR}` substitution.

pub mod env;
pub mod schema;

pub use env::{resolve_env_vars, resolve_env_vars_with, MissingEnvVarError};
pub use schema::{
    CacheConfig, DatabaseConfig, LoggingConfig, MailConfig, SearchConfig, VerseforgeConfig,
};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

/// Default config file location (`~/.verseforge/config.yaml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".verseforge").join("config.yaml"))
}

/// Load a config file, substitute env vars, and deserialize with defaults.
pub async fn load_config(path: &Path) -> Result<VerseforgeConfig> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    parse_config(&raw)
}

/// Load from the explicit path, the default location, or fall back to a
/// default config when neither exists.
pub async fn load_or_default(path: Option<&Path>) -> Result<VerseforgeConfig> {
    if let Some(path) = path {
        return load_config(path).await;
    }
    if let Some(default) = default_config_path() {
        if default.exists() {
            return load_config(&default).await;
        }
    }
    debug!("no config file found, using defaults");
    Ok(VerseforgeConfig::default())
}

fn parse_config(raw: &str) -> Result<VerseforgeConfig> {
    let value: Value = serde_yaml::from_str(raw).context("config is not valid YAML")?;
    let value = resolve_env_vars(&value)?;
    serde_json::from_value(value).context("config does not match the expected schema")
}
