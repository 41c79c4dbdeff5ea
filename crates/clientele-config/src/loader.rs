//! Configuration loader (defaults + file + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::ClienteleConfig;

/// Prefix for environment overrides, e.g. `CLIENTELE_SERVER__PORT`.
pub const ENV_PREFIX: &str = "CLIENTELE_";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
    /// Configuration loaded but holds an unusable value.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`CLIENTELE_` prefix, `__` between sections)
/// 4. The bare `PORT` variable, mapped to `server.port`
pub fn load_config(config_path: Option<&str>) -> Result<ClienteleConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(ClienteleConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()));

    let config: ClienteleConfig = figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))?;
    config.validate().map_err(ConfigError::Invalid)?;
    Ok(config)
}
