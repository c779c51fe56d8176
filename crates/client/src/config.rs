use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_CONFIG_PATH: &str = "config/client.toml";

/// Explicit client configuration.
///
/// Passed into [`crate::ApiClient`] at construction; there is no ambient,
/// process-wide HTTP state. Embedders can build the struct directly or load
/// it from the optional TOML file plus environment overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL up to and including the API prefix,
    /// e.g. `http://localhost:5196/api`.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5196/api".to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads `config/client.toml` (if present) with `DESPESAS_*` environment
    /// overrides on top.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        builder = builder.add_source(config::File::with_name(path).required(false));
        builder = builder.add_source(config::Environment::with_prefix("DESPESAS"));
        Ok(builder.build()?.try_deserialize()?)
    }
}
