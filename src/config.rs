use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::driver::FailurePolicy;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DriverConfig {
    pub endpoint: EndpointConfig,
    pub driver: RunConfig,
}

/// Where the graph API lives.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EndpointConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub api_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RunConfig {
    pub nodes: u64,
    pub failure_policy: FailurePolicy,
    pub log_level: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            scheme: "http".into(),
            host: "127.0.0.1".into(),
            port: 8000,
            api_prefix: "api/v1".into(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            nodes: 20,
            failure_policy: FailurePolicy::Continue,
            log_level: "info".into(),
        }
    }
}

impl EndpointConfig {
    /// Base URL every operation name is joined onto, always ending in `/`.
    pub fn base_url(&self) -> String {
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("{}://{}:{}/", self.scheme, self.host, self.port)
        } else {
            format!("{}://{}:{}/{prefix}/", self.scheme, self.host, self.port)
        }
    }
}

/// Returns `~/.graph-driver/`
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".graph-driver"))
}

/// Returns the default config file path: `~/.graph-driver/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|dir| dir.join("config.toml"))
}

impl DriverConfig {
    /// Load config from the default TOML file (if any) then apply env var overrides.
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load_from(path),
            None => {
                let mut config = DriverConfig::default();
                config.apply_env_overrides();
                Ok(config)
            }
        }
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            DriverConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    /// (GRAPH_DRIVER_HOST, GRAPH_DRIVER_PORT, GRAPH_DRIVER_POLICY, GRAPH_DRIVER_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("GRAPH_DRIVER_HOST") {
            self.endpoint.host = val;
        }
        if let Ok(val) = std::env::var("GRAPH_DRIVER_PORT") {
            match val.parse() {
                Ok(port) => self.endpoint.port = port,
                Err(_) => warn!(value = %val, "ignoring invalid GRAPH_DRIVER_PORT"),
            }
        }
        if let Ok(val) = std::env::var("GRAPH_DRIVER_POLICY") {
            match val.parse() {
                Ok(policy) => self.driver.failure_policy = policy,
                Err(e) => warn!(error = %e, "ignoring invalid GRAPH_DRIVER_POLICY"),
            }
        }
        if let Ok(val) = std::env::var("GRAPH_DRIVER_LOG_LEVEL") {
            self.driver.log_level = val;
        }
    }
}
