//! API Configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file used when `CONFIG_PATH` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid config JSON
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Listen address
    pub bind_addr: String,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Serve Swagger UI and the OpenAPI document
    pub enable_docs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            log_filter: "info".into(),
            enable_docs: true,
        }
    }
}

impl ApiConfig {
    /// Load from a JSON file
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Path named by `CONFIG_PATH`, or [`DEFAULT_CONFIG_PATH`]
    pub fn path_from_env() -> String {
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into())
    }

    /// Apply `BIND_ADDR` and `RUST_LOG` from the environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(addr) = lookup("BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(filter) = lookup("RUST_LOG") {
            self.log_filter = filter;
        }
        self
    }
}
