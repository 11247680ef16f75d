//! Server configuration.
//!
//! Values come from command-line flags, then environment variables, then the
//! defaults below (clap resolves that priority in [`crate::cli`]).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::HeaderValue;
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::source::{CachedSource, JsonFileSource, RecordSource};

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";
pub const DEFAULT_DATA_FILE: &str = "mock-data/candidates.json";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Errors in configuration values that clap cannot check on its own.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid CORS origin {0:?}")]
    InvalidOrigin(String),
}

/// When the data file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Read on first use, then serve the cached collection.
    #[default]
    Once,
    /// Read on every request, picking up edits to the file.
    PerRequest,
}

/// Everything `roster serve` needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub data_file: PathBuf,
    pub allowed_origins: Vec<String>,
    pub load_mode: LoadMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: SocketAddr::from(([0, 0, 0, 0], 8000)),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            load_mode: LoadMode::Once,
        }
    }
}

impl ServerConfig {
    /// Builds the record source described by this configuration.
    pub fn record_source(&self) -> Arc<dyn RecordSource> {
        let file = JsonFileSource::new(&self.data_file);
        match self.load_mode {
            LoadMode::Once => Arc::new(CachedSource::new(file)),
            LoadMode::PerRequest => Arc::new(file),
        }
    }

    /// Builds the CORS layer for the configured origins.
    ///
    /// Credentials are allowed, so methods and headers mirror the preflight
    /// request instead of using a wildcard.
    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        let origins = self
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.allowed_origins, vec![DEFAULT_ALLOWED_ORIGIN]);
        assert_eq!(config.load_mode, LoadMode::Once);
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let config = ServerConfig {
            allowed_origins: vec!["http://ok.example".into(), "bad\norigin".into()],
            ..ServerConfig::default()
        };
        assert_eq!(
            config.cors_layer().unwrap_err(),
            ConfigError::InvalidOrigin("bad\norigin".into())
        );
    }

    #[test]
    fn valid_origins_build_a_layer() {
        assert!(ServerConfig::default().cors_layer().is_ok());
    }
}
