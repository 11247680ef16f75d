//! # Roster
//!
//! A candidate-listing service. Candidates are read from a JSON file, then
//! filtered, sorted and paginated by [`roster_seeker`] and returned over HTTP
//! (`roster serve`) or printed (`roster list`).
//!
//! ```no_run
//! use roster::{router, AppState, ServerConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! let app = router(AppState::new(config.record_source()), config.cors_layer()?);
//! let listener = tokio::net::TcpListener::bind(config.bind).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod request;
pub mod serialize;
pub mod server;
pub mod source;

pub use config::{ConfigError, LoadMode, ServerConfig};
pub use request::params_from_query;
pub use serialize::{serialize, OutputFormat, SerializeError};
pub use server::{router, serve, ApiError, AppState};
pub use source::{CachedSource, JsonFileSource, RecordSource, SourceError, StaticSource};
