//! HTTP surface.
//!
//! Routes:
//!
//! - `GET /` - service banner
//! - `GET /api/candidates` - filtered, sorted, paginated candidates

use std::sync::Arc;

use anyhow::Context;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use roster_seeker::{query, Candidate, PageResult, ValidationError};
use serde_json::json;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info};

use crate::config::ServerConfig;
use crate::request::params_from_query;
use crate::source::{RecordSource, SourceError};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn RecordSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        AppState { source }
    }
}

/// Request failures, each with its HTTP mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 422, with the offending query parameter named in the body.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 500; details go to the log, not the client.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                debug!(field = err.field, "rejected request: {err}");
                let body = json!({
                    "detail": [{
                        "loc": ["query", err.field],
                        "msg": err.kind.to_string(),
                        "type": "value_error",
                    }]
                });
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Source(err) => {
                error!("candidate source failed: {err}");
                let body = json!({ "detail": "candidate data is unavailable" });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/candidates", get(list_candidates))
        .layer(cors)
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Candidate Management API", "docs": "/docs" }))
}

async fn list_candidates(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<PageResult<Candidate>>, ApiError> {
    let params = params_from_query(raw.as_deref())?;
    let records = state.source.load()?;
    let page = query(&records, &params);

    debug!(
        search = params.search_text(),
        sort_by = %params.sort_by,
        sort_order = %params.sort_order,
        page = page.page,
        per_page = page.per_page,
        total = page.total,
        returned = page.candidates.len(),
        "served candidates"
    );

    Ok(Json(page))
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let cors = config.cors_layer()?;
    let state = AppState::new(config.record_source());
    let app = router(state, cors);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    info!(
        addr = %config.bind,
        data = %config.data_file.display(),
        load_mode = ?config.load_mode,
        "Candidate Management API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
    }
}
