//! HTTP front-end.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET, POST | `/api/predict` | Classify a temperature/humidity pair |
//! | GET | `/api/model` | Backend, cache outcome and holdout scores |
//! | GET | `/health` | Liveness probe |

mod api;
mod error;
mod state;

pub use api::{HealthResponse, PredictResponse};
pub use error::ApiError;
pub use state::AppState;

use crate::config::ServeConfig;
use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// Builds the router. The static dashboard is mounted as fallback when
/// `static_dir` exists.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/health", get(api::health))
        .route("/api/predict", get(api::predict_query).post(api::predict_body))
        .route("/api/model", get(api::model));

    match static_dir {
        Some(dir) if dir.is_dir() => {
            router = router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
        }
        Some(dir) => warn!(dir = %dir.display(), "static directory not found; dashboard disabled"),
        None => {}
    }

    router.layer(CorsLayer::permissive()).with_state(state)
}

/// Binds and serves until Ctrl-C.
pub async fn serve(config: &ServeConfig, state: AppState) -> Result<()> {
    let addr = config.address();
    let static_dir = config.resolve_static_dir();
    let app = create_router(state, Some(&static_dir));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
