pub mod v1;
pub mod diagnostic;
pub mod error;
pub mod response;
pub mod health;

use axum::Router;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;

/// Shared handler state: configuration only, the engine itself is
/// stateless.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
}

pub fn router(cfg: Config) -> Router {
    let timeout = Duration::from_secs(cfg.server.request_timeout_secs);
    let state = AppState { cfg };

    Router::new()
        .nest("/api/v1", v1::router(state))
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
                .layer(TimeoutLayer::new(timeout)),
        )
        .layer(TraceLayer::new_for_http())
}
