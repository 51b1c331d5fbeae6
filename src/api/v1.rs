use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::{diagnostic, health, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/diagnostic", post(diagnostic::post_diagnostic))
        .route("/health", get(health::health_check))
        .route("/healthz", get(healthz))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
