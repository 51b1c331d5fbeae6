use axum::{response::IntoResponse, Json};
use serde::Serialize;

use crate::engine::solar::{predict_energy, DEFAULT_PANEL_EFFICIENCY};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    checks: HealthChecks,
}

/// Individual health checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    engine: ComponentHealth,
}

/// Health status of a component
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ComponentHealth {
    fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            error: None,
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy".to_string(),
            error: Some(error),
        }
    }
}

/// GET /health - Health check endpoint
///
/// Runs the engine against a known reference point and reports whether
/// the expected value came back.
pub async fn health_check() -> impl IntoResponse {
    let engine_health = check_engine();
    let all_healthy = engine_health.status == "healthy";

    let response = HealthResponse {
        status: if all_healthy {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        timestamp: chrono::Utc::now(),
        checks: HealthChecks {
            engine: engine_health,
        },
    };

    Json(response)
}

fn check_engine() -> ComponentHealth {
    // Reference day: 8h sun at the 25 °C reference temperature.
    let reference = predict_energy(25.0, 8.0, DEFAULT_PANEL_EFFICIENCY);
    if reference == 72_000.0 {
        ComponentHealth::healthy()
    } else {
        ComponentHealth::unhealthy(format!(
            "reference prediction returned {reference}, expected 72000"
        ))
    }
}
