use axum::{extract::State, Json};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::engine::{self, Diagnostic, SiteConditions};
use crate::forecast::{RevenuePoint, RevenueProjector};

use super::error::ApiError;
use super::response::ApiResponse;
use super::AppState;

/// Diagnostic request. Domain bounds are enforced here, not in the
/// engine: the service is the layer responsible for keeping inputs
/// within their meaningful ranges.
#[derive(Debug, Deserialize, Validate)]
pub struct DiagnosticRequest {
    #[validate(range(min = 0.0, max = 50.0))]
    pub temperature_c: f64,
    #[validate(range(min = 0.0, max = 14.0))]
    pub sunlight_hours: f64,
    pub population: u32,
    /// Optional override of the configured panel efficiency.
    #[validate(range(min = 0.0, max = 1.0))]
    pub panel_efficiency: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticResponse {
    #[serde(flatten)]
    pub report: Diagnostic,
    pub advisory: String,
    pub revenue_projection: Vec<RevenuePoint>,
}

/// POST /api/v1/diagnostic - run the full estimator pipeline
pub async fn post_diagnostic(
    State(st): State<AppState>,
    Json(req): Json<DiagnosticRequest>,
) -> Result<Json<ApiResponse<DiagnosticResponse>>, ApiError> {
    req.validate()?;

    let site = SiteConditions {
        temperature_c: req.temperature_c,
        sunlight_hours: req.sunlight_hours,
        population: req.population,
        panel_efficiency: req
            .panel_efficiency
            .or(Some(st.cfg.engine.panel_efficiency)),
    };

    let report = engine::run_diagnostic(&site);

    info!(
        recommendation = %report.recommendation,
        solar_kwh = report.solar_energy_kwh,
        demand_liters = report.water_demand_liters,
        "diagnostic complete"
    );

    let projector = RevenueProjector::from_config(&st.cfg.forecast);
    let mut rng = match st.cfg.forecast.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let revenue_projection =
        projector.project(report.credits_value_usd, Utc::now().date_naive(), &mut rng);

    Ok(Json(ApiResponse::success(DiagnosticResponse {
        advisory: report.recommendation.advisory().to_string(),
        report,
        revenue_projection,
    })))
}
