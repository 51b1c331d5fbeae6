//! # Revenue Projection
//!
//! Illustrative multi-day carbon-revenue projection built by perturbing
//! today's credit value with uniform relative noise. Purely decorative
//! forecasting: it carries no model and no contract beyond determinism
//! under a fixed seed, which is why the random source is injected rather
//! than drawn internally.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ForecastConfig;

/// One projected day of carbon-credit revenue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: NaiveDate,
    pub revenue_usd: f64,
}

/// Projects daily credit revenue over a short horizon.
#[derive(Debug, Clone)]
pub struct RevenueProjector {
    horizon_days: usize,
    noise_low: f64,
    noise_high: f64,
}

impl Default for RevenueProjector {
    fn default() -> Self {
        Self {
            horizon_days: 7,
            noise_low: -0.1,
            noise_high: 0.2,
        }
    }
}

impl RevenueProjector {
    pub fn from_config(cfg: &ForecastConfig) -> Self {
        Self {
            horizon_days: cfg.horizon_days,
            noise_low: cfg.noise_low,
            noise_high: cfg.noise_high,
        }
    }

    /// Perturb `daily_value_usd` once per projected day, starting at
    /// `start`. An empty horizon yields an empty projection.
    pub fn project<R: Rng>(
        &self,
        daily_value_usd: f64,
        start: NaiveDate,
        rng: &mut R,
    ) -> Vec<RevenuePoint> {
        (0..self.horizon_days)
            .map(|day| RevenuePoint {
                date: start + Duration::days(day as i64),
                revenue_usd: daily_value_usd
                    * (1.0 + rng.gen_range(self.noise_low..self.noise_high)),
            })
            .collect()
    }
}
