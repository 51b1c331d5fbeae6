//! # Operating Recommendation
//!
//! Compares available solar energy against the energy cost of meeting
//! water demand and classifies the balance into one of three tiers.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Energy required to pump and purify one liter of water, kWh.
pub const PUMP_ENERGY_KWH_PER_LITER: f64 = 0.005;

/// Ratio at or above which solar fully covers demand.
pub const OPTIMAL_THRESHOLD: f64 = 1.0;

/// Ratio at or above which solar covers a workable fraction of demand.
pub const PARTIAL_THRESHOLD: f64 = 0.6;

/// Dimensionless quotient of solar supply over the pumping energy needed
/// for the demanded water.
///
/// Zero demand means there is nothing to cover: the ratio is defined as
/// +infinity so the classifier resolves to [`Recommendation::Optimal`]
/// instead of faulting on the division.
pub fn efficiency_ratio(solar_energy_kwh: f64, water_demand_liters: f64) -> f64 {
    if water_demand_liters == 0.0 {
        return f64::INFINITY;
    }
    solar_energy_kwh / (water_demand_liters * PUMP_ENERGY_KWH_PER_LITER)
}

/// Qualitative operating recommendation, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Recommendation {
    /// Energy deficit: prioritize purification over secondary uses.
    Critical,
    /// Solar covers a fraction of demand: hybrid grid support at peak.
    Partial,
    /// Solar fully covers demand: divert surplus to green-asset conversion.
    Optimal,
}

impl Recommendation {
    /// Classify an efficiency ratio. Tier boundaries are closed on the
    /// lower bound of each higher tier: exactly 1.0 is Optimal, exactly
    /// 0.6 is Partial.
    pub fn classify(ratio: f64) -> Self {
        if ratio >= OPTIMAL_THRESHOLD {
            Recommendation::Optimal
        } else if ratio >= PARTIAL_THRESHOLD {
            Recommendation::Partial
        } else {
            Recommendation::Critical
        }
    }

    /// Operator-facing advisory text for this tier.
    pub fn advisory(&self) -> &'static str {
        match self {
            Recommendation::Optimal => {
                "Solar energy covers 100% of demand. Allocating surplus energy to green-asset conversion."
            }
            Recommendation::Partial => {
                "Solar covers a fraction of demand. Activate grid-hybrid mode during peak hours."
            }
            Recommendation::Critical => {
                "Energy deficit detected. Prioritize purification units over secondary irrigation."
            }
        }
    }
}
