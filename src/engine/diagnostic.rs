//! # Diagnostic Runner
//!
//! Runs the full estimator pipeline in its fixed order (solar, water,
//! carbon, classifier) and assembles the results into one report.

use serde::{Deserialize, Serialize};

use super::carbon::calculate_carbon_credits;
use super::recommend::{efficiency_ratio, Recommendation};
use super::solar::{predict_energy, DEFAULT_PANEL_EFFICIENCY};
use super::water::predict_water_demand;

/// Environmental and demographic inputs for one diagnostic run.
///
/// The engine does not enforce domain bounds; the service layer
/// constrains temperature to [0, 50] °C and sunlight to [0, 14] h before
/// building this value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteConditions {
    pub temperature_c: f64,
    pub sunlight_hours: f64,
    pub population: u32,
    /// Overrides [`DEFAULT_PANEL_EFFICIENCY`] when set.
    pub panel_efficiency: Option<f64>,
}

/// Complete output of one diagnostic run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub solar_energy_kwh: f64,
    pub water_demand_liters: f64,
    pub co2_saved_kg: f64,
    pub credits_value_usd: f64,
    /// +infinity when demand is zero; serialized as null in JSON.
    pub efficiency_ratio: f64,
    pub recommendation: Recommendation,
}

/// Run all four estimators for the given site conditions.
///
/// Pure and deterministic: identical inputs produce bit-identical
/// outputs.
pub fn run_diagnostic(site: &SiteConditions) -> Diagnostic {
    let efficiency = site.panel_efficiency.unwrap_or(DEFAULT_PANEL_EFFICIENCY);

    let solar_energy_kwh = predict_energy(site.temperature_c, site.sunlight_hours, efficiency);
    let water_demand_liters = predict_water_demand(site.temperature_c, site.population);
    let credits = calculate_carbon_credits(solar_energy_kwh);
    let ratio = efficiency_ratio(solar_energy_kwh, water_demand_liters);

    Diagnostic {
        solar_energy_kwh,
        water_demand_liters,
        co2_saved_kg: credits.co2_saved_kg,
        credits_value_usd: credits.value_usd,
        efficiency_ratio: ratio,
        recommendation: Recommendation::classify(ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_site() -> SiteConditions {
        SiteConditions {
            temperature_c: 25.0,
            sunlight_hours: 8.0,
            population: 1000,
            panel_efficiency: None,
        }
    }

    #[test]
    fn reference_site_report() {
        let report = run_diagnostic(&reference_site());
        assert_eq!(report.solar_energy_kwh, 72_000.0);
        // 25 °C is 5 degrees over the comfort threshold: factor 1.25.
        assert_eq!(report.water_demand_liters, 62_500.0);
        assert_eq!(report.co2_saved_kg, 72_000.0 * 0.85);
        assert_eq!(report.recommendation, Recommendation::Optimal);
    }

    #[test]
    fn efficiency_override_is_honored() {
        let mut site = reference_site();
        site.panel_efficiency = Some(0.09);
        let half = run_diagnostic(&site);
        let full = run_diagnostic(&reference_site());
        assert_eq!(half.solar_energy_kwh, full.solar_energy_kwh / 2.0);
    }

    #[test]
    fn empty_settlement_is_optimal() {
        let report = run_diagnostic(&SiteConditions {
            temperature_c: 30.0,
            sunlight_hours: 6.0,
            population: 0,
            panel_efficiency: None,
        });
        assert_eq!(report.water_demand_liters, 0.0);
        assert!(report.efficiency_ratio.is_infinite());
        assert_eq!(report.recommendation, Recommendation::Optimal);
    }

    #[test]
    fn deficit_site_is_critical() {
        // Barely any sun, large settlement on a hot day.
        let report = run_diagnostic(&SiteConditions {
            temperature_c: 42.0,
            sunlight_hours: 1.0,
            population: 50_000,
            panel_efficiency: None,
        });
        assert_eq!(report.recommendation, Recommendation::Critical);
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let a = run_diagnostic(&reference_site());
        let b = run_diagnostic(&reference_site());
        assert_eq!(a.solar_energy_kwh.to_bits(), b.solar_energy_kwh.to_bits());
        assert_eq!(a.water_demand_liters.to_bits(), b.water_demand_liters.to_bits());
        assert_eq!(a.credits_value_usd.to_bits(), b.credits_value_usd.to_bits());
        assert_eq!(a.recommendation, b.recommendation);
    }
}
