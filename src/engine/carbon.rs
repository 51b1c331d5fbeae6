//! # Carbon Credit Valuation
//!
//! Converts solar production into avoided CO2 (relative to a diesel
//! baseline) and the market value of the corresponding credits. Both
//! factors are fixed policy parameters, not per-call inputs.

use serde::{Deserialize, Serialize};

/// Emissions displaced per kWh of solar generation, kg CO2 per kWh
/// (diesel generator baseline).
pub const DIESEL_EMISSION_FACTOR: f64 = 0.85;

/// Average carbon market price, USD per kg of CO2.
pub const CARBON_MARKET_PRICE_USD: f64 = 0.04;

/// Avoided emissions and their monetized value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonCredits {
    pub co2_saved_kg: f64,
    pub value_usd: f64,
}

/// Value the avoided emissions for the given solar production.
///
/// `solar_energy_kwh` is assumed non-negative; the caller guarantees it
/// (the solar estimator floors its output at zero).
pub fn calculate_carbon_credits(solar_energy_kwh: f64) -> CarbonCredits {
    let co2_saved_kg = solar_energy_kwh * DIESEL_EMISSION_FACTOR;
    CarbonCredits {
        co2_saved_kg,
        value_usd: co2_saved_kg * CARBON_MARKET_PRICE_USD,
    }
}
