//! # Solar Production Estimate
//!
//! Single-day solar yield model: irradiance scales linearly with sunlight
//! hours and is derated as ambient temperature rises above a reference
//! point, then converted to kWh through panel efficiency and array area.

/// Panel efficiency assumed when the caller does not supply one (typical
/// mono-crystalline module, 0.15-0.22).
pub const DEFAULT_PANEL_EFFICIENCY: f64 = 0.18;

/// Installed collector area of the community array in m².
pub const PANEL_AREA_SQM: f64 = 50.0;

/// Irradiance contributed by one hour of full sun, Wh/m².
pub const IRRADIANCE_PER_SUN_HOUR: f64 = 1000.0;

/// Ambient temperature at which the array delivers nameplate output, °C.
pub const REFERENCE_TEMP_C: f64 = 25.0;

/// Linear output change per °C of deviation from the reference
/// (negative: output drops 0.4% per degree above 25 °C).
pub const TEMP_COEFFICIENT_PER_C: f64 = -0.004;

/// Estimate solar energy production in kWh for one day.
///
/// Never returns a negative value: extreme temperatures can drive the
/// derating factor below zero, so the result is floored at 0.0.
pub fn predict_energy(temperature_c: f64, sunlight_hours: f64, panel_efficiency: f64) -> f64 {
    let derating = 1.0 + (temperature_c - REFERENCE_TEMP_C) * TEMP_COEFFICIENT_PER_C;
    let base_irradiance = sunlight_hours * IRRADIANCE_PER_SUN_HOUR * derating;
    (base_irradiance * panel_efficiency * PANEL_AREA_SQM).max(0.0)
}
