//! # Water Demand Estimate
//!
//! Community water demand from population and ambient temperature.
//! Consumption rises 5% per degree above a comfort threshold; there is no
//! discount below it, so the temperature factor never drops under 1.

/// Baseline consumption per person per day, liters.
pub const BASE_CONSUMPTION_LITERS: f64 = 50.0;

/// Temperature above which demand starts climbing, °C.
pub const COMFORT_THRESHOLD_C: f64 = 20.0;

/// Relative demand increase per °C above the comfort threshold.
pub const DEMAND_SLOPE_PER_C: f64 = 0.05;

/// Estimate total daily water demand in liters.
///
/// Monotonically non-decreasing in both population and temperature;
/// always non-negative since the temperature factor is >= 1.
pub fn predict_water_demand(temperature_c: f64, population: u32) -> f64 {
    let temp_factor = 1.0 + (temperature_c - COMFORT_THRESHOLD_C).max(0.0) * DEMAND_SLOPE_PER_C;
    population as f64 * BASE_CONSUMPTION_LITERS * temp_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(20.0, 1000, 50_000.0)] // at the threshold the factor is exactly 1
    #[case(30.0, 1000, 75_000.0)] // ten degrees above: factor 1.5
    #[case(10.0, 1000, 50_000.0)] // no discount below the threshold
    #[case(35.0, 0, 0.0)]
    fn known_demand_points(#[case] temp: f64, #[case] population: u32, #[case] expected: f64) {
        assert_eq!(predict_water_demand(temp, population), expected);
    }

    proptest! {
        #[test]
        fn monotone_in_temperature(temp in 20.0f64..50.0, delta in 0.0f64..10.0, pop in 0u32..100_000) {
            prop_assert!(
                predict_water_demand(temp + delta, pop) >= predict_water_demand(temp, pop)
            );
        }

        #[test]
        fn monotone_in_population(temp in 0.0f64..50.0, pop in 0u32..100_000, extra in 0u32..1000) {
            prop_assert!(
                predict_water_demand(temp, pop + extra) >= predict_water_demand(temp, pop)
            );
        }

        #[test]
        fn never_negative(temp in -50.0f64..60.0, pop in 0u32..1_000_000) {
            prop_assert!(predict_water_demand(temp, pop) >= 0.0);
        }
    }
}
