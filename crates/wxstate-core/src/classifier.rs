//! Flight-category decision rule.
//!
//! Two global floors shared by every airport, then the airport's own VMC
//! minima. The rule is a pure function of the observation and the table.

use crate::minima::MinimaTable;
use crate::models::{FlightCategory, WeatherObservation};

/// Ceiling below which conditions are IMC at every airport, in feet.
pub const IMC_CEILING_FLOOR_FT: f64 = 1000.0;
/// Visibility below which conditions are IMC at every airport, in statute miles.
pub const IMC_VISIBILITY_FLOOR_SM: f64 = 3.0;

impl MinimaTable {
    /// Classify an observation against this table.
    ///
    /// Returns `None` when the airport code is not tracked; callers must
    /// treat that as "classification unavailable", not as a category.
    /// Numeric fields are compared as-is, without validation: a negative
    /// ceiling or visibility simply falls below the IMC floor. Wind and
    /// condition fields do not affect the result.
    pub fn classify(&self, observation: &WeatherObservation) -> Option<FlightCategory> {
        let minima = self.lookup(&observation.airport)?;

        // Global floor first, strict '<'. A handful of airports carry
        // 1000 ft / 3 sm minima, so exactly 1000/3 must reach the VMC
        // check rather than classify IMC.
        if observation.ceiling_ft < IMC_CEILING_FLOOR_FT
            || observation.visibility_sm < IMC_VISIBILITY_FLOOR_SM
        {
            return Some(FlightCategory::Imc);
        }

        if observation.ceiling_ft >= f64::from(minima.min_ceiling_ft)
            && observation.visibility_sm >= minima.min_visibility_sm
        {
            return Some(FlightCategory::Vmc);
        }

        Some(FlightCategory::Mmc)
    }
}

/// Classify one observation against the standard minima table.
///
/// Flat entry point mirroring the upstream interface: wind direction, wind
/// speed and the condition code are accepted but currently unused.
pub fn classify_flight_category(
    airport: &str,
    ceiling_ft: f64,
    visibility_sm: f64,
    wind_direction_deg: f64,
    wind_speed_kt: f64,
    condition_code: &str,
) -> Option<FlightCategory> {
    let observation = WeatherObservation::new(airport, ceiling_ft, visibility_sm)
        .with_wind(wind_direction_deg, wind_speed_kt)
        .with_condition(condition_code);
    MinimaTable::standard().classify(&observation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(airport: &str, ceiling_ft: f64, visibility_sm: f64) -> Option<FlightCategory> {
        MinimaTable::standard().classify(&WeatherObservation::new(
            airport,
            ceiling_ft,
            visibility_sm,
        ))
    }

    #[test]
    fn low_ceiling_is_imc_regardless_of_airport_minima() {
        assert_eq!(classify("ABQ", 500.0, 10.0), Some(FlightCategory::Imc));
        assert_eq!(classify("TUS", 999.0, 10.0), Some(FlightCategory::Imc));
    }

    #[test]
    fn low_visibility_is_imc_regardless_of_ceiling() {
        assert_eq!(classify("ABQ", 10_000.0, 2.9), Some(FlightCategory::Imc));
    }

    #[test]
    fn vmc_at_or_above_airport_minima() {
        // ABQ requires 3000 ft / 5 sm
        assert_eq!(classify("ABQ", 3500.0, 6.0), Some(FlightCategory::Vmc));
        assert_eq!(classify("ABQ", 3000.0, 5.0), Some(FlightCategory::Vmc));
        // TUS requires 7500 ft / 3 sm
        assert_eq!(classify("TUS", 8000.0, 4.0), Some(FlightCategory::Vmc));
    }

    #[test]
    fn marginal_between_floor_and_minima() {
        assert_eq!(classify("ABQ", 2000.0, 4.0), Some(FlightCategory::Mmc));
        assert_eq!(classify("TUS", 6000.0, 4.0), Some(FlightCategory::Mmc));
        // One dimension at minima is not enough
        assert_eq!(classify("ABQ", 3000.0, 4.0), Some(FlightCategory::Mmc));
        assert_eq!(classify("ABQ", 2900.0, 5.0), Some(FlightCategory::Mmc));
    }

    #[test]
    fn floor_boundary_is_exclusive() {
        // GYY's minima sit exactly on the global floor, so 1000/3 is VMC
        // and the MMC band there has zero width.
        assert_eq!(classify("GYY", 1000.0, 3.0), Some(FlightCategory::Vmc));
        assert_eq!(classify("GYY", 999.9, 3.0), Some(FlightCategory::Imc));
        assert_eq!(classify("GYY", 1000.0, 2.99), Some(FlightCategory::Imc));
        // For an ordinary airport 1000/3 exactly is marginal, not IMC
        assert_eq!(classify("ABQ", 1000.0, 3.0), Some(FlightCategory::Mmc));
    }

    #[test]
    fn unknown_airport_is_unclassified() {
        assert_eq!(classify("ZZZ", 9999.0, 99.0), None);
        assert_eq!(classify("ZZZ", 100.0, 0.5), None);
        assert_eq!(classify("", 5000.0, 10.0), None);
    }

    #[test]
    fn out_of_range_inputs_are_compared_as_is() {
        // No input validation: negative numbers fall through the floor check.
        assert_eq!(classify("ABQ", -500.0, 10.0), Some(FlightCategory::Imc));
        assert_eq!(classify("ABQ", 2000.0, -1.0), Some(FlightCategory::Imc));
    }

    #[test]
    fn wind_and_condition_do_not_change_the_result() {
        let calm = classify_flight_category("SEA", 4500.0, 6.0, 0.0, 0.0, "");
        let stormy = classify_flight_category("SEA", 4500.0, 6.0, 270.0, 45.0, "TS");
        assert_eq!(calm, Some(FlightCategory::Vmc));
        assert_eq!(calm, stormy);
    }

    #[test]
    fn flat_entry_point_matches_table_method() {
        assert_eq!(
            classify_flight_category("ORD", 1900.0, 3.0, 180.0, 8.0, "BR"),
            classify("ORD", 1900.0, 3.0)
        );
    }
}
