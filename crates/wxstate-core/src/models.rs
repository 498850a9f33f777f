//! Core data models for airport weather-state classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Flight-visibility category of an airport at observation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlightCategory {
    /// Instrument meteorological conditions (below the global 1000 ft / 3 sm floor)
    Imc,
    /// Marginal conditions (above the IMC floor, below the airport's VMC minima)
    Mmc,
    /// Visual meteorological conditions (at or above the airport's VMC minima)
    Vmc,
}

impl fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlightCategory::Imc => "IMC",
            FlightCategory::Mmc => "MMC",
            FlightCategory::Vmc => "VMC",
        };
        f.write_str(name)
    }
}

/// A single surface weather observation for one airport.
///
/// Only the airport code, ceiling and visibility drive the current decision
/// rule. Wind and condition fields are carried through unchanged, reserved
/// for future per-airport thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Airport code, matched case-sensitively against the minima table
    pub airport: String,
    /// Ceiling in feet
    pub ceiling_ft: f64,
    /// Visibility in statute miles
    pub visibility_sm: f64,
    /// Wind direction in degrees (0-360)
    #[serde(default)]
    pub wind_direction_deg: f64,
    /// Wind speed in knots
    #[serde(default)]
    pub wind_speed_kt: f64,
    /// Reported condition code (e.g. "RA", "BR"), unused by the decision rule
    #[serde(default)]
    pub condition_code: String,
}

impl WeatherObservation {
    /// Create an observation with only the fields the decision rule reads.
    pub fn new(airport: impl Into<String>, ceiling_ft: f64, visibility_sm: f64) -> Self {
        Self {
            airport: airport.into(),
            ceiling_ft,
            visibility_sm,
            wind_direction_deg: 0.0,
            wind_speed_kt: 0.0,
            condition_code: String::new(),
        }
    }

    /// Set the wind fields.
    pub fn with_wind(mut self, wind_direction_deg: f64, wind_speed_kt: f64) -> Self {
        self.wind_direction_deg = wind_direction_deg;
        self.wind_speed_kt = wind_speed_kt;
        self
    }

    /// Set the condition code.
    pub fn with_condition(mut self, condition_code: impl Into<String>) -> Self {
        self.condition_code = condition_code.into();
        self
    }
}
