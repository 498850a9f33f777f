//! Parsing of comma-separated observation records.
//!
//! Record format, one observation per line:
//!
//! ```text
//! AIRPORT,CEILING_FT,VISIBILITY_SM[,WIND_DIR_DEG,WIND_SPEED_KT[,CONDITION]]
//! ```
//!
//! The wind and condition fields are optional; they are carried into the
//! observation but do not affect classification.

use thiserror::Error;
use wxstate_core::WeatherObservation;

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("expected 3 to 6 fields, got {0}")]
    WrongFieldCount(usize),
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, RecordError> {
    value.trim().parse().map_err(|_| RecordError::InvalidNumber {
        field,
        value: value.trim().to_string(),
    })
}

/// Parse a single observation record.
pub fn parse_record(line: &str) -> Result<WeatherObservation, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();
    if !(3..=6).contains(&fields.len()) {
        return Err(RecordError::WrongFieldCount(fields.len()));
    }

    let mut observation = WeatherObservation::new(
        fields[0].trim(),
        parse_number("ceiling", fields[1])?,
        parse_number("visibility", fields[2])?,
    );

    if let Some(value) = fields.get(3) {
        observation.wind_direction_deg = parse_number("wind direction", value)?;
    }
    if let Some(value) = fields.get(4) {
        observation.wind_speed_kt = parse_number("wind speed", value)?;
    }
    if let Some(value) = fields.get(5) {
        observation.condition_code = value.trim().to_string();
    }

    Ok(observation)
}
