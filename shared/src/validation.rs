//! Validation and normalization utilities
//!
//! Observation normalization enforces the invariant that provider sentinel
//! values and out-of-range readings reach the fusion engine as absent fields,
//! never as numbers.

use thiserror::Error;
use validator::Validate;

use crate::models::{Location, ObservationStatus, WeatherObservation};

/// Problems with the monitored location table
#[derive(Error, Debug)]
pub enum LocationTableError {
    #[error("location table is empty")]
    Empty,

    #[error("duplicate location id '{0}'")]
    DuplicateId(String),

    #[error("location '{id}': {source}")]
    Invalid {
        id: String,
        source: validator::ValidationErrors,
    },
}

/// Fill value some providers emit for "no data"
pub const NO_DATA_SENTINEL: f64 = -999.0;

/// Plausible bounds per observation field; anything outside is treated as an
/// invalid observation and cleared
pub const TEMPERATURE_RANGE_C: (f64, f64) = (-90.0, 60.0);
pub const HUMIDITY_RANGE_PCT: (f64, f64) = (0.0, 100.0);
pub const PRECIPITATION_RANGE_MM_H: (f64, f64) = (0.0, 500.0);
pub const WIND_SPEED_RANGE_MPS: (f64, f64) = (0.0, 150.0);
pub const WIND_DIRECTION_RANGE_DEG: (f64, f64) = (0.0, 359.0);
pub const PRESSURE_RANGE_HPA: (f64, f64) = (850.0, 1100.0);

fn normalize_value(value: Option<f64>, range: (f64, f64)) -> Option<f64> {
    let v = value?;
    if !v.is_finite() || v == NO_DATA_SENTINEL || v < range.0 || v > range.1 {
        return None;
    }
    Some(v)
}

/// Clear sentinel and out-of-range fields from an observation.
///
/// An `Unavailable` observation comes back with every field cleared, whatever
/// the payload claimed to carry.
pub fn normalize_observation(obs: WeatherObservation) -> WeatherObservation {
    if obs.status == ObservationStatus::Unavailable {
        return WeatherObservation::unavailable(obs.source);
    }

    WeatherObservation {
        source: obs.source,
        status: obs.status,
        temperature: normalize_value(obs.temperature, TEMPERATURE_RANGE_C),
        humidity: normalize_value(obs.humidity, HUMIDITY_RANGE_PCT),
        precipitation_rate: normalize_value(obs.precipitation_rate, PRECIPITATION_RANGE_MM_H),
        wind_speed: normalize_value(obs.wind_speed, WIND_SPEED_RANGE_MPS),
        wind_direction: normalize_value(obs.wind_direction, WIND_DIRECTION_RANGE_DEG),
        pressure: normalize_value(obs.pressure, PRESSURE_RANGE_HPA),
    }
}

/// Validate a single location entry
pub fn validate_location(location: &Location) -> Result<(), LocationTableError> {
    location.validate().map_err(|e| LocationTableError::Invalid {
        id: location.id.clone(),
        source: e,
    })
}

/// Validate the full location table: every entry well-formed, ids unique
pub fn validate_locations(locations: &[Location]) -> Result<(), LocationTableError> {
    if locations.is_empty() {
        return Err(LocationTableError::Empty);
    }
    let mut seen = std::collections::HashSet::new();
    for location in locations {
        validate_location(location)?;
        if !seen.insert(location.id.as_str()) {
            return Err(LocationTableError::DuplicateId(location.id.clone()));
        }
    }
    Ok(())
}
