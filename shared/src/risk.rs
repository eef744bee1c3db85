//! Per-location risk scoring
//!
//! Weighted sum of six independent step-threshold factors. The breakpoints
//! are policy: operators can cite exactly which threshold was crossed, so any
//! change to them is a policy change, not a bug fix.

use crate::models::{FusedReading, Location, RiskScore};

const PRECIPITATION_WEIGHT: f64 = 0.30;
const WIND_WEIGHT: f64 = 0.25;
const EXPOSURE_WEIGHT: f64 = 0.15;
const HUMIDITY_WEIGHT: f64 = 0.10;
const TEMPERATURE_WEIGHT: f64 = 0.10;
const PRESSURE_WEIGHT: f64 = 0.10;

/// Compute the 0-100 risk score for one location.
///
/// Pure and deterministic: identical inputs always yield identical output.
pub fn score(reading: &FusedReading, location: &Location) -> RiskScore {
    let precipitation_factor = if reading.precipitation_rate > 5.0 {
        100.0
    } else if reading.precipitation_rate > 0.5 {
        50.0
    } else {
        0.0
    };

    let wind_factor = if reading.wind_speed > 14.0 {
        100.0
    } else if reading.wind_speed > 8.0 {
        60.0
    } else {
        0.0
    };

    let exposure_factor = if location.is_sheltered {
        0.0
    } else {
        location.exposure_factor * 100.0
    };

    let humidity_factor = if reading.humidity > 85.0 { 50.0 } else { 0.0 };

    let temperature_factor = if reading.temperature > 35.0 || reading.temperature < 0.0 {
        70.0
    } else {
        0.0
    };

    let pressure_factor = if reading.pressure < 1000.0 { 30.0 } else { 0.0 };

    let total = precipitation_factor * PRECIPITATION_WEIGHT
        + wind_factor * WIND_WEIGHT
        + exposure_factor * EXPOSURE_WEIGHT
        + humidity_factor * HUMIDITY_WEIGHT
        + temperature_factor * TEMPERATURE_WEIGHT
        + pressure_factor * PRESSURE_WEIGHT;

    RiskScore {
        location_id: location.id.clone(),
        score: total.round().clamp(0.0, 100.0) as u8,
    }
}
