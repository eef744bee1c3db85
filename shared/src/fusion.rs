//! Multi-source fusion engine
//!
//! Combines the cycle's observations into a single weighted reading. Each
//! field is fused independently: a source missing one field still contributes
//! fully to the others. Confidence reflects source-count redundancy only;
//! disagreement between sources is deliberately not detected or penalized.

use chrono::{DateTime, Utc};

use crate::models::{FusedReading, SourceId, WeatherObservation};
use crate::types::DataQuality;
use crate::validation::normalize_observation;

/// Neutral defaults substituted when no source supplied a field.
///
/// This is policy, not plumbing: the defaults encode a "low risk assumption"
/// so downstream scoring never operates on missing data, and they must never
/// be read back as measurements.
#[derive(Debug, Clone, Copy)]
pub struct NeutralDefaults {
    pub temperature: f64,
    pub humidity: f64,
    pub precipitation_rate: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub pressure: f64,
}

pub const NEUTRAL_DEFAULTS: NeutralDefaults = NeutralDefaults {
    temperature: 18.0,
    humidity: 60.0,
    precipitation_rate: 0.0,
    wind_speed: 5.0,
    wind_direction: 180.0,
    pressure: 1013.0,
};

const CONFIDENCE_NO_SOURCES: u8 = 50;
const CONFIDENCE_SINGLE_SOURCE: u8 = 75;
const CONFIDENCE_REDUNDANT: u8 = 95;

/// Confidence step function over the number of contributing sources
pub fn confidence_for(source_count: usize) -> u8 {
    match source_count {
        0 => CONFIDENCE_NO_SOURCES,
        1 => CONFIDENCE_SINGLE_SOURCE,
        _ => CONFIDENCE_REDUNDANT,
    }
}

/// Weighted accumulator for one field
#[derive(Default)]
struct FieldAccumulator {
    weighted_sum: f64,
    weight_sum: f64,
}

impl FieldAccumulator {
    fn add(&mut self, value: Option<f64>, weight: f64) {
        if let Some(v) = value {
            self.weighted_sum += v * weight;
            self.weight_sum += weight;
        }
    }

    fn resolve(&self, default: f64) -> f64 {
        if self.weight_sum > 0.0 {
            self.weighted_sum / self.weight_sum
        } else {
            default
        }
    }
}

/// Fuse the cycle's observations into one reading, stamped `timestamp`.
///
/// Never fails: with zero usable sources the result is built entirely from
/// [`NEUTRAL_DEFAULTS`] with confidence 50 and quality `Estimated`. Inputs
/// are re-normalized here, so sentinel values are harmless even if a caller
/// skipped the normalizer.
pub fn fuse_at(observations: &[WeatherObservation], timestamp: DateTime<Utc>) -> FusedReading {
    let mut temperature = FieldAccumulator::default();
    let mut humidity = FieldAccumulator::default();
    let mut precipitation_rate = FieldAccumulator::default();
    let mut wind_speed = FieldAccumulator::default();
    let mut wind_direction = FieldAccumulator::default();
    let mut pressure = FieldAccumulator::default();
    let mut contributing_sources: Vec<SourceId> = Vec::new();

    for obs in observations {
        let obs = normalize_observation(obs.clone());
        if !obs.is_success() || !obs.has_any_field() {
            continue;
        }
        let weight = obs.source.trust_weight();

        temperature.add(obs.temperature, weight);
        humidity.add(obs.humidity, weight);
        precipitation_rate.add(obs.precipitation_rate, weight);
        wind_speed.add(obs.wind_speed, weight);
        wind_direction.add(obs.wind_direction, weight);
        pressure.add(obs.pressure, weight);

        if !contributing_sources.contains(&obs.source) {
            contributing_sources.push(obs.source);
        }
    }

    let confidence = confidence_for(contributing_sources.len());
    let data_quality = if contributing_sources.is_empty() {
        DataQuality::Estimated
    } else {
        DataQuality::Measured
    };

    FusedReading {
        timestamp,
        temperature: temperature.resolve(NEUTRAL_DEFAULTS.temperature),
        humidity: humidity.resolve(NEUTRAL_DEFAULTS.humidity),
        precipitation_rate: precipitation_rate.resolve(NEUTRAL_DEFAULTS.precipitation_rate),
        wind_speed: wind_speed.resolve(NEUTRAL_DEFAULTS.wind_speed),
        wind_direction: wind_direction.resolve(NEUTRAL_DEFAULTS.wind_direction),
        pressure: pressure.resolve(NEUTRAL_DEFAULTS.pressure),
        contributing_sources,
        confidence,
        data_quality,
    }
}

/// Fuse the cycle's observations, stamped with the current time
pub fn fuse(observations: &[WeatherObservation]) -> FusedReading {
    fuse_at(observations, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ObservationStatus;

    fn success(source: SourceId, temperature: Option<f64>) -> WeatherObservation {
        WeatherObservation {
            source,
            status: ObservationStatus::Success,
            temperature,
            humidity: None,
            precipitation_rate: None,
            wind_speed: None,
            wind_direction: None,
            pressure: None,
        }
    }

    #[test]
    fn test_weight_normalized_average() {
        let observations = vec![
            success(SourceId::GroundStation, Some(20.0)),
            success(SourceId::Satellite, Some(10.0)),
        ];
        let reading = fuse(&observations);
        // (20*0.6 + 10*0.4) / (0.6 + 0.4)
        assert!((reading.temperature - 16.0).abs() < 1e-9);
        assert_eq!(reading.confidence, 95);
    }

    #[test]
    fn test_single_source_value_passes_through() {
        let observations = vec![
            success(SourceId::GroundStation, Some(20.0)),
            WeatherObservation::unavailable(SourceId::Satellite),
        ];
        let reading = fuse(&observations);
        assert!((reading.temperature - 20.0).abs() < 1e-9);
        assert_eq!(reading.confidence, 75);
        assert_eq!(reading.contributing_sources, vec![SourceId::GroundStation]);
    }

    #[test]
    fn test_no_sources_yields_estimated_defaults() {
        let reading = fuse(&[]);
        assert_eq!(reading.confidence, 50);
        assert_eq!(reading.data_quality, DataQuality::Estimated);
        assert_eq!(reading.temperature, NEUTRAL_DEFAULTS.temperature);
        assert_eq!(reading.humidity, NEUTRAL_DEFAULTS.humidity);
        assert_eq!(reading.precipitation_rate, NEUTRAL_DEFAULTS.precipitation_rate);
        assert_eq!(reading.wind_speed, NEUTRAL_DEFAULTS.wind_speed);
        assert_eq!(reading.wind_direction, NEUTRAL_DEFAULTS.wind_direction);
        assert_eq!(reading.pressure, NEUTRAL_DEFAULTS.pressure);
        assert!(reading.contributing_sources.is_empty());
    }

    #[test]
    fn test_success_without_fields_does_not_contribute() {
        let observations = vec![success(SourceId::GroundStation, None)];
        let reading = fuse(&observations);
        assert_eq!(reading.confidence, 50);
        assert!(reading.contributing_sources.is_empty());
    }

    #[test]
    fn test_missing_field_falls_back_per_field() {
        let mut ground = success(SourceId::GroundStation, Some(3.5));
        ground.pressure = Some(990.0);
        let observations = vec![ground];
        let reading = fuse(&observations);
        assert!((reading.temperature - 3.5).abs() < 1e-9);
        assert!((reading.pressure - 990.0).abs() < 1e-9);
        // Humidity untouched by the source, neutral default applies
        assert_eq!(reading.humidity, NEUTRAL_DEFAULTS.humidity);
    }
}
