//! Per-source weather observation models

use serde::{Deserialize, Serialize};

/// Identifier of an observation source.
///
/// Each source carries a fixed trust weight used by the fusion engine; all
/// weights are declared here, up front, rather than per call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    /// Locally authoritative ground-station network
    GroundStation,
    /// Satellite-derived coverage
    Satellite,
}

impl SourceId {
    /// Fixed trust weight applied to every field this source contributes
    pub fn trust_weight(self) -> f64 {
        match self {
            SourceId::GroundStation => 0.6,
            SourceId::Satellite => 0.4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceId::GroundStation => "ground_station",
            SourceId::Satellite => "satellite",
        }
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Retrieval outcome for a single source in one fusion cycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ObservationStatus {
    Success,
    Unavailable,
}

/// Canonical point-in-time observation from one source.
///
/// Every field is optional even on success: a source may report partial data,
/// and sentinel or out-of-range values are cleared by the normalizer before
/// fusion. An `Unavailable` observation carries no field values at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub source: SourceId,
    pub status: ObservationStatus,
    /// °C
    pub temperature: Option<f64>,
    /// %, 0-100
    pub humidity: Option<f64>,
    /// mm/h, >= 0
    pub precipitation_rate: Option<f64>,
    /// m/s, >= 0
    pub wind_speed: Option<f64>,
    /// degrees, 0-359
    pub wind_direction: Option<f64>,
    /// hPa
    pub pressure: Option<f64>,
}

impl WeatherObservation {
    /// Marker for a source whose retrieval failed or timed out
    pub fn unavailable(source: SourceId) -> Self {
        Self {
            source,
            status: ObservationStatus::Unavailable,
            temperature: None,
            humidity: None,
            precipitation_rate: None,
            wind_speed: None,
            wind_direction: None,
            pressure: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ObservationStatus::Success
    }

    /// Whether this observation contributes at least one field to fusion
    pub fn has_any_field(&self) -> bool {
        self.temperature.is_some()
            || self.humidity.is_some()
            || self.precipitation_rate.is_some()
            || self.wind_speed.is_some()
            || self.wind_direction.is_some()
            || self.pressure.is_some()
    }
}
