//! Historical extreme-event models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A documented past extreme-weather event.
///
/// Immutable reference data; the catalog is a fixed table, not a time series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoricalEvent {
    pub name: String,
    pub date: NaiveDate,
    pub region: String,
    /// mm/h
    pub peak_precipitation: f64,
    /// m/s
    pub peak_wind_speed: f64,
    /// °C
    pub min_temperature: f64,
    /// °C
    pub max_temperature: f64,
    /// hPa
    pub min_pressure: f64,
    pub narrative: String,
    pub impact_summary: String,
}

/// Qualitative severity label for an advisory, derived from the live risk
/// score, never from the matched event's own severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryLevel {
    Info,
    Watch,
    Advisory,
    Warning,
}

impl AdvisoryLevel {
    pub fn from_risk_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => AdvisoryLevel::Warning,
            50..=69 => AdvisoryLevel::Advisory,
            30..=49 => AdvisoryLevel::Watch,
            _ => AdvisoryLevel::Info,
        }
    }
}

/// Outcome of contextualizing a reading against the historical catalog.
///
/// Historical context annotates the live risk signal; it never overrides or
/// suppresses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalAdvisory {
    pub level: AdvisoryLevel,
    /// 85 when a similar event was found, 50 otherwise
    pub confidence: u8,
    pub context: String,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_event: Option<HistoricalEvent>,
}
