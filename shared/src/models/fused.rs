//! Fused reading models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::SourceId;
use crate::types::DataQuality;

/// One reconciled reading per fusion cycle.
///
/// Every field is always populated: gaps left by the sources are filled with
/// the neutral-default policy table, so downstream scoring never operates on
/// missing data. A reading is immutable once produced; the next cycle (or an
/// injected scenario) supersedes it, nothing mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusedReading {
    pub timestamp: DateTime<Utc>,
    /// °C
    pub temperature: f64,
    /// %, 0-100
    pub humidity: f64,
    /// mm/h
    pub precipitation_rate: f64,
    /// m/s
    pub wind_speed: f64,
    /// degrees
    pub wind_direction: f64,
    /// hPa
    pub pressure: f64,
    /// Sources that contributed at least one field, in cycle order
    pub contributing_sources: Vec<SourceId>,
    /// 0-100, driven solely by source-count redundancy
    pub confidence: u8,
    pub data_quality: DataQuality,
}
