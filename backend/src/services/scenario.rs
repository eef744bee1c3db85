//! Scenario presets and reading injection
//!
//! A scenario is an explicit fused reading handed to the assessment pipeline
//! instead of a live cycle. The presets reproduce documented extreme events
//! for drills and demonstrations.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::models::FusedReading;
use shared::types::DataQuality;
use validator::Validate;

/// Caller-supplied reading to assess instead of a live fusion cycle
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScenarioReading {
    #[validate(range(min = -90.0, max = 60.0))]
    pub temperature: f64,

    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f64,

    #[validate(range(min = 0.0, max = 500.0))]
    pub precipitation_rate: f64,

    #[validate(range(min = 0.0, max = 150.0))]
    pub wind_speed: f64,

    #[validate(range(min = 0.0, max = 359.0))]
    pub wind_direction: f64,

    #[validate(range(min = 850.0, max = 1100.0))]
    pub pressure: f64,
}

impl ScenarioReading {
    /// Build an injected reading; quality is always `Estimated` so scripted
    /// values can never be mistaken for measurements
    pub fn into_reading(self) -> FusedReading {
        FusedReading {
            timestamp: Utc::now(),
            temperature: self.temperature,
            humidity: self.humidity,
            precipitation_rate: self.precipitation_rate,
            wind_speed: self.wind_speed,
            wind_direction: self.wind_direction,
            pressure: self.pressure,
            contributing_sources: Vec::new(),
            confidence: 50,
            data_quality: DataQuality::Estimated,
        }
    }
}

/// A named preset scenario
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub reading: ScenarioReading,
}

/// Preset scenarios modeled on documented extreme events
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "severe-dana".to_string(),
            name: "Severe DANA".to_string(),
            description: "Cut-off low with torrential rain and strong wind".to_string(),
            reading: ScenarioReading {
                temperature: 18.4,
                humidity: 92.0,
                precipitation_rate: 22.3,
                wind_speed: 24.7,
                wind_direction: 235.0,
                pressure: 998.0,
            },
        },
        Scenario {
            id: "filomena-class".to_string(),
            name: "Filomena-class Winter Storm".to_string(),
            description: "Heavy snowfall conditions with near-freezing temperatures".to_string(),
            reading: ScenarioReading {
                temperature: 3.7,
                humidity: 95.0,
                precipitation_rate: 32.8,
                wind_speed: 31.2,
                wind_direction: 210.0,
                pressure: 992.0,
            },
        },
        Scenario {
            id: "extreme-heat".to_string(),
            name: "Extreme Heat".to_string(),
            description: "Dry heat wave with infrastructure stress".to_string(),
            reading: ScenarioReading {
                temperature: 41.2,
                humidity: 32.0,
                precipitation_rate: 0.0,
                wind_speed: 14.3,
                wind_direction: 180.0,
                pressure: 1025.0,
            },
        },
    ]
}

/// Look up a preset by its id
pub fn find_scenario(id: &str) -> Option<Scenario> {
    builtin_scenarios().into_iter().find(|s| s.id == id)
}
