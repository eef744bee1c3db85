//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Quality label attached to a fused reading.
///
/// `Estimated` marks a reading built entirely from neutral defaults because
/// no source contributed data; it must never be presented as a measurement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataQuality {
    Measured,
    Estimated,
}

/// Operational risk band for a scored location
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    /// Score >= 70
    High,
    /// Score in [50, 70)
    Elevated,
    /// Score < 50
    Normal,
}

impl RiskBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => RiskBand::High,
            50..=69 => RiskBand::Elevated,
            _ => RiskBand::Normal,
        }
    }
}
