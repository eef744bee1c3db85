//! Risk scoring models

use serde::{Deserialize, Serialize};

use crate::models::Location;
use crate::types::RiskBand;

/// Risk score for one location in one fusion cycle.
///
/// Never persisted or incrementally updated; always recomputed from the
/// current reading and the location's static attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskScore {
    pub location_id: String,
    /// 0-100
    pub score: u8,
}

impl RiskScore {
    pub fn band(&self) -> RiskBand {
        RiskBand::from_score(self.score)
    }
}

/// A location paired with its score for the current cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredLocation {
    pub location: Location,
    pub risk: RiskScore,
}
