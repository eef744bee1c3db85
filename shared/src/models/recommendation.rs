//! Operational recommendation models

use serde::{Deserialize, Serialize};

/// Severity tag for an operational recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Medium,
    Preventive,
}

/// A concrete, human-readable operational action.
///
/// An empty recommendation set is a meaningful output ("normal conditions"),
/// distinct from having no reading at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub action: String,
    /// Names of the locations this action cites; empty for site-wide actions
    pub locations: Vec<String>,
    /// Estimated number of passengers affected, when the rule defines one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_passengers: Option<u32>,
}
