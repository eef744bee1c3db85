//! Monitored location models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A monitored location, e.g. a station platform.
///
/// Static reference data supplied by the operator; the core only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    /// A sheltered location contributes zero exposure regardless of factor
    pub is_sheltered: bool,
    /// 0.0-1.0, higher = more exposed to weather impact
    #[validate(range(min = 0.0, max = 1.0))]
    pub exposure_factor: f64,
}
