//! HTTP handlers for the Station Weather Resilience server

pub mod assessment;
pub mod health;
pub mod reference;

pub use assessment::{get_assessment, get_scenario, list_scenarios, simulate_assessment};
pub use health::health_check;
pub use reference::{list_historical_events, list_locations};
