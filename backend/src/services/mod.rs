//! Business logic services for the Station Weather Resilience server

pub mod assessment;
pub mod scenario;

pub use assessment::{Assessment, AssessmentService, RiskSummary};
pub use scenario::{builtin_scenarios, find_scenario, Scenario, ScenarioReading};
