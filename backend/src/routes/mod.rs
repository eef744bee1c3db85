//! Route definitions for the Station Weather Resilience server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Live assessment and scenario injection
        .route("/assessment", get(handlers::get_assessment))
        .route("/assessment/simulate", post(handlers::simulate_assessment))
        .route("/scenarios", get(handlers::list_scenarios))
        .route("/scenarios/:id", get(handlers::get_scenario))
        // Static reference data
        .route("/locations", get(handlers::list_locations))
        .route("/history/events", get(handlers::list_historical_events))
}
