//! HTTP handlers for static reference data

use axum::{extract::State, Json};
use shared::models::{HistoricalEvent, Location};

use crate::AppState;

/// List the monitored locations
pub async fn list_locations(State(state): State<AppState>) -> Json<Vec<Location>> {
    Json(state.assessment.locations().to_vec())
}

/// List the historical event catalog
pub async fn list_historical_events(State(state): State<AppState>) -> Json<Vec<HistoricalEvent>> {
    Json(state.assessment.catalog().to_vec())
}
