//! HTTP handlers for assessment endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::{builtin_scenarios, find_scenario, Assessment, Scenario, ScenarioReading};
use crate::AppState;

/// Run a live fusion cycle and return the full assessment
pub async fn get_assessment(State(state): State<AppState>) -> AppResult<Json<Assessment>> {
    let assessment = state.assessment.run_cycle().await;
    Ok(Json(assessment))
}

/// Assess a caller-supplied reading instead of live data
pub async fn simulate_assessment(
    State(state): State<AppState>,
    Json(input): Json<ScenarioReading>,
) -> AppResult<Json<Assessment>> {
    input
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let assessment = state.assessment.assess_reading(input.into_reading());
    Ok(Json(assessment))
}

/// List the preset scenarios
pub async fn list_scenarios() -> Json<Vec<Scenario>> {
    Json(builtin_scenarios())
}

/// Fetch one preset scenario by id
pub async fn get_scenario(Path(id): Path<String>) -> AppResult<Json<Scenario>> {
    find_scenario(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("scenario '{}'", id)))
}
