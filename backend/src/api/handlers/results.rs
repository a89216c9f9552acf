use axum::{extract::State, response::Json};
use std::sync::Arc;

use super::AppState;
use crate::api::error::ApiError;
use crate::api::models::{ProcessResultResponse, TeamResult, WinnersResponse};
use crate::services::processing::ProcessingService;
use crate::services::results::{current_standings, Standings};

pub async fn process_result(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProcessResultResponse>, ApiError> {
    let report = ProcessingService::new(&state.store, &state.config.scoring)
        .run()
        .map_err(|e| ApiError::storage("Error processing match results", e))?;

    Ok(Json(ProcessResultResponse {
        status: 1,
        message: "Match results processed successfully!".to_string(),
        teams_scored: report.teams_scored,
    }))
}

pub async fn team_result(
    State(state): State<Arc<AppState>>,
) -> Result<Json<WinnersResponse>, ApiError> {
    let standings = current_standings(&state.store)
        .map_err(|e| ApiError::storage("Error retrieving team results", e))?;

    match standings {
        Standings::NoScoredTeams => Err(ApiError::NoResults),
        Standings::Winners { top_points, teams } => Ok(Json(WinnersResponse {
            status: 1,
            top_points,
            winners: teams.into_iter().map(TeamResult::from).collect(),
        })),
    }
}
