use axum::{extract::State, response::Json};
use std::sync::Arc;

use super::AppState;
use crate::api::error::ApiError;
use crate::api::models::StatusResponse;
use crate::domain::TeamEntry;
use crate::services::registration::{register_team, Registration};

pub async fn add_team(
    State(state): State<Arc<AppState>>,
    Json(team): Json<TeamEntry>,
) -> Result<Json<StatusResponse>, ApiError> {
    let registration = register_team(&state.store, &team, &state.config.roster)
        .map_err(|e| ApiError::from_service(e, "Error adding team"))?;

    match registration {
        Registration::Accepted(_) => Ok(Json(StatusResponse::success("Team added successfully!"))),
        Registration::Rejected(violation) => Err(ApiError::Rejected(violation)),
    }
}
