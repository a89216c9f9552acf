use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{results::{process_result, team_result}, teams::add_team, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/add-team", post(add_team))
        .route("/process-result", post(process_result))
        .route("/team-result", get(team_result))
        .with_state(state)
}
