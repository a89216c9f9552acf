use serde::Serialize;

use crate::database::StoredTeam;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: u8,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: &str) -> Self {
        Self {
            status: 1,
            message: message.to_string(),
        }
    }

    pub fn failure(message: String) -> Self {
        Self { status: 0, message }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResultResponse {
    pub status: u8,
    pub message: String,
    pub teams_scored: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    pub id: i64,
    pub name: String,
    pub players: Vec<String>,
    pub captain: String,
    pub vice_captain: String,
    pub total_points: Option<f64>,
    pub scored_at: Option<String>,
}

impl From<StoredTeam> for TeamResult {
    fn from(team: StoredTeam) -> Self {
        Self {
            id: team.id,
            name: team.entry.name,
            players: team.entry.players,
            captain: team.entry.captain,
            vice_captain: team.entry.vice_captain,
            total_points: team.total_points,
            scored_at: team.scored_at.map(|t| t.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnersResponse {
    pub status: u8,
    pub top_points: f64,
    pub winners: Vec<TeamResult>,
}
