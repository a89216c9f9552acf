use chrono::NaiveDateTime;

use crate::domain::TeamEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct StoredTeam {
    pub id: i64,
    pub entry: TeamEntry,
    pub total_points: Option<f64>,
    pub scored_at: Option<NaiveDateTime>,
    pub created_at: Option<NaiveDateTime>,
}
