use std::collections::HashMap;

use serde::Serialize;

pub type Points = i64;
pub type PointMap = HashMap<String, Points>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Captaincy {
    Captain,
    ViceCaptain,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerContribution {
    pub player: String,
    pub base_points: Points,
    pub captaincy: Captaincy,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScore {
    pub total: f64,
    pub contributions: Vec<PlayerContribution>,
}
