use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Playing role of a cricketer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    #[serde(rename = "WICKETKEEPER")]
    Wicketkeeper,
    #[serde(rename = "BATTER")]
    Batter,
    #[serde(rename = "ALL-ROUNDER")]
    AllRounder,
    #[serde(rename = "BOWLER")]
    Bowler,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Wicketkeeper, Role::Batter, Role::AllRounder, Role::Bowler];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Wicketkeeper => "WICKETKEEPER",
            Role::Batter => "BATTER",
            Role::AllRounder => "ALL-ROUNDER",
            Role::Bowler => "BOWLER",
        }
    }

    /// Plural form used in violation messages
    pub fn plural(&self) -> &'static str {
        match self {
            Role::Wicketkeeper => "wicketkeepers",
            Role::Batter => "batters",
            Role::AllRounder => "all-rounders",
            Role::Bowler => "bowlers",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WICKETKEEPER" => Ok(Role::Wicketkeeper),
            "BATTER" => Ok(Role::Batter),
            "ALL-ROUNDER" => Ok(Role::AllRounder),
            "BOWLER" => Ok(Role::Bowler),
            other => Err(format!("Unknown player role: {}", other)),
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Reference player record, as found in `players.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "Player")]
    pub name: String,
    #[serde(rename = "Role")]
    pub role: Role,
    #[serde(rename = "Team")]
    pub team: String,
}

impl Player {
    pub fn new(name: &str, role: Role, team: &str) -> Self {
        Self {
            name: name.to_string(),
            role,
            team: team.to_string(),
        }
    }
}

/// Fantasy team as submitted by a fan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntry {
    pub name: String,
    pub players: Vec<String>,
    pub captain: String,
    pub vice_captain: String,
}

impl TeamEntry {
    pub fn contains(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }
}

/// One delivery of the match's ball-by-ball log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallEvent {
    pub batter: String,
    pub bowler: String,
    #[serde(alias = "non-striker", default)]
    pub non_striker: String,
    #[serde(default)]
    pub batsman_run: u32,
    #[serde(default)]
    pub extras_run: u32,
    #[serde(rename = "isWicketDelivery", deserialize_with = "flag", default)]
    pub is_wicket_delivery: bool,
    #[serde(deserialize_with = "placeholder", default)]
    pub player_out: String,
    #[serde(deserialize_with = "placeholder", default)]
    pub kind: String,
    #[serde(deserialize_with = "placeholder", default)]
    pub fielders_involved: String,
}

impl BallEvent {
    /// Names in `fielders_involved`. Blank segments such as the middle of `"A, , B"` are skipped.
    pub fn fielders(&self) -> impl Iterator<Item = &str> {
        self.fielders_involved
            .split(", ")
            .filter(|name| !name.is_empty())
    }
}

/// Ball-by-ball exports mark "no value" with the literal `NA`
const MISSING_VALUE: &str = "NA";

fn placeholder<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if raw == MISSING_VALUE {
        Ok(String::new())
    } else {
        Ok(raw)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}
