//! Reference data shared by unit tests: CSK vs RR, IPL 2022.

use crate::domain::{BallEvent, Player, Role, TeamEntry};
use crate::services::SqliteStore;

pub const CSK: &str = "Chennai Super Kings";
pub const RR: &str = "Rajasthan Royals";

pub fn reference_players() -> Vec<Player> {
    vec![
        Player::new("RD Gaikwad", Role::Batter, CSK),
        Player::new("DP Conway", Role::Batter, CSK),
        Player::new("MM Ali", Role::AllRounder, CSK),
        Player::new("N Jagadeesan", Role::Batter, CSK),
        Player::new("AT Rayudu", Role::Batter, CSK),
        Player::new("MS Dhoni", Role::Wicketkeeper, CSK),
        Player::new("Shivam Dube", Role::AllRounder, CSK),
        Player::new("M Theekshana", Role::Bowler, CSK),
        Player::new("Simarjeet Singh", Role::Bowler, CSK),
        Player::new("PH Solanki", Role::Bowler, CSK),
        Player::new("Mukesh Choudhary", Role::Bowler, CSK),
        Player::new("YBK Jaiswal", Role::Batter, RR),
        Player::new("JC Buttler", Role::Wicketkeeper, RR),
        Player::new("SV Samson", Role::Wicketkeeper, RR),
        Player::new("D Padikkal", Role::Batter, RR),
        Player::new("R Ashwin", Role::AllRounder, RR),
        Player::new("SO Hetmyer", Role::Batter, RR),
        Player::new("R Parag", Role::AllRounder, RR),
        Player::new("TA Boult", Role::Bowler, RR),
        Player::new("YS Chahal", Role::Bowler, RR),
        Player::new("M Prasidh Krishna", Role::Bowler, RR),
        Player::new("OC McCoy", Role::Bowler, RR),
    ]
}

pub fn sample_team(name: &str) -> TeamEntry {
    TeamEntry {
        name: name.to_string(),
        players: [
            "MS Dhoni", "RD Gaikwad", "DP Conway", "MM Ali", "M Theekshana", "Simarjeet Singh",
            "JC Buttler", "YBK Jaiswal", "R Ashwin", "TA Boult", "YS Chahal",
        ]
        .iter()
        .map(|p| p.to_string())
        .collect(),
        captain: "RD Gaikwad".to_string(),
        vice_captain: "TA Boult".to_string(),
    }
}

/// Points of [`sample_team`] against [`sample_deliveries`]
pub const SAMPLE_TEAM_POINTS: f64 = 130.5;

pub fn sample_deliveries() -> Vec<BallEvent> {
    vec![
        ball("RD Gaikwad", "TA Boult", 4, 0, None),
        ball("RD Gaikwad", "TA Boult", 0, 0, Some(("caught", "R Parag"))),
        ball("DP Conway", "TA Boult", 6, 0, None),
        ball("DP Conway", "YS Chahal", 0, 0, Some(("lbw", ""))),
        ball("MM Ali", "R Ashwin", 1, 1, None),
        ball("MS Dhoni", "OC McCoy", 0, 0, Some(("run out", "SV Samson, JC Buttler"))),
        ball("YBK Jaiswal", "Simarjeet Singh", 0, 0, Some(("caught", "MS Dhoni"))),
    ]
}

fn ball(batter: &str, bowler: &str, runs: u32, extras: u32, wicket: Option<(&str, &str)>) -> BallEvent {
    let (kind, fielders) = wicket.unwrap_or(("", ""));
    BallEvent {
        batter: batter.to_string(),
        bowler: bowler.to_string(),
        non_striker: String::new(),
        batsman_run: runs,
        extras_run: extras,
        is_wicket_delivery: wicket.is_some(),
        player_out: if wicket.is_some() { batter.to_string() } else { String::new() },
        kind: kind.to_string(),
        fielders_involved: fielders.to_string(),
    }
}

pub fn seeded_store() -> SqliteStore {
    let store = SqliteStore::in_memory().unwrap();
    store
        .replace_reference_data(&reference_players(), &sample_deliveries())
        .unwrap();
    store
}
