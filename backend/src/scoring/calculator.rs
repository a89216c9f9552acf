use log::debug;

use super::ledger::Ledger;
use super::types::{Captaincy, PlayerContribution, TeamScore};
use crate::config::settings::ScoringSettings;
use crate::domain::{BallEvent, TeamEntry};

/// Total fantasy points of `team` for the given delivery log
pub fn compute_score(deliveries: &[BallEvent], team: &TeamEntry, settings: &ScoringSettings) -> f64 {
    let ledger = Ledger::from_deliveries(deliveries, settings);
    ledger.score_team(team, settings).total
}

impl Ledger {
    /// Applies captaincy multipliers to the team's players.
    /// A captain who is also vice-captain only gets the captain multiplier.
    pub fn score_team(&self, team: &TeamEntry, settings: &ScoringSettings) -> TeamScore {
        let contributions: Vec<PlayerContribution> = team
            .players
            .iter()
            .map(|player| self.contribution(player, team, settings))
            .collect();

        let total: f64 = contributions.iter().map(|c| c.points).sum();
        debug!("Team {} scored {} points", team.name, total);

        TeamScore { total, contributions }
    }

    fn contribution(&self, player: &str, team: &TeamEntry, settings: &ScoringSettings) -> PlayerContribution {
        let base_points = self.points_for(player);
        let captaincy = captaincy_of(player, team);

        PlayerContribution {
            player: player.to_string(),
            base_points,
            captaincy,
            points: base_points as f64 * multiplier(captaincy, settings),
        }
    }
}

fn captaincy_of(player: &str, team: &TeamEntry) -> Captaincy {
    if player == team.captain {
        Captaincy::Captain
    } else if player == team.vice_captain {
        Captaincy::ViceCaptain
    } else {
        Captaincy::None
    }
}

fn multiplier(captaincy: Captaincy, settings: &ScoringSettings) -> f64 {
    match captaincy {
        Captaincy::Captain => settings.captain_multiplier,
        Captaincy::ViceCaptain => settings.vice_captain_multiplier,
        Captaincy::None => 1.0,
    }
}
