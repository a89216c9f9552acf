use anyhow::Result;

use super::store::TeamStore;
use crate::database::StoredTeam;

#[derive(Debug, Clone, PartialEq)]
pub enum Standings {
    /// No team carries a score yet, as opposed to everyone tied on zero
    NoScoredTeams,
    Winners {
        top_points: f64,
        teams: Vec<StoredTeam>,
    },
}

/// Every scored team sharing the highest total
pub fn standings(teams: Vec<StoredTeam>) -> Standings {
    let top_points = teams
        .iter()
        .filter_map(|t| t.total_points)
        .fold(None, |best: Option<f64>, points| {
            Some(best.map_or(points, |b| b.max(points)))
        });

    match top_points {
        None => Standings::NoScoredTeams,
        Some(top_points) => Standings::Winners {
            top_points,
            teams: teams
                .into_iter()
                .filter(|t| t.total_points == Some(top_points))
                .collect(),
        },
    }
}

pub fn current_standings<S: TeamStore>(store: &S) -> Result<Standings> {
    Ok(standings(store.list_teams()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_team;

    fn stored(id: i64, total_points: Option<f64>) -> StoredTeam {
        StoredTeam {
            id,
            entry: sample_team(&format!("Team {}", id)),
            total_points,
            scored_at: None,
            created_at: None,
        }
    }

    fn winner_ids(standings: &Standings) -> Vec<i64> {
        match standings {
            Standings::Winners { teams, .. } => teams.iter().map(|t| t.id).collect(),
            Standings::NoScoredTeams => vec![],
        }
    }

    #[test]
    fn test_no_teams_means_no_results() {
        assert_eq!(standings(vec![]), Standings::NoScoredTeams);
    }

    #[test]
    fn test_unscored_teams_are_not_winners() {
        assert_eq!(standings(vec![stored(1, None), stored(2, None)]), Standings::NoScoredTeams);
        assert_eq!(winner_ids(&standings(vec![stored(1, None), stored(2, Some(3.0))])), vec![2]);
    }

    #[test]
    fn test_all_ties_are_returned() {
        let result = standings(vec![stored(1, Some(65.5)), stored(2, Some(12.0)), stored(3, Some(65.5))]);

        assert!(matches!(result, Standings::Winners { top_points, .. } if top_points == 65.5));
        assert_eq!(winner_ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_everyone_tied_at_zero_is_a_result() {
        let result = standings(vec![stored(1, Some(0.0)), stored(2, Some(0.0))]);
        assert_eq!(winner_ids(&result), vec![1, 2]);
    }
}
