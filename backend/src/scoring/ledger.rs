use super::types::{PointMap, Points};
use crate::config::settings::ScoringSettings;
use crate::domain::BallEvent;

const RUN_OUT: &str = "run out";
const BOWLED_LBW_KINDS: [&str; 2] = ["lbw", "bowled"];

/// Points earned by every player named in a delivery log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    points: PointMap,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_deliveries(deliveries: &[BallEvent], settings: &ScoringSettings) -> Self {
        let mut ledger = Self::new();
        for ball in deliveries {
            ledger.record(ball, settings);
        }
        ledger
    }

    pub fn record(&mut self, ball: &BallEvent, settings: &ScoringSettings) {
        self.credit_batting(ball, settings);
        if ball.is_wicket_delivery {
            self.credit_bowling(ball, settings);
            self.credit_fielding(ball, settings);
        }
    }

    pub fn points_for(&self, player: &str) -> Points {
        self.points.get(player).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn credit(&mut self, player: &str, points: Points) {
        *self.points.entry(player.to_string()).or_insert(0) += points;
    }

    fn credit_batting(&mut self, ball: &BallEvent, settings: &ScoringSettings) {
        let runs = Points::from(ball.batsman_run);
        self.credit(&ball.batter, runs + boundary_bonus(ball.batsman_run, settings));
    }

    fn credit_bowling(&mut self, ball: &BallEvent, settings: &ScoringSettings) {
        if ball.kind == RUN_OUT {
            return;
        }

        let mut points = settings.wicket_points;
        if BOWLED_LBW_KINDS.contains(&ball.kind.as_str()) {
            points += settings.bowled_lbw_bonus;
        }
        self.credit(&ball.bowler, points);
    }

    fn credit_fielding(&mut self, ball: &BallEvent, settings: &ScoringSettings) {
        for fielder in ball.fielders() {
            self.credit(fielder, settings.fielding_points);
        }
    }
}

fn boundary_bonus(runs: u32, settings: &ScoringSettings) -> Points {
    match runs {
        4 => settings.four_bonus,
        6 => settings.six_bonus,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(batter: &str, bowler: &str, runs: u32) -> BallEvent {
        BallEvent {
            batter: batter.to_string(),
            bowler: bowler.to_string(),
            non_striker: String::new(),
            batsman_run: runs,
            extras_run: 0,
            is_wicket_delivery: false,
            player_out: String::new(),
            kind: String::new(),
            fielders_involved: String::new(),
        }
    }

    fn wicket(batter: &str, bowler: &str, kind: &str, fielders: &str) -> BallEvent {
        BallEvent {
            is_wicket_delivery: true,
            player_out: batter.to_string(),
            kind: kind.to_string(),
            fielders_involved: fielders.to_string(),
            ..ball(batter, bowler, 0)
        }
    }

    fn ledger_of(deliveries: &[BallEvent]) -> Ledger {
        Ledger::from_deliveries(deliveries, &ScoringSettings::default())
    }

    #[test]
    fn test_runs_and_boundary_bonuses() {
        let ledger = ledger_of(&[ball("A", "X", 1), ball("A", "X", 4), ball("B", "X", 6)]);

        assert_eq!(ledger.points_for("A"), 1 + 5);
        assert_eq!(ledger.points_for("B"), 8);
    }

    #[test]
    fn test_extras_are_never_scored() {
        let mut wide = ball("A", "X", 0);
        wide.extras_run = 5;
        let ledger = ledger_of(&[wide]);

        assert_eq!(ledger.points_for("A"), 0);
        assert_eq!(ledger.points_for("X"), 0);
    }

    #[test]
    fn test_bowler_wicket_points_by_kind() {
        let bowled = ledger_of(&[wicket("A", "X", "bowled", "")]);
        let lbw = ledger_of(&[wicket("A", "X", "lbw", "")]);
        let caught = ledger_of(&[wicket("A", "X", "caught", "F")]);
        let run_out = ledger_of(&[wicket("A", "X", "run out", "F")]);

        assert_eq!(bowled.points_for("X"), 33);
        assert_eq!(lbw.points_for("X"), 33);
        assert_eq!(caught.points_for("X"), 25);
        assert_eq!(run_out.points_for("X"), 0);
    }

    #[test]
    fn test_every_fielder_gets_full_credit() {
        let ledger = ledger_of(&[wicket("A", "X", "run out", "F, G")]);

        assert_eq!(ledger.points_for("F"), 8);
        assert_eq!(ledger.points_for("G"), 8);
    }

    #[test]
    fn test_fielders_ignored_without_wicket() {
        let mut dropped = ball("A", "X", 0);
        dropped.fielders_involved = "F".to_string();
        let ledger = ledger_of(&[dropped]);

        assert_eq!(ledger.points_for("F"), 0);
    }

    #[test]
    fn test_unknown_names_are_tolerated() {
        let ledger = ledger_of(&[wicket("A", "X", "caught", "sub (Substitute)")]);
        assert_eq!(ledger.points_for("sub (Substitute)"), 8);
        assert_eq!(ledger.points_for("never seen"), 0);
    }

    #[test]
    fn test_order_does_not_change_totals() {
        let deliveries = vec![
            ball("A", "X", 4),
            wicket("B", "X", "caught", "A"),
            ball("C", "Y", 6),
            wicket("C", "Y", "lbw", ""),
        ];
        let mut reversed = deliveries.clone();
        reversed.reverse();

        assert_eq!(ledger_of(&deliveries), ledger_of(&reversed));
    }
}
