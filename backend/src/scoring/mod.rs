pub mod calculator;
pub mod ledger;
pub mod types;

pub use calculator::compute_score;
pub use ledger::Ledger;
pub use types::{Captaincy, PlayerContribution, Points, TeamScore};
