use std::fmt;

use crate::domain::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Minimum,
    Maximum,
}

/// Business rule a roster broke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    WrongRosterSize { expected: usize, actual: usize },
    DuplicatePlayer(String),
    CaptainNotInRoster(String),
    ViceCaptainNotInRoster(String),
    TooManySourceTeams { allowed: usize, actual: usize },
    RoleCount {
        role: Role,
        bound: Bound,
        count: usize,
        min: usize,
        max: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::WrongRosterSize { expected, .. } => {
                write!(f, "A team must have exactly {} players.", expected)
            }
            Violation::DuplicatePlayer(_) => write!(f, "Duplicate players are not allowed."),
            Violation::CaptainNotInRoster(_) => {
                write!(f, "Captain must be one of the players in the team.")
            }
            Violation::ViceCaptainNotInRoster(_) => {
                write!(f, "Vice-Captain must be one of the players in the team.")
            }
            Violation::TooManySourceTeams { allowed, .. } => {
                write!(f, "Players must be from a maximum of {} teams.", allowed)
            }
            Violation::RoleCount { role, min, max, .. } => write!(
                f,
                "Team must have between {} and {} {}.",
                min,
                max,
                role.plural()
            ),
        }
    }
}

/// Outcome of a validation run that could resolve every player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(Violation),
}

impl From<Result<(), Violation>> for Verdict {
    fn from(result: Result<(), Violation>) -> Self {
        match result {
            Ok(()) => Verdict::Valid,
            Err(violation) => Verdict::Invalid(violation),
        }
    }
}
