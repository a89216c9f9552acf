use log::{info, warn};

use super::store::{ReferenceData, TeamStore};
use crate::config::settings::RosterSettings;
use crate::database::StoredTeam;
use crate::domain::{PlayerDirectory, TeamEntry};
use crate::errors::ServiceResult;
use crate::validation::{self, Verdict, Violation};

#[derive(Debug)]
pub enum Registration {
    Accepted(StoredTeam),
    Rejected(Violation),
}

/// Validates against a fresh snapshot of the player table, then stores the team.
/// Nothing is written unless the verdict is valid.
pub fn register_team<S>(store: &S, team: &TeamEntry, rules: &RosterSettings) -> ServiceResult<Registration>
where
    S: ReferenceData + TeamStore,
{
    let players = store.players()?;
    let directory = PlayerDirectory::new(&players);

    match validation::validate(team, &directory, rules)? {
        Verdict::Valid => {
            let stored = store.insert_team(team)?;
            info!("Registered team {} with id {}", stored.entry.name, stored.id);
            Ok(Registration::Accepted(stored))
        }
        Verdict::Invalid(violation) => {
            warn!("Rejected team {}: {:?}", team.name, violation);
            Ok(Registration::Rejected(violation))
        }
    }
}
