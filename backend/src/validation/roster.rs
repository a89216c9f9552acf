use std::collections::{HashMap, HashSet};

use super::types::{Bound, Verdict, Violation};
use crate::config::settings::RosterSettings;
use crate::domain::{Player, PlayerDirectory, Role, TeamEntry};
use crate::errors::LookupError;

/// Checks a submitted team against the roster rules.
///
/// Membership rules (size, duplicates, captaincy) are evaluated on the raw
/// names first. Only then is every name resolved against the reference table;
/// an unresolvable name aborts with a [`LookupError`] instead of a verdict.
/// The first failing rule wins.
pub fn validate(
    team: &TeamEntry,
    directory: &PlayerDirectory<'_>,
    rules: &RosterSettings,
) -> Result<Verdict, LookupError> {
    if let Err(violation) = check_membership(team, rules) {
        return Ok(Verdict::Invalid(violation));
    }

    let resolved = resolve_players(team, directory)?;
    Ok(check_composition(&resolved, rules).into())
}

fn check_membership(team: &TeamEntry, rules: &RosterSettings) -> Result<(), Violation> {
    check_size(team, rules)?;
    check_duplicates(team)?;
    check_captain(team)?;
    check_vice_captain(team)
}

fn check_size(team: &TeamEntry, rules: &RosterSettings) -> Result<(), Violation> {
    if team.players.len() != rules.roster_size {
        return Err(Violation::WrongRosterSize {
            expected: rules.roster_size,
            actual: team.players.len(),
        });
    }
    Ok(())
}

fn check_duplicates(team: &TeamEntry) -> Result<(), Violation> {
    let mut seen = HashSet::new();
    match team.players.iter().find(|name| !seen.insert(name.as_str())) {
        Some(duplicate) => Err(Violation::DuplicatePlayer(duplicate.clone())),
        None => Ok(()),
    }
}

fn check_captain(team: &TeamEntry) -> Result<(), Violation> {
    if !team.contains(&team.captain) {
        return Err(Violation::CaptainNotInRoster(team.captain.clone()));
    }
    Ok(())
}

fn check_vice_captain(team: &TeamEntry) -> Result<(), Violation> {
    if !team.contains(&team.vice_captain) {
        return Err(Violation::ViceCaptainNotInRoster(team.vice_captain.clone()));
    }
    Ok(())
}

fn resolve_players<'a>(
    team: &TeamEntry,
    directory: &PlayerDirectory<'a>,
) -> Result<Vec<&'a Player>, LookupError> {
    team.players
        .iter()
        .map(|name| directory.resolve(name))
        .collect()
}

fn check_composition(players: &[&Player], rules: &RosterSettings) -> Result<(), Violation> {
    check_source_teams(players, rules)?;
    check_role_counts(players, rules)
}

fn check_source_teams(players: &[&Player], rules: &RosterSettings) -> Result<(), Violation> {
    let teams: HashSet<&str> = players.iter().map(|p| p.team.as_str()).collect();
    if teams.len() > rules.max_source_teams {
        return Err(Violation::TooManySourceTeams {
            allowed: rules.max_source_teams,
            actual: teams.len(),
        });
    }
    Ok(())
}

fn check_role_counts(players: &[&Player], rules: &RosterSettings) -> Result<(), Violation> {
    let counts = count_roles(players);
    for role in Role::ALL {
        let count = counts.get(&role).copied().unwrap_or(0);
        check_role_bounds(role, count, rules)?;
    }
    Ok(())
}

fn count_roles(players: &[&Player]) -> HashMap<Role, usize> {
    let mut counts = HashMap::new();
    for player in players {
        *counts.entry(player.role).or_insert(0) += 1;
    }
    counts
}

fn check_role_bounds(role: Role, count: usize, rules: &RosterSettings) -> Result<(), Violation> {
    let bound = if count < rules.min_per_role {
        Bound::Minimum
    } else if count > rules.max_per_role {
        Bound::Maximum
    } else {
        return Ok(());
    };

    Err(Violation::RoleCount {
        role,
        bound,
        count,
        min: rules.min_per_role,
        max: rules.max_per_role,
    })
}
