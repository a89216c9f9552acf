use std::collections::HashMap;

use super::models::Player;
use crate::errors::LookupError;

/// Player reference table indexed by case-folded name
pub struct PlayerDirectory<'a> {
    players: HashMap<String, Vec<&'a Player>>,
}

impl<'a> PlayerDirectory<'a> {
    pub fn new(players: &'a [Player]) -> Self {
        let mut index: HashMap<String, Vec<&'a Player>> = HashMap::new();
        for player in players {
            index.entry(fold(&player.name)).or_default().push(player);
        }
        Self { players: index }
    }

    pub fn resolve(&self, name: &str) -> Result<&'a Player, LookupError> {
        match self.players.get(&fold(name)).map(Vec::as_slice) {
            Some([player]) => Ok(*player),
            Some([_, _, ..]) => Err(LookupError::AmbiguousPlayer(name.to_string())),
            _ => Err(LookupError::UnknownPlayer(name.to_string())),
        }
    }
}

fn fold(name: &str) -> String {
    name.to_uppercase()
}
