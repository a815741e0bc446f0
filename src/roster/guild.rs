use serde::Serialize;

use super::{ratio_or_zero, KillDeath, Player};
use crate::log::Log;

/// A guild roster. Players are kept in the order they first appeared in the logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guild {
    pub name: String,
    pub players: Vec<Player>,
}

impl Guild {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    pub fn get_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name == name)
    }

    pub(crate) fn player_entry(&mut self, name: &str) -> &mut Player {
        let index = match self.players.iter().position(|player| player.name == name) {
            Some(index) => index,
            None => {
                self.players.push(Player::new(name, self.name.clone()));
                self.players.len() - 1
            }
        };
        &mut self.players[index]
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Average kills per player, zero for an empty roster.
    pub fn avg_kill_count(&self) -> f64 {
        ratio_or_zero(self.kill_count(), self.player_count())
    }

    /// Average deaths per player, zero for an empty roster.
    pub fn avg_death_count(&self) -> f64 {
        ratio_or_zero(self.death_count(), self.player_count())
    }

    /// Every player's time-sorted logs, one player after another.
    pub fn logs(&self) -> Vec<&Log> {
        self.players.iter().flat_map(Player::all_logs).collect()
    }
}

impl KillDeath for Guild {
    fn kill_count(&self) -> usize {
        self.players.iter().map(Player::kill_count).sum()
    }

    fn death_count(&self) -> usize {
        self.players.iter().map(Player::death_count).sum()
    }
}
