use serde::Serialize;

use super::War;
use crate::roster::{Guild, KillDeath, Player};

/// Flat, serializable view of a war for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarSummary {
    pub name: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub duration_seconds: Option<i64>,
    pub player_count: usize,
    pub guilds: Vec<GuildSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuildSummary {
    pub name: String,
    pub kills: usize,
    pub deaths: usize,
    pub kd: f64,
    pub avg_kills: f64,
    pub avg_deaths: f64,
    pub players: Vec<PlayerSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub kills: usize,
    pub deaths: usize,
    pub kd: f64,
    pub highest_killstreak: usize,
    pub time_joined: Option<String>,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            kills: player.kill_count(),
            deaths: player.death_count(),
            kd: player.kd(),
            highest_killstreak: player.highest_killstreak(),
            time_joined: player.time_joined_parsed(),
        }
    }
}

impl From<&Guild> for GuildSummary {
    fn from(guild: &Guild) -> Self {
        Self {
            name: guild.name.clone(),
            kills: guild.kill_count(),
            deaths: guild.death_count(),
            kd: guild.kd(),
            avg_kills: guild.avg_kill_count(),
            avg_deaths: guild.avg_death_count(),
            players: guild.players.iter().map(PlayerSummary::from).collect(),
        }
    }
}

impl War {
    pub fn summary(&self) -> WarSummary {
        WarSummary {
            name: self.name.clone(),
            start_time: self.parsed_start_time(),
            end_time: self.parsed_end_time(),
            duration_seconds: self.duration().map(|duration| duration.num_seconds()),
            player_count: self.player_count(),
            guilds: self.guilds.iter().map(GuildSummary::from).collect(),
        }
    }
}
