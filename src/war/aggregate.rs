//! Statistics across several wars. Every query only looks at the wars the
//! guild or player actually took part in.

use std::collections::BTreeSet;

use super::War;
use crate::roster::{ratio_or_numerator, ratio_or_zero, Guild, KillDeath, Player};

impl War {
    /// The guild's roster from every war it appears in.
    pub fn guild_stats<'a>(guild_name: &str, wars: &'a [War]) -> Vec<&'a Guild> {
        wars.iter()
            .filter_map(|war| war.get_guild(guild_name))
            .collect()
    }

    pub fn total_player_count_guilds(guild_name: &str, wars: &[War]) -> usize {
        Self::guild_stats(guild_name, wars)
            .iter()
            .map(|guild| guild.player_count())
            .sum()
    }

    pub fn total_kills_guilds(guild_name: &str, wars: &[War]) -> usize {
        Self::guild_stats(guild_name, wars)
            .iter()
            .map(|guild| guild.kill_count())
            .sum()
    }

    pub fn total_deaths_guilds(guild_name: &str, wars: &[War]) -> usize {
        Self::guild_stats(guild_name, wars)
            .iter()
            .map(|guild| guild.death_count())
            .sum()
    }

    /// Kills per war the guild took part in.
    pub fn avg_kills_guilds(guild_name: &str, wars: &[War]) -> f64 {
        ratio_or_zero(
            Self::total_kills_guilds(guild_name, wars),
            Self::wars_count(guild_name, wars),
        )
    }

    /// Deaths per war the guild took part in.
    pub fn avg_deaths_guilds(guild_name: &str, wars: &[War]) -> f64 {
        ratio_or_zero(
            Self::total_deaths_guilds(guild_name, wars),
            Self::wars_count(guild_name, wars),
        )
    }

    /// Kills per rostered player, summed over wars.
    pub fn avg_player_kills_guilds(guild_name: &str, wars: &[War]) -> f64 {
        ratio_or_numerator(
            Self::total_kills_guilds(guild_name, wars),
            Self::total_player_count_guilds(guild_name, wars),
        )
    }

    /// Deaths per rostered player, summed over wars.
    pub fn avg_player_deaths_guilds(guild_name: &str, wars: &[War]) -> f64 {
        ratio_or_numerator(
            Self::total_deaths_guilds(guild_name, wars),
            Self::total_player_count_guilds(guild_name, wars),
        )
    }

    pub fn avg_kd_guilds(guild_name: &str, wars: &[War]) -> f64 {
        ratio_or_numerator(
            Self::total_kills_guilds(guild_name, wars),
            Self::total_deaths_guilds(guild_name, wars),
        )
    }

    /// Names of everyone who played for the guild in any of the wars.
    pub fn unique_players_guilds<'a>(guild_name: &str, wars: &'a [War]) -> BTreeSet<&'a str> {
        Self::guild_stats(guild_name, wars)
            .into_iter()
            .flat_map(|guild| guild.players.iter().map(|player| player.name.as_str()))
            .collect()
    }

    pub fn wars_count(guild_name: &str, wars: &[War]) -> usize {
        Self::guild_stats(guild_name, wars).len()
    }

    /// The player's record from every war they appear in.
    pub fn player_stats<'a>(player_name: &str, wars: &'a [War]) -> Vec<&'a Player> {
        wars.iter()
            .filter_map(|war| war.get_player(player_name))
            .collect()
    }

    pub fn total_kills_players(player_name: &str, wars: &[War]) -> usize {
        Self::player_stats(player_name, wars)
            .iter()
            .map(|player| player.kill_count())
            .sum()
    }

    pub fn total_deaths_players(player_name: &str, wars: &[War]) -> usize {
        Self::player_stats(player_name, wars)
            .iter()
            .map(|player| player.death_count())
            .sum()
    }

    pub fn avg_kills_players(player_name: &str, wars: &[War]) -> f64 {
        ratio_or_zero(
            Self::total_kills_players(player_name, wars),
            Self::joined_wars_count(player_name, wars),
        )
    }

    pub fn avg_deaths_players(player_name: &str, wars: &[War]) -> f64 {
        ratio_or_zero(
            Self::total_deaths_players(player_name, wars),
            Self::joined_wars_count(player_name, wars),
        )
    }

    pub fn avg_kd_players(player_name: &str, wars: &[War]) -> f64 {
        ratio_or_numerator(
            Self::total_kills_players(player_name, wars),
            Self::total_deaths_players(player_name, wars),
        )
    }

    pub fn joined_wars_count(player_name: &str, wars: &[War]) -> usize {
        Self::player_stats(player_name, wars).len()
    }

    /// Share of the guild's wars the player showed up in, in `0.0..=1.0` as
    /// long as the player only ever fought for that guild.
    pub fn joined_wars_percentage(player_name: &str, guild_name: &str, wars: &[War]) -> f64 {
        ratio_or_zero(
            Self::joined_wars_count(player_name, wars),
            Self::wars_count(guild_name, wars),
        )
    }
}
