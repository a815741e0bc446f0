use serde::Serialize;

use super::KillDeath;
use crate::log::Log;
use crate::time::short_clock;

/// One participant of a war and the events they took part in.
///
/// Every stored log is seen from this player's side: the player is
/// `player_one`, `kills` hold the logs with `kill == true` and `deaths` the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub name: String,
    pub guild: String,
    pub kills: Vec<Log>,
    pub deaths: Vec<Log>,
}

impl Player {
    pub fn new(name: impl Into<String>, guild: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guild: guild.into(),
            kills: Vec::new(),
            deaths: Vec::new(),
        }
    }

    /// Files `log` under kills or deaths according to its `kill` flag.
    pub(crate) fn record(&mut self, log: Log) {
        if log.kill {
            self.kills.push(log);
        } else {
            self.deaths.push(log);
        }
    }

    /// Kills and deaths merged and sorted by timestamp. Timestamps compare as
    /// strings, which orders `HH:MM:SS` values correctly within a day.
    pub fn all_logs(&self) -> Vec<&Log> {
        let mut logs: Vec<&Log> = self.kills.iter().chain(self.deaths.iter()).collect();
        logs.sort_by(|a, b| a.time.cmp(&b.time));
        logs
    }

    /// Timestamps of the first and last event, or `None` without events.
    pub fn time_joined(&self) -> Option<(&str, &str)> {
        let logs = self.all_logs();
        let first = *logs.first()?;
        let last = *logs.last()?;
        Some((first.time.as_str(), last.time.as_str()))
    }

    /// `time_joined` as `"HH:MM - HH:MM"`.
    pub fn time_joined_parsed(&self) -> Option<String> {
        let (start, end) = self.time_joined()?;
        Some(format!("{} - {}", short_clock(start), short_clock(end)))
    }

    pub fn highest_killstreak(&self) -> usize {
        let mut killstreak = 0;
        let mut highest_killstreak = 0;

        for log in self.all_logs() {
            killstreak = if log.kill { killstreak + 1 } else { 0 };
            highest_killstreak = highest_killstreak.max(killstreak);
        }

        highest_killstreak
    }
}

impl KillDeath for Player {
    fn kill_count(&self) -> usize {
        self.kills.len()
    }

    fn death_count(&self) -> usize {
        self.deaths.len()
    }
}
