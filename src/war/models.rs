use chrono::TimeDelta;
use serde::Deserialize;

use crate::log::{Log, LogError, LogParser, OWN_GUILD};
use crate::roster::{Guild, Player};
use crate::time::{parse_clock, short_clock};

const WAR_FILE_EXTENSION: &str = ".log";

/// One war session: its raw logs and the guild rosters built from them.
#[derive(Debug, Clone, PartialEq)]
pub struct War {
    pub name: String,
    pub logs: Vec<Log>,
    pub guilds: Vec<Guild>,
}

#[derive(Deserialize)]
struct LogDump {
    logs: Vec<Log>,
}

impl War {
    /// Builds a war from already parsed logs. `name` is usually the log file
    /// name; everything from the first `.log` on is dropped.
    pub fn new(name: &str, logs: &[Log]) -> Self {
        let name = name
            .split(WAR_FILE_EXTENSION)
            .next()
            .unwrap_or_default()
            .to_string();

        let mut war = Self {
            name,
            logs: logs.to_vec(),
            guilds: Vec::new(),
        };
        war.parse_logs();
        war
    }

    /// Parses raw log lines with `parser` and builds the war from them.
    pub fn from_lines<I, S>(name: &str, lines: I, parser: &LogParser) -> Result<Self, LogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let logs = parser.parse_lines(lines)?;
        Ok(Self::new(name, &logs))
    }

    /// Builds a war from a JSON dump shaped like `{ "logs": [ ... ] }`.
    pub fn from_json(name: &str, json: &str) -> Result<Self, LogError> {
        let dump: LogDump = serde_json::from_str(json)?;
        Ok(Self::new(name, &dump.logs))
    }

    /// Groups the raw logs into guild rosters.
    ///
    /// Each log is written from the own guild's side, so `player_one` lands in
    /// the own guild with the log as is, and `player_two` lands in the log's
    /// guild with the log normalized to their side.
    fn parse_logs(&mut self) {
        for log in &self.logs {
            guild_entry(&mut self.guilds, OWN_GUILD)
                .player_entry(&log.player_one)
                .record(log.clone());

            guild_entry(&mut self.guilds, &log.guild)
                .player_entry(&log.player_two)
                .record(log.normalize(&log.guild));
        }

        tracing::debug!(
            war = %self.name,
            logs = self.logs.len(),
            guilds = self.guilds.len(),
            players = self.player_count(),
            "Grouped war logs"
        );
    }

    pub fn player_count(&self) -> usize {
        self.guilds.iter().map(Guild::player_count).sum()
    }

    /// Timestamp of the first log in input order.
    pub fn start_time(&self) -> Option<&str> {
        self.logs.first().map(|log| log.time.as_str())
    }

    /// Timestamp of the last log in input order.
    pub fn end_time(&self) -> Option<&str> {
        self.logs.last().map(|log| log.time.as_str())
    }

    /// Time between the first and the last log, read as times of one day.
    /// A war that runs past midnight comes out negative.
    pub fn duration(&self) -> Option<TimeDelta> {
        let (start, end) = (self.start_time()?, self.end_time()?);
        match (parse_clock(start), parse_clock(end)) {
            (Some(start), Some(end)) => Some(end - start),
            _ => {
                tracing::debug!(war = %self.name, start, end, "Unparsable war timestamps");
                None
            }
        }
    }

    pub fn parsed_start_time(&self) -> Option<String> {
        self.start_time().map(short_clock)
    }

    pub fn parsed_end_time(&self) -> Option<String> {
        self.end_time().map(short_clock)
    }

    pub fn get_guild(&self, name: &str) -> Option<&Guild> {
        self.guilds.iter().find(|guild| guild.name == name)
    }

    /// First player called `name`, searching guilds in roster order.
    pub fn get_player(&self, name: &str) -> Option<&Player> {
        self.guilds.iter().find_map(|guild| guild.get_player(name))
    }
}

fn guild_entry<'a>(guilds: &'a mut Vec<Guild>, name: &str) -> &'a mut Guild {
    let index = match guilds.iter().position(|guild| guild.name == name) {
        Some(index) => index,
        None => {
            guilds.push(Guild::new(name));
            guilds.len() - 1
        }
    };
    &mut guilds[index]
}
