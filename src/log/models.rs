use serde::{Deserialize, Serialize};

/// Guild label for the side that wrote the log.
pub const OWN_GUILD: &str = "Guild";

/// Label used for players that are not in any guild.
pub const NO_GUILD: &str = "No Guild";

/// Raw guild token the game writes for guildless players.
pub(crate) const NO_GUILD_TOKEN: &str = "-1";

/// A single kill/death event between two players.
///
/// `kill` is read from `player_one`'s side: `true` means `player_one` killed
/// `player_two`. `guild` is the affiliation of `player_two`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LogRecord")]
pub struct Log {
    pub player_one: String,
    pub player_two: String,
    pub kill: bool,
    pub guild: String,
    pub time: String,
}

impl Log {
    pub fn new(
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        kill: bool,
        guild: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        let guild = guild.into();
        let guild = if guild == NO_GUILD_TOKEN {
            NO_GUILD.to_string()
        } else {
            guild
        };

        Self {
            player_one: player_one.into(),
            player_two: player_two.into(),
            kill,
            guild,
            time: time.into(),
        }
    }

    /// Re-expresses the event from `player_two`'s side when `perspective_guild`
    /// is the guild recorded on this log. Any other guild leaves the log as is.
    pub fn normalize(&self, perspective_guild: &str) -> Log {
        if self.guild != perspective_guild {
            return self.clone();
        }

        Log {
            player_one: self.player_two.clone(),
            player_two: self.player_one.clone(),
            kill: !self.kill,
            guild: OWN_GUILD.to_string(),
            time: self.time.clone(),
        }
    }
}

// Deserialized logs go through `Log::new` so dumps get the same guild mapping
// as parsed lines.
#[derive(Deserialize)]
struct LogRecord {
    player_one: String,
    player_two: String,
    kill: bool,
    guild: String,
    time: String,
}

impl From<LogRecord> for Log {
    fn from(record: LogRecord) -> Self {
        Log::new(
            record.player_one,
            record.player_two,
            record.kill,
            record.guild,
            record.time,
        )
    }
}
