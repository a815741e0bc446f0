//! Parser for the plain-text kill/death lines written by the game:
//!
//! ```text
//! [<time>] <player_one> (died to|has killed) <player_two> from <guild>
//! ```

use super::config::{MalformedPolicy, ParseConfig};
use super::errors::LogError;
use super::models::{Log, NO_GUILD_TOKEN};

#[derive(Debug, Clone, Default)]
pub struct LogParser {
    config: ParseConfig,
}

impl LogParser {
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Parses a single line. Lines that do not follow the log grammar fail with
    /// [`LogError::Malformed`] regardless of the configured policy.
    pub fn parse(&self, line: &str) -> Result<Log, LogError> {
        parse_line(line)
    }

    /// Parses a batch of lines in order, applying the configured
    /// [`MalformedPolicy`] to lines that do not parse.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<Vec<Log>, LogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut logs = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            match parse_line(line.as_ref()) {
                Ok(log) => logs.push(log),
                Err(error) => match self.config.on_malformed {
                    MalformedPolicy::Abort => return Err(error),
                    MalformedPolicy::Skip => {
                        tracing::warn!(
                            line_number = index + 1,
                            %error,
                            "Skipping malformed log line"
                        );
                    }
                },
            }
        }

        Ok(logs)
    }
}

fn parse_line(line: &str) -> Result<Log, LogError> {
    let trimmed = line.trim_end_matches(|c| c == '\r' || c == '\n');

    let rest = trimmed
        .strip_prefix('[')
        .ok_or_else(|| LogError::malformed(line, "missing '[' before timestamp"))?;
    let (time, rest) = rest
        .split_once(']')
        .ok_or_else(|| LogError::malformed(line, "missing ']' after timestamp"))?;
    if time.is_empty() {
        return Err(LogError::malformed(line, "empty timestamp"));
    }
    let rest = rest
        .strip_prefix(' ')
        .ok_or_else(|| LogError::malformed(line, "missing space after timestamp"))?;

    // Tokens are separated by exactly one space; doubled spaces leave empty tokens.
    let tokens: Vec<&str> = rest.split(' ').collect();
    let (player_one, kill, player_two, guild) = match tokens.as_slice() {
        [player_one, "has", "killed", player_two, "from", guild] => {
            (*player_one, true, *player_two, *guild)
        }
        [player_one, "died", "to", player_two, "from", guild] => {
            (*player_one, false, *player_two, *guild)
        }
        _ => {
            return Err(LogError::malformed(
                line,
                "expected '<player> has killed|died to <player> from <guild>'",
            ))
        }
    };

    if !is_word(player_one) || !is_word(player_two) {
        return Err(LogError::malformed(
            line,
            "player names must be word characters",
        ));
    }
    if guild != NO_GUILD_TOKEN && !is_word(guild) {
        return Err(LogError::malformed(line, "guild must be word characters"));
    }

    Ok(Log::new(player_one, player_two, kill, guild, time))
}

fn is_word(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || character == '_')
}
