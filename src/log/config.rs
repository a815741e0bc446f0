use serde::Deserialize;
use strum_macros::{Display, EnumString};

/// Environment variable read by [`ParseConfig::from_env`].
pub const ON_MALFORMED_ENV: &str = "WARSTATS_ON_MALFORMED";

/// What a batch parse does when a line does not match the log grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MalformedPolicy {
    /// Fail the whole batch on the first bad line.
    #[default]
    Abort,
    /// Drop the bad line and keep going.
    Skip,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    pub on_malformed: MalformedPolicy,
}

impl ParseConfig {
    pub fn new(on_malformed: MalformedPolicy) -> Self {
        Self { on_malformed }
    }

    pub fn from_env() -> Self {
        match std::env::var(ON_MALFORMED_ENV) {
            Ok(value) => Self::from_env_value(&value),
            Err(_) => Self::default(),
        }
    }

    fn from_env_value(value: &str) -> Self {
        match value.trim().parse::<MalformedPolicy>() {
            Ok(on_malformed) => Self { on_malformed },
            Err(_) => {
                tracing::warn!(
                    value,
                    env = ON_MALFORMED_ENV,
                    "Unknown malformed line policy, using default"
                );
                Self::default()
            }
        }
    }
}
