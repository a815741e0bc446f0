// Library crate for war log statistics
// Parses kill/death log lines and aggregates them per player, guild and war

pub mod log;
pub mod roster;
pub mod time;
pub mod war;

// Re-export commonly used types for easier access in tests
pub use log::{Log, LogError, LogParser, MalformedPolicy, ParseConfig, NO_GUILD, OWN_GUILD};
pub use roster::{Guild, KillDeath, Player};
pub use war::{GuildSummary, PlayerSummary, War, WarSummary};
