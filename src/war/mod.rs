mod aggregate;
pub mod models;
pub mod summary;

pub use models::War;
pub use summary::{GuildSummary, PlayerSummary, WarSummary};
