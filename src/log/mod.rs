pub mod config;
mod errors;
pub mod models;
pub mod parser;

pub use config::{MalformedPolicy, ParseConfig};
pub use errors::LogError;
pub use models::{Log, NO_GUILD, OWN_GUILD};
pub use parser::LogParser;
