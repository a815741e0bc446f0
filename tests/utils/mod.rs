pub mod war_builders;

// Re-export main utilities for use by test files
pub use war_builders::WarBuilder;
