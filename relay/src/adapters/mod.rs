//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod discord;
pub mod reddit;
pub mod stats;

pub use discord::DiscordClient;
pub use reddit::RedditClient;
pub use stats::PassStatsReporter;
