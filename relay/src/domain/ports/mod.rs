//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod chat;
pub mod feed;
pub mod stats;

pub use chat::ChatPlatform;
pub use feed::{FeedClient, FeedSession, PostOptions, TimeFilter};
pub use stats::{PassStats, StatsReporter};
