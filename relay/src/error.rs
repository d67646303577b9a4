//! Unified error types for subrelay
//!
//! This module defines error types for each layer:
//! - `ChatError`: Chat platform (Discord) client errors
//! - `FeedError`: Feed platform (Reddit) client errors
//! - `RenderError`: Hard failures raised by a submission renderer
//! - `DistributionError`: Errors surfaced by the distribution service
//! - `ConfigError`: Startup configuration errors

use std::time::Duration;

use thiserror::Error;

/// Chat platform client errors
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid bot token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Feed platform client errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Topic unavailable: {0}")]
    TopicUnavailable(String),

    #[error("Feed request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid feed credentials")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Hard renderer failures.
///
/// Recoverable per-item conditions are reported through
/// `DispatchOutcome::Error` instead; these are the cases a renderer refuses
/// outright.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    #[error("Content too long: {len} characters (limit {limit})")]
    TooLong { len: usize, limit: usize },

    #[error("Restricted content: {0}")]
    Restricted(String),

    #[error("Fallback renderer declined the submission")]
    FallbackDeclined,
}

/// Distribution service errors
#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Fallback render failed: {0}")]
    Render(#[from] RenderError),

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("Channel {channel} has no usable topic")]
    IneligibleTopic { channel: String },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
