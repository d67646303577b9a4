//! Channel domain entity
//!
//! A destination text channel on the chat platform. The topic set by the
//! channel owners selects which feed topic is distributed into it.

use serde::{Deserialize, Serialize};

/// Unique identifier for a chat channel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub String);

impl From<&str> for ChannelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A text-capable channel known to the chat session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    pub topic: Option<String>,
}

impl Channel {
    /// The feed topic this channel subscribes to, if its topic is usable.
    pub fn feed_topic(&self) -> Option<&str> {
        self.topic.as_deref().and_then(eligible_topic)
    }

    pub fn is_eligible(&self) -> bool {
        self.feed_topic().is_some()
    }
}

/// Validate a raw channel topic as a single-token feed topic.
///
/// Trailing whitespace is ignored; anything else containing whitespace, or
/// an empty topic, is rejected.
pub fn eligible_topic(raw: &str) -> Option<&str> {
    let topic = raw.trim_end();
    if topic.is_empty() || topic.contains(char::is_whitespace) {
        return None;
    }
    Some(topic)
}
