//! Chat platform port trait
//!
//! Defines the interface the distribution pipeline needs from a connected
//! chat session: enumerate destination channels and send messages.

use async_trait::async_trait;

use crate::domain::entities::{Channel, ChannelId, OutgoingMessage};
use crate::error::ChatError;

/// Port trait for chat platform operations
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Text-capable channels known to the session, in discovery order
    fn text_channels(&self) -> Vec<Channel>;

    /// Send a message to a channel
    async fn send(&self, channel: &ChannelId, message: &OutgoingMessage) -> Result<(), ChatError>;
}
