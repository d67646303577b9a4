//! Error reporter
//!
//! Posts a visible diagnostic into a channel whose topic could not be
//! fetched at all.

use crate::config::DistributionConfig;
use crate::domain::entities::{Channel, Embed, OutgoingMessage};
use crate::domain::ports::ChatPlatform;

pub fn channel_error_embed(topic: &str, config: &DistributionConfig) -> Embed {
    Embed::new(config.ui.embed_color)
        .title(topic)
        .description(&format!("The feed r/{} does not seem to be available", topic))
        .url(config.reddit.topic_url(topic))
}

/// Send one diagnostic embed to `channel`. Never fails: a send error is
/// logged and dropped.
pub async fn report_channel_error<C: ChatPlatform + ?Sized>(
    chat: &C,
    channel: &Channel,
    config: &DistributionConfig,
) {
    let topic = channel
        .feed_topic()
        .or(channel.topic.as_deref())
        .unwrap_or_default();
    let message = OutgoingMessage::embed(channel_error_embed(topic, config));

    if let Err(e) = chat.send(&channel.id, &message).await {
        tracing::error!(
            channel = %channel.name,
            topic = %topic,
            "Failed to send channel diagnostic: {}",
            e
        );
    }
}
