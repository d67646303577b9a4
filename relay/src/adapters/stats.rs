//! Pass statistics reporter
//!
//! Always logs the pass summary; optionally posts it as an embed to a
//! dedicated channel.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{ChannelId, Embed, OutgoingMessage};
use crate::domain::ports::{ChatPlatform, PassStats, StatsReporter};

pub struct PassStatsReporter<C: ChatPlatform> {
    chat: Arc<C>,
    channel: Option<ChannelId>,
    embed_color: u32,
}

impl<C: ChatPlatform> PassStatsReporter<C> {
    pub fn new(chat: Arc<C>, channel: Option<ChannelId>, embed_color: u32) -> Self {
        Self {
            chat,
            channel,
            embed_color,
        }
    }
}

/// Human-readable duration: `850ms`, `12.3s`, `2m 5s`
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else if millis < 60_000 {
        format!("{:.1}s", elapsed.as_secs_f64())
    } else {
        let secs = elapsed.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

pub fn stats_embed(stats: &PassStats, color: u32) -> Embed {
    Embed::new(color)
        .title("Distribution pass complete")
        .field("Channels", stats.channels_attempted.to_string(), true)
        .field("Failed", stats.channels_failed.to_string(), true)
        .field("Delivered", stats.delivered().to_string(), true)
        .field("Fallbacks", stats.fallbacks.to_string(), true)
        .field("Elapsed", format_elapsed(stats.elapsed), true)
        .timestamp(Utc::now().to_rfc3339())
}

#[async_trait]
impl<C: ChatPlatform> StatsReporter for PassStatsReporter<C> {
    async fn report(&self, stats: &PassStats) {
        tracing::info!(
            channels = stats.channels_attempted,
            failed = stats.channels_failed,
            rendered = stats.rendered,
            fallbacks = stats.fallbacks,
            elapsed = %format_elapsed(stats.elapsed),
            "Pass stats"
        );

        let Some(channel) = &self.channel else {
            return;
        };

        let message = OutgoingMessage::embed(stats_embed(stats, self.embed_color));
        if let Err(e) = self.chat.send(channel, &message).await {
            tracing::warn!("Failed to post pass stats to {}: {}", channel, e);
        }
    }
}
