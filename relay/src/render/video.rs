//! Video renderer
//!
//! Posts the direct media link so the chat client plays it inline.

use std::sync::Arc;

use async_trait::async_trait;

use super::{DispatchOutcome, SubmissionRenderer};
use crate::config::DistributionConfig;
use crate::domain::entities::{truncate, Channel, OutgoingMessage, Submission, EMBED_TITLE_LIMIT};
use crate::domain::ports::ChatPlatform;
use crate::error::RenderError;

pub struct VideoRenderer<C: ChatPlatform> {
    chat: Arc<C>,
}

impl<C: ChatPlatform> VideoRenderer<C> {
    pub fn new(chat: Arc<C>) -> Self {
        Self { chat }
    }
}

#[async_trait]
impl<C: ChatPlatform> SubmissionRenderer for VideoRenderer<C> {
    async fn render(
        &self,
        submission: &Submission,
        channel: &Channel,
        _config: &DistributionConfig,
    ) -> Result<DispatchOutcome, RenderError> {
        tracing::debug!(
            channel = %channel.name,
            title = %submission.title,
            url = %submission.url,
            "Rendering submission as video"
        );

        let video_url = match submission.video_url.as_deref() {
            Some(url) if !submission.is_sensitive() => url,
            _ => return Ok(DispatchOutcome::Error),
        };

        let content = format!(
            "**{}**\n{}",
            truncate(&submission.title, EMBED_TITLE_LIMIT),
            video_url
        );
        self.chat
            .send(&channel.id, &OutgoingMessage::text(content))
            .await?;
        Ok(DispatchOutcome::Success)
    }
}
