//! Image renderer

use std::sync::Arc;

use async_trait::async_trait;

use super::{attribution, DispatchOutcome, SubmissionRenderer};
use crate::config::DistributionConfig;
use crate::domain::entities::{Channel, Embed, OutgoingMessage, Submission};
use crate::domain::ports::ChatPlatform;
use crate::error::RenderError;

pub struct ImageRenderer<C: ChatPlatform> {
    chat: Arc<C>,
}

impl<C: ChatPlatform> ImageRenderer<C> {
    pub fn new(chat: Arc<C>) -> Self {
        Self { chat }
    }
}

pub fn image_embed(submission: &Submission, config: &DistributionConfig) -> Embed {
    Embed::new(config.ui.embed_color)
        .title(&submission.title)
        .url(submission.permalink.clone())
        .image(submission.url.clone())
        .footer(attribution(submission))
}

#[async_trait]
impl<C: ChatPlatform> SubmissionRenderer for ImageRenderer<C> {
    async fn render(
        &self,
        submission: &Submission,
        channel: &Channel,
        config: &DistributionConfig,
    ) -> Result<DispatchOutcome, RenderError> {
        tracing::debug!(
            channel = %channel.name,
            title = %submission.title,
            url = %submission.url,
            "Rendering submission as image"
        );

        // Inline previews would expose the content
        if submission.is_sensitive() {
            return Ok(DispatchOutcome::Error);
        }

        let message = OutgoingMessage::embed(image_embed(submission, config));
        self.chat.send(&channel.id, &message).await?;
        Ok(DispatchOutcome::Success)
    }
}
