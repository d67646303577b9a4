//! Plain-text fallback renderer
//!
//! Sends the title and link as a plain message. Used for `Unknown`
//! submissions and as the fallback for every failed type-specific render.

use std::sync::Arc;

use async_trait::async_trait;

use super::{DispatchOutcome, SubmissionRenderer};
use crate::config::DistributionConfig;
use crate::domain::entities::{truncate, Channel, OutgoingMessage, Submission, MESSAGE_CONTENT_LIMIT};
use crate::domain::ports::ChatPlatform;
use crate::error::RenderError;

pub struct TextRenderer<C: ChatPlatform> {
    chat: Arc<C>,
}

impl<C: ChatPlatform> TextRenderer<C> {
    pub fn new(chat: Arc<C>) -> Self {
        Self { chat }
    }
}

/// Build the fallback message body. Always within the content limit.
pub fn text_content(submission: &Submission) -> String {
    let url = if submission.url.is_empty() {
        submission.permalink.as_str()
    } else {
        submission.url.as_str()
    };
    let link = if submission.is_sensitive() && !url.is_empty() {
        format!("||{}||", url)
    } else {
        url.to_string()
    };

    // "**" + title + "**\n" + link
    let overhead = link.chars().count() + 5;
    let title = truncate(
        &submission.title,
        MESSAGE_CONTENT_LIMIT.saturating_sub(overhead).max(1),
    );
    truncate(&format!("**{}**\n{}", title, link), MESSAGE_CONTENT_LIMIT)
}

#[async_trait]
impl<C: ChatPlatform> SubmissionRenderer for TextRenderer<C> {
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
            "Rendering submission as text"
        );

        let message = OutgoingMessage::text(text_content(submission));
        self.chat.send(&channel.id, &message).await?;
        Ok(DispatchOutcome::Success)
    }
}
