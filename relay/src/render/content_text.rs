//! Content-text renderer
//!
//! Renders a self post's body as a markdown code block.

use std::sync::Arc;

use async_trait::async_trait;

use super::{DispatchOutcome, SubmissionRenderer};
use crate::config::DistributionConfig;
use crate::domain::entities::{Channel, OutgoingMessage, Submission, MESSAGE_CONTENT_LIMIT};
use crate::domain::ports::ChatPlatform;
use crate::error::RenderError;

pub struct ContentTextRenderer<C: ChatPlatform> {
    chat: Arc<C>,
}

impl<C: ChatPlatform> ContentTextRenderer<C> {
    pub fn new(chat: Arc<C>) -> Self {
        Self { chat }
    }
}

/// Title in bold followed by the body in a markdown code block
pub fn content_text(submission: &Submission) -> String {
    format!(
        "**{}**\n```md\n{}\n```",
        submission.title, submission.selftext
    )
}

#[async_trait]
impl<C: ChatPlatform> SubmissionRenderer for ContentTextRenderer<C> {
    /// Fails hard on adult/spoiler content and when the composed message
    /// would exceed the message limit.
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
            "Rendering submission as content text"
        );

        if submission.is_sensitive() {
            return Err(RenderError::Restricted(
                "submission is NSFW or spoiler".to_string(),
            ));
        }

        let content = content_text(submission);
        let len = content.chars().count();
        if len > MESSAGE_CONTENT_LIMIT {
            return Err(RenderError::TooLong {
                len,
                limit: MESSAGE_CONTENT_LIMIT,
            });
        }

        self.chat
            .send(&channel.id, &OutgoingMessage::text(content))
            .await?;
        Ok(DispatchOutcome::Success)
    }
}
