//! Gallery renderer
//!
//! Sends one embed per image, all sharing the same URL so the chat client
//! groups them into a single gallery.

use std::sync::Arc;

use async_trait::async_trait;

use super::{attribution, DispatchOutcome, SubmissionRenderer};
use crate::config::DistributionConfig;
use crate::domain::entities::{Channel, Embed, OutgoingMessage, Submission, MAX_EMBEDS_PER_MESSAGE};
use crate::domain::ports::ChatPlatform;
use crate::error::RenderError;

pub struct GalleryRenderer<C: ChatPlatform> {
    chat: Arc<C>,
}

impl<C: ChatPlatform> GalleryRenderer<C> {
    pub fn new(chat: Arc<C>) -> Self {
        Self { chat }
    }
}

pub fn gallery_embeds(submission: &Submission, config: &DistributionConfig) -> Vec<Embed> {
    submission
        .gallery_image_urls
        .iter()
        .take(MAX_EMBEDS_PER_MESSAGE)
        .enumerate()
        .map(|(i, image_url)| {
            let embed = if i == 0 {
                Embed::new(config.ui.embed_color)
                    .title(&submission.title)
                    .footer(attribution(submission))
            } else {
                Embed::default()
            };
            embed.url(submission.permalink.clone()).image(image_url.clone())
        })
        .collect()
}

#[async_trait]
impl<C: ChatPlatform> SubmissionRenderer for GalleryRenderer<C> {
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
            images = submission.gallery_image_urls.len(),
            "Rendering submission as gallery"
        );

        if submission.is_sensitive() {
            return Ok(DispatchOutcome::Error);
        }

        let embeds = gallery_embeds(submission, config);
        if embeds.is_empty() {
            // URL looked like a gallery but carried no images
            return Ok(DispatchOutcome::Error);
        }

        self.chat
            .send(&channel.id, &OutgoingMessage::embeds(embeds))
            .await?;
        Ok(DispatchOutcome::Success)
    }
}
