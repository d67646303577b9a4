//! Submission renderers
//!
//! Each renderer turns one submission into one chat message of a specific
//! presentation style. The registry maps every `SubmissionType` to exactly
//! one renderer; `Unknown` maps to the plain-text fallback.

pub mod content_text;
pub mod gallery;
pub mod image;
pub mod text;
pub mod video;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DistributionConfig;
use crate::domain::entities::{Channel, Submission, SubmissionType};
use crate::domain::ports::ChatPlatform;
use crate::error::RenderError;

pub use content_text::ContentTextRenderer;
pub use gallery::GalleryRenderer;
pub use image::ImageRenderer;
pub use text::TextRenderer;
pub use video::VideoRenderer;

/// Result of a render attempt that did not hard-fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A message was sent to the channel
    Success,
    /// Nothing was sent; the item should go through the fallback
    Error,
}

/// A rendering capability for one presentation style
#[async_trait]
pub trait SubmissionRenderer: Send + Sync {
    async fn render(
        &self,
        submission: &Submission,
        channel: &Channel,
        config: &DistributionConfig,
    ) -> Result<DispatchOutcome, RenderError>;
}

/// Fixed mapping from submission type to renderer
#[derive(Clone)]
pub struct RendererRegistry {
    gallery: Arc<dyn SubmissionRenderer>,
    image: Arc<dyn SubmissionRenderer>,
    video: Arc<dyn SubmissionRenderer>,
    selftext: Arc<dyn SubmissionRenderer>,
    text: Arc<dyn SubmissionRenderer>,
}

impl RendererRegistry {
    /// The production renderers, all sending through `chat`
    pub fn standard<C>(chat: Arc<C>) -> Self
    where
        C: ChatPlatform + 'static,
    {
        Self {
            gallery: Arc::new(GalleryRenderer::new(chat.clone())),
            image: Arc::new(ImageRenderer::new(chat.clone())),
            video: Arc::new(VideoRenderer::new(chat.clone())),
            selftext: Arc::new(ContentTextRenderer::new(chat.clone())),
            text: Arc::new(TextRenderer::new(chat)),
        }
    }

    /// Replace the renderer for one type
    pub fn with_renderer(mut self, kind: SubmissionType, renderer: Arc<dyn SubmissionRenderer>) -> Self {
        match kind {
            SubmissionType::Gallery => self.gallery = renderer,
            SubmissionType::Image => self.image = renderer,
            SubmissionType::Video => self.video = renderer,
            SubmissionType::Selftext => self.selftext = renderer,
            SubmissionType::Unknown => self.text = renderer,
        }
        self
    }

    pub fn renderer_for(&self, kind: SubmissionType) -> &dyn SubmissionRenderer {
        match kind {
            SubmissionType::Gallery => self.gallery.as_ref(),
            SubmissionType::Image => self.image.as_ref(),
            SubmissionType::Video => self.video.as_ref(),
            SubmissionType::Selftext => self.selftext.as_ref(),
            SubmissionType::Unknown => self.text.as_ref(),
        }
    }

    /// The plain-text renderer used when a type-specific render fails
    pub fn fallback(&self) -> &dyn SubmissionRenderer {
        self.renderer_for(SubmissionType::Unknown)
    }
}

/// Footer line identifying where a submission came from
pub(crate) fn attribution(submission: &Submission) -> String {
    if submission.author.is_empty() {
        format!("r/{}", submission.topic)
    } else {
        format!("r/{} • u/{}", submission.topic, submission.author)
    }
}
