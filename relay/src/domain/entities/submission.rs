//! Submission domain entity
//!
//! An item fetched from the feed platform, and the classification that
//! decides how it is rendered into a channel.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// URL fragment marking a multi-image gallery post
pub const GALLERY_MARKER: &str = "gallery";

static IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpe?g|png|gif|webp|bmp|svg)$").expect("image extension pattern")
});

/// A feed item, immutable once fetched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub title: String,
    pub url: String,
    pub selftext: String,
    pub is_video: bool,
    pub is_over_18: bool,
    pub is_spoiler: bool,
    pub author: String,
    /// Feed topic the submission was fetched from
    pub topic: String,
    /// Absolute link to the discussion page
    pub permalink: String,
    pub score: i64,
    pub num_comments: i64,
    /// Direct media URL for hosted videos
    pub video_url: Option<String>,
    /// Resolved image URLs for gallery posts, in gallery order
    pub gallery_image_urls: Vec<String>,
}

impl Submission {
    /// Adult or spoiler content that must not be previewed inline
    pub fn is_sensitive(&self) -> bool {
        self.is_over_18 || self.is_spoiler
    }
}

/// Rendering strategy for a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionType {
    Gallery,
    Image,
    Video,
    Selftext,
    Unknown,
}

impl SubmissionType {
    pub const ALL: [SubmissionType; 5] = [
        SubmissionType::Gallery,
        SubmissionType::Image,
        SubmissionType::Video,
        SubmissionType::Selftext,
        SubmissionType::Unknown,
    ];
}

impl std::fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionType::Gallery => write!(f, "gallery"),
            SubmissionType::Image => write!(f, "image"),
            SubmissionType::Video => write!(f, "video"),
            SubmissionType::Selftext => write!(f, "selftext"),
            SubmissionType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classify a submission. First match wins:
/// gallery URL, direct image URL, hosted video, non-empty selftext.
pub fn classify(submission: &Submission) -> SubmissionType {
    if submission.url.contains(GALLERY_MARKER) {
        SubmissionType::Gallery
    } else if is_url_an_image(&submission.url) {
        SubmissionType::Image
    } else if submission.is_video {
        SubmissionType::Video
    } else if !submission.selftext.is_empty() {
        SubmissionType::Selftext
    } else {
        SubmissionType::Unknown
    }
}

/// Whether a URL points directly at an image resource, judged by the
/// extension of its path. Query string and fragment are ignored.
pub fn is_url_an_image(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    IMAGE_URL.is_match(path)
}
