//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::time::Duration;

use crate::config::{DistributionConfig, RedditConfig, UiConfig};
use crate::domain::entities::{Channel, ChannelId, Submission};
use crate::domain::ports::{PostOptions, TimeFilter};

/// Distribution config pointing at the public feed site
pub fn test_config() -> DistributionConfig {
    DistributionConfig {
        reddit: RedditConfig {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            username: None,
            password: None,
            user_agent: "subrelay-tests/0.1".to_string(),
            service_url: "https://www.reddit.com".to_string(),
            api_url: "https://oauth.reddit.com".to_string(),
            post: PostOptions {
                time: TimeFilter::Day,
                limit: 3,
            },
        },
        ui: UiConfig {
            embed_color: 0xE6742B,
        },
        fetch_timeout: Duration::from_secs(5),
    }
}

/// Create a text channel with the given id and raw topic
pub fn test_channel(id: &str, topic: &str) -> Channel {
    Channel {
        id: ChannelId::from(id),
        name: format!("channel-{}", id),
        topic: Some(topic.to_string()),
    }
}

fn base_submission(title: &str, url: &str) -> Submission {
    let slug = title.to_lowercase().replace(' ', "_");
    Submission {
        id: format!("t3_{}", slug),
        title: title.to_string(),
        url: url.to_string(),
        author: "test-author".to_string(),
        topic: "funny".to_string(),
        permalink: format!("https://www.reddit.com/r/funny/comments/abc/{}/", slug),
        score: 100,
        num_comments: 10,
        ..Default::default()
    }
}

/// A plain link post, classified as `Unknown`
pub fn link_submission(title: &str, url: &str) -> Submission {
    base_submission(title, url)
}

/// A direct image post
pub fn image_submission(title: &str, url: &str) -> Submission {
    base_submission(title, url)
}

/// A self post with a body and no media
pub fn selftext_submission(title: &str, body: &str) -> Submission {
    let mut submission = base_submission(title, "");
    submission.url = submission.permalink.clone();
    submission.selftext = body.to_string();
    submission
}

/// A hosted video post
pub fn video_submission(title: &str, video_url: &str) -> Submission {
    let mut submission = base_submission(title, "https://v.redd.it/abc123");
    submission.is_video = true;
    submission.video_url = Some(video_url.to_string());
    submission
}

/// A gallery post with the given resolved image URLs
pub fn gallery_submission(title: &str, image_urls: Vec<String>) -> Submission {
    let mut submission = base_submission(title, "https://www.reddit.com/gallery/abc123");
    submission.gallery_image_urls = image_urls;
    submission
}
