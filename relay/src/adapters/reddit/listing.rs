//! Reddit listing payloads
//!
//! Only the fields the renderers need are deserialized; everything is
//! defaulted so partial or unusual posts still map to a submission.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::entities::Submission;

#[derive(Deserialize)]
pub(super) struct ListingResponse {
    pub data: ListingData,
}

#[derive(Deserialize)]
pub(super) struct ListingData {
    #[serde(default)]
    pub children: Vec<Thing>,
}

#[derive(Deserialize)]
pub(super) struct Thing {
    pub kind: String,
    pub data: RawSubmission,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(super) struct RawSubmission {
    id: String,
    title: String,
    url: String,
    selftext: String,
    is_video: bool,
    over_18: bool,
    spoiler: bool,
    author: String,
    subreddit: String,
    permalink: String,
    score: i64,
    num_comments: i64,
    media: Option<RawMedia>,
    secure_media: Option<RawMedia>,
    gallery_data: Option<RawGalleryData>,
    media_metadata: Option<HashMap<String, RawMediaMetadata>>,
}

#[derive(Deserialize)]
struct RawMedia {
    #[serde(default)]
    reddit_video: Option<RawRedditVideo>,
}

#[derive(Deserialize)]
struct RawRedditVideo {
    fallback_url: String,
}

#[derive(Deserialize)]
struct RawGalleryData {
    #[serde(default)]
    items: Vec<RawGalleryItem>,
}

#[derive(Deserialize)]
struct RawGalleryItem {
    media_id: String,
}

#[derive(Deserialize)]
struct RawMediaMetadata {
    #[serde(default)]
    s: Option<RawMediaSource>,
}

#[derive(Deserialize)]
struct RawMediaSource {
    #[serde(default)]
    u: Option<String>,
    #[serde(default)]
    gif: Option<String>,
}

fn unescape(url: &str) -> String {
    url.replace("&amp;", "&")
}

impl RawSubmission {
    fn video_url(&self) -> Option<String> {
        [&self.media, &self.secure_media]
            .into_iter()
            .flatten()
            .filter_map(|m| m.reddit_video.as_ref())
            .map(|v| unescape(&v.fallback_url))
            .next()
    }

    fn gallery_image_urls(&self) -> Vec<String> {
        let (Some(gallery), Some(metadata)) = (&self.gallery_data, &self.media_metadata) else {
            return Vec::new();
        };

        gallery
            .items
            .iter()
            .filter_map(|item| metadata.get(&item.media_id))
            .filter_map(|meta| meta.s.as_ref())
            .filter_map(|source| source.u.as_ref().or(source.gif.as_ref()))
            .map(|url| unescape(url))
            .collect()
    }

    /// Map into a domain submission; `service_url` makes the permalink absolute
    pub(super) fn into_submission(self, service_url: &str) -> Submission {
        let video_url = self.video_url();
        let gallery_image_urls = self.gallery_image_urls();
        let permalink = if self.permalink.starts_with('/') {
            format!("{}{}", service_url, self.permalink)
        } else {
            self.permalink
        };

        Submission {
            id: self.id,
            title: self.title,
            url: unescape(&self.url),
            selftext: self.selftext,
            is_video: self.is_video,
            is_over_18: self.over_18,
            is_spoiler: self.spoiler,
            author: self.author,
            topic: self.subreddit,
            permalink,
            score: self.score,
            num_comments: self.num_comments,
            video_url,
            gallery_image_urls,
        }
    }
}
