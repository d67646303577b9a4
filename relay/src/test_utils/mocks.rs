//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They record every call so tests can verify behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::config::DistributionConfig;
use crate::domain::entities::{Channel, ChannelId, OutgoingMessage, Submission, MESSAGE_CONTENT_LIMIT};
use crate::domain::ports::{ChatPlatform, FeedClient, FeedSession, PassStats, PostOptions, StatsReporter};
use crate::error::{ChatError, FeedError, RenderError};
use crate::render::{DispatchOutcome, SubmissionRenderer};

// ============================================================================
// Mock Chat Platform
// ============================================================================

#[derive(Default)]
pub struct MockChatPlatform {
    channels: Arc<RwLock<Vec<Channel>>>,
    sent: Arc<RwLock<Vec<(ChannelId, OutgoingMessage)>>>,
    failing_channels: Arc<RwLock<HashSet<ChannelId>>>,
    /// Number of upcoming sends that fail regardless of channel
    fail_next: Arc<AtomicUsize>,
}

impl MockChatPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a channel with the session
    pub fn with_channel(self, channel: Channel) -> Self {
        self.channels.write().unwrap().push(channel);
        self
    }

    /// Every send to this channel fails
    pub fn failing_channel(self, id: &ChannelId) -> Self {
        self.failing_channels.write().unwrap().insert(id.clone());
        self
    }

    /// The next `count` sends fail
    pub fn failing_next_sends(self, count: usize) -> Self {
        self.fail_next.store(count, Ordering::SeqCst);
        self
    }

    pub fn sent(&self) -> Vec<(ChannelId, OutgoingMessage)> {
        self.sent.read().unwrap().clone()
    }

    pub fn sent_to(&self, id: &ChannelId) -> Vec<OutgoingMessage> {
        self.sent
            .read()
            .unwrap()
            .iter()
            .filter(|(channel, _)| channel == id)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

#[async_trait]
impl ChatPlatform for MockChatPlatform {
    fn text_channels(&self) -> Vec<Channel> {
        self.channels.read().unwrap().clone()
    }

    async fn send(&self, channel: &ChannelId, message: &OutgoingMessage) -> Result<(), ChatError> {
        let forced = self
            .fail_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if forced || self.failing_channels.read().unwrap().contains(channel) {
            return Err(ChatError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        // Mirror the platform's own size check
        let too_long = message
            .content
            .as_ref()
            .is_some_and(|c| c.chars().count() > MESSAGE_CONTENT_LIMIT);
        if too_long {
            return Err(ChatError::Api {
                status: 400,
                message: "content: Must be 2000 or fewer in length.".to_string(),
            });
        }

        self.sent
            .write()
            .unwrap()
            .push((channel.clone(), message.clone()));
        Ok(())
    }
}

// ============================================================================
// Mock Feed Client
// ============================================================================

type FeedRequest = (String, PostOptions);

#[derive(Default)]
pub struct MockFeedClient {
    listings: Arc<RwLock<HashMap<String, Vec<Submission>>>>,
    failing_topics: Arc<RwLock<HashSet<String>>>,
    hanging_topics: Arc<RwLock<HashSet<String>>>,
    session_fails: Arc<RwLock<bool>>,
    requests: Arc<RwLock<Vec<FeedRequest>>>,
}

impl MockFeedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the top listing returned for a topic
    pub fn with_listing(self, topic: &str, submissions: Vec<Submission>) -> Self {
        self.listings
            .write()
            .unwrap()
            .insert(topic.to_string(), submissions);
        self
    }

    /// Retrieval for this topic fails
    pub fn failing_topic(self, topic: &str) -> Self {
        self.failing_topics.write().unwrap().insert(topic.to_string());
        self
    }

    /// Retrieval for this topic never resolves
    pub fn hanging_topic(self, topic: &str) -> Self {
        self.hanging_topics.write().unwrap().insert(topic.to_string());
        self
    }

    /// Opening a session fails
    pub fn failing_session(self) -> Self {
        *self.session_fails.write().unwrap() = true;
        self
    }

    /// Shared handle on recorded retrievals, usable after the mock is moved
    pub fn requests_handle(&self) -> Arc<RwLock<Vec<FeedRequest>>> {
        self.requests.clone()
    }
}

#[async_trait]
impl FeedClient for MockFeedClient {
    async fn open_session(&self) -> Result<FeedSession, FeedError> {
        if *self.session_fails.read().unwrap() {
            return Err(FeedError::Unauthorized);
        }
        Ok(FeedSession {
            access_token: "mock-token".to_string(),
        })
    }

    async fn top_submissions(
        &self,
        _session: &FeedSession,
        topic: &str,
        options: &PostOptions,
    ) -> Result<Vec<Submission>, FeedError> {
        self.requests
            .write()
            .unwrap()
            .push((topic.to_string(), *options));

        let hanging = self.hanging_topics.read().unwrap().contains(topic);
        if hanging {
            std::future::pending::<()>().await;
        }
        if self.failing_topics.read().unwrap().contains(topic) {
            return Err(FeedError::TopicUnavailable(topic.to_string()));
        }

        let listings = self.listings.read().unwrap();
        Ok(listings.get(topic).cloned().unwrap_or_default())
    }
}

// ============================================================================
// Recording Stats Reporter
// ============================================================================

#[derive(Default)]
pub struct RecordingStatsReporter {
    reports: RwLock<Vec<PassStats>>,
}

impl RecordingStatsReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<PassStats> {
        self.reports.read().unwrap().clone()
    }
}

#[async_trait]
impl StatsReporter for RecordingStatsReporter {
    async fn report(&self, stats: &PassStats) {
        self.reports.write().unwrap().push(stats.clone());
    }
}

// ============================================================================
// Recording Renderer
// ============================================================================

/// Ordered log shared between several recording renderers
#[derive(Clone, Default)]
pub struct CallLog(Arc<RwLock<Vec<String>>>);

impl CallLog {
    pub fn push(&self, entry: String) {
        self.0.write().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.read().unwrap().clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderBehavior {
    Succeed,
    Decline,
    Fail,
}

pub struct RecordingRenderer {
    label: &'static str,
    behavior: RenderBehavior,
    log: Option<CallLog>,
    calls: RwLock<Vec<String>>,
}

impl RecordingRenderer {
    pub fn new(label: &'static str, behavior: RenderBehavior) -> Self {
        Self {
            label,
            behavior,
            log: None,
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new("recorder", RenderBehavior::Succeed)
    }

    /// Append `label:title` to a shared log on every call
    pub fn logging_to(mut self, log: CallLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Titles of the submissions this renderer was called with
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionRenderer for RecordingRenderer {
    async fn render(
        &self,
        submission: &Submission,
        _channel: &Channel,
        _config: &DistributionConfig,
    ) -> Result<DispatchOutcome, RenderError> {
        self.calls.write().unwrap().push(submission.title.clone());
        if let Some(log) = &self.log {
            log.push(format!("{}:{}", self.label, submission.title));
        }

        match self.behavior {
            RenderBehavior::Succeed => Ok(DispatchOutcome::Success),
            RenderBehavior::Decline => Ok(DispatchOutcome::Error),
            RenderBehavior::Fail => Err(RenderError::Restricted("mock failure".to_string())),
        }
    }
}
