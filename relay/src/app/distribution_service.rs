//! Distribution service
//!
//! Runs a distribution pass: every eligible channel gets the top items of
//! its topic, each rendered by the renderer for its type, with a plain-text
//! fallback when that renderer fails. Channels run concurrently; items
//! within a channel are dispatched one at a time in feed order.

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;

use crate::app::channel_resolver::list_eligible_channels;
use crate::app::error_reporter::report_channel_error;
use crate::config::DistributionConfig;
use crate::domain::entities::{classify, Channel, ChannelId, Submission, SubmissionType};
use crate::domain::ports::{ChatPlatform, FeedClient, PassStats, StatsReporter};
use crate::error::{DistributionError, FeedError, RenderError};
use crate::render::{DispatchOutcome, RendererRegistry};

/// How a single submission reached its channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Sent by the renderer for its classified type
    Rendered(SubmissionType),
    /// Sent by the plain-text fallback
    Fallback,
}

/// Outcome of distributing into one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelReport {
    pub channel: Channel,
    pub rendered: usize,
    pub fallbacks: usize,
    /// Why the channel's run was cut short, if it was
    pub failure: Option<String>,
}

impl ChannelReport {
    fn new(channel: Channel) -> Self {
        Self {
            channel,
            rendered: 0,
            fallbacks: 0,
            failure: None,
        }
    }

    pub fn delivered(&self) -> usize {
        self.rendered + self.fallbacks
    }
}

/// Service distributing feed submissions into chat channels
pub struct DistributionService<C, F, S>
where
    C: ChatPlatform,
    F: FeedClient,
    S: StatsReporter,
{
    chat: Arc<C>,
    feed: Arc<F>,
    stats: Arc<S>,
    renderers: RendererRegistry,
    config: Arc<DistributionConfig>,
}

impl<C, F, S> DistributionService<C, F, S>
where
    C: ChatPlatform,
    F: FeedClient,
    S: StatsReporter,
{
    pub fn new(
        chat: Arc<C>,
        feed: Arc<F>,
        stats: Arc<S>,
        renderers: RendererRegistry,
        config: Arc<DistributionConfig>,
    ) -> Self {
        Self {
            chat,
            feed,
            stats,
            renderers,
            config,
        }
    }

    /// Distribute into every eligible channel, then report pass statistics.
    ///
    /// Stats are reported only after every channel has settled. No channel
    /// failure aborts the pass.
    pub async fn run_distribution_pass(&self) -> PassStats {
        let started = Instant::now();
        let channels = list_eligible_channels(self.chat.as_ref());
        tracing::info!(channels = channels.len(), "Starting distribution pass");

        let tasks = channels.iter().filter_map(|channel| {
            let topic = channel.feed_topic()?;
            Some(self.distribute_channel(channel, topic))
        });
        let reports = join_all(tasks).await;

        let stats = PassStats {
            elapsed: started.elapsed(),
            channels_attempted: reports.len(),
            channels_failed: reports.iter().filter(|r| r.failure.is_some()).count(),
            rendered: reports.iter().map(|r| r.rendered).sum(),
            fallbacks: reports.iter().map(|r| r.fallbacks).sum(),
        };

        tracing::info!(
            channels = stats.channels_attempted,
            failed = stats.channels_failed,
            rendered = stats.rendered,
            fallbacks = stats.fallbacks,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "Distribution pass complete"
        );
        self.stats.report(&stats).await;
        stats
    }

    /// Distribute into a single channel on demand. Pass statistics are not
    /// reported.
    pub async fn distribute_to_channel(
        &self,
        channel_id: &ChannelId,
    ) -> Result<ChannelReport, DistributionError> {
        let channel = self
            .chat
            .text_channels()
            .into_iter()
            .find(|c| &c.id == channel_id)
            .ok_or_else(|| DistributionError::ChannelNotFound(channel_id.to_string()))?;

        let topic = channel
            .feed_topic()
            .ok_or_else(|| DistributionError::IneligibleTopic {
                channel: channel.name.clone(),
            })?;

        Ok(self.distribute_channel(&channel, topic).await)
    }

    async fn distribute_channel(&self, channel: &Channel, topic: &str) -> ChannelReport {
        let mut report = ChannelReport::new(channel.clone());

        if let Err(e) = self.deliver_topic(channel, topic, &mut report).await {
            tracing::error!(
                channel = %channel.name,
                topic = %topic,
                delivered = report.delivered(),
                "Distribution to channel failed: {}",
                e
            );
            report.failure = Some(e.to_string());
            report_channel_error(self.chat.as_ref(), channel, &self.config).await;
        }

        report
    }

    async fn deliver_topic(
        &self,
        channel: &Channel,
        topic: &str,
        report: &mut ChannelReport,
    ) -> Result<(), DistributionError> {
        let submissions = self.fetch_top(topic).await?;
        tracing::debug!(
            channel = %channel.name,
            topic = %topic,
            count = submissions.len(),
            "Fetched submissions"
        );

        for submission in &submissions {
            match self.dispatch(submission, channel).await? {
                Delivery::Rendered(_) => report.rendered += 1,
                Delivery::Fallback => report.fallbacks += 1,
            }
        }
        Ok(())
    }

    async fn fetch_top(&self, topic: &str) -> Result<Vec<Submission>, FeedError> {
        let limit = self.config.fetch_timeout;
        let fetch = async {
            let session = self.feed.open_session().await?;
            self.feed
                .top_submissions(&session, topic, &self.config.reddit.post)
                .await
        };

        tokio::time::timeout(limit, fetch)
            .await
            .map_err(|_| FeedError::Timeout(limit))?
    }

    /// Render one submission into a channel, falling back to plain text
    /// when the type-specific renderer declines or fails.
    ///
    /// An error here means the fallback itself failed.
    pub async fn dispatch(
        &self,
        submission: &Submission,
        channel: &Channel,
    ) -> Result<Delivery, RenderError> {
        let kind = classify(submission);

        let failure = match self
            .renderers
            .renderer_for(kind)
            .render(submission, channel, &self.config)
            .await
        {
            Ok(DispatchOutcome::Success) => return Ok(Delivery::Rendered(kind)),
            Ok(DispatchOutcome::Error) => format!("{} renderer reported an error", kind),
            Err(e) => e.to_string(),
        };

        tracing::warn!(
            channel = %channel.name,
            title = %submission.title,
            kind = %kind,
            "Falling back to text: {}",
            failure
        );

        match self
            .renderers
            .fallback()
            .render(submission, channel, &self.config)
            .await?
        {
            DispatchOutcome::Success => Ok(Delivery::Fallback),
            DispatchOutcome::Error => Err(RenderError::FallbackDeclined),
        }
    }
}
