//! Subrelay
//!
//! Distributes top subreddit posts into Discord text channels. Each channel
//! names its subreddit in its topic; every pass pulls the top posts of each
//! topic and renders them according to their type.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod render;

#[cfg(test)]
mod test_utils;


use adapters::{DiscordClient, PassStatsReporter, RedditClient};
use app::DistributionService;
use config::Config;
use domain::entities::ChannelId;
use render::RendererRegistry;

#[derive(Parser, Debug)]
#[command(name = "subrelay", version, about = "Relay top subreddit posts into Discord channels")]
struct Args {
    /// Only distribute into this channel
    #[arg(long, value_name = "ID")]
    channel: Option<String>,

    /// Repeat the distribution pass every SECS seconds
    #[arg(long, value_name = "SECS", env = "RUN_INTERVAL_SECS")]
    interval: Option<u64>,
}

type Relay = DistributionService<DiscordClient, RedditClient, PassStatsReporter<DiscordClient>>;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,subrelay=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    tracing::info!("Starting subrelay...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    if config.reddit_script_auth() {
        tracing::debug!("Using password grant for the feed session");
    }
    let interval = args
        .interval
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .or(config.run_interval);

    // Create adapters
    let discord = Arc::new(
        DiscordClient::new(
            config.discord_api_url.clone(),
            config.discord_token.clone(),
            config.discord_guild_id.clone(),
        )
        .context("Failed to build Discord client")?,
    );
    let reddit = Arc::new(
        RedditClient::new(config.distribution.reddit.clone())
            .context("Failed to build Reddit client")?,
    );
    let stats = Arc::new(PassStatsReporter::new(
        discord.clone(),
        config.stats_channel_id.clone().map(ChannelId),
        config.distribution.ui.embed_color,
    ));

    let channels = discord
        .sync_channels()
        .await
        .context("Failed to list Discord channels")?;
    tracing::info!("Discovered {} text channels", channels);

    // Create application service
    let relay = DistributionService::new(
        discord.clone(),
        reddit,
        stats,
        RendererRegistry::standard(discord.clone()),
        Arc::new(config.distribution.clone()),
    );

    if let Some(channel) = args.channel {
        return run_single_channel(&relay, ChannelId(channel)).await;
    }

    match interval {
        None => {
            relay.run_distribution_pass().await;
        }
        Some(period) => run_forever(&relay, &discord, period).await,
    }

    Ok(())
}

async fn run_single_channel(relay: &Relay, channel: ChannelId) -> Result<()> {
    let report = relay
        .distribute_to_channel(&channel)
        .await
        .with_context(|| format!("Distribution into channel {} failed", channel))?;

    tracing::info!(
        channel = %report.channel.name,
        rendered = report.rendered,
        fallbacks = report.fallbacks,
        "Channel distribution complete"
    );
    if let Some(failure) = report.failure {
        tracing::warn!("Channel {} stopped early: {}", report.channel.name, failure);
    }
    Ok(())
}

/// Run a pass every `period` until interrupted. Channels are re-synced
/// before each pass; a failed sync keeps the previous snapshot.
async fn run_forever(relay: &Relay, discord: &DiscordClient, period: Duration) {
    tracing::info!("Running a distribution pass every {}s", period.as_secs());
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = discord.sync_channels().await {
                    tracing::warn!("Channel sync failed, using previous snapshot: {}", e);
                }
                relay.run_distribution_pass().await;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                break;
            }
        }
    }
}
