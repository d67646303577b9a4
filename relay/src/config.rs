use std::env;
use std::time::Duration;

use crate::domain::ports::{PostOptions, TimeFilter};
use crate::error::ConfigError;

const DEFAULT_DISCORD_API_URL: &str = "https://discord.com/api/v10";
const DEFAULT_REDDIT_SERVICE_URL: &str = "https://www.reddit.com";
const DEFAULT_REDDIT_API_URL: &str = "https://oauth.reddit.com";
const DEFAULT_EMBED_COLOR: u32 = 0xE6742B;
const DEFAULT_POST_LIMIT: u32 = 3;
const MAX_POST_LIMIT: u32 = 100;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Process-wide configuration, loaded once at startup
#[derive(Clone, Debug)]
pub struct Config {
    pub discord_token: String,
    pub discord_api_url: String,
    /// Restrict channel discovery to a single guild
    pub discord_guild_id: Option<String>,
    /// Channel that receives the per-pass summary embed
    pub stats_channel_id: Option<String>,
    /// Re-run the distribution pass on this period instead of exiting
    pub run_interval: Option<Duration>,
    pub distribution: DistributionConfig,
}

/// Read-only configuration shared by every channel task of a pass
#[derive(Clone, Debug)]
pub struct DistributionConfig {
    pub reddit: RedditConfig,
    pub ui: UiConfig,
    /// Upper bound on opening a feed session plus fetching one topic
    pub fetch_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct RedditConfig {
    pub client_id: String,
    pub client_secret: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub user_agent: String,
    /// Public web base URL, used for permalinks and deep links
    pub service_url: String,
    /// OAuth API base URL
    pub api_url: String,
    pub post: PostOptions,
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    pub embed_color: u32,
}

impl RedditConfig {
    /// Deep link to a topic on the feed platform's website
    pub fn topic_url(&self, topic: &str) -> String {
        format!("{}/r/{}", self.service_url, topic)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let post = PostOptions {
            time: match get("REDDIT_POST_TIME") {
                Some(value) => value.parse().map_err(|reason| ConfigError::Invalid {
                    key: "REDDIT_POST_TIME",
                    value,
                    reason,
                })?,
                None => TimeFilter::Day,
            },
            limit: match get("REDDIT_POST_LIMIT") {
                Some(value) => parse_post_limit(&value).map_err(|reason| ConfigError::Invalid {
                    key: "REDDIT_POST_LIMIT",
                    value,
                    reason,
                })?,
                None => DEFAULT_POST_LIMIT,
            },
        };

        let reddit = RedditConfig {
            client_id: required("REDDIT_CLIENT_ID")?,
            client_secret: required("REDDIT_CLIENT_SECRET")?,
            username: get("REDDIT_USERNAME"),
            password: get("REDDIT_PASSWORD"),
            user_agent: get("REDDIT_USER_AGENT")
                .unwrap_or_else(|| format!("subrelay/{}", env!("CARGO_PKG_VERSION"))),
            service_url: trim_url(
                get("REDDIT_SERVICE_URL").unwrap_or_else(|| DEFAULT_REDDIT_SERVICE_URL.into()),
            ),
            api_url: trim_url(
                get("REDDIT_API_URL").unwrap_or_else(|| DEFAULT_REDDIT_API_URL.into()),
            ),
            post,
        };

        let embed_color = match get("EMBED_COLOR") {
            Some(value) => parse_color(&value).map_err(|reason| ConfigError::Invalid {
                key: "EMBED_COLOR",
                value,
                reason,
            })?,
            None => DEFAULT_EMBED_COLOR,
        };

        let fetch_timeout = match get("FETCH_TIMEOUT_SECS") {
            Some(value) => parse_secs(&value).map_err(|reason| ConfigError::Invalid {
                key: "FETCH_TIMEOUT_SECS",
                value,
                reason,
            })?,
            None => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        let run_interval = get("RUN_INTERVAL_SECS")
            .map(|value| {
                parse_secs(&value).map_err(|reason| ConfigError::Invalid {
                    key: "RUN_INTERVAL_SECS",
                    value,
                    reason,
                })
            })
            .transpose()?;

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            discord_api_url: trim_url(
                get("DISCORD_API_URL").unwrap_or_else(|| DEFAULT_DISCORD_API_URL.into()),
            ),
            discord_guild_id: get("DISCORD_GUILD_ID"),
            stats_channel_id: get("STATS_CHANNEL_ID"),
            run_interval,
            distribution: DistributionConfig {
                reddit,
                ui: UiConfig { embed_color },
                fetch_timeout,
            },
        })
    }

    /// Whether the feed client should use the password grant
    pub fn reddit_script_auth(&self) -> bool {
        self.distribution.reddit.username.is_some() && self.distribution.reddit.password.is_some()
    }
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Parse `#E6742B`, `0xE6742B` or a bare six-digit hex code `E6742B`.
///
/// A bare six-character value is always hex (`112233` is `0x112233`); any
/// other unprefixed value is decimal.
pub fn parse_color(value: &str) -> Result<u32, String> {
    let hex = value
        .strip_prefix('#')
        .or_else(|| value.strip_prefix("0x"))
        .or_else(|| value.strip_prefix("0X"));

    let color = match hex {
        Some(hex) => u32::from_str_radix(hex, 16).map_err(|e| e.to_string())?,
        None if value.len() == 6 && value.chars().all(|c| c.is_ascii_hexdigit()) => {
            u32::from_str_radix(value, 16).map_err(|e| e.to_string())?
        }
        None => value.parse::<u32>().map_err(|e| e.to_string())?,
    };

    if color > 0xFF_FFFF {
        return Err("color must fit in 24 bits".to_string());
    }
    Ok(color)
}

fn parse_post_limit(value: &str) -> Result<u32, String> {
    let limit: u32 = value.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    if limit == 0 || limit > MAX_POST_LIMIT {
        return Err(format!("must be between 1 and {}", MAX_POST_LIMIT));
    }
    Ok(limit)
}

fn parse_secs(value: &str) -> Result<Duration, String> {
    let secs: u64 = value.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    if secs == 0 {
        return Err("must be greater than zero".to_string());
    }
    Ok(Duration::from_secs(secs))
}
