//! Discord REST client implementation

use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{Channel, ChannelId, OutgoingMessage};
use crate::domain::ports::ChatPlatform;
use crate::error::ChatError;

/// Channel kinds that accept text messages: guild text and announcement
const TEXT_CHANNEL_KINDS: [u8; 2] = [0, 5];

/// Implementation of the chat platform port for Discord
pub struct DiscordClient {
    http: Client,
    base_url: String,
    token: String,
    guild_id: Option<String>,
    /// Snapshot of text channels from the last sync, in discovery order
    channels: RwLock<Vec<Channel>>,
}

impl DiscordClient {
    pub fn new(base_url: String, token: String, guild_id: Option<String>) -> Result<Self, ChatError> {
        let http = Client::builder()
            .user_agent(format!(
                "DiscordBot (https://github.com/subrelay/subrelay, {})",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            guild_id,
            channels: RwLock::new(Vec::new()),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.token)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ChatError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ChatError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(ChatError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(ChatError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ChatError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, ChatError> {
        let response = self
            .http
            .get(self.api_url(path))
            .header("Authorization", self.auth_header())
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Refresh the channel snapshot from the guilds the bot belongs to.
    ///
    /// On failure the previous snapshot is kept. Returns the number of
    /// text channels discovered.
    pub async fn sync_channels(&self) -> Result<usize, ChatError> {
        let guild_ids = match &self.guild_id {
            Some(id) => vec![id.clone()],
            None => self
                .get::<Vec<GuildResponse>>("/users/@me/guilds")
                .await?
                .into_iter()
                .map(|g| g.id)
                .collect(),
        };

        let mut discovered = Vec::new();
        for guild_id in &guild_ids {
            let mut channels: Vec<ChannelResponse> = self
                .get(&format!("/guilds/{}/channels", guild_id))
                .await?;
            channels.retain(|c| TEXT_CHANNEL_KINDS.contains(&c.kind));
            channels.sort_by_key(|c| c.position.unwrap_or(i32::MAX));
            discovered.extend(channels.into_iter().map(Channel::from));
        }

        let count = discovered.len();
        tracing::debug!(guilds = guild_ids.len(), channels = count, "Synced text channels");
        *self.channels.write().unwrap_or_else(|e| e.into_inner()) = discovered;
        Ok(count)
    }
}

/// Response types from the Discord API
#[derive(Deserialize)]
struct GuildResponse {
    id: String,
}

#[derive(Deserialize)]
struct ChannelResponse {
    id: String,
    #[serde(rename = "type")]
    kind: u8,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    position: Option<i32>,
}

impl From<ChannelResponse> for Channel {
    fn from(r: ChannelResponse) -> Self {
        Channel {
            id: ChannelId(r.id),
            name: r.name.unwrap_or_default(),
            topic: r.topic,
        }
    }
}

#[async_trait]
impl ChatPlatform for DiscordClient {
    fn text_channels(&self) -> Vec<Channel> {
        self.channels
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    async fn send(&self, channel: &ChannelId, message: &OutgoingMessage) -> Result<(), ChatError> {
        let response = self
            .http
            .post(self.api_url(&format!("/channels/{}/messages", channel)))
            .header("Authorization", self.auth_header())
            .json(message)
            .send()
            .await?;

        if response.status().as_u16() == 404 {
            return Err(ChatError::ChannelNotFound(channel.to_string()));
        }
        // Created message body is not needed
        self.handle_response::<serde_json::Value>(response)
            .await
            .map(|_| ())
    }
}
