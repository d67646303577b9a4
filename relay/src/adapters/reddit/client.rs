//! Reddit API client implementation

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use urlencoding::encode;

use super::listing::ListingResponse;
use crate::config::RedditConfig;
use crate::domain::entities::Submission;
use crate::domain::ports::{FeedClient, FeedSession, PostOptions};
use crate::error::FeedError;

/// Implementation of the feed platform port for Reddit
pub struct RedditClient {
    http: Client,
    config: RedditConfig,
}

impl RedditClient {
    pub fn new(config: RedditConfig) -> Result<Self, FeedError> {
        // A redirect on a listing means the subreddit does not exist
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(Policy::none())
            .build()?;

        Ok(Self { http, config })
    }

    fn token_url(&self) -> String {
        format!("{}/api/v1/access_token", self.config.service_url)
    }

    fn top_url(&self, topic: &str) -> String {
        format!("{}/r/{}/top", self.config.api_url, encode(topic))
    }

    fn grant(&self) -> Vec<(&'static str, &str)> {
        match (&self.config.username, &self.config.password) {
            (Some(username), Some(password)) => vec![
                ("grant_type", "password"),
                ("username", username.as_str()),
                ("password", password.as_str()),
            ],
            _ => vec![("grant_type", "client_credentials")],
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl FeedClient for RedditClient {
    async fn open_session(&self) -> Result<FeedSession, FeedError> {
        let response = self
            .http
            .post(self.token_url())
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&self.grant())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FeedError::Unauthorized);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FeedError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| FeedError::Deserialization(e.to_string()))?;

        // Bad credentials come back as 200 with an error field
        match (token.access_token, token.error) {
            (Some(access_token), None) => Ok(FeedSession { access_token }),
            (_, Some(error)) => {
                tracing::warn!("Token request rejected: {}", error);
                Err(FeedError::Unauthorized)
            }
            (None, None) => Err(FeedError::Deserialization(
                "token response without access_token".to_string(),
            )),
        }
    }

    async fn top_submissions(
        &self,
        session: &FeedSession,
        topic: &str,
        options: &PostOptions,
    ) -> Result<Vec<Submission>, FeedError> {
        let limit = options.limit.to_string();
        let response = self
            .http
            .get(self.top_url(topic))
            .bearer_auth(&session.access_token)
            .query(&[
                ("t", options.time.as_str()),
                ("limit", limit.as_str()),
                ("raw_json", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status.is_redirection()
            || status == StatusCode::NOT_FOUND
            || status == StatusCode::FORBIDDEN
        {
            return Err(FeedError::TopicUnavailable(topic.to_string()));
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(FeedError::Unauthorized);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FeedError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let listing: ListingResponse = response
            .json()
            .await
            .map_err(|e| FeedError::Deserialization(e.to_string()))?;

        Ok(listing
            .data
            .children
            .into_iter()
            .filter(|thing| thing.kind == "t3")
            .map(|thing| thing.data.into_submission(&self.config.service_url))
            .collect())
    }
}
