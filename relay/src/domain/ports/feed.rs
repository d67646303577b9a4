//! Feed platform port trait
//!
//! Defines the interface for retrieving ranked submissions for a topic.

use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Submission;
use crate::error::FeedError;

/// Time window for top-ranked retrieval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFilter::Hour => "hour",
            TimeFilter::Day => "day",
            TimeFilter::Week => "week",
            TimeFilter::Month => "month",
            TimeFilter::Year => "year",
            TimeFilter::All => "all",
        }
    }
}

impl FromStr for TimeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hour" => Ok(TimeFilter::Hour),
            "day" => Ok(TimeFilter::Day),
            "week" => Ok(TimeFilter::Week),
            "month" => Ok(TimeFilter::Month),
            "year" => Ok(TimeFilter::Year),
            "all" => Ok(TimeFilter::All),
            other => Err(format!("unknown time filter '{}'", other)),
        }
    }
}

impl std::fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort and bound applied to every topic retrieval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOptions {
    pub time: TimeFilter,
    pub limit: u32,
}

/// An authenticated feed session
#[derive(Clone)]
pub struct FeedSession {
    pub access_token: String,
}

impl std::fmt::Debug for FeedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedSession")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Port trait for feed platform operations
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Authenticate and open a session
    async fn open_session(&self) -> Result<FeedSession, FeedError>;

    /// Top-ranked submissions for a topic, in ranking order
    async fn top_submissions(
        &self,
        session: &FeedSession,
        topic: &str,
        options: &PostOptions,
    ) -> Result<Vec<Submission>, FeedError>;
}
