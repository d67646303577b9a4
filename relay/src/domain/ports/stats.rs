//! Stats reporter port trait
//!
//! Receives the aggregate outcome of a full distribution pass.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

/// Aggregate outcome of one distribution pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassStats {
    pub elapsed: Duration,
    /// Eligible channels processed
    pub channels_attempted: usize,
    /// Channels whose retrieval failed or whose fallback aborted the loop
    pub channels_failed: usize,
    /// Items delivered by their type-specific renderer
    pub rendered: usize,
    /// Items delivered by the plain-text fallback
    pub fallbacks: usize,
}

impl PassStats {
    pub fn delivered(&self) -> usize {
        self.rendered + self.fallbacks
    }
}

/// Port trait for pass statistics
#[async_trait]
pub trait StatsReporter: Send + Sync {
    async fn report(&self, stats: &PassStats);
}
