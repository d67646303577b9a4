//! Reddit adapter
//!
//! Implementation of the feed platform port over the Reddit OAuth API.

pub mod client;
mod listing;

pub use client::RedditClient;
