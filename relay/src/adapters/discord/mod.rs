//! Discord adapter
//!
//! Implementation of the chat platform port over the Discord REST API.

pub mod client;

pub use client::DiscordClient;
