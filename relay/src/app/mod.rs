//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and renderers.

pub mod channel_resolver;
pub mod distribution_service;
pub mod error_reporter;

pub use distribution_service::DistributionService;
