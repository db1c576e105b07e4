//! Weighted multi-criteria scoring engine behind the cloud provider selector.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
