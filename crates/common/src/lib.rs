//! Shared configuration and telemetry for VQA evaluation.
//!
//! This crate provides:
//! - Layered configuration (`AppConfig`, `ScoringConfig`, `TelemetryConfig`)
//! - Tracing subscriber setup

pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AppConfig, ScoringConfig, TelemetryConfig};
pub use telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
