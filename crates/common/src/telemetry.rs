//! Structured logging setup.
//!
//! Scoring itself only emits `tracing` events; harnesses embedding the scorer
//! call [`init_tracing`] once at startup to decide where those events go.

use crate::config::TelemetryConfig;
use crate::Result;
use anyhow::Context;
use tracing_subscriber::{fmt, fmt::format::FmtSpan, prelude::*, EnvFilter};

/// Install the global subscriber described by `config`.
///
/// `json_logging` selects one event per line as flattened JSON; otherwise
/// events use the compact text format and scoring spans report on close.
///
/// # Examples
///
/// ```no_run
/// use vqa_eval_common::{config::TelemetryConfig, telemetry::init_tracing};
///
/// init_tracing(&TelemetryConfig::default()).expect("Failed to initialize tracing");
/// ```
pub fn init_tracing(config: &TelemetryConfig) -> Result<()> {
    let json = config.json_logging.then(|| {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
    });
    let text = (!config.json_logging).then(|| {
        fmt::layer()
            .compact()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
    });

    tracing_subscriber::registry()
        .with(build_filter(config)?)
        .with(json)
        .with(text)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::info!(
        service = %config.service_name,
        json = config.json_logging,
        "Tracing initialized"
    );

    Ok(())
}

/// Filter from `RUST_LOG` when set, otherwise the configured level
fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("Invalid log level '{}'", config.log_level)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_from_config() {
        let config = TelemetryConfig {
            log_level: "debug".to_string(),
            ..TelemetryConfig::default()
        };
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn test_init_tracing_twice_reports_error() {
        let config = TelemetryConfig {
            json_logging: true,
            ..TelemetryConfig::default()
        };
        // A global subscriber can only be installed once per process
        let first = init_tracing(&config);
        let second = init_tracing(&config);
        assert!(first.is_err() || second.is_err());
    }
}
