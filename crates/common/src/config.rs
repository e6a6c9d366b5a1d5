//! Configuration management for VQA evaluation.
//!
//! Settings are layered from optional configuration files and environment
//! variables. Every field has a default, so an empty environment yields the
//! standard VQA metric (English, agreement threshold 3, at least 2 references).
//!
//! ## Example Configuration
//!
//! ```toml
//! [scoring]
//! default_language = "en"
//! agreement_threshold = 3
//! min_references = 2
//!
//! [telemetry]
//! service_name = "vqa-eval"
//! json_logging = false
//! log_level = "info"
//! ```

use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use vqa_eval_domain::{DEFAULT_AGREEMENT_THRESHOLD, DEFAULT_LANGUAGE, MIN_GROUND_TRUTH_SIZE};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Accuracy scorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Language used when a caller or sample does not pick one
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Matches needed in a leave-one-out fold for full credit
    #[serde(default = "default_agreement_threshold")]
    pub agreement_threshold: usize,

    /// Smallest accepted ground-truth set
    #[serde(default = "default_min_references")]
    pub min_references: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            agreement_threshold: default_agreement_threshold(),
            min_references: default_min_references(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to log output
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable JSON logging format
    #[serde(default = "default_json_logging")]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            json_logging: default_json_logging(),
            log_level: default_log_level(),
        }
    }
}

// Default value functions
fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_agreement_threshold() -> usize {
    DEFAULT_AGREEMENT_THRESHOLD
}

fn default_min_references() -> usize {
    MIN_GROUND_TRUTH_SIZE
}

fn default_service_name() -> String {
    "vqa-eval".to_string()
}

fn default_json_logging() -> bool {
    false
}

fn default_log_level() -> String {
    "info".to_string()
}

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl AppConfig {
    /// Load configuration from `./config` and environment variables.
    ///
    /// Later sources override earlier ones:
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/{environment}.toml (if exists, where environment is from VQA_ENV)
    /// 4. Environment variables (prefixed with VQA_)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vqa_eval_common::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load configuration");
    /// println!("Agreement threshold: {}", config.scoring.agreement_threshold);
    /// ```
    pub fn load() -> Result<Self> {
        Self::load_from("config")
    }

    /// Load configuration files from `config_dir`, then apply `VQA_*` overrides
    pub fn load_from(config_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = config_dir.as_ref();
        let env = std::env::var("VQA_ENV").unwrap_or_else(|_| "development".to_string());

        let default_file = dir.join("default");
        let env_file = dir.join(&env);

        let config = config::Config::builder()
            .add_source(config::File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&env_file.to_string_lossy()).required(false))
            // Example: VQA_SCORING__AGREEMENT_THRESHOLD=3
            .add_source(
                config::Environment::with_prefix("VQA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Parse configuration from a TOML document, applying defaults and validation
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;

        if !VALID_LOG_LEVELS.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                VALID_LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }
}

impl ScoringConfig {
    /// Validate the scoring settings
    pub fn validate(&self) -> Result<()> {
        if self.default_language.trim().is_empty() {
            anyhow::bail!("Default language must not be empty");
        }

        if self.agreement_threshold == 0 {
            anyhow::bail!("Agreement threshold must be greater than 0");
        }

        // Zero references would divide by zero
        if self.min_references == 0 {
            anyhow::bail!("Minimum reference count must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests that touch process environment variables run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const THRESHOLD_VAR: &str = "VQA_SCORING__AGREEMENT_THRESHOLD";

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("vqa-eval-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_env_overrides_threshold() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var(THRESHOLD_VAR, "5");

        let result = AppConfig::load_from(scratch_dir("env-override"));
        std::env::remove_var(THRESHOLD_VAR);

        let config = result.unwrap();
        assert_eq!(config.scoring.agreement_threshold, 5);
        assert_eq!(config.scoring.min_references, 2);
    }

    #[test]
    fn test_load_rejects_zero_threshold_from_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var(THRESHOLD_VAR, "0");

        let result = AppConfig::load_from(scratch_dir("env-zero"));
        std::env::remove_var(THRESHOLD_VAR);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Agreement threshold"));
    }

    #[test]
    fn test_load_layers_environment_file_and_variables() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = scratch_dir("layers");
        std::fs::write(
            dir.join("default.toml"),
            "[scoring]\nagreement_threshold = 4\nmin_references = 3\n",
        )
        .unwrap();
        std::fs::write(dir.join("staging.toml"), "[scoring]\nagreement_threshold = 6\n").unwrap();

        std::env::set_var("VQA_ENV", "staging");
        let from_files = AppConfig::load_from(&dir);

        std::env::set_var(THRESHOLD_VAR, "7");
        let with_override = AppConfig::load_from(&dir);

        std::env::remove_var(THRESHOLD_VAR);
        std::env::remove_var("VQA_ENV");
        std::fs::remove_dir_all(&dir).ok();

        let from_files = from_files.unwrap();
        assert_eq!(from_files.scoring.agreement_threshold, 6);
        assert_eq!(from_files.scoring.min_references, 3);

        let with_override = with_override.unwrap();
        assert_eq!(with_override.scoring.agreement_threshold, 7);
        assert_eq!(with_override.scoring.min_references, 3);
    }

    #[test]
    fn test_defaults_are_standard_vqa() {
        let config = AppConfig::default();
        assert_eq!(config.scoring.default_language, "en");
        assert_eq!(config.scoring.agreement_threshold, 3);
        assert_eq!(config.scoring.min_references, 2);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial_override() {
        let config = AppConfig::from_toml_str(
            r#"
            [scoring]
            agreement_threshold = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.scoring.agreement_threshold, 4);
        assert_eq!(config.scoring.min_references, 2);
        assert_eq!(config.scoring.default_language, "en");
        assert!(!config.telemetry.json_logging);
    }

    #[test]
    fn test_from_toml_empty_document() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_threshold() {
        let mut config = AppConfig::default();
        config.scoring.agreement_threshold = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_min_references() {
        let mut config = AppConfig::default();
        config.scoring.min_references = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_language() {
        let mut config = AppConfig::default();
        config.scoring.default_language = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = AppConfig::default();
        config.telemetry.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }
}
