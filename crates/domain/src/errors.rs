//! Error types for VQA answer normalization and scoring.
//!
//! Normalization and scoring are pure computations, so every error here is a
//! caller mistake: an unknown locale, a reference set too small for
//! leave-one-out voting, or a record whose fields have the wrong type.

use serde::{Deserialize, Serialize};

/// Top-level error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VqaError {
    /// Configuration-related errors (locale, reference set size)
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A dynamically typed input had the wrong shape
    #[error("Invalid input type: {0}")]
    InvalidInput(#[from] InputTypeError),

    /// Batch evaluation was asked to score zero samples
    #[error("No samples to evaluate")]
    EmptyBatch,
}

impl VqaError {
    /// Get the error code for this error
    ///
    /// Error codes are stable identifiers for evaluation harnesses that
    /// report failures programmatically.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(ConfigurationError::UnsupportedLanguage(_)) => {
                "UNSUPPORTED_LANGUAGE"
            }
            Self::Configuration(ConfigurationError::InvalidGroundTruthSize { .. }) => {
                "INVALID_GROUND_TRUTH_SIZE"
            }
            Self::InvalidInput(_) => "INVALID_INPUT_TYPE",
            Self::EmptyBatch => "EMPTY_BATCH",
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// No normalizer is registered for the requested language
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Too few reference answers for leave-one-out scoring
    #[error("Ground truth set has {actual} answers, at least {minimum} required")]
    InvalidGroundTruthSize {
        /// References supplied
        actual: usize,
        /// Smallest accepted reference count
        minimum: usize,
    },
}

/// A field of a dynamically typed record did not have the expected JSON type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("field `{field}` expected {expected}, found {found}")]
pub struct InputTypeError {
    /// Path of the offending field (e.g. `gt_answers[3]`)
    pub field: String,

    /// Expected JSON type
    pub expected: String,

    /// JSON type actually found
    pub found: String,
}

impl InputTypeError {
    /// Build an error describing the JSON type of `value`
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        value: &serde_json::Value,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            found: json_type_name(value).to_string(),
        }
    }
}

/// Name of a JSON value's type, as reported in [`InputTypeError`]
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Result type for normalization and scoring
pub type VqaResult<T> = Result<T, VqaError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_codes() {
        let err = VqaError::from(ConfigurationError::UnsupportedLanguage("fr".to_string()));
        assert_eq!(err.error_code(), "UNSUPPORTED_LANGUAGE");
        assert_eq!(err.to_string(), "Configuration error: Unsupported language: fr");

        let err = VqaError::from(ConfigurationError::InvalidGroundTruthSize {
            actual: 1,
            minimum: 2,
        });
        assert_eq!(err.error_code(), "INVALID_GROUND_TRUTH_SIZE");

        assert_eq!(VqaError::EmptyBatch.error_code(), "EMPTY_BATCH");
    }

    #[test]
    fn test_input_type_error_reports_found_type() {
        let err = InputTypeError::new("answer", "string", &json!(42));
        assert_eq!(err.found, "number");
        assert_eq!(err.to_string(), "field `answer` expected string, found number");

        let err = VqaError::from(err);
        assert_eq!(err.error_code(), "INVALID_INPUT_TYPE");
    }

    #[test]
    fn test_json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!([1])), "array");
        assert_eq!(json_type_name(&json!({"a": 1})), "object");
    }
}
