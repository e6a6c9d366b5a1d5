//! VQA Evaluation Domain Types
//!
//! This crate provides the value types shared by the answer normalizer and the
//! VQA accuracy scorer: canonical answers, ground-truth sets, untyped sample
//! records, score breakdowns and the error hierarchy.
//!
//! ## Architecture
//!
//! - **answer**: `NormalizedAnswer`, `GroundTruthSet` and `VqaSample`
//! - **score**: `AccuracyBreakdown`, `SampleScore` and `AccuracyReport`
//! - **errors**: `VqaError` and its configuration / input-type variants
//!
//! ## Usage
//!
//! ```rust
//! use vqa_eval_domain::{GroundTruthSet, NormalizedAnswer};
//!
//! let yes = NormalizedAnswer::from_tokens(["yes"]);
//! let no = NormalizedAnswer::from_tokens(["no"]);
//! let set = GroundTruthSet::new(vec![yes.clone(), no, yes.clone()]);
//!
//! assert_eq!(set.fold_matches(&yes), vec![1, 2, 1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod answer;
pub mod errors;
pub mod score;

/// Language code used when callers do not pick one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Matches needed in a leave-one-out fold for full credit
pub const DEFAULT_AGREEMENT_THRESHOLD: usize = 3;

/// Smallest reference set for which leave-one-out is defined
pub const MIN_GROUND_TRUTH_SIZE: usize = 2;

pub use answer::{GroundTruthSet, NormalizedAnswer, VqaSample};
pub use errors::{ConfigurationError, InputTypeError, VqaError, VqaResult};
pub use score::{AccuracyBreakdown, AccuracyReport, SampleScore};
