//! Answer normalization and VQA accuracy scoring
//!
//! This crate turns `(answer, gt_answers)` string pairs into the standard
//! soft VQA accuracy. Everything here is synchronous and free of shared
//! mutable state; scorers can be shared across threads.
//!
//! ## Modules
//!
//! - `normalization` - language-dispatched answer canonicalization
//! - `scoring` - leave-one-out accuracy and batch aggregation
//!
//! ## Usage
//!
//! ```rust
//! use vqa_eval_application::{normalize, vqa_accuracy_score};
//!
//! assert_eq!(normalize("Hammer time!", "en").unwrap(), "hammer time");
//!
//! let gt = ["1", "1", "1", "1", "1", "1", "1", "1", "1", "1"];
//! assert_eq!(vqa_accuracy_score("one", &gt, "en").unwrap(), 1.0);
//! ```

pub mod normalization;
pub mod scoring;

// Re-export commonly used types
pub use normalization::{
    default_registry, normalize, AnswerNormalizer, EnglishNormalizer, NormalizerRegistry,
};
pub use scoring::{
    soft_accuracy, vqa_accuracy_score, VqaAccuracyScorer, VqaAccuracyScorerBuilder,
};
