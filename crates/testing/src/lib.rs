//! Testing utilities for VQA evaluation
//!
//! This crate provides:
//! - Reference normalization and scoring cases
//! - Property-based testing strategies for answers and reference sets
//!
//! # Examples
//!
//! ```
//! use vqa_eval_testing::fixtures::*;
//!
//! let case = scoring_case("toilet paper").unwrap();
//! assert_eq!(case.expected, 0.9);
//! ```

pub mod fixtures;
pub mod strategies;

// Re-export commonly used types
pub use fixtures::*;
pub use strategies::*;

// Re-export testing dependencies for convenience
pub use proptest;
