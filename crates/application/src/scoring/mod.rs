//! Scoring module - VQA soft accuracy
//!
//! This module scores candidate answers against human reference answers with
//! the leave-one-out consensus metric, and aggregates scores over batches.

mod engine;
mod report;

pub use engine::*;
pub use report::summarize;
