//! Score types produced by the accuracy scorer.

use crate::answer::NormalizedAnswer;
use serde::{Deserialize, Serialize};

/// Per-question scoring detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyBreakdown {
    /// Normalized candidate answer
    pub normalized_answer: NormalizedAnswer,

    /// Normalized reference answers, in input order
    pub normalized_references: Vec<NormalizedAnswer>,

    /// Matches in each leave-one-out fold; entry `i` excludes reference `i`
    pub fold_matches: Vec<usize>,

    /// Matches needed for a fold to count as fully correct
    pub agreement_threshold: usize,

    /// Soft accuracy in [0, 1]
    pub score: f64,
}

impl AccuracyBreakdown {
    /// Number of references agreeing with the candidate
    pub fn total_matches(&self) -> usize {
        self.normalized_references
            .iter()
            .filter(|r| **r == self.normalized_answer)
            .count()
    }

    /// Accuracy of each fold, `min(matches / threshold, 1)`
    pub fn fold_accuracies(&self) -> Vec<f64> {
        let threshold = self.agreement_threshold.max(1);
        self.fold_matches
            .iter()
            .map(|&m| m.min(threshold) as f64 / threshold as f64)
            .collect()
    }
}

/// Score of one sample within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleScore {
    /// Question identifier, when the sample carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,

    /// Language the sample was normalized with
    pub lang: String,

    /// Scoring detail
    pub breakdown: AccuracyBreakdown,
}

/// Aggregate accuracy over a batch of samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    /// Number of samples scored
    pub sample_count: usize,

    /// Arithmetic mean of per-sample accuracy
    pub mean_accuracy: f64,

    /// Sample standard deviation of per-sample accuracy (0 for one sample)
    pub std_dev: f64,

    /// Samples whose accuracy is exactly 1.0
    pub fully_correct: usize,

    /// Samples whose accuracy is exactly 0.0
    pub fully_wrong: usize,

    /// Per-sample detail, in input order
    pub samples: Vec<SampleScore>,
}

impl AccuracyReport {
    /// Per-sample accuracies, in input order
    pub fn scores(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.breakdown.score).collect()
    }
}
