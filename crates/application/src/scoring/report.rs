//! Batch aggregation of per-sample accuracy.

use tracing::info;
use vqa_eval_domain::{AccuracyReport, SampleScore, VqaError, VqaResult};

/// Aggregate scored samples into a report
pub fn summarize(samples: Vec<SampleScore>) -> VqaResult<AccuracyReport> {
    if samples.is_empty() {
        return Err(VqaError::EmptyBatch);
    }

    let scores: Vec<f64> = samples.iter().map(|s| s.breakdown.score).collect();
    let mean_accuracy = mean(&scores);
    let std_dev = std_dev(&scores);
    let fully_correct = scores.iter().filter(|&&s| s == 1.0).count();
    let fully_wrong = scores.iter().filter(|&&s| s == 0.0).count();

    info!(
        samples = samples.len(),
        mean_accuracy = mean_accuracy,
        fully_correct = fully_correct,
        "Batch evaluation complete"
    );

    Ok(AccuracyReport {
        sample_count: samples.len(),
        mean_accuracy,
        std_dev,
        fully_correct,
        fully_wrong,
        samples,
    })
}

/// Calculate arithmetic mean
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate sample standard deviation
fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let mean = mean(values);
    let variance: f64 =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;

    variance.sqrt()
}
