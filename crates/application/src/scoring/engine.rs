//! VQA accuracy scorer - leave-one-out soft accuracy
//!
//! For a candidate answer and N reference answers, fold `i` counts how many of
//! the other N-1 references equal the candidate and awards
//! `min(matches_i / k, 1)` with agreement threshold `k` (3 for standard VQA).
//! The score is the mean over all N folds.

use crate::normalization::{AnswerNormalizer, NormalizerRegistry};
use crate::scoring::report::summarize;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use vqa_eval_common::config::ScoringConfig;
use vqa_eval_domain::answer::{expect_string, string_list};
use vqa_eval_domain::{
    AccuracyBreakdown, AccuracyReport, ConfigurationError, GroundTruthSet, SampleScore,
    VqaError, VqaResult, VqaSample,
};

static DEFAULT_SCORER: Lazy<VqaAccuracyScorer> = Lazy::new(VqaAccuracyScorer::default);

/// Score `answer` against `gt_answers` with the standard VQA settings.
///
/// # Example
///
/// ```rust
/// use vqa_eval_application::scoring::vqa_accuracy_score;
///
/// let gt = ["toilet paper", "nothing", "toilet paper", "nothing", "paper",
///           "handle", "toilet bowl cleaner", "valve", "toilet paper", "nothing"];
/// assert_eq!(vqa_accuracy_score("toilet paper", &gt, "en").unwrap(), 0.9);
/// ```
pub fn vqa_accuracy_score<S: AsRef<str>>(
    answer: &str,
    gt_answers: &[S],
    lang: &str,
) -> VqaResult<f64> {
    DEFAULT_SCORER.score(answer, gt_answers, lang)
}

/// Mean of `min(matches_i / threshold, 1)` over all folds.
///
/// Summed as integers and divided once, so results such as 0.3 or 0.9 are
/// the nearest `f64` to the exact ratio rather than an accumulated sum.
pub fn soft_accuracy(fold_matches: &[usize], threshold: usize) -> f64 {
    if fold_matches.is_empty() {
        return 0.0;
    }
    let threshold = threshold.max(1);
    let credited: usize = fold_matches.iter().map(|&m| m.min(threshold)).sum();
    credited as f64 / (threshold * fold_matches.len()) as f64
}

/// Scores candidate answers against human reference answers
#[derive(Clone)]
pub struct VqaAccuracyScorer {
    config: ScoringConfig,
    registry: NormalizerRegistry,
}

impl VqaAccuracyScorer {
    /// Create a scorer with the built-in normalizers
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_registry(config, NormalizerRegistry::new())
    }

    /// Create a scorer that dispatches languages through `registry`
    pub fn with_registry(config: ScoringConfig, registry: NormalizerRegistry) -> Self {
        Self { config, registry }
    }

    /// Start building a scorer
    pub fn builder() -> VqaAccuracyScorerBuilder {
        VqaAccuracyScorerBuilder::new()
    }

    /// Scoring settings in effect
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Normalizers available to this scorer
    pub fn registry(&self) -> &NormalizerRegistry {
        &self.registry
    }

    /// Soft accuracy of `answer` against `gt_answers`
    pub fn score<S: AsRef<str>>(
        &self,
        answer: &str,
        gt_answers: &[S],
        lang: &str,
    ) -> VqaResult<f64> {
        self.score_detailed(answer, gt_answers, lang)
            .map(|breakdown| breakdown.score)
    }

    /// Soft accuracy with the normalized forms and per-fold match counts
    #[instrument(skip(self, answer, gt_answers), fields(references = gt_answers.len()))]
    pub fn score_detailed<S: AsRef<str>>(
        &self,
        answer: &str,
        gt_answers: &[S],
        lang: &str,
    ) -> VqaResult<AccuracyBreakdown> {
        let normalizer = self.registry.get(lang)?;
        self.check_reference_count(gt_answers.len())?;

        let candidate = normalizer.normalize(answer);
        let references = GroundTruthSet::new(
            gt_answers
                .iter()
                .map(|gt| normalizer.normalize(gt.as_ref()))
                .collect(),
        );

        let fold_matches = references.fold_matches(&candidate);
        let threshold = self.config.agreement_threshold;
        let score = soft_accuracy(&fold_matches, threshold);

        debug!(
            normalized_answer = %candidate,
            fold_matches = ?fold_matches,
            score = score,
            "VQA accuracy computed"
        );

        Ok(AccuracyBreakdown {
            normalized_answer: candidate,
            normalized_references: references.into_inner(),
            fold_matches,
            agreement_threshold: threshold.max(1),
            score,
        })
    }

    /// Score untyped JSON inputs, rejecting anything that is not a string.
    ///
    /// `answer` must be a JSON string and `gt_answers` an array of strings.
    pub fn score_value(
        &self,
        answer: &serde_json::Value,
        gt_answers: &serde_json::Value,
        lang: &str,
    ) -> VqaResult<f64> {
        let answer = expect_string(answer, "answer")?;
        let gt_answers = string_list(gt_answers, "gt_answers")?;
        self.score(&answer, &gt_answers, lang)
    }

    /// Score one sample, honouring its language override
    pub fn score_sample(&self, sample: &VqaSample) -> VqaResult<SampleScore> {
        let lang = sample
            .lang
            .as_deref()
            .unwrap_or(&self.config.default_language);

        let breakdown = self.score_detailed(&sample.answer, &sample.gt_answers, lang)?;

        Ok(SampleScore {
            question_id: sample.question_id.clone(),
            lang: lang.to_string(),
            breakdown,
        })
    }

    /// Score every sample and aggregate the results.
    ///
    /// Fails on the first sample that cannot be scored.
    #[instrument(skip(self, samples), fields(samples = samples.len()))]
    pub fn evaluate_batch(&self, samples: &[VqaSample]) -> VqaResult<AccuracyReport> {
        if samples.is_empty() {
            return Err(VqaError::EmptyBatch);
        }

        let scored = samples
            .iter()
            .map(|sample| self.score_sample(sample))
            .collect::<VqaResult<Vec<_>>>()?;

        summarize(scored)
    }

    fn check_reference_count(&self, actual: usize) -> VqaResult<()> {
        let minimum = self.config.min_references.max(1);
        if actual < minimum {
            warn!(actual, minimum, "Ground truth set too small");
            return Err(ConfigurationError::InvalidGroundTruthSize { actual, minimum }.into());
        }
        Ok(())
    }
}

impl Default for VqaAccuracyScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Builder for VqaAccuracyScorer
pub struct VqaAccuracyScorerBuilder {
    config: ScoringConfig,
    registry: NormalizerRegistry,
}

impl VqaAccuracyScorerBuilder {
    /// Create a new builder with standard VQA settings
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
            registry: NormalizerRegistry::new(),
        }
    }

    /// Replace all scoring settings
    pub fn config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the language used for samples without an override
    pub fn default_language(mut self, lang: impl Into<String>) -> Self {
        self.config.default_language = lang.into();
        self
    }

    /// Set the matches needed for a fold to earn full credit
    pub fn agreement_threshold(mut self, threshold: usize) -> Self {
        self.config.agreement_threshold = threshold;
        self
    }

    /// Set the smallest accepted ground-truth set
    pub fn min_references(mut self, min: usize) -> Self {
        self.config.min_references = min;
        self
    }

    /// Register an additional normalizer under its own language code
    pub fn normalizer(mut self, normalizer: Arc<dyn AnswerNormalizer>) -> Self {
        self.registry.register_normalizer(normalizer);
        self
    }

    /// Build the scorer
    pub fn build(self) -> VqaAccuracyScorer {
        VqaAccuracyScorer::with_registry(self.config, self.registry)
    }
}

impl Default for VqaAccuracyScorerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
