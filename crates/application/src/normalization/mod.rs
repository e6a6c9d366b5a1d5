//! Normalization module - answer canonicalization
//!
//! Free-text answers are reduced to a canonical token string before they are
//! compared. Normalizers are selected by language code through a
//! [`NormalizerRegistry`]; only English ships today.

mod english;
mod registry;
mod tables;

pub use english::{
    expand_contraction, flatten_whitespace, map_number_word, process_punctuation, strip_periods,
    EnglishNormalizer,
};
pub use registry::{default_registry, NormalizerRegistry};
pub use tables::{contraction, is_article, number_word, ARTICLES, PUNCTUATION};

use vqa_eval_domain::{NormalizedAnswer, VqaResult};

/// Canonicalizes answers for one language.
pub trait AnswerNormalizer: Send + Sync {
    /// Map a raw answer to its canonical form
    fn normalize(&self, answer: &str) -> NormalizedAnswer;

    /// Language code this normalizer handles
    fn language(&self) -> &'static str;
}

/// Normalize `answer` using the built-in normalizer for `lang`.
///
/// # Errors
///
/// Fails with `ConfigurationError::UnsupportedLanguage` when no normalizer is
/// registered for `lang`.
///
/// # Example
///
/// ```rust
/// use vqa_eval_application::normalization::normalize;
///
/// assert_eq!(normalize("crock-pot", "en").unwrap(), "crock pot");
/// assert!(normalize("crock-pot", "de").is_err());
/// ```
pub fn normalize(answer: &str, lang: &str) -> VqaResult<String> {
    default_registry()
        .normalize(answer, lang)
        .map(NormalizedAnswer::into_string)
}
