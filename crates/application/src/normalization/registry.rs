//! Language code to normalizer dispatch.

use super::english::EnglishNormalizer;
use super::AnswerNormalizer;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;
use vqa_eval_domain::{ConfigurationError, NormalizedAnswer, VqaResult};

static DEFAULT_REGISTRY: Lazy<NormalizerRegistry> = Lazy::new(NormalizerRegistry::new);

/// Process-wide registry holding the built-in normalizers
pub fn default_registry() -> &'static NormalizerRegistry {
    &DEFAULT_REGISTRY
}

/// Maps language codes to normalizers.
#[derive(Clone)]
pub struct NormalizerRegistry {
    normalizers: HashMap<String, Arc<dyn AnswerNormalizer>>,
}

impl NormalizerRegistry {
    /// Create a registry with the built-in normalizers
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_default_normalizers();
        registry
    }

    /// Create a registry with no normalizers
    pub fn empty() -> Self {
        Self {
            normalizers: HashMap::new(),
        }
    }

    fn register_default_normalizers(&mut self) {
        self.register_normalizer(Arc::new(EnglishNormalizer));
    }

    /// Register a normalizer under the language it reports
    pub fn register_normalizer(&mut self, normalizer: Arc<dyn AnswerNormalizer>) {
        self.register(normalizer.language(), normalizer);
    }

    /// Register a normalizer, replacing any previous one for `lang`
    pub fn register(&mut self, lang: &str, normalizer: Arc<dyn AnswerNormalizer>) {
        self.normalizers.insert(lang.to_string(), normalizer);
    }

    /// Look up the normalizer for `lang`
    pub fn get(&self, lang: &str) -> VqaResult<Arc<dyn AnswerNormalizer>> {
        match self.normalizers.get(lang) {
            Some(normalizer) => Ok(Arc::clone(normalizer)),
            None => {
                warn!(lang = %lang, "No normalizer registered for language");
                Err(ConfigurationError::UnsupportedLanguage(lang.to_string()).into())
            }
        }
    }

    /// Whether a normalizer is registered for `lang`
    pub fn supports(&self, lang: &str) -> bool {
        self.normalizers.contains_key(lang)
    }

    /// Registered language codes, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.normalizers.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Normalize `answer` with the normalizer registered for `lang`
    pub fn normalize(&self, answer: &str, lang: &str) -> VqaResult<NormalizedAnswer> {
        Ok(self.get(lang)?.normalize(answer))
    }
}

impl Default for NormalizerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
