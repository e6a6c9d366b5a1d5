//! Answer types: raw samples, normalized answers and ground-truth sets.

use crate::errors::{InputTypeError, VqaResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical form of a free-text answer.
///
/// Tokens are joined by single spaces with no leading or trailing whitespace.
/// Only normalizers construct these, so two answers agree exactly when their
/// normalized forms are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedAnswer(String);

impl NormalizedAnswer {
    /// Join surviving tokens with single spaces
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                continue;
            }
            if !joined.is_empty() {
                joined.push(' ');
            }
            joined.push_str(token);
        }
        Self(joined)
    }

    /// Borrow the canonical string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether normalization removed everything
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the canonical string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedAnswer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NormalizedAnswer> for String {
    fn from(answer: NormalizedAnswer) -> Self {
        answer.0
    }
}

/// Ordered reference answers for one question, already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundTruthSet {
    answers: Vec<NormalizedAnswer>,
}

impl GroundTruthSet {
    /// Wrap normalized reference answers, keeping their order
    pub fn new(answers: Vec<NormalizedAnswer>) -> Self {
        Self { answers }
    }

    /// Number of reference answers
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the set has no references
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Count references equal to `candidate`, skipping the one at `excluded`
    pub fn matches_excluding(&self, candidate: &NormalizedAnswer, excluded: usize) -> usize {
        self.answers
            .iter()
            .enumerate()
            .filter(|(idx, answer)| *idx != excluded && *answer == candidate)
            .count()
    }

    /// Matches for every leave-one-out fold, in reference order
    pub fn fold_matches(&self, candidate: &NormalizedAnswer) -> Vec<usize> {
        let total = self.answers.iter().filter(|a| *a == candidate).count();
        // Excluding a matching reference removes exactly one match
        self.answers
            .iter()
            .map(|answer| if answer == candidate { total - 1 } else { total })
            .collect()
    }

    /// Consume into the references
    pub fn into_inner(self) -> Vec<NormalizedAnswer> {
        self.answers
    }
}

/// One prediction with its human reference answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VqaSample {
    /// Question identifier, if the harness tracks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,

    /// Predicted answer
    pub answer: String,

    /// Reference answers (canonically ten)
    pub gt_answers: Vec<String>,

    /// Language override for this sample
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl VqaSample {
    /// Create a sample without an id or language override
    pub fn new<S: Into<String>>(answer: impl Into<String>, gt_answers: Vec<S>) -> Self {
        Self {
            question_id: None,
            answer: answer.into(),
            gt_answers: gt_answers.into_iter().map(Into::into).collect(),
            lang: None,
        }
    }

    /// Set the question identifier
    pub fn with_question_id(mut self, id: impl Into<String>) -> Self {
        self.question_id = Some(id.into());
        self
    }

    /// Set the language override
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Build a sample from an untyped JSON record.
    ///
    /// Unlike `serde_json::from_value`, every type mismatch is reported as an
    /// [`InputTypeError`] naming the exact field, and nothing is coerced:
    /// a numeric answer such as `42` is rejected rather than stringified.
    pub fn from_value(value: &serde_json::Value) -> VqaResult<Self> {
        let record = value
            .as_object()
            .ok_or_else(|| InputTypeError::new("$", "object", value))?;

        let null = serde_json::Value::Null;
        let answer = expect_string(record.get("answer").unwrap_or(&null), "answer")?;
        let gt_answers = string_list(record.get("gt_answers").unwrap_or(&null), "gt_answers")?;

        let question_id = match record.get("question_id") {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) if n.is_u64() || n.is_i64() => Some(n.to_string()),
            Some(other) => {
                return Err(InputTypeError::new("question_id", "string or integer", other).into())
            }
        };

        let lang = match record.get("lang") {
            None | Some(serde_json::Value::Null) => None,
            Some(other) => Some(expect_string(other, "lang")?),
        };

        Ok(Self {
            question_id,
            answer,
            gt_answers,
            lang,
        })
    }
}

/// Require a JSON string
pub fn expect_string(value: &serde_json::Value, field: &str) -> VqaResult<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| InputTypeError::new(field, "string", value).into())
}

/// Require a JSON array whose every element is a string
pub fn string_list(value: &serde_json::Value, field: &str) -> VqaResult<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| InputTypeError::new(field, "array of strings", value))?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| expect_string(item, &format!("{}[{}]", field, idx)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VqaError;
    use serde_json::json;

    fn normalized(s: &str) -> NormalizedAnswer {
        NormalizedAnswer::from_tokens(s.split_whitespace())
    }

    #[test]
    fn test_from_tokens_skips_empty() {
        let answer = NormalizedAnswer::from_tokens(["", "toilet", "", "paper", ""]);
        assert_eq!(answer.as_str(), "toilet paper");

        let empty = NormalizedAnswer::from_tokens(Vec::<String>::new());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_fold_matches() {
        let set = GroundTruthSet::new(vec![
            normalized("yes"),
            normalized("no"),
            normalized("yes"),
        ]);
        let yes = normalized("yes");

        assert_eq!(set.fold_matches(&yes), vec![1, 2, 1]);
        for idx in 0..set.len() {
            assert_eq!(set.matches_excluding(&yes, idx), set.fold_matches(&yes)[idx]);
        }
        assert_eq!(set.fold_matches(&normalized("maybe")), vec![0, 0, 0]);
    }

    #[test]
    fn test_sample_from_value() {
        let value = json!({
            "question_id": 4411,
            "answer": "down",
            "gt_answers": ["down", "table"],
            "lang": "en"
        });

        let sample = VqaSample::from_value(&value).unwrap();
        assert_eq!(sample.question_id.as_deref(), Some("4411"));
        assert_eq!(sample.answer, "down");
        assert_eq!(sample.gt_answers, vec!["down", "table"]);
        assert_eq!(sample.lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_sample_from_value_rejects_non_string_answer() {
        let err = VqaSample::from_value(&json!({"answer": 100, "gt_answers": ["100"]}))
            .unwrap_err();
        assert!(matches!(
            err,
            VqaError::InvalidInput(InputTypeError { ref field, ref found, .. })
                if field == "answer" && found == "number"
        ));
    }

    #[test]
    fn test_sample_from_value_rejects_non_string_reference() {
        let err = VqaSample::from_value(&json!({"answer": "1", "gt_answers": ["1", null]}))
            .unwrap_err();
        match err {
            VqaError::InvalidInput(e) => {
                assert_eq!(e.field, "gt_answers[1]");
                assert_eq!(e.found, "null");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_sample_from_value_rejects_missing_fields() {
        assert!(VqaSample::from_value(&json!({"gt_answers": []})).is_err());
        assert!(VqaSample::from_value(&json!({"answer": "x"})).is_err());
        assert!(VqaSample::from_value(&json!(["x"])).is_err());
    }

    #[test]
    fn test_sample_serde_round_trip() {
        let sample = VqaSample::new("yes", vec!["yes", "no"]).with_question_id("q1");
        let json = serde_json::to_value(&sample).unwrap();
        assert!(json.get("lang").is_none());
        let back: VqaSample = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample);
    }
}
