//! Property-based testing strategies for answers and reference sets.

use proptest::prelude::*;

/// Words that exercise every normalization step
const VOCABULARY: &[&str] = &[
    "yes", "no", "none", "one", "two", "ten", "fifty", "a", "an", "the", "dont", "youre",
    "oclock", "t-shirt", "black/white", "20+", "3:18", "1,000", "2.5", "dog.", "n/a",
    "hammer!", "???", "stop_sign", "red", "Blue", "TOILET", "paper",
];

/// Arbitrary ASCII answers mixing letters, digits and punctuation
pub fn raw_answer() -> impl Strategy<Value = String> {
    r"[a-zA-Z0-9 ,./?!:'+_\-;()]{0,24}"
}

/// Answers assembled from a small vocabulary, so equal normal forms are common
pub fn vocabulary_answer() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..4)
        .prop_map(|words| words.join(" "))
}

/// A reference set of `min..max` vocabulary answers
pub fn ground_truth_set(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(vocabulary_answer(), min..max)
}

/// A candidate, a reference set, and a permutation of that reference set
pub fn answer_with_shuffled_references(
) -> impl Strategy<Value = (String, Vec<String>, Vec<String>)> {
    (vocabulary_answer(), ground_truth_set(2, 12)).prop_flat_map(|(answer, references)| {
        let shuffled = Just(references.clone()).prop_shuffle();
        (Just(answer), Just(references), shuffled)
    })
}
