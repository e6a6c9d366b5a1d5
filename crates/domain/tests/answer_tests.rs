//! Tests for ground-truth sets and leave-one-out fold counting

use proptest::prelude::*;
use vqa_eval_domain::{AccuracyBreakdown, GroundTruthSet, NormalizedAnswer};

fn answer(s: &str) -> NormalizedAnswer {
    NormalizedAnswer::from_tokens(s.split_whitespace())
}

fn set(answers: &[&str]) -> GroundTruthSet {
    GroundTruthSet::new(answers.iter().map(|a| answer(a)).collect())
}

#[test]
fn test_fold_matches_unanimous() {
    let gt = set(&["yes"; 10]);
    assert_eq!(gt.fold_matches(&answer("yes")), vec![9; 10]);
}

#[test]
fn test_fold_matches_single_agreement() {
    let gt = set(&["10:20", "10:00", "3:18", "10:19"]);
    assert_eq!(gt.fold_matches(&answer("3:18")), vec![1, 1, 0, 1]);
}

#[test]
fn test_empty_answers_match_each_other() {
    let gt = set(&["", "", "x"]);
    assert_eq!(gt.fold_matches(&answer("")), vec![1, 1, 2]);
}

#[test]
fn test_breakdown_helpers() {
    let breakdown = AccuracyBreakdown {
        normalized_answer: answer("yes"),
        normalized_references: vec![answer("yes"), answer("no"), answer("yes")],
        fold_matches: vec![1, 2, 1],
        agreement_threshold: 3,
        score: 4.0 / 9.0,
    };

    assert_eq!(breakdown.total_matches(), 2);
    assert_eq!(breakdown.fold_accuracies(), vec![1.0 / 3.0, 2.0 / 3.0, 1.0 / 3.0]);
}

#[test]
fn test_normalized_answer_display() {
    let a = answer("  toilet   paper ");
    assert_eq!(a.to_string(), "toilet paper");
    assert_eq!(String::from(a), "toilet paper");
}

proptest! {
    #[test]
    fn prop_fold_matches_agree_with_exclusion(
        refs in prop::collection::vec(prop::sample::select(vec!["yes", "no", "maybe", ""]), 0..12),
        candidate in prop::sample::select(vec!["yes", "no", "maybe", ""]),
    ) {
        let gt = set(&refs);
        let candidate = answer(candidate);
        let folds = gt.fold_matches(&candidate);

        prop_assert_eq!(folds.len(), gt.len());
        for (idx, matches) in folds.iter().enumerate() {
            prop_assert_eq!(*matches, gt.matches_excluding(&candidate, idx));
        }
    }
}
