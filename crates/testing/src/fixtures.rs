//! Reference cases for the English normalizer and the VQA accuracy scorer.
//!
//! These are real answers collected for VQA questions, paired with the
//! canonical form or score they must produce.

use vqa_eval_domain::VqaSample;

/// A normalizer input and its expected canonical form
#[derive(Debug, Clone, Copy)]
pub struct NormalizationCase {
    pub name: &'static str,
    pub answer: &'static str,
    pub expected: &'static str,
}

/// A candidate answer, ten reference answers and the expected accuracy
#[derive(Debug, Clone, Copy)]
pub struct ScoringCase {
    pub name: &'static str,
    pub answer: &'static str,
    pub gt_answers: [&'static str; 10],
    pub expected: f64,
}

impl ScoringCase {
    /// Convert into a sample tagged with the case name
    pub fn to_sample(&self) -> VqaSample {
        VqaSample::new(self.answer, self.gt_answers.to_vec()).with_question_id(self.name)
    }
}

const fn norm(
    name: &'static str,
    answer: &'static str,
    expected: &'static str,
) -> NormalizationCase {
    NormalizationCase {
        name,
        answer,
        expected,
    }
}

/// English normalization corpus
pub const EN_NORMALIZATION_CASES: &[NormalizationCase] = &[
    norm("answer_n/a", "n/a", "n"),
    norm("answer_no", "no", "no"),
    norm("answer_no_one", "no one", "no 1"),
    norm("answer_yes", "yes", "yes"),
    norm("digit_0-0", "0-0", "0 0"),
    norm("digit_0-9", "0-9", "0 9"),
    norm("digit_02/12/2011", "02/12/2011", "02 12 2011"),
    norm("digit_07-23-98", "07-23-98", "07 23 98"),
    norm("digit_1/4", "1/4", "1 4"),
    norm("digit_10-2", "10-2", "10 2"),
    norm("digit_11/30/98", "11/30/98", "11 30 98"),
    norm("digit_2-1", "2-1", "2 1"),
    norm("digit_20+", "20+", "20"),
    norm("digit_2008/12/07", "2008/12/07", "2008 12 07"),
    norm("digit_333-3333", "333-3333", "333 3333"),
    norm("digit_388", "388", "388"),
    norm("digit_4", "4", "4"),
    norm("digit_4-5", "4-5", "4 5"),
    norm("digit_4/5", "4/5", "4 5"),
    norm("digit_5", "5", "5"),
    norm("digit_658-7245", "658-7245", "658 7245"),
    norm("digit_6_fifty-five", "6 fifty-five", "6 fifty 5"),
    norm("digit_8", "8", "8"),
    norm("digit_8_-_2", "8 - 2", "8 2"),
    norm("digit_none", "none", "0"),
    norm("empty", "", ""),
    norm("letter_a", "a", ""),
    norm("multi_1", "pennette rigate", "pennette rigate"),
    norm("multi_2", "streamers_and_fake_records", "streamers and fake records"),
    norm("multi_3", "stop_sign", "stop sign"),
    norm("multi_4", "1980 harley-davidson", "1980 harley davidson"),
    norm(
        "multi_5",
        "6 flowering plants, too many individual flowers to count",
        "6 flowering plants too many individual flowers to count",
    ),
    norm("multi_6", "black/white", "black white"),
    norm("multi_7", "blue, gray", "blue gray"),
    norm(
        "multi_8",
        "blueberry, strawberry and banana",
        "blueberry strawberry and banana",
    ),
    norm("multi_9", "chicken, rice, vegetables", "chicken rice vegetables"),
    norm("multi_10", "crock-pot", "crock pot"),
    norm("multi_11", "cs-drz", "cs drz"),
    norm("multi_12", "horse, man", "horse man"),
    norm("multi_13", "june 29, 2013", "june 29 2013"),
    norm("multi_14", "full/0136", "full 0136"),
    norm("multi_15", "t-shirt", "t shirt"),
    norm("multi_16", "t-shirts", "t shirts"),
    norm("punct_!", "hammer time!", "hammer time"),
    norm("punct_?", "?", ""),
    norm("punct_???", "???", ""),
    norm("token1", "someone", "someone"),
    norm("token2", "skateboard", "skateboard"),
];

/// English scoring corpus (ten references per question)
pub const EN_SCORING_CASES: &[ScoringCase] = &[
    ScoringCase {
        name: "down",
        answer: "down",
        gt_answers: [
            "down", "down", "at table", "stakeboard", "down", "table", "down", "down", "down",
            "down",
        ],
        expected: 1.0,
    },
    ScoringCase {
        name: "none",
        answer: "none",
        gt_answers: [
            "panther", "none", "leather", "dog", "cat", "none", "none", "none", "none", "dog",
        ],
        expected: 1.0,
    },
    ScoringCase {
        name: "a",
        answer: "a",
        gt_answers: ["a", "a", "a", "a", "a", "a", "a", "a", "a", "a"],
        expected: 1.0,
    },
    ScoringCase {
        name: "1",
        answer: "1",
        gt_answers: ["1", "1", "1", "1", "1", "1", "1", "1", "1", "1"],
        expected: 1.0,
    },
    ScoringCase {
        name: "1_mixed",
        answer: "1",
        gt_answers: ["3", "3", "3", "1", "3", "3", "3", "1", "1", "1"],
        expected: 1.0,
    },
    ScoringCase {
        name: "100",
        answer: "100",
        gt_answers: [
            "about 100", "100", "0", "0", "thousands", "1", "0", "100", "many", "unknown",
        ],
        expected: 0.6,
    },
    ScoringCase {
        name: "3:18",
        answer: "3:18",
        gt_answers: [
            "10:20", "10:00", "10:20", "10 19", "10:19", "10:20", "10 19", "3:18", "10:20",
            "10:19",
        ],
        expected: 0.3,
    },
    ScoringCase {
        name: "lots",
        answer: "lots",
        gt_answers: [
            "50", "lots", "over 60", "several", "55", "many", "78", "36", "2000", "50",
        ],
        expected: 0.3,
    },
    ScoringCase {
        name: "maybe",
        answer: "maybe",
        gt_answers: ["no", "yes", "yes", "no", "yes", "maybe", "yes", "yes", "yes", "yes"],
        expected: 0.3,
    },
    ScoringCase {
        name: "russian",
        answer: "russian",
        gt_answers: [
            "english", "french", "german", "russian", "latin", "russian", "russian", "latin",
            "latin", "russian",
        ],
        expected: 1.0,
    },
    ScoringCase {
        name: "shamrock",
        answer: "shamrock",
        gt_answers: [
            "logo", "shamrock", "shamrock", "shamrock", "shamrock", "shamrock", "shamrock",
            "clover", "clover", "shamrock",
        ],
        expected: 1.0,
    },
    ScoringCase {
        name: "yes_2",
        answer: "yes",
        gt_answers: ["yes", "yes", "yes", "yes", "yes", "yes", "yes", "yes", "no", "yes"],
        expected: 1.0,
    },
    ScoringCase {
        name: "don't shoot",
        answer: "don't shoot",
        gt_answers: [
            "don't shoot",
            "don't shoot",
            "shooting",
            "stop",
            "stop",
            "surrender",
            "i surrender",
            "surrender",
            "hands up",
            "gun",
        ],
        expected: 0.6,
    },
    ScoringCase {
        name: "toilet paper",
        answer: "toilet paper",
        gt_answers: [
            "toilet paper",
            "nothing",
            "toilet paper",
            "nothing",
            "paper",
            "handle",
            "toilet bowl cleaner",
            "valve",
            "toilet paper",
            "nothing",
        ],
        expected: 0.9,
    },
    ScoringCase {
        name: "yellow and blue",
        answer: "yellow and blue",
        gt_answers: [
            "yellow, blue, purple",
            "yellow, blue, purple, and white",
            "purple, blue, yellow, white, and gray",
            "yellow, blue, purple and white",
            "purple, blue, white, yellow",
            "yellow, purple, blue, white",
            "yellow and blue",
            "purple blue yellow",
            "yellow, blue, purple",
            "purple, blue, and yellow",
        ],
        expected: 0.3,
    },
];

/// Find a scoring case by name
pub fn scoring_case(name: &str) -> Option<&'static ScoringCase> {
    EN_SCORING_CASES.iter().find(|case| case.name == name)
}

/// The scoring corpus as JSON records, as an evaluation harness would supply them
pub fn scoring_records() -> Vec<serde_json::Value> {
    EN_SCORING_CASES
        .iter()
        .map(|case| {
            serde_json::json!({
                "question_id": case.name,
                "answer": case.answer,
                "gt_answers": case.gt_answers,
            })
        })
        .collect()
}

/// Mean expected accuracy over the scoring corpus
pub fn expected_mean_accuracy() -> f64 {
    EN_SCORING_CASES.iter().map(|c| c.expected).sum::<f64>() / EN_SCORING_CASES.len() as f64
}
