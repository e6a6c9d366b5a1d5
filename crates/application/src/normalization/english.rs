//! English answer normalizer.
//!
//! Canonicalization runs as an ordered pipeline; each step works on the output
//! of the previous one:
//!
//! 1. flatten newlines and tabs, trim
//! 2. lowercase
//! 3. punctuation pass (delete or split on marks from [`PUNCTUATION`])
//! 4. period pass (drop `.` unless a digit follows)
//! 5. whitespace tokenization
//! 6. number words to digits (`none` → `0`, `five` → `5`)
//! 7. drop articles
//! 8. restore contractions (`dont` → `don't`)
//! 9. join with single spaces

use super::tables::{contraction, is_article, number_word, PUNCTUATION};
use super::AnswerNormalizer;
use once_cell::sync::Lazy;
use regex::Regex;
use vqa_eval_domain::NormalizedAnswer;

/// Digit grouping such as `1,000`; its presence deletes every punctuation mark
static DIGIT_COMMA_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d,\d").expect("digit grouping pattern is valid"));

/// A period, captured together with the decimal digit after it when there is one
static PERIOD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\.\d)|\.").expect("period pattern is valid"));

/// Normalizer for `"en"` answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNormalizer;

impl EnglishNormalizer {
    /// Language code this normalizer is registered under
    pub const LANGUAGE: &'static str = "en";
}

impl AnswerNormalizer for EnglishNormalizer {
    fn normalize(&self, answer: &str) -> NormalizedAnswer {
        let text = flatten_whitespace(answer).to_lowercase();
        let text = process_punctuation(&text);
        let text = strip_periods(&text);

        let tokens = text
            .split_whitespace()
            .map(map_number_word)
            .filter(|token| !is_article(token))
            .map(expand_contraction);

        NormalizedAnswer::from_tokens(tokens)
    }

    fn language(&self) -> &'static str {
        Self::LANGUAGE
    }
}

/// Replace newlines and tabs with spaces and trim the ends
pub fn flatten_whitespace(text: &str) -> String {
    text.replace(['\n', '\t'], " ").trim().to_string()
}

/// Remove or split on punctuation marks.
///
/// A mark is deleted outright when it touches a space anywhere in `text`
/// (`"8 - 2"`, `"horse, man"`) or when `text` contains digit grouping
/// (`"1,000"`). Otherwise every occurrence becomes a token boundary
/// (`"t-shirt"`, `"02/12/2011"`, `"20+"`).
pub fn process_punctuation(text: &str) -> String {
    let grouped_digits = DIGIT_COMMA_DIGIT.is_match(text);
    let mut out = text.to_string();

    for mark in PUNCTUATION {
        if !out.contains(mark) {
            continue;
        }
        out = if grouped_digits || touches_space(text, mark) {
            out.replace(mark, "")
        } else {
            out.replace(mark, " ")
        };
    }

    out
}

/// Whether `mark` appears directly before or after a space in `text`
fn touches_space(text: &str, mark: char) -> bool {
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if (c == mark && prev == Some(' ')) || (c == ' ' && prev == Some(mark)) {
            return true;
        }
        prev = Some(c);
    }
    false
}

/// Drop every period not immediately followed by a decimal digit
pub fn strip_periods(text: &str) -> String {
    PERIOD.replace_all(text, "${1}").into_owned()
}

/// Digit form of a spelled-out number token, or the token itself
pub fn map_number_word(token: &str) -> &str {
    number_word(token).unwrap_or(token)
}

/// Canonical contraction of a token, or the token itself
pub fn expand_contraction(token: &str) -> &str {
    contraction(token).unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(answer: &str) -> String {
        EnglishNormalizer.normalize(answer).into_string()
    }

    #[test]
    fn test_flatten_whitespace() {
        assert_eq!(flatten_whitespace("  red\tand\nblue "), "red and blue");
        assert_eq!(flatten_whitespace(""), "");
    }

    #[test]
    fn test_punctuation_splits_when_not_spaced() {
        assert_eq!(process_punctuation("t-shirt"), "t shirt");
        assert_eq!(process_punctuation("02/12/2011"), "02 12 2011");
        assert_eq!(process_punctuation("stop_sign"), "stop sign");
        assert_eq!(process_punctuation("20+"), "20 ");
        assert_eq!(process_punctuation("???"), "   ");
    }

    #[test]
    fn test_punctuation_deletes_when_spaced() {
        assert_eq!(process_punctuation("8 - 2"), "8  2");
        assert_eq!(process_punctuation("horse, man"), "horse man");
        // The comma touches a space, the hyphen does not
        assert_eq!(process_punctuation("red, blue-green"), "red blue green");
    }

    #[test]
    fn test_punctuation_deletes_with_digit_grouping() {
        assert_eq!(process_punctuation("1,000"), "1000");
        assert_eq!(process_punctuation("1,000-2,000"), "10002000");
    }

    #[test]
    fn test_punctuation_keeps_colon_and_apostrophe() {
        assert_eq!(process_punctuation("3:18"), "3:18");
        assert_eq!(process_punctuation("don't"), "don't");
    }

    #[test]
    fn test_strip_periods() {
        assert_eq!(strip_periods("dog."), "dog");
        assert_eq!(strip_periods("3.5"), "3.5");
        assert_eq!(strip_periods("u.s.a"), "usa");
        assert_eq!(strip_periods("...5"), ".5");
        assert_eq!(strip_periods(".75 inch"), ".75 inch");
    }

    #[test]
    fn test_strip_periods_counts_only_decimal_digits() {
        // Vulgar fractions are numeric but not decimal digits
        assert_eq!(strip_periods("x.½"), "x½");
        assert_eq!(strip_periods("x.²"), "x²");
        // Arabic-Indic digits are decimal digits
        assert_eq!(strip_periods("x.٣"), "x.٣");
        assert_eq!(normalize("x.½"), "x½");
    }

    #[test]
    fn test_map_number_word() {
        assert_eq!(map_number_word("one"), "1");
        assert_eq!(map_number_word("none"), "0");
        assert_eq!(map_number_word("fifty"), "fifty");
    }

    #[test]
    fn test_expand_contraction() {
        assert_eq!(expand_contraction("dont"), "don't");
        assert_eq!(expand_contraction("shoot"), "shoot");
    }

    #[test]
    fn test_pipeline_order() {
        // Number words are mapped before articles are dropped
        assert_eq!(normalize("The One"), "1");
        // Splitting happens before article removal
        assert_eq!(normalize("n/a"), "n");
        assert_eq!(normalize("a-frame"), "frame");
        // Splitting happens before number-word mapping
        assert_eq!(normalize("6 fifty-five"), "6 fifty 5");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize("Yes"), normalize("yes"));
        assert_eq!(normalize("NONE"), "0");
        assert_eq!(normalize("Dont Shoot!"), "don't shoot");
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(normalize("  toilet \t paper\n"), "toilet paper");
    }

    #[test]
    fn test_trailing_period() {
        assert_eq!(normalize("Skateboard."), "skateboard");
        assert_eq!(normalize("2.5"), "2.5");
    }
}
