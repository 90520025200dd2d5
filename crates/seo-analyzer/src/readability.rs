/// Readability proxy based purely on average sentence length.
///
/// `score = clamp(100 - (words_per_sentence - 10) * 5, 0, 100)`. This is a
/// simplified Flesch-Kincaid stand-in; the exact formula is part of the output
/// contract and must not be tuned.
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Number of pieces left after splitting on whitespace runs.
///
/// Empty leading/trailing pieces are counted, so the result is always >= 1.
pub fn count_words(text: &str) -> usize {
    WHITESPACE_RE.split(text).count()
}

/// Number of non-blank fragments between `.`, `!` and `?` runs.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Unrounded score in `[0, 100]`.
pub fn readability_score(word_count: usize, sentence_count: usize) -> f64 {
    let avg_words_per_sentence = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        word_count as f64
    };
    (100.0 - (avg_words_per_sentence - 10.0) * 5.0).clamp(0.0, 100.0)
}

/// Score as reported to callers.
pub fn rounded_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}
