use regex::RegexBuilder;
use tracing::warn;

use crate::model::Keyword;

/// Percentage of words that are whole-word, case-insensitive matches of the
/// top-ranked keyword, rounded to 2 decimal places.
///
/// Returns `0.0` for an empty keyword list. `word_count` must be >= 1.
pub fn keyword_density(text: &str, keywords: &[Keyword], word_count: usize) -> f64 {
    let Some(primary) = keywords.first() else {
        return 0.0;
    };

    let matches = count_whole_word_matches(text, &primary.text);
    round2(matches as f64 / word_count.max(1) as f64 * 100.0)
}

fn count_whole_word_matches(text: &str, keyword: &str) -> usize {
    let pattern = format!(r"\b{}\b", regex::escape(&keyword.to_lowercase()));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.find_iter(text).count(),
        Err(e) => {
            warn!(error = %e, keyword, "could not build keyword pattern, density is 0");
            0
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
