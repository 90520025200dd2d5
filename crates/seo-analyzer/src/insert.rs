//! Keyword insertion into preview text.
//!
//! Heuristic, not grammar-aware: the text is cut into `". "`-separated
//! fragments and the keyword is spliced into the first fragment that does not
//! already mention it and is long enough to absorb it. At most one insertion
//! happens per call.

const SENTENCE_SEPARATOR: &str = ". ";
const MIN_FRAGMENT_WORDS: usize = 6;
const MAX_INSERT_POSITION: usize = 3;

/// Insert `keyword` into `text`, or return `text` unchanged if no fragment is
/// eligible.
pub fn insert_keyword(text: &str, keyword: &str) -> String {
    let needle = keyword.to_lowercase();
    let mut fragments: Vec<String> = text.split(SENTENCE_SEPARATOR).map(str::to_string).collect();
    let mut inserted = false;

    for fragment in fragments.iter_mut() {
        if inserted || fragment.to_lowercase().contains(&needle) {
            continue;
        }
        let mut words: Vec<&str> = fragment.split(' ').collect();
        if words.len() < MIN_FRAGMENT_WORDS {
            continue;
        }
        let position = MAX_INSERT_POSITION.min(words.len() / 3);
        words.insert(position, keyword);
        *fragment = words.join(" ");
        inserted = true;
    }

    fragments.join(SENTENCE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_into_first_long_fragment() {
        let text = "Too short here. The quick brown fox jumps over the lazy dog. Another long sentence sits right here too";
        assert_eq!(
            insert_keyword(text, "SEO"),
            "Too short here. The quick brown SEO fox jumps over the lazy dog. Another long sentence sits right here too"
        );
    }

    #[test]
    fn position_scales_with_short_fragments() {
        // six words -> min(3, 6 / 3) = 2
        assert_eq!(
            insert_keyword("one two three four five six", "kw"),
            "one two kw three four five six"
        );
    }

    #[test]
    fn skips_fragments_already_mentioning_keyword() {
        let text = "We love rust programming every single day. Writing code is fun for many people";
        assert_eq!(
            insert_keyword(text, "Rust"),
            "We love rust programming every single day. Writing code Rust is fun for many people"
        );
    }

    #[test]
    fn unchanged_when_no_fragment_is_eligible() {
        let text = "Tiny one. Also tiny. Small words only";
        assert_eq!(insert_keyword(text, "keyword"), text);
    }

    #[test]
    fn unchanged_when_keyword_present_everywhere() {
        let text = "SEO matters for every modern website today. Good SEO brings more visitors over time";
        let once = insert_keyword(text, "seo");
        assert_eq!(once, text);
        assert_eq!(insert_keyword(&once, "seo"), text);
    }

    #[test]
    fn one_insertion_per_call() {
        let text = "alpha beta gamma delta epsilon zeta. eta theta iota kappa lambda mu";
        let first = insert_keyword(text, "kw");
        assert_eq!(
            first,
            "alpha beta kw gamma delta epsilon zeta. eta theta iota kappa lambda mu"
        );
        let second = insert_keyword(&first, "kw");
        assert_eq!(
            second,
            "alpha beta kw gamma delta epsilon zeta. eta theta kw iota kappa lambda mu"
        );
    }

    #[test]
    fn empty_text_is_untouched() {
        assert_eq!(insert_keyword("", "seo"), "");
    }
}
