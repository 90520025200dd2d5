//! Rule-based improvement tips.
//!
//! Rules are evaluated in a fixed order and every rule that matches appends its
//! tip; there is no early exit. Tip texts are consumed verbatim by clients.

pub const TIP_SHORTEN_SENTENCES: &str = "Consider using shorter sentences to improve readability.";
pub const TIP_TOO_SHORT: &str =
    "Content is quite short. Adding more relevant content may improve SEO.";
pub const TIP_TOO_LONG: &str =
    "Content is quite long. Consider breaking it into smaller sections with headings.";
pub const TIP_LOW_DENSITY: &str = "Consider increasing the use of primary keywords (aim for 1-2%).";
pub const TIP_KEYWORD_STUFFING: &str =
    "Keyword density is too high, which may be seen as keyword stuffing.";
pub const TIP_ADD_HEADINGS: &str =
    "Consider adding proper headings (H1, H2) to structure your content.";
pub const TIP_ADD_LINKS: &str = "Adding relevant internal and external links can improve SEO.";
pub const TIP_LOOKS_GOOD: &str = "Your content looks good! Keep focusing on quality and relevance.";

const MIN_READABILITY: f64 = 60.0;
const MIN_WORDS: usize = 300;
const MAX_WORDS: usize = 2000;
const MIN_DENSITY: f64 = 0.5;
const MAX_DENSITY: f64 = 3.0;

/// Produce the ordered tip list. Never empty.
///
/// `readability` is the unrounded score; all thresholds are exclusive.
pub fn improvement_tips(
    readability: f64,
    word_count: usize,
    keyword_density: f64,
    text: &str,
) -> Vec<String> {
    let mut tips: Vec<&str> = Vec::new();

    if readability < MIN_READABILITY {
        tips.push(TIP_SHORTEN_SENTENCES);
    }

    if word_count < MIN_WORDS {
        tips.push(TIP_TOO_SHORT);
    } else if word_count > MAX_WORDS {
        tips.push(TIP_TOO_LONG);
    }

    if keyword_density < MIN_DENSITY {
        tips.push(TIP_LOW_DENSITY);
    } else if keyword_density > MAX_DENSITY {
        tips.push(TIP_KEYWORD_STUFFING);
    }

    if !text.contains("<h1>") && !text.contains("<h2>") {
        tips.push(TIP_ADD_HEADINGS);
    }

    if !text.contains("http") && !text.contains("<a") {
        tips.push(TIP_ADD_LINKS);
    }

    if tips.is_empty() {
        tips.push(TIP_LOOKS_GOOD);
    }

    tips.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRUCTURED: &str = "<h1>Title</h1> see https://example.com";

    #[test]
    fn healthy_content_gets_positive_tip_only() {
        assert_eq!(
            improvement_tips(80.0, 800, 1.5, STRUCTURED),
            vec![TIP_LOOKS_GOOD]
        );
    }

    #[test]
    fn short_unstructured_text_collects_tips_in_order() {
        assert_eq!(
            improvement_tips(100.0, 2, 0.0, "Short text."),
            vec![TIP_TOO_SHORT, TIP_LOW_DENSITY, TIP_ADD_HEADINGS, TIP_ADD_LINKS]
        );
    }

    #[test]
    fn long_run_on_content() {
        let tips = improvement_tips(0.0, 2500, 1.0, STRUCTURED);
        assert_eq!(tips, vec![TIP_SHORTEN_SENTENCES, TIP_TOO_LONG]);
    }

    #[test]
    fn word_count_bounds_are_exclusive() {
        assert!(!improvement_tips(80.0, 300, 1.0, STRUCTURED).contains(&TIP_TOO_SHORT.to_string()));
        assert!(!improvement_tips(80.0, 2000, 1.0, STRUCTURED).contains(&TIP_TOO_LONG.to_string()));
        assert!(improvement_tips(80.0, 299, 1.0, STRUCTURED).contains(&TIP_TOO_SHORT.to_string()));
        assert!(improvement_tips(80.0, 2001, 1.0, STRUCTURED).contains(&TIP_TOO_LONG.to_string()));
    }

    #[test]
    fn density_bounds_are_exclusive() {
        assert_eq!(improvement_tips(80.0, 500, 3.0, STRUCTURED), vec![TIP_LOOKS_GOOD]);
        assert_eq!(improvement_tips(80.0, 500, 0.5, STRUCTURED), vec![TIP_LOOKS_GOOD]);
        assert_eq!(
            improvement_tips(80.0, 500, 3.01, STRUCTURED),
            vec![TIP_KEYWORD_STUFFING]
        );
        assert_eq!(
            improvement_tips(80.0, 500, 0.49, STRUCTURED),
            vec![TIP_LOW_DENSITY]
        );
    }

    #[test]
    fn readability_uses_unrounded_score() {
        let tips = improvement_tips(59.5, 500, 1.0, STRUCTURED);
        assert_eq!(tips, vec![TIP_SHORTEN_SENTENCES]);
    }

    #[test]
    fn either_heading_or_link_marker_is_enough() {
        assert_eq!(
            improvement_tips(80.0, 500, 1.0, "<h2>Sub</h2> <a href=\"/x\">x</a>"),
            vec![TIP_LOOKS_GOOD]
        );
        assert_eq!(
            improvement_tips(80.0, 500, 1.0, "<h2>Sub</h2>"),
            vec![TIP_ADD_LINKS]
        );
        assert_eq!(
            improvement_tips(80.0, 500, 1.0, "http://x"),
            vec![TIP_ADD_HEADINGS]
        );
    }

    #[test]
    fn never_empty() {
        for readability in [0.0, 59.9, 60.0, 100.0] {
            for words in [1usize, 300, 1000, 2001] {
                for density in [0.0, 0.5, 3.0, 9.0] {
                    for text in ["", STRUCTURED] {
                        assert!(!improvement_tips(readability, words, density, text).is_empty());
                    }
                }
            }
        }
    }
}
