/// Keyword aggregation: merge oracle entities and topics into one ranked list.
///
/// Entities are considered before topics, so when both name the same term the
/// entity's casing and relevance win. Matching is case-insensitive.
use seo_common::oracle::{CandidateKind, RawCandidate};

use crate::model::Keyword;

/// Candidates must score strictly above this to become keywords.
pub const MIN_SCORE: f64 = 0.5;
/// Maximum number of keywords returned.
pub const MAX_KEYWORDS: usize = 10;

/// Build the ranked keyword list from raw oracle candidates.
///
/// Output has no case-insensitive duplicates, is sorted by relevance
/// descending (ties keep encounter order) and holds at most [`MAX_KEYWORDS`].
pub fn aggregate_keywords(candidates: &[RawCandidate]) -> Vec<Keyword> {
    let mut keywords: Vec<Keyword> = Vec::new();

    for kind in [CandidateKind::Entity, CandidateKind::Topic] {
        for candidate in candidates.iter().filter(|c| c.kind == kind) {
            if candidate.score <= MIN_SCORE {
                continue;
            }
            if keywords.iter().any(|k| k.same_text(&candidate.text)) {
                continue;
            }
            keywords.push(Keyword::new(
                candidate.text.clone(),
                relevance_from_score(candidate.score),
            ));
        }
    }

    // stable
    keywords.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// `round(score * 100)`, clamped to 0-100.
pub fn relevance_from_score(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}
