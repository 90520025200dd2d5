use serde::{Deserialize, Serialize};

/// A ranked keyword suggestion, e.g. `{ text: "Paris", relevance: 90 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Keyword text exactly as first seen (casing preserved)
    pub text: String,
    /// Confidence 0-100 that the keyword is significant to the text
    pub relevance: u8,
}

impl Keyword {
    pub fn new(text: impl Into<String>, relevance: u8) -> Self {
        Self {
            text: text.into(),
            relevance: relevance.min(100),
        }
    }

    /// Case-insensitive text comparison used for deduplication.
    pub fn same_text(&self, other: &str) -> bool {
        self.text.to_lowercase() == other.to_lowercase()
    }
}

/// Scoring bundle for one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Sentence-length readability proxy, 0-100
    pub readability_score: u8,
    /// Percentage of words matching the top keyword, 2 decimal places
    pub keyword_density: f64,
    pub word_count: usize,
    /// Ordered suggestions; never empty
    pub improvement_tips: Vec<String>,
}

/// Unit returned to the caller for one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub keywords: Vec<Keyword>,
    pub analysis: AnalysisReport,
}
