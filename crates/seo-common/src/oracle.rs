/// The entity/topic extraction oracle, seen from the analyzer's side.
///
/// The wire model keeps every level optional with empty defaults, so a sparse
/// or partial payload simply yields fewer candidates instead of an error.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::OracleError;

/// Something that can extract scored entities and topics from text.
#[async_trait]
pub trait ExtractionOracle: Send + Sync {
    async fn extract(&self, text: &str) -> Result<OraclePayload, OracleError>;
}

/// Oracle used when no API key is configured. Always fails, which routes
/// every analysis through the fallback keyword set.
#[derive(Debug, Default, Clone)]
pub struct UnconfiguredOracle;

#[async_trait]
impl ExtractionOracle for UnconfiguredOracle {
    async fn extract(&self, _text: &str) -> Result<OraclePayload, OracleError> {
        Err(OracleError::NotConfigured)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Entity,
    Topic,
}

/// A single scored term proposed by the oracle, before ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCandidate {
    pub text: String,
    pub score: f64,
    pub kind: CandidateKind,
}

impl RawCandidate {
    pub fn entity(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
            kind: CandidateKind::Entity,
        }
    }

    pub fn topic(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
            kind: CandidateKind::Topic,
        }
    }
}

/// Top-level oracle response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OraclePayload {
    #[serde(default)]
    pub response: Option<ExtractionResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractionResponse {
    #[serde(default)]
    pub entities: Option<Vec<OracleEntity>>,
    #[serde(default)]
    pub topics: Option<Vec<OracleTopic>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleEntity {
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub relevance_score: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OracleTopic {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: f64,
}

impl OraclePayload {
    pub fn entities(&self) -> &[OracleEntity] {
        self.response
            .as_ref()
            .and_then(|r| r.entities.as_deref())
            .unwrap_or_default()
    }

    pub fn topics(&self) -> &[OracleTopic] {
        self.response
            .as_ref()
            .and_then(|r| r.topics.as_deref())
            .unwrap_or_default()
    }

    /// Flatten the payload into candidates: all entities first, then all topics,
    /// each in payload order. Entries without a name are dropped.
    pub fn candidates(&self) -> Vec<RawCandidate> {
        let entities = self.entities().iter().filter_map(|e| {
            e.entity_id
                .as_ref()
                .map(|id| RawCandidate::entity(id.clone(), e.relevance_score))
        });
        let topics = self.topics().iter().filter_map(|t| {
            t.label
                .as_ref()
                .map(|label| RawCandidate::topic(label.clone(), t.score))
        });
        entities.chain(topics).collect()
    }
}
