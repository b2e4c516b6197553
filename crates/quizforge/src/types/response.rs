//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::Verdict;
use crate::types::quiz::Quiz;
use crate::types::source::{SourceDocument, SourceOrigin};

/// Summary of a registered source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSummary {
    pub id: Uuid,
    pub label: String,
    pub origin: SourceOrigin,
    pub chunk_count: usize,
    pub content_hash: String,
    pub acquired_at: DateTime<Utc>,
}

impl From<&SourceDocument> for SourceSummary {
    fn from(doc: &SourceDocument) -> Self {
        Self {
            id: doc.id,
            label: doc.label.clone(),
            origin: doc.origin.clone(),
            chunk_count: doc.chunks.len(),
            content_hash: doc.content_hash.clone(),
            acquired_at: doc.acquired_at,
        }
    }
}

/// POST /api/sources/upload response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub source: SourceSummary,
}

/// POST /api/sources/wikipedia request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikipediaRequest {
    pub topic: String,
}

/// POST /api/sources/wikipedia response
///
/// `found: false` with no source is the "no context" outcome for a topic
/// with no matching article; the client falls back to the welcome view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikipediaResponse {
    pub found: bool,
    pub source: Option<SourceSummary>,
}

/// POST /api/quiz request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Label of a registered source (file name or topic)
    pub source: String,
}

/// POST /api/quiz response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub source: String,
    /// Whether the quiz came from the memo cache
    pub cached: bool,
    pub quiz: Quiz,
}

/// POST /api/quiz/grade request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    pub source: String,
    /// Selected answer text per question, in question order; None = no selection
    pub selections: Vec<Option<String>>,
}

/// POST /api/quiz/grade response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeResponse {
    pub source: String,
    pub verdicts: Vec<Verdict>,
}
