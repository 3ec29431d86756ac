use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Concept, QuizQuestion};

/// Where the questions of a quiz came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizSource {
    Generated,
    Mixed,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
    pub source: QuizSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizPerformance {
    pub score: usize,
    pub correct_count: usize,
    pub total_count: usize,
    pub percentage: u32,
    pub weak_areas: Vec<String>,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotesResponse {
    pub answer: String,
    pub concepts: Vec<Concept>,
}

#[derive(Debug, Serialize)]
pub struct CancelGenerationResponse {
    pub cancelled: bool,
}
