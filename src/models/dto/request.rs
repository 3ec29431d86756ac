use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{Difficulty, QuizQuestion};

pub const MAX_TOPIC_CHARS: usize = 200;

fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    let len = topic.trim().chars().count();
    if len == 0 || len > MAX_TOPIC_CHARS {
        let mut err = ValidationError::new("topic_length");
        err.message = Some(format!("topic must be 1 to {} characters", MAX_TOPIC_CHARS).into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,

    #[validate(range(min = 1, max = 50))]
    pub question_count: Option<usize>,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[validate(length(min = 1, max = 100))]
    pub generation_id: Option<String>,
}

/// Submitted questions come from the client and must still hold four
/// non-blank options and an in-range answer index.
fn validate_questions(questions: &[QuizQuestion]) -> Result<(), ValidationError> {
    if let Some(bad) = questions.iter().find(|q| !q.is_well_formed()) {
        let mut err = ValidationError::new("malformed_question");
        err.message = Some(format!("question '{}' is malformed", bad.id).into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScoreQuizRequest {
    #[validate(length(min = 1, max = 50), custom(function = "validate_questions"))]
    pub questions: Vec<QuizQuestion>,

    pub selected_answers: Vec<Option<usize>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotesKind {
    Recommended,
    Detailed,
    #[default]
    Standard,
}

impl NotesKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotesKind::Recommended => "recommended",
            NotesKind::Detailed => "detailed",
            NotesKind::Standard => "standard",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNotesRequest {
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,

    #[serde(default)]
    pub kind: NotesKind,

    #[validate(length(min = 1, max = 100))]
    pub generation_id: Option<String>,
}
