use serde::{Deserialize, Serialize};

pub const OPTION_COUNT: usize = 4;
pub const OPTION_LABELS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];
pub const DEFAULT_EXPLANATION: &str = "No explanation provided.";

/// A finalized multiple-choice question. `options` always holds exactly four
/// entries and `correct_option_index` always points into it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question_text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_option_index: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(
        id: impl Into<String>,
        question_text: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_option_index: usize,
        explanation: impl Into<String>,
    ) -> Self {
        let explanation = explanation.into();
        Self {
            id: id.into(),
            question_text: question_text.into(),
            options,
            correct_option_index: if correct_option_index < OPTION_COUNT {
                correct_option_index
            } else {
                0
            },
            explanation: if explanation.trim().is_empty() {
                DEFAULT_EXPLANATION.to_string()
            } else {
                explanation
            },
        }
    }

    pub fn is_well_formed(&self) -> bool {
        !self.question_text.trim().is_empty()
            && self.options.iter().all(|o| !o.trim().is_empty())
            && self.correct_option_index < OPTION_COUNT
    }
}

/// Maps an answer letter to its option index. Anything other than A-D maps to 0.
pub fn letter_to_index(letter: &str) -> usize {
    match letter.trim().to_ascii_uppercase().as_str() {
        "A" => 0,
        "B" => 1,
        "C" => 2,
        "D" => 3,
        _ => 0,
    }
}
