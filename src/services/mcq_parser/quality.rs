use std::cmp::Reverse;

use crate::models::domain::{quiz_question::OPTION_COUNT, QuizQuestion};

/// Additive completeness score, 0..=12. Only used for ordering.
pub fn quality_score(question: &QuizQuestion) -> u8 {
    let question_len = question.question_text.chars().count();
    let explanation_len = question.explanation.chars().count();
    let mut score = 0;

    if question_len > 10 {
        score += 2;
    }
    if question.options.len() == OPTION_COUNT {
        score += 2;
    }
    if question.options.iter().all(|o| o.chars().count() > 3) {
        score += 2;
    }
    if question.correct_option_index < OPTION_COUNT {
        score += 2;
    }
    if explanation_len > 15 {
        score += 2;
    }
    if question_len > 20 {
        score += 1;
    }
    if explanation_len > 30 {
        score += 1;
    }

    score
}

/// Sorts by descending score; equal scores keep discovery order.
pub fn rank_by_quality(mut questions: Vec<QuizQuestion>) -> Vec<QuizQuestion> {
    questions.sort_by_cached_key(|q| Reverse(quality_score(q)));
    questions
}
