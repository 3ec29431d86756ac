use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::QuizQuestion, dto::response::QuizPerformance},
};

static CAPITALIZED_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z]+\b").expect("CAPITALIZED_TERM is a valid regex pattern")
});

const INTERROGATIVES: [&str; 6] = ["What", "Which", "When", "Where", "Why", "How"];

const TECHNICAL_TERMS: [&str; 23] = [
    "algorithm",
    "programming",
    "database",
    "function",
    "variable",
    "object",
    "class",
    "API",
    "SQL",
    "HTTP",
    "REST",
    "framework",
    "library",
    "method",
    "machine learning",
    "artificial intelligence",
    "neural network",
    "deep learning",
    "data structure",
    "encryption",
    "network",
    "protocol",
    "compiler",
];

/// Capitalised words longer than three letters (minus question words) plus
/// any known technical term, without repeats.
pub fn extract_key_topics(question_text: &str) -> Vec<String> {
    let mut topics: Vec<String> = Vec::new();
    let mut push = |topic: &str| {
        if !topics.iter().any(|t| t == topic) {
            topics.push(topic.to_string());
        }
    };

    for term in CAPITALIZED_TERM.find_iter(question_text).map(|m| m.as_str()) {
        if term.len() > 3 && !INTERROGATIVES.contains(&term) {
            push(term);
        }
    }

    let lower = question_text.to_lowercase();
    for term in TECHNICAL_TERMS {
        if lower.contains(&term.to_lowercase()) {
            push(term);
        }
    }

    topics
}

fn feedback_for(percentage: u32) -> &'static str {
    match percentage {
        90.. => "Excellent! You have a strong understanding of this topic.",
        80..=89 => "Very good! You have a solid grasp of this material.",
        70..=79 => "Good job! Review a few concepts to strengthen your understanding.",
        60..=69 => "You're making progress. Focus on the areas you missed to improve your score.",
        _ => "This topic needs more attention. Consider reviewing the core concepts again.",
    }
}

/// Scores a finished quiz. `selected[i]` is the chosen option for question
/// `i`; unanswered questions count as wrong.
pub fn analyze_quiz_performance(
    questions: &[QuizQuestion],
    selected: &[Option<usize>],
) -> AppResult<QuizPerformance> {
    if questions.len() != selected.len() {
        return Err(AppError::ValidationError(format!(
            "expected {} answers, got {}",
            questions.len(),
            selected.len()
        )));
    }

    let mut correct_count = 0;
    let mut weak_areas: Vec<String> = Vec::new();

    for (question, answer) in questions.iter().zip(selected) {
        if *answer == Some(question.correct_option_index) {
            correct_count += 1;
            continue;
        }
        for topic in extract_key_topics(&question.question_text) {
            if !weak_areas.contains(&topic) {
                weak_areas.push(topic);
            }
        }
    }

    let total_count = questions.len();
    let percentage = if total_count == 0 {
        0
    } else {
        (correct_count as f64 / total_count as f64 * 100.0).round() as u32
    };

    Ok(QuizPerformance {
        score: correct_count,
        correct_count,
        total_count,
        percentage,
        weak_areas,
        feedback: feedback_for(percentage).to_string(),
    })
}
