const MIN_TOKEN_LEN: usize = 3;

/// Lexical topic check: the question mentions the whole topic phrase, or
/// at least one topic word longer than three characters.
///
/// Paraphrased questions can be rejected and short common words can match
/// by accident; both are accepted limitations.
pub fn is_topic_relevant(question_text: &str, topic: &str) -> bool {
    let question = question_text.to_lowercase();
    let topic = topic.trim().to_lowercase();

    question.contains(&topic)
        || topic
            .split_whitespace()
            .any(|term| term.chars().count() > MIN_TOKEN_LEN && question.contains(term))
}
