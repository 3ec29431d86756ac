//! Best-effort extraction of multiple-choice questions from model output.
//!
//! The response is first split on `### Question N` headings and each section
//! is read field by field. When that finds nothing usable, every line-pattern
//! matcher is run over the whole text and the results are pooled. Survivors
//! are filtered for topic relevance, ranked by quality and de-duplicated.

pub mod dedup;
pub mod field_extractors;
pub mod pattern_matchers;
pub mod quality;
pub mod relevance;
pub mod section_splitter;

use crate::models::domain::{Candidate, CandidateSource, QuizQuestion};

use self::{
    dedup::Deduplicator,
    field_extractors::{
        extract_correct_answer, extract_explanation, extract_options, extract_question_text,
    },
    quality::rank_by_quality,
    relevance::is_topic_relevant,
};

/// Parses a raw model response into validated questions about `topic`.
///
/// Never fails: malformed candidates are skipped and an unparseable response
/// yields an empty list.
pub fn parse_questions(raw: &str, topic: &str) -> Vec<QuizQuestion> {
    log::info!("Parsing MCQ response for topic '{}'", topic);

    if !section_splitter::has_topic_overview(raw) {
        log::debug!("Response lacks a topic overview section");
    }

    let sections = section_splitter::split_sections(raw);
    let mut accepted = if sections.is_empty() {
        Vec::new()
    } else {
        validate(section_candidates(&sections), topic)
    };

    if accepted.is_empty() {
        if !sections.is_empty() {
            log::debug!(
                "{} sections produced no valid question, trying line patterns",
                sections.len()
            );
        }
        accepted = validate(pattern_matchers::find_all(raw), topic);
    }

    let mut dedup = Deduplicator::new();
    let questions: Vec<QuizQuestion> = rank_by_quality(accepted)
        .into_iter()
        .filter(|q| {
            let fresh = dedup.accept(&q.question_text);
            if !fresh {
                log::debug!("Dropping near-duplicate question '{}'", q.question_text);
            }
            fresh
        })
        .collect();

    log::info!(
        "Parsed {} MCQs for topic '{}'",
        questions.len(),
        topic
    );
    questions
}

fn section_candidates(sections: &[&str]) -> Vec<Candidate> {
    sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            Candidate::new(CandidateSource::Section(i + 1), extract_question_text(section))
                .with_options(extract_options(section))
                .with_answer(extract_correct_answer(section))
                .with_explanation(extract_explanation(section))
        })
        .collect()
}

fn validate(candidates: Vec<Candidate>, topic: &str) -> Vec<QuizQuestion> {
    let mut accepted = Vec::new();

    for candidate in candidates {
        let source = candidate.source;
        let id = format!("question-{}", accepted.len() + 1);

        match candidate.finalize(id) {
            Ok(question) if is_topic_relevant(&question.question_text, topic) => {
                accepted.push(question)
            }
            Ok(question) => log::warn!(
                "Question '{}' rejected - not relevant to topic '{}'",
                question.question_text,
                topic
            ),
            Err(reason) => log::debug!("Candidate from {:?} rejected: {}", source, reason),
        }
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn parses_markdown_sections_and_drops_malformed_block() {
        let raw = fixtures::section_response_with_malformed_block();
        let questions = parse_questions(&raw, "database indexing");

        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.options.len() == 4));
        assert!(questions.iter().all(|q| q.correct_option_index <= 3));
    }

    #[test]
    fn section_answers_map_to_indices() {
        let raw = fixtures::section_response_with_malformed_block();
        let questions = parse_questions(&raw, "database indexing");

        let btree = questions
            .iter()
            .find(|q| q.question_text.contains("B-tree"))
            .expect("B-tree question should be parsed");
        assert_eq!(btree.correct_option_index, 2);
    }

    #[test]
    fn empty_text_yields_no_questions() {
        assert!(parse_questions("", "anything").is_empty());
        assert!(parse_questions("Sorry, I cannot help with that.", "anything").is_empty());
    }

    #[test]
    fn falls_back_to_line_patterns_without_headings() {
        let raw = fixtures::labeled_response();
        let questions = parse_questions(&raw, "operating system scheduling");

        assert_eq!(questions.len(), 2);
        assert!(questions
            .iter()
            .any(|q| q.question_text.contains("round-robin scheduling")));
    }

    #[test]
    fn pooled_duplicates_collapse_to_one() {
        let raw = fixtures::labeled_response();
        let questions = parse_questions(&raw, "operating system scheduling");

        let round_robin = questions
            .iter()
            .filter(|q| q.question_text.contains("round-robin"))
            .count();
        assert_eq!(round_robin, 1);
    }

    #[test]
    fn off_topic_questions_are_filtered() {
        let raw = fixtures::section_response_with_malformed_block();
        assert!(parse_questions(&raw, "renaissance painting").is_empty());
    }

    #[test]
    fn near_duplicate_keeps_higher_quality_instance() {
        let raw = fixtures::duplicate_phrasing_response();
        let questions = parse_questions(&raw, "database normalization");

        let normalization: Vec<_> = questions
            .iter()
            .filter(|q| q.question_text.contains("purpose of database normalization"))
            .collect();
        assert_eq!(normalization.len(), 1);
        assert!(normalization[0].explanation.len() > 30);
    }
}
