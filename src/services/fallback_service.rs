use std::collections::HashSet;

use crate::{
    constants::fallback_bank::{
        FallbackEntry, FallbackSet, GENERIC_SET, KEYWORD_SETS, TOPIC_PLACEHOLDER,
    },
    models::domain::QuizQuestion,
    services::mcq_parser::dedup::normalize_question,
};

/// Keywords this short only match whole words, so "ai" does not match "email".
const WHOLE_WORD_MAX_LEN: usize = 3;

/// Static question sets keyed by topic keywords. Read-only once built.
pub struct FallbackBank {
    keyword_sets: &'static [FallbackSet],
    generic: &'static FallbackSet,
}

impl FallbackBank {
    pub fn builtin() -> Self {
        Self {
            keyword_sets: &KEYWORD_SETS,
            generic: &GENERIC_SET,
        }
    }

    /// The five questions of the first set whose keywords match `topic`, or
    /// the generic set.
    pub fn get_fallback(&self, topic: &str) -> Vec<QuizQuestion> {
        let set = self.matching_set(topic);
        log::debug!("Using '{}' fallback set for topic '{}'", set.name, topic);
        instantiate(set, topic)
    }

    /// Appends fallback questions until `questions` holds `target` entries.
    ///
    /// Order: the topic's own set, the generic set, then every other keyword
    /// set. Question text already present is skipped; only once every
    /// distinct fallback question is used does the pool start over.
    pub fn pad(
        &self,
        mut questions: Vec<QuizQuestion>,
        topic: &str,
        target: usize,
    ) -> Vec<QuizQuestion> {
        if questions.len() >= target {
            return questions;
        }

        let mut seen: HashSet<String> = questions
            .iter()
            .map(|q| normalize_question(&q.question_text))
            .collect();

        let pool: Vec<QuizQuestion> = self
            .padding_order(topic)
            .into_iter()
            .flat_map(|set| instantiate(set, topic))
            .filter(|q| seen.insert(normalize_question(&q.question_text)))
            .collect();

        let missing = target - questions.len();
        log::info!(
            "Padding {} question(s) for topic '{}' from the fallback bank",
            missing,
            topic
        );

        if pool.is_empty() {
            // Every fallback question is already present; repeat from the full order.
            let repeat: Vec<QuizQuestion> = self
                .padding_order(topic)
                .into_iter()
                .flat_map(|set| instantiate(set, topic))
                .collect();
            questions.extend(repeat.into_iter().cycle().take(missing));
        } else {
            questions.extend(pool.into_iter().cycle().take(missing));
        }

        questions
    }

    fn matching_set(&self, topic: &str) -> &'static FallbackSet {
        let topic = topic.to_lowercase();
        self.keyword_sets
            .iter()
            .find(|set| set.keywords.iter().any(|k| keyword_matches(&topic, k)))
            .unwrap_or(self.generic)
    }

    fn padding_order(&self, topic: &str) -> Vec<&'static FallbackSet> {
        let first = self.matching_set(topic);
        let mut order = vec![first];
        if !std::ptr::eq(first, self.generic) {
            order.push(self.generic);
        }
        order.extend(self.keyword_sets.iter().filter(|s| !std::ptr::eq(*s, first)));
        order
    }
}

fn keyword_matches(topic: &str, keyword: &str) -> bool {
    if keyword.len() <= WHOLE_WORD_MAX_LEN {
        topic
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == keyword)
    } else {
        topic.contains(keyword)
    }
}

fn instantiate(set: &FallbackSet, topic: &str) -> Vec<QuizQuestion> {
    set.entries
        .iter()
        .enumerate()
        .map(|(i, entry)| to_question(set, i, entry, topic))
        .collect()
}

fn to_question(set: &FallbackSet, index: usize, entry: &FallbackEntry, topic: &str) -> QuizQuestion {
    let fill = |text: &str| text.replace(TOPIC_PLACEHOLDER, topic.trim());
    QuizQuestion::new(
        format!("fallback-{}-{}", set.name.replace(' ', "-"), index + 1),
        fill(entry.question),
        entry.options.map(fill),
        entry.correct,
        fill(entry.explanation),
    )
}
