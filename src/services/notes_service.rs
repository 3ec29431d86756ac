use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tokio_util::sync::CancellationToken;

use crate::{
    constants::notes_prompt::notes_prompt,
    errors::AppResult,
    models::{
        domain::Concept,
        dto::{request::NotesKind, response::NotesResponse},
    },
    services::model_service::{fetch_or_cancel, AnswerFetcher},
};

pub const KEY_CONCEPTS_MARKER: &str = "KEY CONCEPTS:";

pub const STANDARD_FORMAT_NOTICE: &str = "\n\n**Note:** These notes were provided in the standard format because the detailed format encountered an issue.\n";

static MERMAID_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)```(?:mermaid)?[ \t]*\r?\n?((?:flowchart|graph|sequenceDiagram|classDiagram|stateDiagram|erDiagram|gantt|pie).*?)```",
    )
    .expect("MERMAID_BLOCK is a valid regex pattern")
});

static PAREN_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]*\([^\]]*\)[^\]]*)\]").expect("PAREN_LABEL is a valid regex pattern")
});

static ARROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]*-->[ \t]*").expect("ARROW is a valid regex pattern"));

static GLUED_DIRECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(graph|flowchart)([A-Z]{2})").expect("GLUED_DIRECTION is a valid regex pattern")
});

/// Re-fences diagram blocks as mermaid and fixes the syntax slips models
/// commonly make inside them.
pub fn normalize_mermaid(text: &str) -> String {
    MERMAID_BLOCK
        .replace_all(text, |caps: &Captures| {
            let mut body = caps[1].trim().to_string();

            body = PAREN_LABEL
                .replace_all(&body, |label: &Captures| {
                    format!("[{}]", label[1].replace('(', "&#40;").replace(')', "&#41;"))
                })
                .into_owned();
            body = ARROW.replace_all(&body, " --> ").into_owned();
            body = GLUED_DIRECTION.replace(&body, "$1 $2").into_owned();

            format!("```mermaid\n{}\n```", body)
        })
        .into_owned()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ConceptField {
    Title,
    Description,
    MemoryHook,
    Icon,
}

const CONCEPT_LABELS: [(&str, ConceptField); 4] = [
    ("CONCEPT:", ConceptField::Title),
    ("EXPLANATION:", ConceptField::Description),
    ("MEMORY HOOK:", ConceptField::MemoryHook),
    ("ICON:", ConceptField::Icon),
];

#[derive(Default)]
struct ConceptDraft {
    title: Option<String>,
    description: Option<String>,
    memory_hook: Option<String>,
    icon: Option<String>,
}

impl ConceptDraft {
    fn slot(&mut self, field: ConceptField) -> &mut Option<String> {
        match field {
            ConceptField::Title => &mut self.title,
            ConceptField::Description => &mut self.description,
            ConceptField::MemoryHook => &mut self.memory_hook,
            ConceptField::Icon => &mut self.icon,
        }
    }

    fn finish(self, number: usize) -> Option<Concept> {
        let title = self.title.filter(|t| !t.is_empty())?;
        Some(Concept {
            id: format!("concept-{}", number),
            title,
            description: self.description?,
            memory_hook: self.memory_hook?,
            icon: self.icon?,
        })
    }
}

fn label_of(line: &str) -> Option<(ConceptField, &str)> {
    let line = line.trim_start_matches(|c: char| c == '*' || c == '#' || c.is_whitespace());
    CONCEPT_LABELS.iter().find_map(|(label, field)| {
        line.strip_prefix(label)
            .map(|rest| (*field, rest.trim_start_matches('*').trim()))
    })
}

/// Splits a notes response at `KEY CONCEPTS:` into the answer text and the
/// concept cards found after it. Incomplete cards are dropped.
pub fn extract_concepts(text: &str) -> (String, Vec<Concept>) {
    let Some(index) = text.find(KEY_CONCEPTS_MARKER) else {
        return (text.to_string(), Vec::new());
    };

    let answer = text[..index].trim().to_string();
    let section = &text[index + KEY_CONCEPTS_MARKER.len()..];

    let mut concepts = Vec::new();
    let mut draft: Option<ConceptDraft> = None;
    let mut current: Option<ConceptField> = None;

    for line in section.lines() {
        match label_of(line) {
            Some((ConceptField::Title, rest)) => {
                if let Some(done) = draft.take().and_then(|d| d.finish(concepts.len() + 1)) {
                    concepts.push(done);
                }
                let mut fresh = ConceptDraft::default();
                *fresh.slot(ConceptField::Title) = Some(rest.to_string());
                draft = Some(fresh);
                current = Some(ConceptField::Title);
            }
            Some((field, rest)) => {
                if let Some(d) = draft.as_mut() {
                    *d.slot(field) = Some(rest.to_string());
                    current = Some(field);
                }
            }
            None => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if let (Some(d), Some(field)) = (draft.as_mut(), current) {
                    let value = d.slot(field).get_or_insert_with(String::new);
                    if !value.is_empty() {
                        value.push('\n');
                    }
                    value.push_str(line);
                }
            }
        }
    }

    if let Some(done) = draft.and_then(|d| d.finish(concepts.len() + 1)) {
        concepts.push(done);
    }

    (answer, concepts)
}

fn failure_message(kind: NotesKind) -> String {
    match kind {
        NotesKind::Detailed => "Detailed notes could not be generated right now. Try the 'Recommended' format instead, which is optimized for better performance.".to_string(),
        _ => format!(
            "Sorry, an error occurred while preparing your {} exam notes. Please try again in a moment.",
            kind.as_str()
        ),
    }
}

pub struct NotesService {
    fetcher: Arc<dyn AnswerFetcher>,
}

impl NotesService {
    pub fn new(fetcher: Arc<dyn AnswerFetcher>) -> Self {
        Self { fetcher }
    }

    /// Generates study notes with one retry. A failing detailed request is
    /// retried with the recommended prompt. Total failure yields an apology
    /// rather than an error; only cancellation is propagated.
    pub async fn generate_notes(
        &self,
        topic: &str,
        kind: NotesKind,
        cancel: &CancellationToken,
    ) -> AppResult<NotesResponse> {
        let topic = topic.trim();
        log::info!("Generating {} notes for '{}'", kind.as_str(), topic);

        let prompt = notes_prompt(topic, kind);
        if let Some(text) = fetch_or_cancel(self.fetcher.as_ref(), &prompt, cancel).await? {
            let (answer, concepts) = extract_concepts(&normalize_mermaid(&text));
            return Ok(NotesResponse { answer, concepts });
        }

        log::warn!("First {} notes attempt failed for '{}', retrying", kind.as_str(), topic);

        let response = match kind {
            NotesKind::Detailed => {
                let prompt = notes_prompt(topic, NotesKind::Recommended);
                fetch_or_cancel(self.fetcher.as_ref(), &prompt, cancel)
                    .await?
                    .map(|text| NotesResponse {
                        answer: normalize_mermaid(&text) + STANDARD_FORMAT_NOTICE,
                        concepts: Vec::new(),
                    })
            }
            _ => fetch_or_cancel(self.fetcher.as_ref(), &prompt, cancel)
                .await?
                .map(|text| {
                    let (answer, concepts) = extract_concepts(&normalize_mermaid(&text));
                    NotesResponse { answer, concepts }
                }),
        };

        Ok(response.unwrap_or_else(|| {
            log::error!("All attempts failed for {} notes on '{}'", kind.as_str(), topic);
            NotesResponse {
                answer: failure_message(kind),
                concepts: Vec::new(),
            }
        }))
    }
}
