use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::quiz_question::{
    letter_to_index, QuizQuestion, DEFAULT_EXPLANATION, OPTION_COUNT,
};

static PLACEHOLDER_OPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[\s*Option\s*\d*\s*\]$").expect("PLACEHOLDER_OPTION is a valid regex pattern")
});

/// Which extraction strategy produced a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    Labeled,
    Numbered,
    ShortPrefix,
    Bare,
    Loose,
}

impl PatternKind {
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Labeled => "labeled",
            PatternKind::Numbered => "numbered",
            PatternKind::ShortPrefix => "short_prefix",
            PatternKind::Bare => "bare",
            PatternKind::Loose => "loose",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateSource {
    /// Chunk number (1-based) produced by the section splitter.
    Section(usize),
    Pattern(PatternKind),
}

/// An unvalidated question pulled out of model output. Any field may be
/// missing or malformed until [`Candidate::finalize`] checks it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub source: CandidateSource,
    pub question_text: String,
    pub options: Vec<String>,
    pub answer_letter: Option<String>,
    pub explanation: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    EmptyQuestion,
    TooFewOptions(usize),
    PlaceholderOption,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::EmptyQuestion => write!(f, "empty question text"),
            Rejection::TooFewOptions(n) => write!(f, "only {} usable options", n),
            Rejection::PlaceholderOption => write!(f, "placeholder option text"),
        }
    }
}

impl Candidate {
    pub fn new(source: CandidateSource, question_text: impl Into<String>) -> Self {
        Self {
            source,
            question_text: question_text.into(),
            options: Vec::new(),
            answer_letter: None,
            explanation: None,
        }
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    pub fn with_answer(mut self, letter: Option<String>) -> Self {
        self.answer_letter = letter;
        self
    }

    pub fn with_explanation(mut self, explanation: Option<String>) -> Self {
        self.explanation = explanation;
        self
    }

    /// Trims every field, keeps the first four options and fills defaults.
    /// Rejects the candidate instead of padding anything that is missing.
    pub fn finalize(self, id: impl Into<String>) -> Result<QuizQuestion, Rejection> {
        let question_text = self.question_text.trim().to_string();
        if question_text.is_empty() {
            return Err(Rejection::EmptyQuestion);
        }

        let options: Vec<String> = self
            .options
            .iter()
            .take(OPTION_COUNT)
            .map(|o| o.trim().to_string())
            .collect();

        let usable = options.iter().filter(|o| !o.is_empty()).count();
        if options.len() < OPTION_COUNT || usable < OPTION_COUNT {
            return Err(Rejection::TooFewOptions(usable));
        }
        if options.iter().any(|o| PLACEHOLDER_OPTION.is_match(o)) {
            return Err(Rejection::PlaceholderOption);
        }

        let correct = letter_to_index(self.answer_letter.as_deref().unwrap_or("A"));
        let explanation = self
            .explanation
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_EXPLANATION.to_string());

        let options: [String; OPTION_COUNT] = options
            .try_into()
            .map_err(|v: Vec<String>| Rejection::TooFewOptions(v.len()))?;

        Ok(QuizQuestion::new(id, question_text, options, correct, explanation))
    }
}
