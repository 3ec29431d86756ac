use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

pub const DUPLICATE_THRESHOLD: f64 = 0.7;

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\W+").expect("NON_WORD is a valid regex pattern"));

/// Lowercases, collapses non-word runs to one space and trims.
pub fn normalize_question(text: &str) -> String {
    NON_WORD
        .replace_all(&text.to_lowercase(), " ")
        .trim()
        .to_string()
}

fn token_set(text: &str) -> HashSet<String> {
    normalize_question(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// |A ∩ B| / max(|A|, |B|) over normalized token sets.
pub fn word_overlap(a: &str, b: &str) -> f64 {
    let a = token_set(a);
    let b = token_set(b);
    let larger = a.len().max(b.len());
    if larger == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / larger as f64
}

/// Accepts questions in order, refusing any whose overlap with an already
/// accepted question exceeds [`DUPLICATE_THRESHOLD`].
#[derive(Debug, Default)]
pub struct Deduplicator {
    accepted: Vec<HashSet<String>>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_duplicate(&self, text: &str) -> bool {
        let tokens = token_set(text);
        self.accepted.iter().any(|seen| {
            let larger = tokens.len().max(seen.len());
            larger > 0
                && tokens.intersection(seen).count() as f64 / larger as f64 > DUPLICATE_THRESHOLD
        })
    }

    /// Returns `true` and remembers the text when it is not a duplicate.
    pub fn accept(&mut self, text: &str) -> bool {
        if self.is_duplicate(text) {
            return false;
        }
        self.accepted.push(token_set(text));
        true
    }
}
