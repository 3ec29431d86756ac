//! Line-oriented matchers for responses without `### Question N` headings.
//!
//! Each matcher recognises one question layout starting at a given line and
//! returns a [`PatternMatch`] or `None`. Matchers run in a fixed order from
//! strictest to loosest and their results are pooled.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{
    quiz_question::{OPTION_COUNT, OPTION_LABELS},
    Candidate, CandidateSource, PatternKind,
};

static OPTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-*+]\s+)?(?:\*\*)?\(?([A-D])(?:[.):]|\s)(?:\*\*)?\s*(.*)$")
        .expect("OPTION_LINE is a valid regex pattern")
});

static LOOSE_OPTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-*+]\s+)?(?:\*\*)?(?:[Oo]ption\s*)?\(?([A-D])(?:[.):]|\s)(?:\*\*)?\s*(.*)$")
        .expect("LOOSE_OPTION_LINE is a valid regex pattern")
});

static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:[-*+]\s+)?\**\s*(?:correct\s+answer|correct\s+option|correct|answer)\s*\**\s*[:\-]\s*\**\s*\(?([A-D])\b",
    )
    .expect("ANSWER_LINE is a valid regex pattern")
});

static EXPLANATION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:[-*+]\s+)?\**\s*(?:explanation|reason|rationale)\s*\**\s*[:\-]\s*\**\s*(.*)$",
    )
    .expect("EXPLANATION_LINE is a valid regex pattern")
});

static LABELED_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*\**\s*question\s*\**\s*:\s*\**\s*(.*)$")
        .expect("LABELED_HEADER is a valid regex pattern")
});

static NUMBERED_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:#{1,6}\s*)?\**\s*(?:question|q)[\s\-]*\d+\s*\**\s*[.):]?\s*\**\s*(.*)$")
        .expect("NUMBERED_HEADER is a valid regex pattern")
});

static SHORT_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*\**\s*q\s*[.):]\s*\**\s*(.+)$").expect("SHORT_HEADER is a valid regex pattern")
});

static LOOSE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:\d+\s*[.)]?|question(?:\s*\d+)?\s*:?)\s*(.*)$")
        .expect("LOOSE_HEADER is a valid regex pattern")
});

static MARKDOWN_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#").expect("MARKDOWN_HEADING is a valid regex pattern"));

static QUESTION_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:#{1,6}\s*)?\**\s*(?:(?:question|q)[\s\-]*\d+\s*\**\s*[.):\-]?|(?:question|q)\s*\**\s*[.):]|\d+\s*\**\s*[.):\-])\s*\**\s*",
    )
        .expect("QUESTION_PREFIX is a valid regex pattern")
});

const MAX_QUESTION_CONTINUATION: usize = 3;

/// A candidate plus the index of the first line it did not consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub candidate: Candidate,
    pub next_line: usize,
}

pub type Matcher = fn(&[&str], usize) -> Option<PatternMatch>;

/// Matchers in priority order.
pub const MATCHERS: [(PatternKind, Matcher); 5] = [
    (PatternKind::Labeled, labeled_question),
    (PatternKind::Numbered, numbered_question),
    (PatternKind::ShortPrefix, short_prefix_question),
    (PatternKind::Bare, bare_question),
    (PatternKind::Loose, loose_question),
];

struct BodySyntax {
    option_line: &'static Lazy<Regex>,
    answer_required: bool,
    explanation_required: bool,
    allow_continuation: bool,
    max_lines_before_answer: usize,
}

struct Body {
    extra_question: Vec<String>,
    options: Vec<String>,
    answer: Option<String>,
    explanation: Option<String>,
    next_line: usize,
}

/// `QUESTION: ...` followed by options, a required answer and explanation.
pub fn labeled_question(lines: &[&str], at: usize) -> Option<PatternMatch> {
    let header = header_text(&LABELED_HEADER, lines.get(at)?)?;
    let syntax = BodySyntax {
        option_line: &OPTION_LINE,
        answer_required: true,
        explanation_required: true,
        allow_continuation: true,
        max_lines_before_answer: 0,
    };
    build(PatternKind::Labeled, header, lines, at, &syntax)
}

/// `Question 3: ...` / `Q3) ...` with a required answer and explanation.
pub fn numbered_question(lines: &[&str], at: usize) -> Option<PatternMatch> {
    let header = header_text(&NUMBERED_HEADER, lines.get(at)?)?;
    let syntax = BodySyntax {
        option_line: &OPTION_LINE,
        answer_required: true,
        explanation_required: true,
        allow_continuation: true,
        max_lines_before_answer: 0,
    };
    build(PatternKind::Numbered, header, lines, at, &syntax)
}

/// `Q: ...` with a required answer and explanation.
pub fn short_prefix_question(lines: &[&str], at: usize) -> Option<PatternMatch> {
    let header = header_text(&SHORT_HEADER, lines.get(at)?)?;
    let syntax = BodySyntax {
        option_line: &OPTION_LINE,
        answer_required: true,
        explanation_required: true,
        allow_continuation: false,
        max_lines_before_answer: 0,
    };
    build(PatternKind::ShortPrefix, header, lines, at, &syntax)
}

/// Any line directly followed by four options; answer and explanation optional.
pub fn bare_question(lines: &[&str], at: usize) -> Option<PatternMatch> {
    let line = lines.get(at)?;
    if line.trim().is_empty() || is_structural(line) || OPTION_LINE.is_match(line) {
        return None;
    }
    let syntax = BodySyntax {
        option_line: &OPTION_LINE,
        answer_required: false,
        explanation_required: false,
        allow_continuation: false,
        max_lines_before_answer: 0,
    };
    build(PatternKind::Bare, line.trim().to_string(), lines, at, &syntax)
}

/// Numbered or `Question` lines with `Option A` / `(A)` style options and
/// an answer that may sit a couple of lines below the options.
pub fn loose_question(lines: &[&str], at: usize) -> Option<PatternMatch> {
    let line = lines.get(at)?;
    if LOOSE_OPTION_LINE.is_match(line) {
        return None;
    }
    let header = header_text(&LOOSE_HEADER, line)?;
    let syntax = BodySyntax {
        option_line: &LOOSE_OPTION_LINE,
        answer_required: false,
        explanation_required: false,
        allow_continuation: true,
        max_lines_before_answer: 2,
    };
    build(PatternKind::Loose, header, lines, at, &syntax)
}

/// Runs every matcher over the whole text and pools the results in
/// priority order. Within one matcher, matches do not overlap.
pub fn find_all(raw: &str) -> Vec<Candidate> {
    let lines: Vec<&str> = raw.lines().collect();
    let mut pooled = Vec::new();

    for (kind, matcher) in MATCHERS {
        let before = pooled.len();
        let mut at = 0;
        while at < lines.len() {
            match matcher(&lines, at) {
                Some(found) => {
                    pooled.push(found.candidate);
                    at = found.next_line.max(at + 1);
                }
                None => at += 1,
            }
        }
        log::debug!(
            "pattern '{}' matched {} candidates",
            kind.name(),
            pooled.len() - before
        );
    }

    pooled
}

fn header_text(header: &Regex, line: &str) -> Option<String> {
    header
        .captures(line)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()).trim().to_string())
}

fn build(
    kind: PatternKind,
    header: String,
    lines: &[&str],
    at: usize,
    syntax: &BodySyntax,
) -> Option<PatternMatch> {
    let body = read_body(lines, at + 1, syntax)?;

    let mut parts = vec![header];
    parts.extend(body.extra_question);
    let question_text = clean_question_text(&parts.join(" "));

    let candidate = Candidate::new(CandidateSource::Pattern(kind), question_text)
        .with_options(body.options)
        .with_answer(body.answer)
        .with_explanation(body.explanation);

    Some(PatternMatch {
        candidate,
        next_line: body.next_line,
    })
}

fn read_body(lines: &[&str], start: usize, syntax: &BodySyntax) -> Option<Body> {
    let mut at = start;
    let mut extra_question = Vec::new();

    loop {
        at = skip_blank(lines, at);
        let line = lines.get(at)?;
        if parse_option(syntax.option_line, line).is_some_and(|(letter, _)| letter == 'A') {
            break;
        }
        if !syntax.allow_continuation
            || extra_question.len() >= MAX_QUESTION_CONTINUATION
            || is_structural(line)
        {
            return None;
        }
        extra_question.push(line.trim().to_string());
        at += 1;
    }

    let mut options = Vec::with_capacity(OPTION_COUNT);
    for expected in OPTION_LABELS {
        let next = skip_blank(lines, at);
        match lines
            .get(next)
            .and_then(|line| parse_option(syntax.option_line, line))
        {
            Some((letter, text)) if letter == expected => {
                options.push(text);
                at = next + 1;
            }
            _ => break,
        }
    }

    let mut answer = None;
    let mut probe = at;
    let mut skipped = 0;
    loop {
        probe = skip_blank(lines, probe);
        let Some(line) = lines.get(probe) else { break };
        if let Some(letter) = ANSWER_LINE
            .captures(line)
            .and_then(|caps| caps.get(1))
        {
            answer = Some(letter.as_str().to_ascii_uppercase());
            at = probe + 1;
            break;
        }
        if EXPLANATION_LINE.is_match(line)
            || skipped >= syntax.max_lines_before_answer
            || is_structural(line)
            || LOOSE_OPTION_LINE.is_match(line)
        {
            break;
        }
        skipped += 1;
        probe += 1;
    }

    let mut explanation = None;
    let probe = skip_blank(lines, at);
    if let Some(first) = lines
        .get(probe)
        .and_then(|line| EXPLANATION_LINE.captures(line))
        .and_then(|caps| caps.get(1))
    {
        let mut text = first.as_str().trim().to_string();
        at = probe + 1;
        while let Some(line) = lines.get(at) {
            if line.trim().is_empty() || is_structural(line) || OPTION_LINE.is_match(line) {
                break;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(line.trim());
            at += 1;
        }
        explanation = Some(text.trim_end_matches('*').trim().to_string());
    }

    if (syntax.answer_required && answer.is_none())
        || (syntax.explanation_required && explanation.is_none())
    {
        return None;
    }

    Some(Body {
        extra_question,
        options,
        answer,
        explanation,
        next_line: at,
    })
}

fn parse_option(option_line: &Regex, line: &str) -> Option<(char, String)> {
    let caps = option_line.captures(line)?;
    let letter = caps.get(1)?.as_str().chars().next()?;
    let text = caps
        .get(2)
        .map_or("", |m| m.as_str())
        .trim()
        .trim_end_matches('*')
        .trim()
        .to_string();
    Some((letter, text))
}

fn is_structural(line: &str) -> bool {
    ANSWER_LINE.is_match(line)
        || EXPLANATION_LINE.is_match(line)
        || LABELED_HEADER.is_match(line)
        || NUMBERED_HEADER.is_match(line)
        || SHORT_HEADER.is_match(line)
        || MARKDOWN_HEADING.is_match(line)
}

fn skip_blank(lines: &[&str], mut at: usize) -> usize {
    while lines.get(at).is_some_and(|l| l.trim().is_empty()) {
        at += 1;
    }
    at
}

/// Strips heading hashes, bold markers and `Question N:` / `Q:` / `N.` prefixes.
pub fn clean_question_text(text: &str) -> String {
    let text = text.trim();
    let stripped = QUESTION_PREFIX.replace(text, "");
    let stripped = if stripped.trim().is_empty() {
        text
    } else {
        stripped.as_ref()
    };
    stripped
        .trim_matches(|c: char| c == '*' || c.is_whitespace())
        .to_string()
}
