//! Per-section field extraction used when a response is split on
//! `### Question N` headings.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::quiz_question::{OPTION_COUNT, OPTION_LABELS};

static OPTIONS_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)options\s*:").expect("OPTIONS_LABEL is a valid regex pattern"));

static OPTION_LINE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-*+]\s+)?(?:\*\*)?\(?[A-D][.)](?:\*\*)?(?:\s|$)")
        .expect("OPTION_LINE_START is a valid regex pattern")
});

static BOLD_OPTION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*([A-D])[.)]\*\*").expect("BOLD_OPTION_LABEL is a valid regex pattern")
});

static LINE_OPTION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:[-*+][ \t]+)?\(?([A-D])[.)][ \t]+")
        .expect("LINE_OPTION_LABEL is a valid regex pattern")
});

static PLAIN_OPTION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)(?:^|[\s(])([A-D])[.)][ \t]+")
        .expect("PLAIN_OPTION_LABEL is a valid regex pattern")
});

static OPTION_STOP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\n[ \t]*\r?\n|\*\*\s*correct|\*\*\s*explanation|correct\s+answer\s*:|explanation\s*:|\banswer\s*:",
    )
    .expect("OPTION_STOP is a valid regex pattern")
});

static ANSWER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\*\*\s*correct\s+answer\s*:?\s*\*\*\s*:?\s*\(?([A-D])\b",
        r"(?i)correct\s+answer\s*:\s*\**\s*\(?([A-D])\b",
        r"(?i)\banswer\s*:\s*\**\s*\(?([A-D])\b",
        r"(?i)\bcorrect\s*:\s*\**\s*\(?([A-D])\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("answer patterns are valid regex patterns"))
    .collect()
});

static EXPLANATION_LABELS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\*\*\s*(?:explanation|reason|rationale)\s*:?\s*\*\*\s*:?",
        r"(?i)\b(?:explanation|reason|rationale)\s*:",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("explanation labels are valid regex patterns"))
    .collect()
});

static NEXT_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*#{2,}").expect("NEXT_HEADING is a valid regex pattern"));

/// Everything before the first options marker, or the first non-empty line.
pub fn extract_question_text(section: &str) -> String {
    let lines: Vec<&str> = section.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return String::new();
    }

    let options_at = lines
        .iter()
        .position(|line| OPTIONS_LABEL.is_match(line) || OPTION_LINE_START.is_match(line));

    let text = match options_at {
        Some(index) => lines[..index]
            .iter()
            .map(|l| l.trim())
            .collect::<Vec<_>>()
            .join(" "),
        None => lines[0].trim().to_string(),
    };

    strip_decoration(&text)
}

/// Options labelled A-D, trying the bold `**A.**` convention, then plain
/// `A.` labels at line starts, then plain labels anywhere.
/// Never pads: fewer than four entries means the section lacks options.
pub fn extract_options(section: &str) -> Vec<String> {
    let mut best = Vec::new();
    for label in [&BOLD_OPTION_LABEL, &LINE_OPTION_LABEL, &PLAIN_OPTION_LABEL] {
        let options = labeled_segments(section, label);
        if options.len() >= OPTION_COUNT {
            return options;
        }
        if options.len() > best.len() {
            best = options;
        }
    }
    best
}

pub fn extract_correct_answer(section: &str) -> Option<String> {
    ANSWER_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(section)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_ascii_uppercase())
    })
}

/// Text after an explanation label up to the next heading or the end of the section.
pub fn extract_explanation(section: &str) -> Option<String> {
    let label = EXPLANATION_LABELS.iter().find_map(|p| p.find(section))?;
    let rest = &section[label.end()..];
    let end = NEXT_HEADING.find(rest).map_or(rest.len(), |m| m.start());

    let explanation = strip_decoration(&rest[..end]);
    (!explanation.is_empty()).then_some(explanation)
}

/// Collects option text following each label, accepting labels only in
/// A, B, C, D order.
fn labeled_segments(text: &str, label: &Regex) -> Vec<String> {
    let mut positions = Vec::with_capacity(OPTION_COUNT);

    for caps in label.captures_iter(text) {
        let (Some(whole), Some(letter)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let expected = OPTION_LABELS[positions.len()];
        if letter.as_str().starts_with(expected) {
            positions.push((whole.start(), whole.end()));
            if positions.len() == OPTION_COUNT {
                break;
            }
        }
    }

    positions
        .iter()
        .enumerate()
        .map(|(i, &(_, body_start))| {
            let body_end = positions.get(i + 1).map_or(text.len(), |next| next.0);
            let body = text[body_start..body_end].trim_start();
            let body = OPTION_STOP.find(body).map_or(body, |stop| &body[..stop.start()]);
            // an option ends with its line; the next line may carry a bullet
            let body = body.split('\n').next().unwrap_or_default();
            strip_decoration(body)
        })
        .collect()
}

fn strip_decoration(text: &str) -> String {
    text.trim()
        .trim_start_matches(|c: char| c == '*' || c == ':' || c.is_whitespace())
        .trim_end_matches(|c: char| c == '*' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOLD_SECTION: &str = "What does CPU stand for?\n\n\
**A.** Central Processing Unit\n\
**B.** Computer Personal Unit\n\
**C.** Central Program Utility\n\
**D.** Computing Processor Unit\n\n\
**Correct Answer:** A\n\n\
**Explanation:** CPU stands for Central Processing Unit.";

    #[test]
    fn question_text_stops_at_first_option() {
        assert_eq!(extract_question_text(BOLD_SECTION), "What does CPU stand for?");
    }

    #[test]
    fn question_text_joins_lines_before_options_label() {
        let section = "Consider a binary tree.\nWhat is its height?\nOptions:\nA. 1\nB. 2";
        assert_eq!(
            extract_question_text(section),
            "Consider a binary tree. What is its height?"
        );
    }

    #[test]
    fn question_text_falls_back_to_first_line() {
        let section = ": What is recursion?\nIt calls itself.";
        assert_eq!(extract_question_text(section), "What is recursion?");
    }

    #[test]
    fn bold_options_are_extracted_in_order() {
        let options = extract_options(BOLD_SECTION);
        assert_eq!(
            options,
            vec![
                "Central Processing Unit",
                "Computer Personal Unit",
                "Central Program Utility",
                "Computing Processor Unit"
            ]
        );
    }

    #[test]
    fn inline_bold_options_are_split() {
        let section = "Pick one **A.** red **B.** green **C.** blue **D.** cyan **Correct Answer:** C";
        assert_eq!(extract_options(section), vec!["red", "green", "blue", "cyan"]);
    }

    #[test]
    fn plain_options_are_used_when_bold_missing() {
        let section = "Which sorts in place?\nA. Merge sort\nB) Heap sort\nC. Counting sort\nD. Radix sort\nAnswer: B";
        assert_eq!(
            extract_options(section),
            vec!["Merge sort", "Heap sort", "Counting sort", "Radix sort"]
        );
    }

    #[test]
    fn bulleted_bold_options_drop_the_next_bullet() {
        let section = "Which vitamin is water-soluble?\n\
- **A.** Vitamin A\n\
- **B.** Vitamin C\n\
- **C.** Vitamin B12\n\
- **D.** Vitamin B6\n\n\
**Correct Answer:** B";
        assert_eq!(
            extract_options(section),
            vec!["Vitamin A", "Vitamin C", "Vitamin B12", "Vitamin B6"]
        );
    }

    #[test]
    fn bulleted_plain_options_drop_the_next_bullet() {
        let section = "Which vitamin is water-soluble?\n- A. Vitamin A\n- B. Vitamin C\n* C. Vitamin B12\n+ D. Vitamin B6\nAnswer: B";
        assert_eq!(
            extract_options(section),
            vec!["Vitamin A", "Vitamin C", "Vitamin B12", "Vitamin B6"]
        );
    }

    #[test]
    fn label_like_text_inside_an_option_is_kept() {
        let section = "What should the team do?\nA. Wait\nB. Plan C. now\nC. Vitamin D\nD. Nothing\nAnswer: B";
        assert_eq!(
            extract_options(section),
            vec!["Wait", "Plan C. now", "Vitamin D", "Nothing"]
        );
    }

    #[test]
    fn three_options_are_not_padded() {
        let section = "Which?\n**A.** one\n**B.** two\n**C.** three\n\n**Correct Answer:** B";
        assert_eq!(extract_options(section).len(), 3);
    }

    #[test]
    fn correct_answer_tries_each_label() {
        assert_eq!(extract_correct_answer(BOLD_SECTION), Some("A".to_string()));
        assert_eq!(extract_correct_answer("correct answer: c"), Some("C".to_string()));
        assert_eq!(extract_correct_answer("Answer: (D)"), Some("D".to_string()));
        assert_eq!(extract_correct_answer("Answer: Because it is"), None);
        assert_eq!(extract_correct_answer("no label here"), None);
    }

    #[test]
    fn explanation_stops_at_next_heading() {
        let section = "Explanation: Heaps keep order.\nMore detail.\n### Something else";
        assert_eq!(
            extract_explanation(section),
            Some("Heaps keep order.\nMore detail.".to_string())
        );
        assert_eq!(
            extract_explanation(BOLD_SECTION),
            Some("CPU stands for Central Processing Unit.".to_string())
        );
        assert_eq!(extract_explanation("**Explanation:**   "), None);
    }
}
