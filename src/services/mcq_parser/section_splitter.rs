use once_cell::sync::Lazy;
use regex::Regex;

static QUESTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*#{1,6}[ \t]*(?:question|q)[ \t]*\d+[ \t]*[:.)\-]?")
        .expect("QUESTION_MARKER is a valid regex pattern")
});

static TOPIC_OVERVIEW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)topic\s+overview").expect("TOPIC_OVERVIEW is a valid regex pattern")
});

/// Splits a response on `### Question N` style headings.
///
/// Text before the first heading is the introduction and is not returned.
/// An empty result means no heading was found.
pub fn split_sections(raw: &str) -> Vec<&str> {
    let markers: Vec<_> = QUESTION_MARKER.find_iter(raw).collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let end = markers.get(i + 1).map_or(raw.len(), |next| next.start());
            raw[marker.end()..end].trim()
        })
        .collect()
}

/// Text before the first question heading, or the whole text if there is none.
pub fn introduction(raw: &str) -> &str {
    QUESTION_MARKER
        .find(raw)
        .map_or(raw, |marker| &raw[..marker.start()])
        .trim()
}

pub fn has_topic_overview(raw: &str) -> bool {
    TOPIC_OVERVIEW.is_match(introduction(raw))
}
