use regex::Regex;
use std::sync::OnceLock;

/// Date-like shapes in priority order, most specific first. Joined into a
/// single alternation so the engine's leftmost-first semantics keep a
/// generic shape (the bare year) from consuming digits a fuller shape
/// would match at the same position.
const DATE_SHAPES: &[&str] = &[
    r"\b\d{4}-\d{2}-\d{2}\b",         // 1945-04-10
    r"\b\d{4}-\d{1,2}-\d{1,2}\b",     // 1945-4-1
    r"\b\d{1,2}/\d{1,2}/\d{4}\b",     // 10/04/1945
    r"\b\d{1,2}/\d{4}\b",             // 04/1945
    r"\b\d{4}-\d{2}\b",               // 1945-04
    r"\b\d{4}-\d{2}-xx\b",            // 1945-04-xx
    r"\b\d{4}-xx-xx\b",               // 1945-xx-xx
    r"\[?xx/xx/\d{4}\]?",             // [xx/xx/1945]
    r"\[?\d{1,2}/\d{1,2}/\d{4}\]?",   // [10/04/1945]
    r"\[?\d{1,2}\.\d{1,2}\.\d{4}\]?", // [10.04.1945]
    r"\b\d{4}\b",                     // 1945
];

fn date_shape_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&DATE_SHAPES.join("|")).expect("date shape alternation must compile")
    })
}

/// Extracts every date-like substring from `text`, in order of appearance.
///
/// Candidates are returned raw, brackets and all; duplicates are kept. An
/// input with no date-like content yields an empty vector, never an error.
pub fn extract(text: &str) -> Vec<String> {
    date_shape_pattern()
        .find_iter(text)
        .map(|candidate| candidate.as_str().to_string())
        .collect()
}
