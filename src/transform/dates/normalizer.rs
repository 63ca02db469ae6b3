use crate::constants::{CANONICAL_TIMESTAMP_FORMAT, FALLBACK_DATE_FORMATS};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

/// Compiled shapes the cascade rules test candidates against.
struct NormalizerPatterns {
    exact_iso_date: Regex,
    bare_year: Regex,
    year_month: Regex,
    year_run: Regex,
    fuzzy_month_slot: Regex,
    month_slash_year: Regex,
}

impl NormalizerPatterns {
    fn new() -> Self {
        Self {
            exact_iso_date: Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("pattern must compile"),
            bare_year: Regex::new(r"^\d{4}$").expect("pattern must compile"),
            year_month: Regex::new(r"^\d{4}-\d{2}$").expect("pattern must compile"),
            year_run: Regex::new(r"\d{4}").expect("pattern must compile"),
            fuzzy_month_slot: Regex::new(r"xx/(\d{2})/(\d{4})").expect("pattern must compile"),
            month_slash_year: Regex::new(r"^\d{1,2}/\d{4}$").expect("pattern must compile"),
        }
    }
}

fn patterns() -> &'static NormalizerPatterns {
    static PATTERNS: OnceLock<NormalizerPatterns> = OnceLock::new();
    PATTERNS.get_or_init(NormalizerPatterns::new)
}

/// What a single cascade rule did with a candidate.
enum RuleOutcome {
    /// Candidate fully normalized; the cascade stops here.
    Resolved(String),
    /// Candidate rewritten; the rules that follow see the rewrite.
    Rewritten(String),
    /// Rule does not apply to this candidate.
    Pass,
}

type Rule = fn(&str) -> RuleOutcome;

/// The normalization cascade. Order is load-bearing: the first rule to
/// resolve wins, and a rewrite feeds every rule after it.
const RULES: &[Rule] = &[
    resolve_exact_iso_date,
    resolve_bare_year,
    resolve_year_month,
    resolve_fuzzy_placeholders,
    rewrite_dotted_separators,
    rewrite_month_slash_year,
    resolve_with_fallback_formats,
];

/// Normalizes one extracted candidate to the canonical UTC timestamp shape.
///
/// Enclosing brackets (the source data's fuzzy-provenance marker) and
/// surrounding whitespace are stripped first; they carry no further meaning.
/// Returns `None` for anything that cannot be confidently read as a date —
/// malformed input is expected here, not an error.
pub fn normalize(candidate: &str) -> Option<String> {
    let cleaned = candidate.trim().trim_matches(['[', ']']).trim();
    if cleaned.is_empty() {
        return None;
    }

    let mut current = cleaned.to_string();
    for rule in RULES {
        match rule(&current) {
            RuleOutcome::Resolved(timestamp) => return Some(timestamp),
            RuleOutcome::Rewritten(rewritten) => current = rewritten,
            RuleOutcome::Pass => {}
        }
    }
    None
}

/// `YYYY-MM-DD` is already canonical; the midnight suffix is appended verbatim.
fn resolve_exact_iso_date(candidate: &str) -> RuleOutcome {
    if patterns().exact_iso_date.is_match(candidate) {
        RuleOutcome::Resolved(format!("{candidate}T00:00:00Z"))
    } else {
        RuleOutcome::Pass
    }
}

/// A bare year anchors to January 1st, never to the current date.
fn resolve_bare_year(candidate: &str) -> RuleOutcome {
    if patterns().bare_year.is_match(candidate) {
        RuleOutcome::Resolved(format!("{candidate}-01-01T00:00:00Z"))
    } else {
        RuleOutcome::Pass
    }
}

/// `YYYY-MM` anchors to the first of the month.
fn resolve_year_month(candidate: &str) -> RuleOutcome {
    if patterns().year_month.is_match(candidate) {
        RuleOutcome::Resolved(format!("{candidate}-01T00:00:00Z"))
    } else {
        RuleOutcome::Pass
    }
}

/// Candidates carrying the literal `xx` placeholder. A recognizable
/// `xx/MM/YYYY` month slot keeps its month; otherwise the first 4-digit run
/// is read as the year and everything else is given up on. Placeholders
/// with neither shape are blanket-substituted with `01` and handed to the
/// remaining rules.
fn resolve_fuzzy_placeholders(candidate: &str) -> RuleOutcome {
    if !candidate.contains("xx") {
        return RuleOutcome::Pass;
    }
    if let Some(captures) = patterns().fuzzy_month_slot.captures(candidate) {
        let (month, year) = (&captures[1], &captures[2]);
        return RuleOutcome::Resolved(format!("{year}-{month}-01T00:00:00Z"));
    }
    if let Some(year) = patterns().year_run.find(candidate) {
        return RuleOutcome::Resolved(format!("{}-01-01T00:00:00Z", year.as_str()));
    }
    RuleOutcome::Rewritten(candidate.replace("xx", "01"))
}

/// Dot-separated dates are unified into the slash format before parsing.
fn rewrite_dotted_separators(candidate: &str) -> RuleOutcome {
    if candidate.contains('.') {
        RuleOutcome::Rewritten(candidate.replace('.', "/"))
    } else {
        RuleOutcome::Pass
    }
}

/// `M/YYYY` gains an explicit first-of-month day for the fallback parser.
fn rewrite_month_slash_year(candidate: &str) -> RuleOutcome {
    if patterns().month_slash_year.is_match(candidate) {
        RuleOutcome::Rewritten(format!("01/{candidate}"))
    } else {
        RuleOutcome::Pass
    }
}

/// Last resort: ordered format attempts, DMY first. Month-and-year and
/// month-name shapes default the missing day to the first of the month.
fn resolve_with_fallback_formats(candidate: &str) -> RuleOutcome {
    match parse_flexible(candidate) {
        Some(date) => RuleOutcome::Resolved(
            date.and_time(NaiveTime::MIN)
                .format(CANONICAL_TIMESTAMP_FORMAT)
                .to_string(),
        ),
        None => RuleOutcome::Pass,
    }
}

fn parse_flexible(candidate: &str) -> Option<NaiveDate> {
    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(candidate, format) {
            return Some(date);
        }
    }
    // Shapes missing the day entirely; the day defaults to the 1st.
    let first_of_month_attempts = [
        (format!("01/{candidate}"), "%d/%m/%Y"),
        (format!("{candidate}-01"), "%Y-%m-%d"),
        (format!("01 {candidate}"), "%d %B %Y"),
    ];
    for (padded, format) in first_of_month_attempts {
        if let Ok(date) = NaiveDate::parse_from_str(&padded, format) {
            return Some(date);
        }
    }
    None
}
