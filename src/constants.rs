/// Shape every normalized date is rendered to (UTC, no offset).
pub const CANONICAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format attempts for candidates the special-case rules pass through.
/// Day-month-year comes first: slashed dates in this corpus read DMY.
pub const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%d %B %Y",
    "%d %b %Y",
];
