use std::sync::LazyLock;

/// Digits with at most one decimal point. Empty input is allowed so a field can be cleared.
static NUMERIC_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\d*\.?\d*$").unwrap());

/// Whether `text` is acceptable input for a numeric form field.
pub(crate) fn is_numeric_input(text: &str) -> bool {
    NUMERIC_RE.is_match(text)
}

/// Parse field text, treating blank input, a lone `.` and values beyond f64 range
/// as "no value".
pub(crate) fn parse_field(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() || text == "." {
        return None;
    }
    text.parse().ok().filter(|v: &f64| v.is_finite())
}
