use serde_json::Value;

use crate::error::{Error, Result};

/// Condense free text to at most `max_sentences` period-delimited sentences.
/// Empty input degrades to a bare "." rather than failing.
pub fn condense_summary(summary: &str, max_sentences: usize) -> String {
    let sentences: Vec<&str> = summary
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(max_sentences)
        .collect();

    format!("{}.", sentences.join(". "))
}

/// Format both endpoints of a "start - end" range. A range without the
/// separator is malformed; single dates never arrive here.
pub fn format_date_range(range: &str) -> Result<String> {
    let (start, end) = range.split_once(" - ").ok_or_else(|| Error::Format {
        what: "date range",
        value: range.to_string(),
    })?;

    Ok(format!("{} - {}", format_date(start), format_date(end)))
}

/// "present" (any casing) and anything that is not a bare 4-digit year pass
/// through unchanged; a bare year becomes "01/YYYY".
pub fn format_date(date: &str) -> String {
    if date.eq_ignore_ascii_case("present") {
        return date.to_string();
    }

    let trimmed = date.trim();
    if is_four_digit_year(trimmed) {
        format!("01/{trimmed}")
    } else {
        date.to_string()
    }
}

/// Coerce a year value to a "YYYY" string; values that do not parse as a
/// 4-digit year are coerced to text unchanged.
pub fn format_year(value: &Value) -> String {
    match value {
        // A numeric year renders the same whether or not it is 4 digits.
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            let trimmed = s.trim();
            if is_four_digit_year(trimmed) {
                trimmed.to_string()
            } else {
                s.clone()
            }
        }
        other => other.to_string(),
    }
}

fn is_four_digit_year(text: &str) -> bool {
    text.len() == 4 && text.chars().all(|c| c.is_ascii_digit())
}
