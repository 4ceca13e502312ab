//! Text and number formatting for SVG output.

/// Escape character data for use between tags.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value for use inside double quotes.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a coordinate or length.
///
/// Values are rounded to 4 decimal places with trailing zeros trimmed, so `94.0`
/// renders as `94` and `317.272727` as `317.2727`. Negative zero renders as `0`.
#[must_use]
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded.abs() < 0.000_05 {
        return "0".to_string();
    }
    let fixed = format!("{rounded:.4}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Zero-pad an integer label to two digits (`7` → `07`, `120` → `120`).
#[must_use]
pub fn zero_pad(value: i64) -> String {
    format!("{value:02}")
}

/// Integer part of a value as shown on tick labels (`int()` semantics: truncation toward zero).
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Tick values are small, bounded chart magnitudes
pub fn tick_label(value: f64) -> String {
    (value.trunc() as i64).to_string()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
