use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("valid number pattern")
});

/// Parses the longest numeric prefix of `raw`, ignoring leading whitespace.
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    let m = LEADING_NUMBER.find(raw)?;
    m.as_str().trim().parse::<f64>().ok()
}

/// Rounds to two decimal places, ties away from zero.
///
/// A binary value sits exactly halfway between two hundredths only when its
/// fraction is an odd number of eighths. Those are rounded up in magnitude;
/// everything else is already unambiguous for `{:.2}`.
fn two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    let tie = eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if tie {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}

/// Formats a weight to two decimal places. Input with no numeric prefix is
/// returned unchanged.
pub fn format_weight(raw: &str) -> String {
    match parse_leading_number(raw) {
        Some(value) => two_decimals(value),
        None => raw.to_string(),
    }
}
