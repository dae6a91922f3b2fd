//! Plain decimal string rendering.
//!
//! All rendering here works on digit strings, never floats, so the exact
//! value survives to the display boundary.

use tracing::warn;

/// Render `value / 10^places` as a plain decimal string.
///
/// Works purely on the digit string, so no power of ten is ever
/// materialized and no width limit applies.
pub(crate) fn format_fixed_point(value: u128, places: u8) -> String {
    let places = places as usize;
    if places == 0 {
        return value.to_string();
    }
    let digits = value.to_string();
    if digits.len() <= places {
        format!("0.{}{}", "0".repeat(places - digits.len()), digits)
    } else {
        let (whole, frac) = digits.split_at(digits.len() - places);
        format!("{whole}.{frac}")
    }
}

/// Strip trailing fractional zeros from a plain decimal string.
///
/// Expects digits with at most one decimal point and no grouping
/// separators. Anything else is malformed intermediate output from this
/// crate itself; it is logged and returned unchanged rather than silently
/// mis-rendered.
pub fn strip_trailing_zeros(text: &str) -> String {
    let parts: Vec<&str> = text.split('.').collect();
    match parts.as_slice() {
        [_] => text.to_string(),
        [head, tail] if !head.is_empty() => {
            let trimmed = tail.trim_end_matches('0');
            if trimmed.is_empty() {
                (*head).to_string()
            } else {
                format!("{head}.{trimmed}")
            }
        }
        _ => {
            warn!(input = text, "malformed decimal passed to strip_trailing_zeros");
            text.to_string()
        }
    }
}

/// Display formatting options: the stand-in for locale number formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// Separator between integer-digit groups. Empty disables grouping.
    pub group_separator: String,
    /// Separator between integer and fraction parts.
    pub decimal_separator: String,
    /// Digits per group, counted leftward from the decimal point.
    pub group_size: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group_separator: ",".into(),
            decimal_separator: ".".into(),
            group_size: 3,
        }
    }
}

impl NumberFormat {
    /// Apply separators to a plain decimal string. Trailing fractional
    /// zeros are stripped first.
    pub(crate) fn apply(&self, text: &str) -> String {
        let stripped = strip_trailing_zeros(text);
        let (whole, frac) = match stripped.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (stripped.as_str(), None),
        };

        let grouped = if self.group_separator.is_empty() || self.group_size == 0 {
            whole.to_string()
        } else {
            group_digits(whole, &self.group_separator, self.group_size)
        };

        match frac {
            Some(frac) => format!("{grouped}{}{frac}", self.decimal_separator),
            None => grouped,
        }
    }
}

fn group_digits(whole: &str, separator: &str, size: usize) -> String {
    let len = whole.chars().count();
    let mut out = String::with_capacity(len + (len / size) * separator.len());
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}
