//! Number formatting utilities for human-readable display.
//!
//! Handles f64 share counts with trailing-zero trimming and comma separators.
//! For `Decimal` currency formatting, use the `decimal` sibling module.

/// Trims trailing zeros, adds thousands separators.
pub fn display_formatted_string(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.as_str()),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let grouped = group_thousands(integer);

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Inserts a comma every three digits from the right of an unsigned integer string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a share count with up to two decimal places.
///
/// Share counts from a book walk carry float noise (`14.999999999`); two
/// places is the precision order sizes are quoted in.
pub fn display_shares(shares: f64) -> String {
    if !shares.is_finite() {
        return "0".to_string();
    }
    display_formatted_string(format!("{:.2}", shares))
}
