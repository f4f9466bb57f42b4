//! Display Formatting
//!
//! Text shown on the dashboard: summary card labels and locale-style
//! numbers. Shared by the terminal renderer and the web UI.

/// Fraction digits kept when displaying a number
const MAX_FRACTION_DIGITS: usize = 3;

/// Turn a camelCase counter key into a card label (`stakeAddressCount` -> `Stake Address Count`)
pub fn summary_label(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a number with `,` thousands separators and at most three
/// fraction digits (`1234567.891` -> `1,234,567.891`). Ties round away
/// from zero, as a browser's `toLocaleString` does.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return (if value > 0.0 { "∞" } else { "-∞" }).to_string();
    }

    let (int_part, frac_part) = round_fraction(value.abs());
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() * 4 / 3 + frac_part.len() + 2);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }

    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }

    out
}

/// Round the shortest decimal form of a non-negative finite value to
/// `MAX_FRACTION_DIGITS`, half away from zero. Returns (integer, fraction) digits.
fn round_fraction(abs: f64) -> (String, String) {
    let repr = abs.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    if frac_part.len() <= MAX_FRACTION_DIGITS {
        return (int_part.to_string(), frac_part.to_string());
    }

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(MAX_FRACTION_DIGITS))
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes()[MAX_FRACTION_DIGITS] >= b'5' {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let frac = digits.split_off(int_len);
    (
        digits.into_iter().map(char::from).collect(),
        frac.into_iter().map(char::from).collect(),
    )
}

/// Format a leaderboard point value. Empty points stay empty; anything
/// that does not read as a number shows as `NaN`.
pub fn format_point(point: &str) -> String {
    if point.is_empty() {
        return String::new();
    }

    parse_number(point)
        .map(format_number)
        .unwrap_or_else(|| "NaN".to_string())
}

/// Numeric reading of a string, following the browser's `Number(..)`:
/// blank is 0, `Infinity` is spelled out, and `0x`/`0o`/`0b` prefixes
/// select a radix. `inf` and `nan` are not numbers.
fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    if trimmed
        .chars()
        .any(|c| c.is_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
