//! Two-operand evaluation.
//!
//! Evaluation never fails loudly: an operand without a numeric prefix, or a
//! missing or unrecognized operator, produces an empty string.

use super::state::Operator;

/// Evaluate `previous <operation> current` where `operation` is a keypad symbol.
///
/// Returns the canonical decimal string of the result, or `""` when either
/// operand has no numeric prefix or `operation` is not one of `+ - * /`.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::evaluate;
///
/// assert_eq!(evaluate("2", "3", "+"), "5");
/// assert_eq!(evaluate("5", "0", "/"), "Infinity");
/// assert_eq!(evaluate("abc", "3", "+"), "");
/// assert_eq!(evaluate("2", "3", "%"), "");
/// ```
pub fn evaluate(previous: &str, current: &str, operation: &str) -> String {
    evaluate_with(previous, current, Operator::from_symbol(operation))
}

/// Typed form of [`evaluate`].
pub fn evaluate_with(previous: &str, current: &str, operation: Option<Operator>) -> String {
    let (Some(lhs), Some(rhs)) = (parse_leading_number(previous), parse_leading_number(current))
    else {
        return String::new();
    };

    operation
        .map(|op| to_canonical_string(op.apply(lhs, rhs)))
        .unwrap_or_default()
}

/// Parse the longest numeric prefix of `input`, ignoring anything after it.
///
/// Accepts leading whitespace, an optional sign, then either `Infinity` or a
/// decimal mantissa with at least one digit and an optional exponent.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let body = &s[sign_len..];

    if body.starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_len = leading_digits(body);
    let mut len = int_len;
    let mut frac_len = 0;
    if body[len..].starts_with('.') {
        frac_len = leading_digits(&body[len + 1..]);
        len += 1 + frac_len;
    }
    if int_len == 0 && frac_len == 0 {
        return None;
    }

    let tail = &body[len..];
    if tail.starts_with(['e', 'E']) {
        let exponent = &tail[1..];
        let exp_sign_len = usize::from(exponent.starts_with(['+', '-']));
        let exp_digits = leading_digits(&exponent[exp_sign_len..]);
        if exp_digits > 0 {
            len += 1 + exp_sign_len + exp_digits;
        }
    }

    s[..sign_len + len].parse().ok()
}

/// Render a float the way the display expects it.
///
/// `NaN`, `Infinity` and `-Infinity` are spelled out, negative zero prints as
/// `0`, and magnitudes at or above `1e21` or below `1e-6` use exponent form
/// with an explicit exponent sign.
pub fn to_canonical_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    value.to_string()
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
