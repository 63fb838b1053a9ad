//! Coercions between value kinds.
//!
//! Text form follows the usual scripting-language rendering: integers print
//! without a fraction, large and tiny magnitudes use exponent notation, lists
//! join their elements with commas, and other objects print as
//! `[object Object]`.

use super::{List, Value};
use std::fmt::{self, Write};

/// Render a number the way it would appear when converted to text.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{n}");
    }

    let rendered = format!("{n:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}

/// Strictly parse a numeric literal.
///
/// Surrounding whitespace is ignored. Unsigned `0x`, `0o` and `0b` literals
/// are read in their radix. Empty or non-numeric text yields `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if let Some(n) = parse_radix_literal(text) {
        return Some(n);
    }
    match text {
        "" => None,
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ if text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')) =>
        {
            text.parse().ok()
        }
        _ => None,
    }
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    // Folded as f64 so literals wider than u64 round instead of failing.
    text[2..].chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

impl Value {
    /// Truthiness of a value returned from a callable.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Numeric form used for ordering comparisons. `NaN` when there is none.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::Text(s) if s.trim().is_empty() => 0.0,
            Value::Text(s) => parse_number(s).unwrap_or(f64::NAN),
            Value::Date(t) => t.millis() as f64,
            _ => f64::NAN,
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, list: &List, seen: &mut Vec<usize>) -> fmt::Result {
    // A list reached again while rendering itself renders as empty.
    if seen.contains(&list.addr()) {
        return Ok(());
    }
    seen.push(list.addr());
    for (index, element) in list.values().iter().enumerate() {
        if index > 0 {
            f.write_char(',')?;
        }
        match element {
            Value::Undefined | Value::Null => {}
            Value::List(inner) => write_list(f, inner, seen)?,
            other => fmt::Display::fmt(other, f)?,
        }
    }
    seen.pop();
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Text(s) => f.write_str(s),
            Value::Date(t) => write!(f, "{t}"),
            Value::Pattern(p) => write!(f, "{p}"),
            Value::List(list) => write_list(f, list, &mut Vec::new()),
            Value::Object(_) | Value::Custom(_) => f.write_str("[object Object]"),
            Value::Callable(callable) => match callable.name() {
                Some(name) => write!(f, "function {name}"),
                None => f.write_str("function"),
            },
        }
    }
}
