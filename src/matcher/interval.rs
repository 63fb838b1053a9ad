//! Two-element lists as half-open numeric intervals.
//!
//! `[lo, hi]` accepts `lo <= value < hi`. A null or undefined endpoint (and,
//! by default, an empty string) leaves that side unbounded.

use crate::matcher::Matcher;
use crate::value::Value;

fn is_unbounded(matcher: &Matcher, bound: &Value) -> bool {
    match bound {
        Value::Undefined | Value::Null => true,
        Value::Text(s) => s.is_empty() && matcher.config().empty_string_unbounded,
        _ => false,
    }
}

/// Left-closed.
fn at_least(matcher: &Matcher, value: f64, bound: &Value) -> bool {
    is_unbounded(matcher, bound) || value >= bound.to_number()
}

/// Right-open.
fn below(matcher: &Matcher, value: f64, bound: &Value) -> bool {
    is_unbounded(matcher, bound) || value < bound.to_number()
}

/// Whether `value` lies within `[lo, hi)`.
///
/// Callers take both bounds from one [`List::pair`](crate::value::List::pair)
/// snapshot.
pub(crate) fn is_within(matcher: &Matcher, value: f64, lo: &Value, hi: &Value) -> bool {
    at_least(matcher, value, lo) && below(matcher, value, hi)
}
