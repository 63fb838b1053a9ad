//! Numeric equality and the deep structural equality fallback.

use crate::error::Result;
use crate::matcher::MatchContext;
use crate::value::coerce::parse_number;
use crate::value::{List, Object, Value};
use tracing::trace;

/// Numeric equality with exact float semantics.
///
/// `NaN` equals only `NaN`, and `+0` and `-0` are different numbers.
pub fn num_eq(a: f64, b: f64) -> bool {
    if a.is_nan() {
        return b.is_nan();
    }
    if a == 0.0 {
        return b == 0.0 && a.is_sign_negative() == b.is_sign_negative();
    }
    a == b
}

/// A number equals text that is a non-empty numeric literal of the same value.
pub fn text_number_eq(text: &str, n: f64) -> bool {
    parse_number(text).map_or(false, |parsed| num_eq(n, parsed))
}

/// Deep equality of two values with a fresh cycle stack.
pub(crate) fn default_eq(context: &mut MatchContext, x: &Value, y: &Value) -> Result<bool> {
    let mut stack = Vec::new();
    deep_eq(context, x, y, &mut stack)
}

/// Recursive, cycle-tolerant structural equality.
///
/// `stack` holds the identities of the left-hand containers currently being
/// compared. Meeting one of them again is treated as equal.
pub(crate) fn deep_eq(
    context: &mut MatchContext,
    x: &Value,
    y: &Value,
    stack: &mut Vec<usize>,
) -> Result<bool> {
    if let (Some(a), Some(b)) = (x.identity(), y.identity()) {
        if a == b {
            return Ok(true);
        }
    }

    match (x, y) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => return Ok(true),
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => {
            return Ok(false)
        }
        _ => {}
    }

    if let Value::Custom(custom) = x {
        return Ok(custom.equals(y));
    }
    if let Value::Custom(custom) = y {
        return Ok(custom.equals(x));
    }

    match (x, y) {
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Number(a), Value::Number(b)) => Ok(num_eq(*a, *b)),
        (Value::Text(a), Value::Text(b)) => Ok(a == b),
        (Value::Date(a), Value::Date(b)) => Ok(a.millis() == b.millis()),
        (Value::Pattern(a), Value::Pattern(b)) => Ok(a.same_definition(b)),
        (Value::List(a), Value::List(b)) => {
            descend(context, stack, a.addr(), |context, stack| {
                list_eq(context, a, b, stack)
            })
        }
        (Value::Object(a), Value::Object(b)) => {
            descend(context, stack, a.addr(), |context, stack| {
                object_eq(context, a, b, stack)
            })
        }
        // Callables are equal only by identity, handled above.
        _ => Ok(false),
    }
}

fn descend<F>(
    context: &mut MatchContext,
    stack: &mut Vec<usize>,
    identity: usize,
    compare: F,
) -> Result<bool>
where
    F: FnOnce(&mut MatchContext, &mut Vec<usize>) -> Result<bool>,
{
    if stack.contains(&identity) {
        trace!(depth = stack.len(), "cycle detected in deep equality");
        return Ok(true);
    }

    context.enter()?;
    stack.push(identity);
    let result = compare(context, stack);
    stack.pop();
    context.leave();
    result
}

fn list_eq(
    context: &mut MatchContext,
    x: &List,
    y: &List,
    stack: &mut Vec<usize>,
) -> Result<bool> {
    let xs = x.slots();
    let ys = y.slots();
    if xs.len() != ys.len() {
        return Ok(false);
    }

    for (a, b) in xs.iter().zip(&ys) {
        let equal = match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => deep_eq(context, a, b, stack)?,
            _ => false,
        };
        if !equal {
            return Ok(false);
        }
    }
    Ok(true)
}

fn object_eq(
    context: &mut MatchContext,
    x: &Object,
    y: &Object,
    stack: &mut Vec<usize>,
) -> Result<bool> {
    if x.class() != y.class() {
        return Ok(false);
    }

    let xs = x.fields();
    let ys = y.fields();
    if xs.len() != ys.len() {
        return Ok(false);
    }

    for (key, a) in &xs {
        let Some(b) = ys.get(key) else {
            return Ok(false);
        };
        if !deep_eq(context, a, b, stack)? {
            return Ok(false);
        }
    }
    Ok(true)
}
