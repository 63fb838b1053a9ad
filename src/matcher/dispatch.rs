//! The smartmatch dispatch table.
//!
//! The left operand's [`Kind`] selects a row; each row then branches on the
//! right operand. The table is deliberately asymmetric: a list on the left
//! hands itself to a callable on the right, while a callable on the left is
//! applied to the right operand.
//!
//! | Left \ Right | List          | Callable | Pattern      | Numeric   | Textual   | Temporal  | other      |
//! |--------------|---------------|----------|--------------|-----------|-----------|-----------|------------|
//! | List         | any (rev)     | `r(l)`   | any (rev)    | interval* | any (rev) | any (rev) | any (rev)  |
//! | Callable     | `l(r)`        | `l(r)`   | `l(r)`       | `l(r)`    | `l(r)`    | `l(r)`    | `l(r)`     |
//! | Pattern      | any           | `r(l)`   | same def     | test      | test      | test      | false      |
//! | Numeric      | interval/any  | `r(l)`   | test         | num eq    | parse eq  | instant   | false      |
//! | Textual      | any           | `r(l)`   | test         | parse eq  | text eq   | date eq   | false      |
//! | Temporal     | any           | `r(l)`   | test         | instant   | date eq   | instant   | false      |
//! | other        | any           | `r(l)`   | deep eq      | deep eq   | deep eq   | deep eq   | deep eq    |
//!
//! `*` only for two-element lists; other lengths fall back to containment.

use crate::error::Result;
use crate::matcher::containment::any_match;
use crate::matcher::equality::{default_eq, num_eq, text_number_eq};
use crate::matcher::interval::is_within;
use crate::matcher::types::RuleFn;
use crate::matcher::{MatchContext, Matcher};
use crate::value::{Kind, Temporal, Value};
use tracing::trace;

/// Select the dispatch row for a left operand of `kind`.
pub(crate) fn rule_for(kind: Kind) -> RuleFn {
    match kind {
        Kind::List => list_match,
        Kind::Callable => callable_match,
        Kind::Pattern => pattern_match,
        Kind::Numeric => number_match,
        Kind::Textual => text_match,
        Kind::Temporal => temporal_match,
        Kind::Structural | Kind::Empty => default_match,
    }
}

/// Full smartmatch of `left` against `right`.
pub(crate) fn smartmatch(
    matcher: &Matcher,
    context: &mut MatchContext,
    left: &Value,
    right: &Value,
) -> Result<bool> {
    let kind = left.kind();
    trace!(left = ?kind, right = ?right.kind(), depth = context.depth(), "smartmatch dispatch");
    rule_for(kind)(matcher, context, left, right)
}

fn list_match(
    matcher: &Matcher,
    context: &mut MatchContext,
    left: &Value,
    right: &Value,
) -> Result<bool> {
    let Value::List(list) = left else {
        return default_match(matcher, context, left, right);
    };

    match right {
        Value::Callable(func) => Ok(func.call(left)?.is_truthy()),
        Value::Number(n) => match list.pair() {
            Some((lo, hi)) => Ok(is_within(matcher, *n, &lo, &hi)),
            None => any_match(matcher, context, list, right),
        },
        _ => any_match(matcher, context, list, right),
    }
}

fn callable_match(
    matcher: &Matcher,
    context: &mut MatchContext,
    left: &Value,
    right: &Value,
) -> Result<bool> {
    let Value::Callable(func) = left else {
        return default_match(matcher, context, left, right);
    };

    Ok(func.call(right)?.is_truthy())
}

fn pattern_match(
    matcher: &Matcher,
    context: &mut MatchContext,
    left: &Value,
    right: &Value,
) -> Result<bool> {
    let Value::Pattern(pattern) = left else {
        return default_match(matcher, context, left, right);
    };

    match right {
        Value::List(list) => any_match(matcher, context, list, left),
        Value::Callable(func) => Ok(func.call(left)?.is_truthy()),
        Value::Pattern(other) => Ok(pattern.same_definition(other)),
        Value::Number(_) | Value::Text(_) | Value::Date(_) => pattern.test(&right.to_string()),
        // Empty and structural operands have no text form worth matching.
        _ => Ok(false),
    }
}

fn number_match(
    matcher: &Matcher,
    context: &mut MatchContext,
    left: &Value,
    right: &Value,
) -> Result<bool> {
    let Value::Number(n) = left else {
        return default_match(matcher, context, left, right);
    };

    match right {
        Value::List(list) => match list.pair() {
            Some((lo, hi)) => Ok(is_within(matcher, *n, &lo, &hi)),
            None => any_match(matcher, context, list, left),
        },
        Value::Callable(func) => Ok(func.call(left)?.is_truthy()),
        Value::Pattern(pattern) => pattern.test(&left.to_string()),
        Value::Number(other) => Ok(num_eq(*n, *other)),
        Value::Text(text) => Ok(text_number_eq(text, *n)),
        Value::Date(date) => Ok(num_eq(*n, date.millis() as f64)),
        _ => Ok(false),
    }
}

fn text_match(
    matcher: &Matcher,
    context: &mut MatchContext,
    left: &Value,
    right: &Value,
) -> Result<bool> {
    let Value::Text(text) = left else {
        return default_match(matcher, context, left, right);
    };

    match right {
        Value::List(list) => any_match(matcher, context, list, left),
        Value::Callable(func) => Ok(func.call(left)?.is_truthy()),
        Value::Pattern(pattern) => pattern.test(text),
        Value::Text(other) => Ok(text == other),
        Value::Number(n) => Ok(text_number_eq(text, *n)),
        Value::Date(date) => Ok(Temporal::parse(text).as_ref() == Some(date)),
        _ => Ok(false),
    }
}

fn temporal_match(
    matcher: &Matcher,
    context: &mut MatchContext,
    left: &Value,
    right: &Value,
) -> Result<bool> {
    let Value::Date(date) = left else {
        return default_match(matcher, context, left, right);
    };

    match right {
        Value::List(list) => any_match(matcher, context, list, left),
        Value::Callable(func) => Ok(func.call(left)?.is_truthy()),
        Value::Pattern(pattern) => pattern.test(&left.to_string()),
        Value::Date(other) => Ok(date.millis() == other.millis()),
        Value::Number(n) => Ok(num_eq(date.millis() as f64, *n)),
        Value::Text(text) => Ok(Temporal::parse(text).as_ref() == Some(date)),
        _ => Ok(false),
    }
}

/// Row for structural and empty left operands.
fn default_match(
    matcher: &Matcher,
    context: &mut MatchContext,
    left: &Value,
    right: &Value,
) -> Result<bool> {
    match right {
        Value::List(list) => any_match(matcher, context, list, left),
        Value::Callable(func) => Ok(func.call(left)?.is_truthy()),
        _ => default_eq(context, left, right),
    }
}
