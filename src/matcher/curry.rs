//! Pre-bound comparators.
//!
//! Binding classifies the left operand once and keeps the selected dispatch
//! row, so repeated matching against many right operands skips the
//! classification step. Results are identical to calling
//! [`Matcher::matches`] with the same operands.

use crate::error::Result;
use crate::matcher::dispatch::rule_for;
use crate::matcher::types::RuleFn;
use crate::matcher::Matcher;
use crate::value::{Callable, Kind, Value};
use std::fmt;

/// A comparator closed over a fixed left operand.
///
/// # Example
/// ```rust
/// use smartmatch::{smartcurry, Pattern, Value};
///
/// let has_digit = smartcurry(Pattern::new(r"\d").unwrap().into());
/// assert!(has_digit.matches(&Value::from("route 66"))?);
/// assert!(!has_digit.matches(&Value::from("route"))?);
/// # Ok::<(), smartmatch::MatchError>(())
/// ```
#[derive(Clone)]
pub struct Curried {
    left: Value,
    kind: Kind,
    rule: RuleFn,
    matcher: Matcher,
}

impl Curried {
    pub(crate) fn new(matcher: Matcher, left: Value) -> Self {
        let kind = left.kind();
        Self {
            rule: rule_for(kind),
            kind,
            left,
            matcher,
        }
    }

    pub fn left(&self) -> &Value {
        &self.left
    }

    /// Kind of the bound operand, fixed at bind time.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Match `right` against the bound left operand.
    pub fn matches(&self, right: &Value) -> Result<bool> {
        let mut context = self.matcher.context();
        (self.rule)(&self.matcher, &mut context, &self.left, right)
    }
}

impl fmt::Debug for Curried {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curried")
            .field("left", &self.left)
            .field("kind", &self.kind)
            .finish()
    }
}

/// A curried comparator is itself a predicate and can be used as an operand.
impl From<Curried> for Callable {
    fn from(curried: Curried) -> Self {
        Callable::fallible(move |right| Ok(curried.matches(right)?))
    }
}

impl From<Curried> for Value {
    fn from(curried: Curried) -> Self {
        Value::Callable(curried.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;

    #[test]
    fn test_kind_fixed_at_bind() {
        let curried = Matcher::default().curry(Value::from(3));
        assert_eq!(curried.kind(), Kind::Numeric);
        assert!(matches!(curried.left(), Value::Number(n) if *n == 3.0));
    }

    #[test]
    fn test_bound_interval() {
        let teens = Matcher::default().curry(Value::list(vec![Value::from(13), Value::from(20)]));
        assert!(teens.matches(&Value::from(13)).unwrap());
        assert!(teens.matches(&Value::from(19.5)).unwrap());
        assert!(!teens.matches(&Value::from(20)).unwrap());
    }

    #[test]
    fn test_bound_list_sees_mutation() {
        let list = crate::value::List::from_values(vec![Value::from("a")]);
        let curried = Matcher::default().curry(Value::List(list.clone()));
        assert!(!curried.matches(&Value::from("b")).unwrap());
        list.push("b");
        assert!(curried.matches(&Value::from("b")).unwrap());
    }

    #[test]
    fn test_curried_as_callable() {
        let is_seven = Matcher::default().curry(Value::from(7));
        let predicate = Value::from(is_seven);
        let matcher = Matcher::default();
        assert!(matcher.matches(&predicate, &Value::from("7")).unwrap());
        assert!(!matcher.matches(&predicate, &Value::from(8)).unwrap());
        // A list on the left hands itself to the callable.
        assert!(!matcher
            .matches(&Value::list(vec![Value::from(7)]), &predicate)
            .unwrap());
    }

    #[test]
    fn test_curried_errors_propagate() {
        let failing = Value::function(|_| anyhow::bail!("nope"));
        let curried = Matcher::default().curry(failing);
        let err = curried.matches(&Value::Null).unwrap_err();
        assert!(matches!(err, MatchError::Predicate(_)));
    }
}
