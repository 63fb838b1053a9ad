//! Core type definitions for the dispatch table.

use crate::error::Result;
use crate::matcher::{MatchContext, Matcher};
use crate::value::Value;

/// One row of the dispatch table.
///
/// Takes the left and right operands and decides the match for every kind of
/// right operand. Rows are plain function pointers, so selecting a row once
/// and reusing it costs nothing per call.
///
/// # Arguments
/// * `matcher` - The matcher whose configuration applies
/// * `context` - Recursion accounting for the current top-level match
/// * `left` - The operand whose kind selected this row
/// * `right` - The operand being matched against it
pub type RuleFn = fn(&Matcher, &mut MatchContext, &Value, &Value) -> Result<bool>;

#[cfg(test)]
mod tests {
    use super::*;

    fn always(
        _matcher: &Matcher,
        _context: &mut MatchContext,
        _left: &Value,
        _right: &Value,
    ) -> Result<bool> {
        Ok(true)
    }

    #[test]
    fn test_rule_fn_signature() {
        let rule: RuleFn = always;
        let matcher = Matcher::default();
        let mut context = MatchContext::new(1);
        assert!(rule(&matcher, &mut context, &Value::Null, &Value::Null).unwrap());
    }

    #[test]
    fn test_rule_fn_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<RuleFn>();
    }
}
