//! List containment ("any-match").

use crate::error::Result;
use crate::matcher::dispatch::smartmatch;
use crate::matcher::{MatchContext, Matcher};
use crate::value::{List, Value};

/// True if some element `e` of `list` satisfies `smartmatch(value, e)`.
///
/// Recurses through the full dispatch table, so nested lists, patterns and
/// callables inside `list` behave as they would at top level. Stops at the
/// first match; an empty list never matches.
pub(crate) fn any_match(
    matcher: &Matcher,
    context: &mut MatchContext,
    list: &List,
    value: &Value,
) -> Result<bool> {
    context.enter()?;
    let result = first_match(matcher, context, list, value);
    context.leave();
    result
}

fn first_match(
    matcher: &Matcher,
    context: &mut MatchContext,
    list: &List,
    value: &Value,
) -> Result<bool> {
    for element in list.values() {
        if smartmatch(matcher, context, value, &element)? {
            return Ok(true);
        }
    }
    Ok(false)
}
