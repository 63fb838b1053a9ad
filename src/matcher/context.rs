//! Per-call match context with recursion accounting.

use crate::error::{MatchError, Result};
use tracing::debug;

/// State for one top-level match.
///
/// A fresh context is created for every call to [`Matcher::matches`] and every
/// call of a curried comparator, so nothing is shared between invocations.
///
/// [`Matcher::matches`]: crate::Matcher::matches
#[derive(Debug)]
pub struct MatchContext {
    depth: usize,
    max_depth: usize,
}

impl MatchContext {
    pub fn new(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    /// Current recursion depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Descend one level, failing once the configured limit is reached.
    pub fn enter(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            debug!(max_depth = self.max_depth, "smartmatch recursion limit reached");
            return Err(MatchError::DepthLimitExceeded(self.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_leave() {
        let mut context = MatchContext::new(2);
        assert_eq!(context.depth(), 0);

        context.enter().unwrap();
        context.enter().unwrap();
        assert_eq!(context.depth(), 2);

        let result = context.enter();
        assert!(matches!(result, Err(MatchError::DepthLimitExceeded(2))));
        assert_eq!(context.depth(), 2);

        context.leave();
        context.leave();
        context.leave();
        assert_eq!(context.depth(), 0);
    }
}
