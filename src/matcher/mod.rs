//! The smartmatch operator.
//!
//! ## Architecture
//!
//! The matcher is a small set of cooperating decision functions:
//! - **Dispatch** ([`dispatch`]) - one row per left-operand [`Kind`]
//! - **Interval** ([`interval`]) - two-element lists as half-open ranges
//! - **Containment** ([`containment`]) - any element of a list matches
//! - **Equality** ([`equality`]) - numeric equality and the deep structural fallback
//! - **Curry** ([`curry`]) - a comparator with its dispatch row pre-selected
//!
//! Only the dispatch rows depend on the others; the helpers are leaves, except
//! that containment recurses back through the full table.
//!
//! ## Example Usage
//!
//! ```rust
//! use smartmatch::{Matcher, MatcherConfig, Value};
//!
//! let matcher = Matcher::with_config(MatcherConfig::strict())?;
//! let range = Value::list(vec![Value::from(1), Value::from(5)]);
//! assert!(matcher.matches(&range, &Value::from(3))?);
//! assert!(!matcher.matches(&range, &Value::from(5))?);
//! # Ok::<(), smartmatch::MatchError>(())
//! ```
//!
//! [`Kind`]: crate::value::Kind

pub mod containment;
pub mod context;
pub mod curry;
pub mod dispatch;
pub mod equality;
pub mod interval;
pub mod types;

pub use context::MatchContext;
pub use curry::Curried;
pub use equality::num_eq;
pub use types::RuleFn;

use crate::config::MatcherConfig;
use crate::error::Result;
use crate::value::Value;
use tracing::debug;

/// Smartmatch evaluator holding its configuration.
///
/// Matching never mutates the matcher; each call gets its own
/// [`MatchContext`], so one matcher can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with a validated configuration.
    pub fn with_config(config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            max_depth = config.max_depth,
            empty_string_unbounded = config.empty_string_unbounded,
            "smartmatch matcher configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub(crate) fn context(&self) -> MatchContext {
        MatchContext::new(self.config.max_depth)
    }

    /// Does `right` smartmatch `left`?
    ///
    /// Fails only when a callable operand fails or the recursion limit is hit.
    pub fn matches(&self, left: &Value, right: &Value) -> Result<bool> {
        let mut context = self.context();
        dispatch::smartmatch(self, &mut context, left, right)
    }

    /// Bind `left`, returning a reusable single-argument comparator.
    pub fn curry(&self, left: Value) -> Curried {
        Curried::new(self.clone(), left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;

    #[test]
    fn test_matcher_creation() {
        let matcher = Matcher::new();
        assert_eq!(matcher.config(), &MatcherConfig::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MatcherConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert!(matches!(
            Matcher::with_config(config),
            Err(MatchError::Config(_))
        ));
    }

    #[test]
    fn test_matches_and_curry_agree() {
        let matcher = Matcher::new();
        let left = Value::list(vec![Value::from("a"), Value::from(3.14)]);
        let curried = matcher.curry(left.clone());
        for right in [Value::from("a"), Value::from(3.14), Value::from("b"), Value::Null] {
            assert_eq!(
                matcher.matches(&left, &right).unwrap(),
                curried.matches(&right).unwrap()
            );
        }
    }

    #[test]
    fn test_matcher_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Matcher>();
        assert_send_sync::<Curried>();
    }
}
