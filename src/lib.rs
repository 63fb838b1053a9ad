//! # Smartmatch
//!
//! A polymorphic, type-driven value matching operator modeled on Perl's `~~`.
//!
//! Given two values, [`smartmatch`] decides whether the right operand
//! "matches" the left one. The rule applied depends on the [`Kind`] of the
//! left operand and then on the kind of the right operand: lists test
//! containment or numeric intervals, callables act as predicates, patterns
//! test text, and everything else falls back to deep structural equality.
//!
//! The operator is deliberately asymmetric. `smartmatch(a, b)` and
//! `smartmatch(b, a)` may disagree.
//!
//! ## Quick Start
//!
//! ```rust
//! use smartmatch::{smartmatch, Pattern, Value};
//!
//! // Two-element lists are half-open intervals.
//! let range = Value::list(vec![Value::from(1), Value::from(5)]);
//! assert!(smartmatch(&range, &Value::from(3))?);
//! assert!(!smartmatch(&range, &Value::from(5))?);
//!
//! // Other lists match if any element matches.
//! let options = Value::list(vec![
//!     Value::from("a"),
//!     Value::from("b"),
//!     Value::from(Pattern::new(r"\d").unwrap()),
//! ]);
//! assert!(smartmatch(&options, &Value::from("7"))?);
//!
//! // Text and numbers compare through strict numeric parsing.
//! assert!(smartmatch(&Value::from("3.14"), &Value::from(3.14))?);
//! assert!(!smartmatch(&Value::from(0), &Value::from(-0.0))?);
//! # Ok::<(), smartmatch::MatchError>(())
//! ```
//!
//! ## Pre-bound Comparators
//!
//! ```rust
//! use smartmatch::{smartcurry, Value};
//!
//! let is_admin = smartcurry(Value::list(vec![Value::from("root"), Value::from("admin")]));
//! let users = ["alice", "root", "bob"];
//! let admins: Vec<_> = users
//!     .iter()
//!     .filter(|u| is_admin.matches(&Value::from(**u)).unwrap_or(false))
//!     .collect();
//! assert_eq!(admins, [&"root"]);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use smartmatch::{Matcher, MatcherConfig};
//!
//! let config = MatcherConfig::from_yaml_str("max_depth: 64\n")?;
//! let matcher = Matcher::with_config(config)?;
//! assert_eq!(matcher.config().max_depth, 64);
//! # Ok::<(), smartmatch::MatchError>(())
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod value;

// Configuration and errors
pub use config::MatcherConfig;
pub use error::{MatchError, Result};

// Matcher
pub use matcher::{num_eq, Curried, Matcher};

// Value model
pub use value::{
    Callable, CallableFn, Class, Comparable, Kind, List, Object, Pattern, PatternFlags, Temporal,
    Value,
};

/// Smartmatch `right` against `left` with the default configuration.
///
/// Only fails when a callable operand fails or the input nests deeper than
/// [`MatcherConfig::max_depth`].
pub fn smartmatch(left: &Value, right: &Value) -> Result<bool> {
    Matcher::default().matches(left, right)
}

/// Bind `left` into a reusable comparator with the default configuration.
pub fn smartcurry(left: Value) -> Curried {
    Matcher::default().curry(left)
}
