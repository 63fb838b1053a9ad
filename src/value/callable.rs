//! User-supplied functions used as predicate operands.

use super::Value;
use crate::error::{MatchError, Result};
use std::fmt;
use std::sync::Arc;

/// Callable signature.
///
/// Receives one operand and returns a value judged by truthiness. Errors are
/// surfaced to the caller of the match as [`MatchError::Predicate`] with the
/// original error inside.
///
/// # Example
/// ```rust
/// use smartmatch::{CallableFn, Value};
/// use std::sync::Arc;
///
/// let is_short: Arc<CallableFn> = Arc::new(|value| {
///     Ok(Value::Bool(value.as_text().map_or(false, |s| s.len() < 4)))
/// });
/// ```
pub type CallableFn = dyn Fn(&Value) -> anyhow::Result<Value> + Send + Sync;

/// A function value with reference identity.
#[derive(Clone)]
pub struct Callable {
    func: Arc<CallableFn>,
    name: Option<Arc<str>>,
}

impl Callable {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            name: None,
        }
    }

    /// A callable returning a plain boolean.
    pub fn predicate<F>(func: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(move |value| Ok(Value::Bool(func(value))))
    }

    /// A callable returning a boolean or an error.
    pub fn fallible<F>(func: F) -> Self
    where
        F: Fn(&Value) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        Self::new(move |value| func(value).map(Value::Bool))
    }

    pub fn named(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the callable on `arg`.
    pub fn call(&self, arg: &Value) -> Result<Value> {
        (self.func)(arg).map_err(MatchError::Predicate)
    }

    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.func) as *const () as usize
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Callable({name})"),
            None => write!(f, "Callable(<anonymous>)"),
        }
    }
}
