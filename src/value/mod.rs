//! Host value model for smartmatch.
//!
//! Every operand is a [`Value`]. The matcher never inspects a value's variant
//! directly to pick a rule; it asks for the value's [`Kind`], which is total
//! and exclusive over all variants and never depends on the other operand.
//!
//! Lists and objects are shared handles. Cloning a `Value::List` clones the
//! handle, not the elements, so self-referential structures can be built by
//! pushing a list into itself.

pub mod callable;
pub mod coerce;
pub mod json;
pub mod list;
pub mod object;
pub mod pattern;
pub mod temporal;

pub use callable::{Callable, CallableFn};
pub use list::List;
pub use object::{Class, Comparable, Object};
pub use pattern::{Pattern, PatternFlags};
pub use temporal::Temporal;

use std::fmt;
use std::sync::Arc;

/// Dispatch tag of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    List,
    Callable,
    Pattern,
    Numeric,
    Textual,
    Temporal,
    /// Objects, booleans and custom comparable values.
    Structural,
    /// `null` and `undefined`. The empty string is `Textual`.
    Empty,
}

/// A runtime value that can appear on either side of a smartmatch.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(Arc<str>),
    Date(Temporal),
    Pattern(Pattern),
    List(List),
    Object(Object),
    Callable(Callable),
    Custom(Arc<dyn Comparable>),
}

impl Value {
    /// Classify this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined | Value::Null => Kind::Empty,
            Value::Bool(_) | Value::Object(_) | Value::Custom(_) => Kind::Structural,
            Value::Number(_) => Kind::Numeric,
            Value::Text(_) => Kind::Textual,
            Value::Date(_) => Kind::Temporal,
            Value::Pattern(_) => Kind::Pattern,
            Value::List(_) => Kind::List,
            Value::Callable(_) => Kind::Callable,
        }
    }

    /// Build a list value from its elements.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::List(List::from_values(items))
    }

    /// Build a plain object value from key/value pairs.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Object::from_fields(fields))
    }

    /// Wrap a boolean predicate as a callable value.
    pub fn predicate<F>(func: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Value::Callable(Callable::predicate(func))
    }

    /// Wrap a fallible function as a callable value. Its result is judged by truthiness.
    pub fn function<F>(func: F) -> Self
    where
        F: Fn(&Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Value::Callable(Callable::new(func))
    }

    /// Wrap a custom comparable value.
    pub fn custom<C>(value: C) -> Self
    where
        C: Comparable + 'static,
    {
        Value::Custom(Arc::new(value))
    }

    pub fn is_empty_marker(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Reference identity for handle-backed values.
    pub(crate) fn identity(&self) -> Option<usize> {
        match self {
            Value::List(list) => Some(list.addr()),
            Value::Object(object) => Some(object.addr()),
            Value::Callable(callable) => Some(callable.addr()),
            Value::Custom(custom) => Some(Arc::as_ptr(custom) as *const () as usize),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n:?})"),
            Value::Text(s) => write!(f, "Text({s:?})"),
            Value::Date(t) => write!(f, "Date({t:?})"),
            Value::Pattern(p) => write!(f, "Pattern({p})"),
            Value::List(list) => fmt::Debug::fmt(list, f),
            Value::Object(object) => fmt::Debug::fmt(object, f),
            Value::Callable(callable) => fmt::Debug::fmt(callable, f),
            Value::Custom(custom) => write!(f, "Custom({custom:?})"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(Arc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(Arc::from(value))
    }
}

impl From<Temporal> for Value {
    fn from(value: Temporal) -> Self {
        Value::Date(value)
    }
}

impl From<Pattern> for Value {
    fn from(value: Pattern) -> Self {
        Value::Pattern(value)
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Callable> for Value {
    fn from(value: Callable) -> Self {
        Value::Callable(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::list(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
