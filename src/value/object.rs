//! Structural objects, constructor identity and custom equality.

use super::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// Custom equality capability for opaque structural values.
///
/// Deep equality asks the left operand first, then the right, before any
/// kind-tag comparison.
pub trait Comparable: fmt::Debug + Send + Sync {
    fn equals(&self, other: &Value) -> bool;
}

/// Constructor identity. Two classes are the same only if they are the same handle.
#[derive(Clone)]
pub struct Class {
    name: Arc<str>,
}

impl Class {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.name)
    }
}

#[derive(Default)]
struct ObjectData {
    class: Option<Class>,
    fields: BTreeMap<String, Value>,
}

/// Keyed object with reference identity. `class: None` is a plain object.
#[derive(Clone, Default)]
pub struct Object {
    inner: Arc<RwLock<ObjectData>>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let data = ObjectData {
            class: None,
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        };
        Self {
            inner: Arc::new(RwLock::new(data)),
        }
    }

    /// An empty instance of `class`.
    pub fn instance_of(class: &Class) -> Self {
        let data = ObjectData {
            class: Some(class.clone()),
            fields: BTreeMap::new(),
        };
        Self {
            inner: Arc::new(RwLock::new(data)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ObjectData> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fields
            .insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.read().fields.get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.read().fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.read().fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().fields.is_empty()
    }

    pub fn class(&self) -> Option<Class> {
        self.read().class.clone()
    }

    /// Snapshot of the own fields.
    pub fn fields(&self) -> BTreeMap<String, Value> {
        self.read().fields.clone()
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }
}

impl fmt::Debug for Object {
    // Shallow: objects may contain themselves.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read();
        f.debug_struct("Object")
            .field("class", &data.class)
            .field("keys", &data.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}
