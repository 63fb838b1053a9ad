//! Shared, growable list handle.

use super::Value;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// A list of values with reference identity.
///
/// Slots may be holes. A hole reads as [`Value::Undefined`] but deep equality
/// tells it apart from an explicit `Undefined` element.
#[derive(Clone, Default)]
pub struct List {
    slots: Arc<RwLock<Vec<Option<Value>>>>,
}

impl List {
    /// Largest length a list can grow to through [`List::set`].
    pub const MAX_LEN: usize = u32::MAX as usize;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::with_holes(values.into_iter().map(Some))
    }

    /// Build a list where `None` marks a hole.
    pub fn with_holes<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<Value>>,
    {
        Self {
            slots: Arc::new(RwLock::new(slots.into_iter().collect())),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Option<Value>>> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Element at `index`, with holes and out-of-range reads as `Undefined`.
    pub fn get(&self, index: usize) -> Value {
        self.read()
            .get(index)
            .cloned()
            .flatten()
            .unwrap_or(Value::Undefined)
    }

    /// Snapshot of the elements, holes read as `Undefined`.
    pub fn values(&self) -> Vec<Value> {
        self.read()
            .iter()
            .map(|slot| slot.clone().unwrap_or(Value::Undefined))
            .collect()
    }

    /// Both elements of a two-element list, read under one lock.
    ///
    /// `None` for any other length, so a concurrent resize can never yield a
    /// pair with a missing side.
    pub fn pair(&self) -> Option<(Value, Value)> {
        match self.read().as_slice() {
            [lo, hi] => Some((
                lo.clone().unwrap_or(Value::Undefined),
                hi.clone().unwrap_or(Value::Undefined),
            )),
            _ => None,
        }
    }

    /// Snapshot of the raw slots, holes included.
    pub fn slots(&self) -> Vec<Option<Value>> {
        self.read().clone()
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Some(value.into()));
    }

    pub fn push_hole(&self) {
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(None);
    }

    /// Store `value` at `index`, padding with holes when writing past the end.
    ///
    /// Returns `false` and leaves the list untouched when `index` is not
    /// below [`List::MAX_LEN`].
    pub fn set(&self, index: usize, value: impl Into<Value>) -> bool {
        if index >= Self::MAX_LEN {
            return false;
        }
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        if index >= slots.len() {
            slots.resize(index + 1, None);
        }
        slots[index] = Some(value.into());
        true
    }

    pub fn ptr_eq(&self, other: &List) -> bool {
        Arc::ptr_eq(&self.slots, &other.slots)
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.slots) as *const () as usize
    }
}

impl fmt::Debug for List {
    // Shallow: lists may contain themselves.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List").field("len", &self.len()).finish()
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::from_values(iter.into_iter().map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holes_read_as_undefined() {
        let list = List::with_holes(vec![Some(Value::from(1)), None]);
        assert_eq!(list.len(), 2);
        assert!(matches!(list.get(1), Value::Undefined));
        assert!(matches!(list.get(9), Value::Undefined));
        assert!(list.slots()[1].is_none());
    }

    #[test]
    fn test_set_pads_with_holes() {
        let list = List::new();
        assert!(list.set(2, "c"));
        assert_eq!(list.len(), 3);
        assert_eq!(list.slots().iter().filter(|slot| slot.is_none()).count(), 2);
        assert_eq!(list.get(2).as_text(), Some("c"));
    }

    #[test]
    fn test_set_out_of_range() {
        let list = List::from_values(vec![Value::from(1)]);
        assert!(!list.set(usize::MAX, "x"));
        assert!(!list.set(List::MAX_LEN, "x"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).to_number(), 1.0);
    }

    #[test]
    fn test_pair_reads_one_snapshot() {
        let list = List::with_holes(vec![Some(Value::from(1)), None]);
        let (lo, hi) = list.pair().unwrap();
        assert_eq!(lo.to_number(), 1.0);
        assert!(matches!(hi, Value::Undefined));

        list.push(3);
        assert!(list.pair().is_none());
        assert!(List::new().pair().is_none());
    }

    #[test]
    fn test_pair_under_concurrent_resize() {
        let list = List::from_values(vec![Value::from(1), Value::from(5)]);
        let writer = {
            let list = list.clone();
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    list.push(9);
                    list.slots.write().unwrap().truncate(2);
                }
            })
        };
        for _ in 0..1000 {
            if let Some((lo, hi)) = list.pair() {
                assert_eq!((lo.to_number(), hi.to_number()), (1.0, 5.0));
            }
        }
        writer.join().unwrap();
    }

    #[test]
    fn test_self_reference() {
        let list = List::new();
        list.push(Value::List(list.clone()));
        let inner = list.get(0);
        assert!(inner.as_list().unwrap().ptr_eq(&list));
        assert_eq!(format!("{list:?}"), "List { len: 1 }");
    }

    #[test]
    fn test_collect() {
        let list: List = vec![1, 2, 3].into_iter().collect();
        assert_eq!(list.values().len(), 3);
        assert!(!list.is_empty());
    }
}
