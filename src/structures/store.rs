//! Keyed store: a mapping from an opaque key to an owned value.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Key to value mapping with insert-or-overwrite semantics.
///
/// Used for resource name to lock record, user to command history, and
/// user to conversation state.
#[derive(Debug, Clone)]
pub struct KeyedStore<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for KeyedStore<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> KeyedStore<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get_mut(key)
    }

    /// Insert `value` under `key`, overwriting any previous value.
    pub fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Remove `key`. Returns `true` if an entry was removed.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.remove(key).is_some()
    }

    /// All keys, in no defined order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Return the value under `key`, inserting `make()` first if absent.
    ///
    /// This is the single insert-or-fetch step behind every lazy
    /// `get_or_create` in the crate.
    pub fn get_or_insert_with<F>(&mut self, key: K, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.entries.entry(key).or_insert_with(make)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_set_and_get() {
        let mut store = KeyedStore::new();
        store.set("history".to_string(), 1);

        assert_eq!(store.get("history"), Some(&1));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = KeyedStore::new();
        store.set(7u64, "first");
        store.set(7u64, "second");

        assert_eq!(store.get(&7), Some(&"second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_reports_removal() {
        let mut store = KeyedStore::new();
        store.set(1u64, ());

        assert!(store.delete(&1));
        assert!(!store.delete(&1));
        assert!(store.is_empty());
    }

    #[test]
    fn test_keys_lists_every_entry() {
        let mut store = KeyedStore::new();
        store.set("a", 1);
        store.set("b", 2);
        store.set("c", 3);

        let keys: HashSet<_> = store.keys().copied().collect();
        assert_eq!(keys, HashSet::from(["a", "b", "c"]));
    }

    #[test]
    fn test_get_or_insert_with_creates_once() {
        let mut store: KeyedStore<&str, Vec<u32>> = KeyedStore::new();
        store.get_or_insert_with("x", Vec::new).push(1);
        store.get_or_insert_with("x", || vec![99]).push(2);

        assert_eq!(store.get("x"), Some(&vec![1, 2]));
        assert_eq!(store.len(), 1);
    }
}
