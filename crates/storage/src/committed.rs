//! Committed key-value map
//!
//! # Design
//!
//! - FxHashMap: O(1) lookups, fast non-crypto hash
//! - No ordering guarantee on iteration
//! - Absent keys are `None`, never an error

use pizdb_core::{Key, Value};
use rustc_hash::FxHashMap;

/// The authoritative key → value map.
#[derive(Debug, Default, Clone)]
pub struct CommittedStore {
    data: FxHashMap<Key, Value>,
}

impl CommittedStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key.
    pub fn set(&mut self, key: impl Into<Key>, value: Value) {
        let key = key.into();
        tracing::trace!(key = %key, value, "store set");
        self.data.insert(key, value);
    }

    /// Get the value for a key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.data.get(key).copied()
    }

    /// Remove a key. Removing an absent key is a no-op returning `None`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let removed = self.data.remove(key);
        tracing::trace!(key, existed = removed.is_some(), "store remove");
        removed
    }

    /// Check whether a key is present.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of keys currently mapping to `target`.
    pub fn value_frequency(&self, target: Value) -> u64 {
        self.data.values().filter(|v| **v == target).count() as u64
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.data.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of keys stored
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_get_missing_is_none() {
        let store = CommittedStore::new();
        assert_eq!(store.get("missing"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = CommittedStore::new();
        store.set("a", 1);
        store.set("a", 2);
        assert_eq!(store.get("a"), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = CommittedStore::new();
        store.set("a", 1);
        assert_eq!(store.remove("b"), None);
        assert_eq!(store.remove("a"), Some(1));
        assert_eq!(store.remove("a"), None);
        assert!(!store.contains("a"));
    }

    #[test]
    fn test_value_frequency() {
        let mut store = CommittedStore::new();
        store.set("a", 10);
        store.set("b", 20);
        store.set("c", 10);
        assert_eq!(store.value_frequency(10), 2);
        assert_eq!(store.value_frequency(20), 1);
        assert_eq!(store.value_frequency(30), 0);

        store.set("a", 20);
        assert_eq!(store.value_frequency(10), 1);
        assert_eq!(store.value_frequency(20), 2);
    }

    proptest! {
        #[test]
        fn prop_frequency_matches_model(
            ops in prop::collection::vec((0u8..6, any::<bool>(), -3i64..3), 0..64),
            target in -3i64..3,
        ) {
            let mut store = CommittedStore::new();
            let mut model = std::collections::HashMap::new();
            for (k, is_set, v) in ops {
                let key = format!("k{}", k);
                if is_set {
                    store.set(key.clone(), v);
                    model.insert(key, v);
                } else {
                    store.remove(&key);
                    model.remove(&key);
                }
            }
            let expected = model.values().filter(|v| **v == target).count() as u64;
            prop_assert_eq!(store.value_frequency(target), expected);
        }
    }
}
