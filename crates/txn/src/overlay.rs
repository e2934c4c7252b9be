//! Buffered writes and pending deletions of the open transaction.
//!
//! A key is never both buffered and tombstoned: writing a key clears its
//! tombstone, deleting a key drops its buffered write.
//!
//! Effective value of a key:
//!
//! ```text
//! buffered[key]            if buffered
//! absent                   else if tombstoned
//! committed[key]           otherwise
//! ```

use pizdb_core::{Key, Value};
use pizdb_storage::CommittedStore;
use rustc_hash::FxHashMap;

/// Keys written and deleted by the open transaction.
#[derive(Debug, Default, Clone)]
pub struct Overlay {
    buffered: FxHashMap<Key, Value>,
    /// Value the key had right before the deletion that created the tombstone
    tombstoned: FxHashMap<Key, Value>,
}

/// Counts of what a merge applied to the committed store.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    /// Buffered writes applied
    pub written: usize,
    /// Committed keys removed by tombstones
    pub removed: usize,
}

impl Overlay {
    /// Create an empty overlay
    pub fn new() -> Self {
        Self::default()
    }

    /// Value visible for `key` through this overlay.
    pub fn effective(&self, store: &CommittedStore, key: &str) -> Option<Value> {
        if let Some(value) = self.buffered.get(key) {
            return Some(*value);
        }
        if self.tombstoned.contains_key(key) {
            return None;
        }
        store.get(key)
    }

    /// Buffer a write, clearing any tombstone on the key.
    pub fn write(&mut self, key: impl Into<Key>, value: Value) {
        let key = key.into();
        self.tombstoned.remove(&key);
        self.buffered.insert(key, value);
    }

    /// Tombstone a key whose effective value was `old`.
    pub fn delete(&mut self, key: impl Into<Key>, old: Value) {
        let key = key.into();
        self.buffered.remove(&key);
        self.tombstoned.insert(key, old);
    }

    /// Make the effective value of `key` equal `old` again.
    ///
    /// `Some(v)` buffers `v` even when it came from the committed store, so
    /// the key stays live in the overlay. `None` drops the buffered write and
    /// hides any committed value behind a tombstone.
    pub fn restore(&mut self, store: &CommittedStore, key: &str, old: Option<Value>) {
        match old {
            Some(value) => self.write(key, value),
            None => {
                self.buffered.remove(key);
                match store.get(key) {
                    Some(committed) => {
                        self.tombstoned.insert(key.to_owned(), committed);
                    }
                    None => {
                        self.tombstoned.remove(key);
                    }
                }
            }
        }
    }

    /// Buffered writes in unspecified order.
    pub fn buffered(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.buffered.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Tombstones with their recorded values, in unspecified order.
    pub fn tombstoned(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.tombstoned.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Check whether a key has a buffered write.
    pub fn is_buffered(&self, key: &str) -> bool {
        self.buffered.contains_key(key)
    }

    /// Check whether a key is tombstoned.
    pub fn is_tombstoned(&self, key: &str) -> bool {
        self.tombstoned.contains_key(key)
    }

    /// Number of buffered writes plus tombstones
    pub fn len(&self) -> usize {
        self.buffered.len() + self.tombstoned.len()
    }

    /// Check if the overlay holds nothing
    pub fn is_empty(&self) -> bool {
        self.buffered.is_empty() && self.tombstoned.is_empty()
    }

    /// Apply every buffered write, then every tombstone, to `store`.
    ///
    /// Leaves the overlay empty.
    pub fn merge_into(&mut self, store: &mut CommittedStore) -> MergeStats {
        let mut stats = MergeStats::default();
        for (key, value) in self.buffered.drain() {
            store.set(key, value);
            stats.written += 1;
        }
        for (key, _) in self.tombstoned.drain() {
            if store.remove(&key).is_some() {
                stats.removed += 1;
            }
        }
        stats
    }
}
