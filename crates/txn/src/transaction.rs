//! The open transaction.
//!
//! ```text
//! begin()            log: [Begin]
//! set/unset/get      overlay updated, one entry appended each
//! rollback()         entries above Begin undone newest first, Rollback appended
//! commit()           overlay merged into the store, Commit appended,
//!                    records handed back for archiving
//! ```
//!
//! The store is borrowed per call rather than owned, so the engine keeps a
//! single committed map whether or not a transaction is open.

use pizdb_core::{Error, Key, LogRecord, Result, UndoEntry, Value};
use pizdb_storage::CommittedStore;

use crate::overlay::{MergeStats, Overlay};
use crate::undo_log::UndoLog;

/// Overlay plus undo log of the single open transaction.
#[derive(Debug, Clone)]
pub struct Transaction {
    id: u64,
    overlay: Overlay,
    log: UndoLog,
}

impl Transaction {
    /// Open a transaction. The log starts with its `Begin` marker.
    pub fn begin(id: u64) -> Self {
        let mut log = UndoLog::new(id);
        log.append(UndoEntry::Begin);
        Self {
            id,
            overlay: Overlay::new(),
            log,
        }
    }

    /// Rebuild a transaction from its parts.
    ///
    /// The log is taken as-is; a log without a `Begin` marker makes the next
    /// rollback fail with [`Error::CorruptLog`].
    pub fn resume(id: u64, overlay: Overlay, log: UndoLog) -> Self {
        Self { id, overlay, log }
    }

    /// Transaction id
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Pending writes and tombstones
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Operations since BEGIN
    pub fn log(&self) -> &UndoLog {
        &self.log
    }

    /// Read a key through the overlay and log the observation.
    pub fn get(&mut self, store: &CommittedStore, key: &str) -> Option<Value> {
        let value = self.overlay.effective(store, key);
        self.log.append(UndoEntry::Get {
            key: key.to_owned(),
            value,
        });
        value
    }

    /// Buffer a write.
    pub fn set(&mut self, store: &CommittedStore, key: impl Into<Key>, value: Value) {
        let key = key.into();
        let old = self.overlay.effective(store, &key);
        self.overlay.write(key.clone(), value);
        tracing::trace!(txn_id = self.id, key = %key, ?old, new = value, "txn set");
        self.log.append(UndoEntry::Set {
            key,
            old,
            new: value,
        });
    }

    /// Buffer a deletion. Deleting a key with no effective value only logs.
    pub fn unset(&mut self, store: &CommittedStore, key: impl Into<Key>) {
        let key = key.into();
        let old = self.overlay.effective(store, &key);
        if let Some(value) = old {
            self.overlay.delete(key.clone(), value);
        }
        tracing::trace!(txn_id = self.id, key = %key, ?old, "txn unset");
        self.log.append(UndoEntry::Unset { key, old });
    }

    /// Log a value-frequency query and its result.
    pub fn record_counts(&mut self, target: Value, count: u64) {
        self.log.append(UndoEntry::Counts { target, count });
    }

    /// Undo every entry above the `Begin` marker, newest first.
    ///
    /// The marker stays, the transaction stays open, and a `Rollback` entry
    /// is appended. Returns the number of mutations undone.
    ///
    /// # Errors
    ///
    /// [`Error::CorruptLog`] if the log runs out before a `Begin` marker.
    /// Entries popped before the failure stay undone.
    pub fn rollback(&mut self, store: &CommittedStore) -> Result<usize> {
        let mut undone = 0;
        loop {
            let at_begin = match self.log.last() {
                Some(record) => record.entry == UndoEntry::Begin,
                None => {
                    return Err(Error::CorruptLog(format!(
                        "transaction {} has no BEGIN marker",
                        self.id
                    )))
                }
            };
            if at_begin {
                break;
            }

            if let Some(record) = self.log.pop() {
                match record.entry {
                    UndoEntry::Set { key, old, .. } | UndoEntry::Unset { key, old } => {
                        self.overlay.restore(store, &key, old);
                        undone += 1;
                    }
                    // Observations and markers have nothing to undo
                    UndoEntry::Get { .. }
                    | UndoEntry::Counts { .. }
                    | UndoEntry::Rollback
                    | UndoEntry::Commit
                    | UndoEntry::Begin => {}
                }
            }
        }

        self.log.append(UndoEntry::Rollback);
        Ok(undone)
    }

    /// Merge the overlay into `store` and close the transaction.
    ///
    /// Returns the merge counts and every log record in original order,
    /// ending with the `Commit` marker.
    pub fn commit(mut self, store: &mut CommittedStore) -> (MergeStats, Vec<LogRecord>) {
        let stats = self.overlay.merge_into(store);
        self.log.append(UndoEntry::Commit);
        (stats, self.log.drain())
    }
}
