//! The engine state machine.

use pizdb_archive::{Archive, MemoryArchive};
use pizdb_core::{Error, Key, Result, Value};
use pizdb_storage::CommittedStore;
use pizdb_txn::Transaction;

use crate::config::{CountsMode, EngineConfig};
use crate::counts;

/// Transaction state. Nesting is not representable.
#[derive(Debug)]
enum TxnState {
    Idle,
    Open(Transaction),
}

/// What a COMMIT applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitSummary {
    /// Committed transaction
    pub txn_id: u64,
    /// Buffered writes applied to the store
    pub written: usize,
    /// Keys removed from the store
    pub removed: usize,
    /// Records accepted by the archive (0 if the sink failed)
    pub archived: usize,
}

/// In-memory key-value store with a single optional open transaction.
///
/// # Example
///
/// ```ignore
/// let mut engine = Engine::new();
/// engine.set("a", 10);
/// engine.begin()?;
/// engine.set("a", 30);
/// assert_eq!(engine.get("a"), Some(30));
/// engine.rollback()?;
/// assert_eq!(engine.get("a"), Some(10));
/// engine.commit()?;
/// ```
///
/// # Thread Safety
///
/// None internally. Callers sharing an engine must serialize whole
/// operations, e.g. through `SharedExecutor` in the executor crate.
#[derive(Debug)]
pub struct Engine<A: Archive = MemoryArchive> {
    store: CommittedStore,
    state: TxnState,
    archive: A,
    counts_mode: CountsMode,
    /// Id handed to the next BEGIN
    next_txn_id: u64,
}

impl Engine<MemoryArchive> {
    /// Create an engine archiving into memory.
    pub fn new() -> Self {
        Self::with_archive(MemoryArchive::new())
    }
}

impl Default for Engine<MemoryArchive> {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine<Box<dyn Archive + Send>> {
    /// Create an engine from a configuration, opening its archive sink.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let archive = config.archive.open()?;
        Ok(Self::with_archive(archive).with_counts_mode(config.counts_mode))
    }
}

impl<A: Archive> Engine<A> {
    /// Create an engine archiving into `archive`.
    pub fn with_archive(archive: A) -> Self {
        Self {
            store: CommittedStore::new(),
            state: TxnState::Idle,
            archive,
            counts_mode: CountsMode::default(),
            next_txn_id: 1,
        }
    }

    /// Set the COUNTS mode
    pub fn with_counts_mode(mut self, mode: CountsMode) -> Self {
        self.counts_mode = mode;
        self
    }

    // =========================================================================
    // Transaction control
    // =========================================================================

    /// Open a transaction. Returns its id.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyOpen`] if a transaction is open.
    pub fn begin(&mut self) -> Result<u64> {
        if let TxnState::Open(txn) = &self.state {
            tracing::debug!(txn_id = txn.id(), "begin rejected, transaction already open");
            return Err(Error::AlreadyOpen);
        }
        let txn_id = self.next_txn_id;
        self.next_txn_id += 1;
        self.state = TxnState::Open(Transaction::begin(txn_id));
        tracing::debug!(txn_id, "transaction opened");
        Ok(txn_id)
    }

    /// Undo everything since BEGIN. The transaction stays open.
    ///
    /// Returns the number of writes and deletions undone.
    ///
    /// # Errors
    ///
    /// - [`Error::NoActiveTransaction`] when Idle
    /// - [`Error::CorruptLog`] if the log has no BEGIN marker. The
    ///   transaction is discarded and the engine returns to Idle.
    pub fn rollback(&mut self) -> Result<usize> {
        let TxnState::Open(txn) = &mut self.state else {
            return Err(Error::NoActiveTransaction);
        };
        match txn.rollback(&self.store) {
            Ok(undone) => {
                tracing::debug!(txn_id = txn.id(), undone, "transaction rolled back");
                Ok(undone)
            }
            Err(e) => {
                tracing::error!(
                    txn_id = txn.id(),
                    error = %e,
                    "rollback aborted, discarding transaction"
                );
                self.state = TxnState::Idle;
                Err(e)
            }
        }
    }

    /// Merge the open transaction into the committed store and archive
    /// its log. Returns to Idle.
    ///
    /// An archive failure is logged and does not undo the merge: the
    /// committed store is authoritative.
    ///
    /// # Errors
    ///
    /// [`Error::NoActiveTransaction`] when Idle.
    pub fn commit(&mut self) -> Result<CommitSummary> {
        let txn = match std::mem::replace(&mut self.state, TxnState::Idle) {
            TxnState::Open(txn) => txn,
            TxnState::Idle => return Err(Error::NoActiveTransaction),
        };
        let txn_id = txn.id();
        let (stats, records) = txn.commit(&mut self.store);

        let archived = match self.archive.append_all(records) {
            Ok(n) => n,
            Err(e) => {
                tracing::error!(
                    txn_id,
                    error = %e,
                    "archive failed after commit, records lost"
                );
                0
            }
        };

        tracing::debug!(
            txn_id,
            written = stats.written,
            removed = stats.removed,
            archived,
            "transaction committed"
        );
        Ok(CommitSummary {
            txn_id,
            written: stats.written,
            removed: stats.removed,
            archived,
        })
    }

    // =========================================================================
    // Data operations
    // =========================================================================

    /// Write a key. Buffered when a transaction is open.
    pub fn set(&mut self, key: impl Into<Key>, value: Value) {
        match &mut self.state {
            TxnState::Idle => self.store.set(key, value),
            TxnState::Open(txn) => txn.set(&self.store, key, value),
        }
    }

    /// Read a key from the active view.
    ///
    /// Takes `&mut self` because reads inside a transaction are logged.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        match &mut self.state {
            TxnState::Idle => self.store.get(key),
            TxnState::Open(txn) => txn.get(&self.store, key),
        }
    }

    /// Delete a key. Deleting an absent key is a no-op.
    pub fn unset(&mut self, key: &str) {
        match &mut self.state {
            TxnState::Idle => {
                self.store.remove(key);
            }
            TxnState::Open(txn) => txn.unset(&self.store, key),
        }
    }

    /// Number of keys whose value in the active view is `target`.
    pub fn counts(&mut self, target: Value) -> u64 {
        match &mut self.state {
            TxnState::Idle => counts::committed(&self.store, target),
            TxnState::Open(txn) => {
                let count =
                    counts::with_overlay(&self.store, txn.overlay(), target, self.counts_mode);
                txn.record_counts(target, count);
                count
            }
        }
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Check whether a transaction is open
    pub fn in_transaction(&self) -> bool {
        matches!(self.state, TxnState::Open(_))
    }

    /// Id of the open transaction
    pub fn txn_id(&self) -> Option<u64> {
        match &self.state {
            TxnState::Open(txn) => Some(txn.id()),
            TxnState::Idle => None,
        }
    }

    /// Records in the open transaction's undo log (0 when Idle)
    pub fn pending_log_len(&self) -> usize {
        match &self.state {
            TxnState::Open(txn) => txn.log().len(),
            TxnState::Idle => 0,
        }
    }

    /// The committed store
    pub fn store(&self) -> &CommittedStore {
        &self.store
    }

    /// Number of committed keys
    pub fn committed_len(&self) -> usize {
        self.store.len()
    }

    /// The archive sink
    pub fn archive(&self) -> &A {
        &self.archive
    }

    /// Active COUNTS mode
    pub fn counts_mode(&self) -> CountsMode {
        self.counts_mode
    }
}
