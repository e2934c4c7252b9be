//! Undo log entry types
//!
//! Every operation performed inside a transaction appends one entry:
//! - Begin: bottom marker of the transaction scope
//! - Set / Unset: mutations, carrying the effective value they replaced
//! - Get / Counts: observations, kept for audit only
//! - Rollback / Commit: markers appended after the operation completes
//!
//! Entries are wrapped in a [`LogRecord`] carrying the transaction id,
//! position and wall-clock time. Committed records move to the archive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Key, Value};

/// One undo log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UndoEntry {
    /// Start of the transaction scope. Rollback stops here.
    Begin,

    /// Buffered write.
    Set {
        /// Key written
        key: Key,
        /// Effective value before the write (`None` = absent)
        old: Option<Value>,
        /// Value written
        new: Value,
    },

    /// Buffered deletion.
    Unset {
        /// Key deleted
        key: Key,
        /// Effective value before the deletion (`None` = absent)
        old: Option<Value>,
    },

    /// Read of a key.
    Get {
        /// Key read
        key: Key,
        /// Value observed
        value: Option<Value>,
    },

    /// Value-frequency query.
    Counts {
        /// Value counted
        target: Value,
        /// Result returned
        count: u64,
    },

    /// A rollback unwound the log down to `Begin`.
    Rollback,

    /// The transaction committed.
    Commit,
}

impl UndoEntry {
    /// Short name of the entry kind.
    pub fn kind(&self) -> &'static str {
        match self {
            UndoEntry::Begin => "begin",
            UndoEntry::Set { .. } => "set",
            UndoEntry::Unset { .. } => "unset",
            UndoEntry::Get { .. } => "get",
            UndoEntry::Counts { .. } => "counts",
            UndoEntry::Rollback => "rollback",
            UndoEntry::Commit => "commit",
        }
    }
}

/// An [`UndoEntry`] with its position and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Transaction the record belongs to
    pub txn_id: u64,
    /// Log length when the record was appended
    pub seq: u64,
    /// Wall-clock time of the append
    pub at: DateTime<Utc>,
    /// The entry itself
    pub entry: UndoEntry,
}

impl LogRecord {
    /// Create a record stamped with the current time.
    pub fn now(txn_id: u64, seq: u64, entry: UndoEntry) -> Self {
        Self {
            txn_id,
            seq,
            at: Utc::now(),
            entry,
        }
    }
}
