//! Append-only log of one transaction's operations.

use pizdb_core::{LogRecord, UndoEntry};

/// Ordered records of the open transaction, oldest first.
#[derive(Debug, Clone)]
pub struct UndoLog {
    txn_id: u64,
    records: Vec<LogRecord>,
}

impl UndoLog {
    /// Create an empty log for a transaction.
    pub fn new(txn_id: u64) -> Self {
        Self {
            txn_id,
            records: Vec::new(),
        }
    }

    /// Append an entry, stamping it with the current length and time.
    ///
    /// Returns the sequence number assigned.
    pub fn append(&mut self, entry: UndoEntry) -> u64 {
        let seq = self.records.len() as u64;
        self.records.push(LogRecord::now(self.txn_id, seq, entry));
        seq
    }

    /// Newest record, if any.
    pub fn last(&self) -> Option<&LogRecord> {
        self.records.last()
    }

    /// Remove and return the newest record.
    pub fn pop(&mut self) -> Option<LogRecord> {
        self.records.pop()
    }

    /// Records oldest first.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Take every record in original order, leaving the log empty.
    pub fn drain(&mut self) -> Vec<LogRecord> {
        std::mem::take(&mut self.records)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
