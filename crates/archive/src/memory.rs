use pizdb_core::{LogRecord, Result};

use crate::Archive;

/// Keeps every archived record in memory, in archive order.
#[derive(Debug, Default, Clone)]
pub struct MemoryArchive {
    records: Vec<LogRecord>,
}

impl MemoryArchive {
    /// Create an empty archive
    pub fn new() -> Self {
        Self::default()
    }

    /// Archived records, oldest first.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Records of one transaction.
    pub fn transaction(&self, txn_id: u64) -> impl Iterator<Item = &LogRecord> + '_ {
        self.records.iter().filter(move |r| r.txn_id == txn_id)
    }
}

impl Archive for MemoryArchive {
    fn append(&mut self, record: LogRecord) -> Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
