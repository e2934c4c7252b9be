use pizdb_core::{LogRecord, Result};

use crate::Archive;

/// Drops records, counting them.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardArchive {
    count: usize,
}

impl DiscardArchive {
    /// Create a discarding sink
    pub fn new() -> Self {
        Self::default()
    }
}

impl Archive for DiscardArchive {
    fn append(&mut self, _record: LogRecord) -> Result<()> {
        self.count += 1;
        Ok(())
    }

    fn len(&self) -> usize {
        self.count
    }
}
