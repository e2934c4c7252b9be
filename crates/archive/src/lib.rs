//! Archive sinks for committed transaction logs
//!
//! On COMMIT the engine hands every record of the transaction's undo log,
//! in original order, to an [`Archive`]. Nothing reads the archive back.
//!
//! | Sink | Keeps | Use |
//! |------|-------|-----|
//! | [`MemoryArchive`] | all records in memory | default, tests |
//! | [`JsonLinesArchive`] | one JSON object per line in a writer | audit files |
//! | [`DiscardArchive`] | a count only | benchmarks |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod discard;
mod jsonl;
mod memory;

pub use discard::DiscardArchive;
pub use jsonl::JsonLinesArchive;
pub use memory::MemoryArchive;

use pizdb_core::{LogRecord, Result};

/// Write-only destination for committed log records.
pub trait Archive {
    /// Store one record.
    fn append(&mut self, record: LogRecord) -> Result<()>;

    /// Make appended records durable in the sink's medium.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Number of records accepted so far.
    fn len(&self) -> usize;

    /// Check if nothing was archived yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store records in order, then flush.
    ///
    /// Stops at the first failing record and returns its error.
    fn append_all(&mut self, records: Vec<LogRecord>) -> Result<usize> {
        let count = records.len();
        for record in records {
            self.append(record)?;
        }
        self.flush()?;
        Ok(count)
    }
}

impl<A: Archive + ?Sized> Archive for Box<A> {
    fn append(&mut self, record: LogRecord) -> Result<()> {
        (**self).append(record)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
