//! JSON-lines archive sink
//!
//! Each record becomes one line:
//!
//! ```text
//! {"txn_id":1,"seq":0,"at":"2024-01-01T00:00:00Z","entry":{"type":"begin"}}
//! {"txn_id":1,"seq":1,"at":"...","entry":{"type":"set","key":"a","old":null,"new":5}}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use pizdb_core::{Error, LogRecord, Result};

use crate::Archive;

/// Writes records as newline-delimited JSON.
#[derive(Debug)]
pub struct JsonLinesArchive<W: Write> {
    writer: W,
    written: usize,
}

impl JsonLinesArchive<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing::debug!(path = %path.display(), "opened archive file");
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonLinesArchive<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Unwrap the writer. Buffered bytes are not flushed.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Archive for JsonLinesArchive<W> {
    fn append(&mut self, record: LogRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &record)
            .map_err(|e| Error::Archive(format!("encode record {}: {}", record.seq, e)))?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn len(&self) -> usize {
        self.written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizdb_core::UndoEntry;
    use std::io::{BufRead, BufReader};
    use tempfile::TempDir;

    fn batch(txn_id: u64) -> Vec<LogRecord> {
        vec![
            LogRecord::now(txn_id, 0, UndoEntry::Begin),
            LogRecord::now(
                txn_id,
                1,
                UndoEntry::Set {
                    key: "a".into(),
                    old: None,
                    new: 5,
                },
            ),
            LogRecord::now(txn_id, 2, UndoEntry::Commit),
        ]
    }

    #[test]
    fn test_one_line_per_record() {
        let mut archive = JsonLinesArchive::new(Vec::new());
        archive.append_all(batch(1)).unwrap();
        assert_eq!(archive.len(), 3);

        let bytes = archive.into_inner();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let set: LogRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(
            set.entry,
            UndoEntry::Set {
                key: "a".into(),
                old: None,
                new: 5
            }
        );
    }

    #[test]
    fn test_file_is_appended_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("archive.jsonl");

        let mut first = JsonLinesArchive::create(&path).unwrap();
        first.append_all(batch(1)).unwrap();
        drop(first);

        let mut second = JsonLinesArchive::create(&path).unwrap();
        second.append_all(batch(2)).unwrap();
        drop(second);

        let reader = BufReader::new(File::open(&path).unwrap());
        let records: Vec<LogRecord> = reader
            .lines()
            .map(|line| serde_json::from_str(&line.unwrap()).unwrap())
            .collect();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].txn_id, 1);
        assert_eq!(records[5].txn_id, 2);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_failure_is_reported() {
        let mut archive = JsonLinesArchive::new(FailingWriter);
        let err = archive.append_all(batch(1)).unwrap_err();
        assert!(matches!(err, Error::Archive(_) | Error::Io(_)));
        assert_eq!(archive.len(), 0);
    }
}
