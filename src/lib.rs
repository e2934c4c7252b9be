//! # PizDB
//!
//! In-memory key-value store with a single open transaction.
//!
//! Keys are strings, values are signed integers. A transaction buffers
//! writes and deletions over the committed map; ROLLBACK undoes them and
//! keeps the transaction open, COMMIT applies them and archives the
//! transaction's log.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pizdb::prelude::*;
//!
//! let mut db = PizDb::new();
//! db.set("a", 10)?;
//! db.begin()?;
//! db.set("a", 30)?;
//! assert_eq!(db.get("a")?, Some(30));
//! db.rollback()?;
//! assert_eq!(db.get("a")?, Some(10));
//! db.commit()?;
//! ```
//!
//! ## Layers
//!
//! - [`PizDb`] - typed methods over the executor
//! - [`Executor`] - the `execute(command)` boundary, text or typed
//! - [`Engine`] - the transactional state machine

#![warn(missing_docs)]

mod database;

pub mod prelude;

pub use database::PizDb;

pub use pizdb_executor::{
    tokenize, Archive, ArchiveConfig, Command, CommandKind, CommitSummary, CountsMode, Engine,
    EngineConfig, Error, Executor, Key, MemoryArchive, Output, Result, SharedExecutor, Value,
};

pub use pizdb_archive::{DiscardArchive, JsonLinesArchive};
pub use pizdb_core::{LogRecord, UndoEntry};
