//! Transaction layer for PizDB
//!
//! This crate implements the single open transaction:
//! - Overlay: buffered writes and tombstones over the committed store
//! - UndoLog: every operation since BEGIN, unwound in reverse by rollback
//! - Transaction: the two glued together, created on BEGIN and consumed
//!   on COMMIT
//!
//! Rollback leaves the transaction open. The BEGIN marker stays at the
//! bottom of the log so later writes can be rolled back again.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod overlay;
pub mod transaction;
pub mod undo_log;

pub use overlay::{MergeStats, Overlay};
pub use transaction::Transaction;
pub use undo_log::UndoLog;
