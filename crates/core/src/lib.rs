//! Core types for PizDB
//!
//! This crate defines the pieces every other layer shares:
//! - [`Key`] and [`Value`]: the data model
//! - [`Error`] and [`Result`]: the error taxonomy
//! - [`UndoEntry`] and [`LogRecord`]: what the undo log holds and what
//!   the archive receives on commit

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod types;

pub use error::{Error, Result};
pub use record::{LogRecord, UndoEntry};
pub use types::{Key, Value};
