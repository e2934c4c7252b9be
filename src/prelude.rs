//! Convenient imports for PizDB.
//!
//! ```ignore
//! use pizdb::prelude::*;
//!
//! let mut db = PizDb::new();
//! db.set("key", 1)?;
//! ```

// Main entry point
pub use crate::database::PizDb;

// Error handling
pub use pizdb_executor::{Error, Result};

// Commands and results
pub use pizdb_executor::{Command, Output};

// Configuration
pub use pizdb_executor::{ArchiveConfig, CountsMode, EngineConfig};

// Core types
pub use pizdb_executor::{Key, Value};
