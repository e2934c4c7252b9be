//! Transactional storage engine for PizDB
//!
//! [`Engine`] owns the committed store, the archive sink and the
//! transaction state. The state is an explicit two-state machine:
//!
//! ```text
//!            begin()
//!   Idle ─────────────▶ Open(Transaction)
//!    ▲                    │   │
//!    └──── commit() ──────┘   └── rollback() stays Open
//! ```
//!
//! - Idle: reads and writes hit the committed store directly
//! - Open: writes are buffered in the overlay and logged; only COMMIT
//!   touches the committed store
//!
//! The engine holds no global state. Each caller constructs its own.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod counts;
mod engine;

pub use config::{ArchiveConfig, CountsMode, EngineConfig};
pub use engine::{CommitSummary, Engine};

pub use pizdb_archive::{Archive, DiscardArchive, JsonLinesArchive, MemoryArchive};
