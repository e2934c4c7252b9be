//! Command execution layer for PizDB
//!
//! The single entry point into the engine:
//!
//! ```text
//! line ──tokenize──▶ (word, operands) ──Command::parse──▶ Command ──Executor::execute──▶ Output
//! ```
//!
//! Commands are a closed enum, so adding one is a compile error until every
//! match handles it. Input errors ([`Error::UnknownCommand`],
//! [`Error::MalformedArgument`]) never end the session; only END does, and
//! it is reported through [`Executor::is_running`], not through an output.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
mod executor;
mod output;
mod shared;
mod tokenize;

pub use command::{Command, CommandKind};
pub use executor::Executor;
pub use output::Output;
pub use shared::SharedExecutor;
pub use tokenize::{tokenize, Operands, Tokens};

pub use pizdb_core::{Error, Key, Result, Value};
pub use pizdb_engine::{
    Archive, ArchiveConfig, CommitSummary, CountsMode, Engine, EngineConfig, MemoryArchive,
};
