//! Storage layer for PizDB
//!
//! Holds the committed key-value map. Transactions never write here
//! directly; only a commit (or an Idle-mode write) does.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod committed;

pub use committed::CommittedStore;
