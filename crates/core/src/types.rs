//! Data model aliases.

/// A key identifying a stored value. Never empty once it reaches the engine.
pub type Key = String;

/// A stored value. PizDB only stores signed integers.
pub type Value = i64;
