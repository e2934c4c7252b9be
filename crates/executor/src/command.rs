//! Command definitions and operand validation.

use std::fmt;
use std::str::FromStr;

use pizdb_core::{Error, Key, Result, Value};

/// Every command word PizDB understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Open a transaction
    Begin,
    /// Write a key
    Set,
    /// Read a key
    Get,
    /// Delete a key
    Unset,
    /// Count keys holding a value
    Counts,
    /// Undo the open transaction's changes
    Rollback,
    /// Apply the open transaction
    Commit,
    /// End the session
    End,
}

impl CommandKind {
    /// All command kinds, in help order.
    pub const ALL: [CommandKind; 8] = [
        CommandKind::Set,
        CommandKind::Get,
        CommandKind::Unset,
        CommandKind::Counts,
        CommandKind::End,
        CommandKind::Begin,
        CommandKind::Rollback,
        CommandKind::Commit,
    ];

    /// Upper-case command word.
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Begin => "BEGIN",
            CommandKind::Set => "SET",
            CommandKind::Get => "GET",
            CommandKind::Unset => "UNSET",
            CommandKind::Counts => "COUNTS",
            CommandKind::Rollback => "ROLLBACK",
            CommandKind::Commit => "COMMIT",
            CommandKind::End => "END",
        }
    }

    /// Number of operands the command takes.
    pub fn arity(&self) -> usize {
        match self {
            CommandKind::Set => 2,
            CommandKind::Get | CommandKind::Unset | CommandKind::Counts => 1,
            CommandKind::Begin | CommandKind::Rollback | CommandKind::Commit | CommandKind::End => {
                0
            }
        }
    }

    /// Usage line, e.g. `SET name value`.
    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::Set => "SET name value",
            CommandKind::Get => "GET name",
            CommandKind::Unset => "UNSET name",
            CommandKind::Counts => "COUNTS value",
            CommandKind::Begin => "BEGIN",
            CommandKind::Rollback => "ROLLBACK",
            CommandKind::Commit => "COMMIT",
            CommandKind::End => "END",
        }
    }
}

impl FromStr for CommandKind {
    type Err = Error;

    /// Case-insensitive. Unknown words are [`Error::UnknownCommand`].
    fn from_str(s: &str) -> Result<Self> {
        let upper = s.to_ascii_uppercase();
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.name() == upper)
            .ok_or_else(|| Error::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `BEGIN`
    Begin,
    /// `SET name value`
    Set {
        /// Key to write
        key: Key,
        /// Value to write
        value: Value,
    },
    /// `GET name`
    Get {
        /// Key to read
        key: Key,
    },
    /// `UNSET name`
    Unset {
        /// Key to delete
        key: Key,
    },
    /// `COUNTS value`
    Counts {
        /// Value to count
        value: Value,
    },
    /// `ROLLBACK`
    Rollback,
    /// `COMMIT`
    Commit,
    /// `END`
    End,
}

impl Command {
    /// Kind of this command
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Begin => CommandKind::Begin,
            Command::Set { .. } => CommandKind::Set,
            Command::Get { .. } => CommandKind::Get,
            Command::Unset { .. } => CommandKind::Unset,
            Command::Counts { .. } => CommandKind::Counts,
            Command::Rollback => CommandKind::Rollback,
            Command::Commit => CommandKind::Commit,
            Command::End => CommandKind::End,
        }
    }

    /// Build a command from its word and operands.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownCommand`] for an unrecognized word
    /// - [`Error::MalformedArgument`] for a missing, empty, extra or
    ///   non-integer operand
    pub fn parse<S: AsRef<str>>(name: &str, operands: &[S]) -> Result<Self> {
        let kind: CommandKind = name.parse()?;
        if let Some(extra) = operands.get(kind.arity()) {
            return Err(Error::malformed(
                kind.name(),
                format!("unexpected operand '{}', usage: {}", extra.as_ref(), kind.usage()),
            ));
        }

        Ok(match kind {
            CommandKind::Begin => Command::Begin,
            CommandKind::Rollback => Command::Rollback,
            CommandKind::Commit => Command::Commit,
            CommandKind::End => Command::End,
            CommandKind::Get => Command::Get {
                key: key_operand(kind, operands)?,
            },
            CommandKind::Unset => Command::Unset {
                key: key_operand(kind, operands)?,
            },
            CommandKind::Set => Command::Set {
                key: key_operand(kind, operands)?,
                value: int_operand(kind, operands, 1)?,
            },
            CommandKind::Counts => Command::Counts {
                value: int_operand(kind, operands, 0)?,
            },
        })
    }
}

fn key_operand<S: AsRef<str>>(kind: CommandKind, operands: &[S]) -> Result<Key> {
    match operands.first().map(|s| s.as_ref()) {
        None => Err(Error::malformed(kind.name(), "missing name")),
        Some("") => Err(Error::malformed(kind.name(), "empty name")),
        Some(key) => Ok(key.to_string()),
    }
}

fn int_operand<S: AsRef<str>>(kind: CommandKind, operands: &[S], index: usize) -> Result<Value> {
    let raw = operands
        .get(index)
        .map(|s| s.as_ref())
        .ok_or_else(|| Error::malformed(kind.name(), "missing value"))?;
    raw.trim().parse::<Value>().map_err(|_| {
        Error::malformed(kind.name(), format!("expected integer, got '{}'", raw))
    })
}
