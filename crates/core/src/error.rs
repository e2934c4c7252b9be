//! Error types for PizDB.
//!
//! One enum covers every layer. Input errors come from the dispatcher,
//! transaction errors from the engine's state machine, and `CorruptLog`
//! is an engine bug surfaced instead of a panic.
//!
//! | Variant | Raised by | Session continues |
//! |---------|-----------|-------------------|
//! | UnknownCommand | dispatcher | yes |
//! | MalformedArgument | dispatcher | yes |
//! | AlreadyOpen | BEGIN | yes |
//! | NoActiveTransaction | ROLLBACK, COMMIT | yes |
//! | CorruptLog | ROLLBACK | yes, loudly |
//! | Archive | archive sinks | yes |
//! | Config / Io | startup | no |
//! | Internal | typed wrapper | yes, loudly |

use thiserror::Error;

/// All PizDB errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The command word is not one PizDB knows.
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),

    /// A required operand is missing, an integer operand did not parse,
    /// or too many operands were given.
    #[error("malformed argument for {command}: {reason}")]
    MalformedArgument {
        /// Upper-cased command word the operand belonged to
        command: String,
        /// What was wrong, quoting the offending input
        reason: String,
    },

    /// BEGIN while a transaction is already open.
    #[error("transaction already open")]
    AlreadyOpen,

    /// ROLLBACK or COMMIT with no open transaction.
    #[error("no active transaction")]
    NoActiveTransaction,

    /// The undo log ran out before reaching its BEGIN marker.
    #[error("corrupt undo log: {0}")]
    CorruptLog(String),

    /// An archive sink rejected a record.
    #[error("archive error: {0}")]
    Archive(String),

    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for PizDB operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a [`Error::MalformedArgument`].
    pub fn malformed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedArgument {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Canonical error code, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnknownCommand(_) => "UnknownCommand",
            Error::MalformedArgument { .. } => "MalformedArgument",
            Error::AlreadyOpen => "AlreadyOpen",
            Error::NoActiveTransaction => "NoActiveTransaction",
            Error::CorruptLog(_) => "CorruptLog",
            Error::Archive(_) => "Archive",
            Error::Config(_) => "Config",
            Error::Io(_) => "Io",
            Error::Internal(_) => "Internal",
        }
    }

    /// Check if this error was caused by bad user input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownCommand(_) | Error::MalformedArgument { .. }
        )
    }

    /// Check if this is a serious error (bug or invariant violation).
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::CorruptLog(_) | Error::Internal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_quote_offending_input() {
        assert_eq!(
            Error::UnknownCommand("FOO".into()).to_string(),
            "unknown command: 'FOO'"
        );
        assert_eq!(
            Error::malformed("COUNTS", "expected integer, got 'x'").to_string(),
            "malformed argument for COUNTS: expected integer, got 'x'"
        );
    }

    #[test]
    fn test_classification() {
        assert!(Error::UnknownCommand("X".into()).is_input_error());
        assert!(Error::malformed("SET", "missing value").is_input_error());
        assert!(!Error::AlreadyOpen.is_input_error());
        assert!(Error::CorruptLog("empty".into()).is_serious());
        assert!(!Error::NoActiveTransaction.is_serious());
        assert_eq!(Error::AlreadyOpen.code(), "AlreadyOpen");
        assert_eq!(Error::malformed("GET", "missing name").code(), "MalformedArgument");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
