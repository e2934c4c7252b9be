use std::fmt;

use pizdb_core::Value;
use serde::Serialize;

/// Result of a successfully executed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Output {
    /// Nothing to report (SET, UNSET, BEGIN, ROLLBACK, COMMIT, END)
    Unit,
    /// GET result; `None` prints as `NULL`
    Value(Option<Value>),
    /// COUNTS result
    Count(u64),
}

impl Output {
    /// Check if there is nothing to print
    pub fn is_unit(&self) -> bool {
        matches!(self, Output::Unit)
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Unit => Ok(()),
            Output::Value(Some(v)) => write!(f, "{}", v),
            Output::Value(None) => f.write_str("NULL"),
            Output::Count(n) => write!(f, "{}", n),
        }
    }
}
