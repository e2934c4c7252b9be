//! Output formatting for human and JSON modes.

use pizdb_executor::{Error, Output};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// `10`, `NULL`, `(error) ...`
    Human,
    /// One JSON object per line
    Json,
}

/// Format a command result. Empty for commands with nothing to report.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    if output.is_unit() {
        return String::new();
    }
    match mode {
        OutputMode::Human => output.to_string(),
        OutputMode::Json => serde_json::to_string(output).unwrap_or_else(|e| {
            serde_json::json!({ "error": "Internal", "message": e.to_string() }).to_string()
        }),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("(error) {}", err),
        OutputMode::Json => {
            serde_json::json!({ "error": err.code(), "message": err.to_string() }).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human() {
        assert_eq!(format_output(&Output::Value(None), OutputMode::Human), "NULL");
        assert_eq!(format_output(&Output::Count(3), OutputMode::Human), "3");
        assert_eq!(format_output(&Output::Unit, OutputMode::Human), "");
        assert_eq!(
            format_error(&Error::NoActiveTransaction, OutputMode::Human),
            "(error) no active transaction"
        );
    }

    #[test]
    fn test_json() {
        assert_eq!(
            format_output(&Output::Value(Some(7)), OutputMode::Json),
            r#"{"type":"value","value":7}"#
        );
        assert_eq!(format_output(&Output::Unit, OutputMode::Json), "");

        let line = format_error(&Error::UnknownCommand("FOO".into()), OutputMode::Json);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["error"], "UnknownCommand");
        assert_eq!(parsed["message"], "unknown command: 'FOO'");
    }
}
