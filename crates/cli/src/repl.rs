//! REPL and pipe mode.
//!
//! Both modes feed lines to the same handler: results print one per line,
//! errors print and the session goes on, END or end of input stops it.

use std::io::{self, BufRead, Write};

use pizdb_executor::{Archive, Executor};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::format::{format_error, format_output, OutputMode};

const PROMPT: &str = "pizdb> ";

/// Whether to keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Execute one line and write what it produced to `out`.
pub fn handle_line<A: Archive, W: Write>(
    executor: &mut Executor<A>,
    line: &str,
    mode: OutputMode,
    out: &mut W,
) -> io::Result<Flow> {
    match executor.execute_line(line) {
        Ok(Some(output)) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                writeln!(out, "{}", formatted)?;
            }
        }
        Ok(None) => {}
        Err(e) => {
            if e.is_serious() {
                tracing::error!(error = %e, line, "engine invariant violated");
            } else if e.is_input_error() {
                tracing::debug!(error = %e, line, "rejected input");
            }
            writeln!(out, "{}", format_error(&e, mode))?;
        }
    }

    Ok(if executor.is_running() {
        Flow::Continue
    } else {
        Flow::Stop
    })
}

/// Interactive prompt with line editing and history.
pub fn run_repl<A: Archive>(executor: &mut Executor<A>, mode: OutputMode) -> i32 {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("(error) failed to start line editor: {}", e);
            return 1;
        }
    };
    let stdout = io::stdout();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                match handle_line(executor, &line, mode, &mut stdout.lock()) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Stop) => return 0,
                    Err(e) => {
                        eprintln!("(error) {}", e);
                        return 1;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        }
    }
}

/// Read commands from `input` until END or end of input.
///
/// Invalid UTF-8 is replaced with U+FFFD so one bad line cannot end the
/// session.
pub fn run_pipe<A: Archive, R: BufRead, W: Write>(
    executor: &mut Executor<A>,
    mode: OutputMode,
    mut input: R,
    out: &mut W,
) -> i32 {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("(error) failed to read input: {}", e);
                return 1;
            }
        }
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);
        match handle_line(executor, &line, mode, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        }
    }
    0
}
