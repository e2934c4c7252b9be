//! The command executor.

use pizdb_core::Result;
use pizdb_engine::{Archive, Engine, MemoryArchive};

use crate::command::Command;
use crate::output::Output;
use crate::tokenize::tokenize;

/// Runs commands against an engine it owns.
///
/// The executor is stateless apart from the engine and the session flag:
/// every call either returns an [`Output`] or an error, and errors leave
/// the session running.
#[derive(Debug)]
pub struct Executor<A: Archive = MemoryArchive> {
    engine: Engine<A>,
    running: bool,
}

impl Executor<MemoryArchive> {
    /// Create an executor over a fresh in-memory engine.
    pub fn new() -> Self {
        Self::with_engine(Engine::new())
    }
}

impl Default for Executor<MemoryArchive> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Archive> Executor<A> {
    /// Create an executor over `engine`.
    pub fn with_engine(engine: Engine<A>) -> Self {
        Self {
            engine,
            running: true,
        }
    }

    /// Execute a validated command.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        tracing::trace!(command = %cmd.kind(), "execute");
        Ok(match cmd {
            Command::Begin => {
                self.engine.begin()?;
                Output::Unit
            }
            Command::Set { key, value } => {
                self.engine.set(key, value);
                Output::Unit
            }
            Command::Get { key } => Output::Value(self.engine.get(&key)),
            Command::Unset { key } => {
                self.engine.unset(&key);
                Output::Unit
            }
            Command::Counts { value } => Output::Count(self.engine.counts(value)),
            Command::Rollback => {
                self.engine.rollback()?;
                Output::Unit
            }
            Command::Commit => {
                self.engine.commit()?;
                Output::Unit
            }
            Command::End => {
                self.running = false;
                Output::Unit
            }
        })
    }

    /// Parse and execute a command word with its operands.
    pub fn execute_raw<S: AsRef<str>>(&mut self, name: &str, operands: &[S]) -> Result<Output> {
        let cmd = Command::parse(name, operands)?;
        self.execute(cmd)
    }

    /// Tokenize, parse and execute one input line.
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Output>> {
        match tokenize(line) {
            Some(tokens) => self
                .execute_raw(&tokens.command, tokens.operands.as_slice())
                .map(Some),
            None => Ok(None),
        }
    }

    /// False once END has been executed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The engine
    pub fn engine(&self) -> &Engine<A> {
        &self.engine
    }

}
