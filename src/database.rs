//! High-level typed wrapper for the Executor.
//!
//! Each method:
//!
//! 1. Creates the appropriate [`Command`]
//! 2. Executes it via the [`Executor`]
//! 3. Extracts and returns the typed result

use pizdb_executor::{
    Archive, Command, Engine, EngineConfig, Error, Executor, MemoryArchive, Output, Result, Value,
};

/// Typed handle to a PizDB instance.
///
/// Each `PizDb` owns its own engine; two handles never share state.
#[derive(Debug)]
pub struct PizDb<A: Archive = MemoryArchive> {
    executor: Executor<A>,
}

impl PizDb<MemoryArchive> {
    /// Create an instance archiving into memory.
    pub fn new() -> Self {
        Self::from_executor(Executor::new())
    }
}

impl Default for PizDb<MemoryArchive> {
    fn default() -> Self {
        Self::new()
    }
}

impl PizDb<Box<dyn Archive + Send>> {
    /// Create an instance from a configuration.
    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        Ok(Self::from_executor(Executor::with_engine(
            Engine::from_config(config)?,
        )))
    }
}

impl<A: Archive> PizDb<A> {
    /// Wrap an existing executor.
    pub fn from_executor(executor: Executor<A>) -> Self {
        Self { executor }
    }

    /// Get the underlying executor.
    pub fn executor(&self) -> &Executor<A> {
        &self.executor
    }

    /// Get the underlying engine.
    pub fn engine(&self) -> &Engine<A> {
        self.executor.engine()
    }

    /// Execute a text command line. `Ok(None)` for a blank line.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Output>> {
        self.executor.execute_line(line)
    }

    // =========================================================================
    // Data Operations
    // =========================================================================

    /// Write a key.
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.unit(Command::Set {
            key: key.to_string(),
            value,
        })
    }

    /// Read a key. `None` when absent.
    pub fn get(&mut self, key: &str) -> Result<Option<Value>> {
        match self.executor.execute(Command::Get {
            key: key.to_string(),
        })? {
            Output::Value(v) => Ok(v),
            _ => Err(Error::Internal("Unexpected output for Get".into())),
        }
    }

    /// Delete a key. Deleting an absent key succeeds.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        self.unit(Command::Unset {
            key: key.to_string(),
        })
    }

    /// Count keys whose current value is `value`.
    pub fn counts(&mut self, value: Value) -> Result<u64> {
        match self.executor.execute(Command::Counts { value })? {
            Output::Count(n) => Ok(n),
            _ => Err(Error::Internal("Unexpected output for Counts".into())),
        }
    }

    // =========================================================================
    // Transactions
    // =========================================================================

    /// Open a transaction.
    pub fn begin(&mut self) -> Result<()> {
        self.unit(Command::Begin)
    }

    /// Undo the open transaction's changes; the transaction stays open.
    pub fn rollback(&mut self) -> Result<()> {
        self.unit(Command::Rollback)
    }

    /// Apply the open transaction and close it.
    pub fn commit(&mut self) -> Result<()> {
        self.unit(Command::Commit)
    }

    /// Check whether a transaction is open
    pub fn in_transaction(&self) -> bool {
        self.executor.engine().in_transaction()
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Mark the session ended.
    pub fn end(&mut self) -> Result<()> {
        self.unit(Command::End)
    }

    /// False once [`end`](Self::end) has been called.
    pub fn is_running(&self) -> bool {
        self.executor.is_running()
    }

    fn unit(&mut self, cmd: Command) -> Result<()> {
        let kind = cmd.kind();
        match self.executor.execute(cmd)? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal(format!("Unexpected output for {}", kind))),
        }
    }
}
