//! Executor shared between callers.
//!
//! The engine assumes one actor. Sharing it means serializing whole
//! `execute` calls, which this wrapper does with a single mutex.

use std::sync::Arc;

use parking_lot::Mutex;
use pizdb_core::Result;
use pizdb_engine::{Archive, MemoryArchive};

use crate::command::Command;
use crate::executor::Executor;
use crate::output::Output;

/// Cloneable handle to one executor; clones share the same engine.
pub struct SharedExecutor<A: Archive = MemoryArchive> {
    inner: Arc<Mutex<Executor<A>>>,
}

impl<A: Archive> Clone for SharedExecutor<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Archive> SharedExecutor<A> {
    /// Wrap an executor
    pub fn new(executor: Executor<A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(executor)),
        }
    }

    /// Execute a command while holding the lock.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        self.inner.lock().execute(cmd)
    }

    /// Execute one input line while holding the lock.
    pub fn execute_line(&self, line: &str) -> Result<Option<Output>> {
        self.inner.lock().execute_line(line)
    }

    /// Run several steps against the executor under one lock acquisition.
    pub fn with<R>(&self, f: impl FnOnce(&mut Executor<A>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// False once END has been executed.
    pub fn is_running(&self) -> bool {
        self.inner.lock().is_running()
    }
}
