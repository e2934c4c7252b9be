//! Engine configuration.
//!
//! Loadable from TOML:
//!
//! ```toml
//! counts_mode = "exact"
//!
//! [archive]
//! kind = "jsonl"
//! path = "pizdb-archive.jsonl"
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pizdb_archive::{Archive, DiscardArchive, JsonLinesArchive, MemoryArchive};
use pizdb_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// How COUNTS treats keys while a transaction is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountsMode {
    /// Count keys whose effective value matches.
    #[default]
    Exact,
    /// `|(committed ∪ buffered) \ tombstoned|`, each side filtered by value.
    ///
    /// Counts a committed key under its committed value once the
    /// transaction has rewritten it, whether or not the rewrite was then
    /// deleted: committed `a=10`, `SET a 20`, `COUNTS 10` gives 1.
    Legacy,
}

impl FromStr for CountsMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(CountsMode::Exact),
            "legacy" => Ok(CountsMode::Legacy),
            other => Err(Error::Config(format!(
                "unknown counts mode '{}', expected exact or legacy",
                other
            ))),
        }
    }
}

/// Where committed log records go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ArchiveConfig {
    /// Keep records in memory.
    #[default]
    Memory,
    /// Drop records.
    Discard,
    /// Append records to a JSON-lines file.
    Jsonl {
        /// File to append to
        path: PathBuf,
    },
}

impl ArchiveConfig {
    /// Open the configured sink.
    pub fn open(&self) -> Result<Box<dyn Archive + Send>> {
        Ok(match self {
            ArchiveConfig::Memory => Box::new(MemoryArchive::new()),
            ArchiveConfig::Discard => Box::new(DiscardArchive::new()),
            ArchiveConfig::Jsonl { path } => Box::new(JsonLinesArchive::create(path)?),
        })
    }
}

/// Options for constructing an [`Engine`](crate::Engine).
///
/// ```ignore
/// let config = EngineConfig::new()
///     .with_counts_mode(CountsMode::Legacy)
///     .with_archive(ArchiveConfig::Discard);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// COUNTS behavior inside a transaction
    pub counts_mode: CountsMode,
    /// Archive sink
    pub archive: ArchiveConfig,
}

impl EngineConfig {
    /// Default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the COUNTS mode
    pub fn with_counts_mode(mut self, mode: CountsMode) -> Self {
        self.counts_mode = mode;
        self
    }

    /// Set the archive sink
    pub fn with_archive(mut self, archive: ArchiveConfig) -> Self {
        self.archive = archive;
        self
    }

    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}
