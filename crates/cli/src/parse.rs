//! ArgMatches → CliOptions conversion.
//!
//! Flags override the config file: `--counts-mode` replaces
//! `counts_mode`, `--archive` replaces the `[archive]` table.

use std::path::PathBuf;

use clap::ArgMatches;
use pizdb_executor::{ArchiveConfig, CountsMode, EngineConfig};

use crate::format::OutputMode;

/// Everything the binary needs after argument parsing.
#[derive(Debug, Clone)]
pub struct CliOptions {
    pub config: EngineConfig,
    pub output_mode: OutputMode,
    pub verbose: bool,
    pub banner: bool,
}

/// Convert clap ArgMatches into CliOptions, loading the config file if given.
pub fn matches_to_options(matches: &ArgMatches) -> Result<CliOptions, String> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => EngineConfig::from_file(path).map_err(|e| e.to_string())?,
        None => EngineConfig::default(),
    };

    if let Some(mode) = matches.get_one::<String>("counts-mode") {
        config.counts_mode = mode.parse::<CountsMode>().map_err(|e| e.to_string())?;
    }
    if let Some(path) = matches.get_one::<String>("archive") {
        config.archive = ArchiveConfig::Jsonl {
            path: PathBuf::from(path),
        };
    }

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    Ok(CliOptions {
        config,
        output_mode,
        verbose: matches.get_flag("verbose"),
        banner: !matches.get_flag("no-banner"),
    })
}
