//! PizDB CLI: interactive shell for the PizDB key-value store.
//!
//! Two modes:
//! - **REPL mode**: `pizdb [flags]` with a terminal on stdin
//! - **Pipe mode**: `printf 'SET a 1\nGET a\n' | pizdb`, line by line from stdin

mod commands;
mod format;
mod parse;
mod repl;

use std::io::{self, IsTerminal};
use std::process;

use pizdb_executor::{Engine, Executor};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use parse::matches_to_options;

fn main() {
    let matches = build_cli().get_matches();

    let options = match matches_to_options(&matches) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(2);
        }
    };

    init_tracing(options.verbose);

    let engine = match Engine::from_config(&options.config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("(error) failed to start engine: {}", e);
            process::exit(1);
        }
    };
    let mut executor = Executor::with_engine(engine);

    let exit_code = if io::stdin().is_terminal() {
        if options.banner {
            println!("PizDB {}", env!("CARGO_PKG_VERSION"));
        }
        repl::run_repl(&mut executor, options.output_mode)
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        repl::run_pipe(
            &mut executor,
            options.output_mode,
            stdin.lock(),
            &mut stdout.lock(),
        )
    };

    if executor.engine().in_transaction() {
        tracing::warn!(
            txn_id = ?executor.engine().txn_id(),
            pending = executor.engine().pending_log_len(),
            "session ended with an uncommitted transaction"
        );
    }
    drop(executor);
    process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
