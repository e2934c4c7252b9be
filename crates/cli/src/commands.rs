//! Clap command definition.

use clap::{Arg, ArgAction, Command};

/// Build the top-level `pizdb` command.
pub fn build_cli() -> Command {
    Command::new("pizdb")
        .version(env!("CARGO_PKG_VERSION"))
        .about("In-memory key-value store with a single transaction")
        .long_about(
            "In-memory key-value store with a single transaction.\n\n\
             Reads commands from the terminal (interactive) or stdin (piped):\n  \
             SET name value | GET name | UNSET name | COUNTS value\n  \
             BEGIN | ROLLBACK | COMMIT | END",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML engine configuration"),
        )
        .arg(
            Arg::new("archive")
                .long("archive")
                .value_name("FILE")
                .help("Append committed transaction logs to FILE as JSON lines"),
        )
        .arg(
            Arg::new("counts-mode")
                .long("counts-mode")
                .value_name("MODE")
                .value_parser(["exact", "legacy"])
                .help("COUNTS behavior inside a transaction"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print results and errors as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log engine activity to stderr"),
        )
        .arg(
            Arg::new("no-banner")
                .long("no-banner")
                .action(ArgAction::SetTrue)
                .help("Do not print the version banner"),
        )
}
