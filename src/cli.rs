// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

/// Command-line arguments for `watchpipe`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "watchpipe",
    version,
    about = "Takes newline-delimited filenames to watch on stdin and reports changes on stdout.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WATCHPIPE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse the command line.
///
/// `--help` and `--version` print and exit 0 as usual. Unrecognized flags
/// and malformed values also print usage to stdout and exit 0 rather than
/// failing: every argument problem is treated as a request for usage.
pub fn parse() -> CliArgs {
    match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            let mut cmd = CliArgs::command();
            let _ = cmd.print_help();
            std::process::exit(0);
        }
    }
}
