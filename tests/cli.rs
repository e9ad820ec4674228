// tests/cli.rs

use clap::Parser;
use clap::error::ErrorKind;

use watchpipe::cli::{CliArgs, LogLevel};

#[test]
fn parses_without_flags() {
    let args = CliArgs::try_parse_from(["watchpipe"]).expect("no flags is valid");
    assert!(args.log_level.is_none());
}

#[test]
fn parses_log_level() {
    let args =
        CliArgs::try_parse_from(["watchpipe", "--log-level", "debug"]).expect("valid level");
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
}

#[test]
fn help_flag_is_routed_to_clap_help() {
    let err = CliArgs::try_parse_from(["watchpipe", "--help"]).expect_err("help short-circuits");
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}

#[test]
fn unknown_flags_are_reported_as_such() {
    // `cli::parse` turns this into usage-on-stdout + exit 0; here we only
    // check the classification it branches on.
    let err = CliArgs::try_parse_from(["watchpipe", "--bogus"]).expect_err("unknown flag");
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}
