//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Declarations destination (-f/--funcs).
pub fn funcs_file_arg() -> Arg {
    Arg::new("funcs")
        .short('f')
        .long("funcs")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write test functions to FILE")
}

/// Assertions destination (-t/--tests).
pub fn tests_file_arg() -> Arg {
    Arg::new("tests")
        .short('t')
        .long("tests")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write test cases to FILE")
}

/// TEST_CASE title prefix (--suite).
pub fn suite_arg() -> Arg {
    Arg::new("suite")
        .long("suite")
        .value_name("NAME")
        .default_value("Register Allocation")
        .help("Prefix for every TEST_CASE title")
}

/// Declaration parameter name (--param-name).
pub fn param_name_arg() -> Arg {
    Arg::new("param_name")
        .long("param-name")
        .value_name("NAME")
        .default_value("x")
        .help("Name of the parameter in each declaration")
}

/// Output JSON instead of text (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for info, -vv for debug)")
}
