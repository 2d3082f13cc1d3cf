//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("abigen")
        .about("Generate x86-64 System V parameter location fixtures and assertions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(generate_command())
        .subcommand(list_command())
        .subcommand(check_command())
}

/// Rendered `--help` of the generate command, with the full binary name.
pub fn generate_help() -> String {
    let mut cli = build_cli();
    cli.build();
    cli.find_subcommand_mut("generate")
        .map(|cmd| cmd.render_help().to_string())
        .unwrap_or_default()
}

/// Write the declaration and assertion artifacts.
///
/// Both destinations are checked by dispatch rather than clap so a missing
/// one prints the full help instead of a one-line usage error.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Write test functions and their test cases")
        .override_usage("abigen generate -f <FILE> -t <FILE>")
        .after_help(
            r#"EXAMPLES:
  abigen generate -f funcs.cpp -t tests.cpp
  abigen generate -f funcs.cpp -t tests.cpp --suite 'SysV'"#,
        )
        .arg(funcs_file_arg())
        .arg(tests_file_arg())
        .arg(suite_arg())
        .arg(param_name_arg())
}

/// Print the type taxonomy.
pub fn list_command() -> Command {
    Command::new("list")
        .about("List every type with its expected class and location")
        .arg(json_arg())
}

/// Validate the taxonomy's derived identifiers.
pub fn check_command() -> Command {
    Command::new("check").about("Check that every type derives a unique function name")
}
