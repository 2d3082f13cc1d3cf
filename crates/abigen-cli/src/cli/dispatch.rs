//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs are populated from clap
//! - `From`/`TryFrom` impls bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::generate::GenerateArgs;
use crate::commands::list::ListArgs;

/// A required destination was not given.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required destination `{0}`")]
    MissingDestination(&'static str),
}

pub struct GenerateParams {
    pub funcs: Option<PathBuf>,
    pub tests: Option<PathBuf>,
    pub suite: String,
    pub param_name: String,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            funcs: m.get_one::<PathBuf>("funcs").cloned(),
            tests: m.get_one::<PathBuf>("tests").cloned(),
            suite: m
                .get_one::<String>("suite")
                .cloned()
                .unwrap_or_else(|| "Register Allocation".to_string()),
            param_name: m
                .get_one::<String>("param_name")
                .cloned()
                .unwrap_or_else(|| "x".to_string()),
            verbose: m.get_count("verbose"),
        }
    }
}

impl TryFrom<GenerateParams> for GenerateArgs {
    type Error = ConfigError;

    fn try_from(p: GenerateParams) -> Result<Self, Self::Error> {
        let tests = p.tests.ok_or(ConfigError::MissingDestination("--tests"))?;
        let funcs = p.funcs.ok_or(ConfigError::MissingDestination("--funcs"))?;
        Ok(Self {
            funcs,
            tests,
            suite: p.suite,
            param_name: p.param_name,
        })
    }
}

pub struct ListParams {
    pub json: bool,
    pub verbose: u8,
}

impl ListParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ListParams> for ListArgs {
    fn from(p: ListParams) -> Self {
        Self { json: p.json }
    }
}

pub struct CheckParams {
    pub verbose: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            verbose: m.get_count("verbose"),
        }
    }
}
