mod args;
mod commands;
mod dispatch;


pub use commands::{build_cli, generate_help};
pub use dispatch::{CheckParams, GenerateParams, ListParams};
