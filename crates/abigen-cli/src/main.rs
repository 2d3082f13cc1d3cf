mod cli;
mod commands;
mod logging;

use cli::{CheckParams, GenerateParams, ListParams, build_cli, generate_help};
use commands::generate::GenerateArgs;

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            logging::init(params.verbose);
            match GenerateArgs::try_from(params) {
                Ok(args) => commands::generate::run(args),
                Err(err) => {
                    eprintln!("error: {}", err);
                    eprintln!();
                    eprint!("{}", generate_help());
                    std::process::exit(2);
                }
            }
        }
        Some(("list", m)) => {
            let params = ListParams::from_matches(m);
            logging::init(params.verbose);
            commands::list::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            logging::init(params.verbose);
            commands::check::run();
        }
        _ => unreachable!("clap should have caught this"),
    }
}
