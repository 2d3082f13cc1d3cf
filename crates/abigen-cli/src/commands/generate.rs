use std::path::PathBuf;

use abigen_core::{TAXONOMY, type_count};
use abigen_emit::{Config, emit};

pub struct GenerateArgs {
    pub funcs: PathBuf,
    pub tests: PathBuf,
    pub suite: String,
    pub param_name: String,
}

pub fn run(args: GenerateArgs) {
    let config = Config::new()
        .suite_prefix(args.suite)
        .param_name(args.param_name);

    tracing::info!(
        categories = TAXONOMY.len(),
        types = type_count(TAXONOMY),
        "generating"
    );
    let pair = emit(TAXONOMY, &config);

    if let Err(e) = pair.write_to(&args.funcs, &args.tests) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
