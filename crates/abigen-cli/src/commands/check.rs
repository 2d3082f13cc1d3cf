use abigen_core::{TAXONOMY, check_identifiers, type_count};

pub fn run() {
    if let Err(e) = check_identifiers(TAXONOMY) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let types = type_count(TAXONOMY);
    println!("ok: {} types, {} functions", types, types + 1);
}
