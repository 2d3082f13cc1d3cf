use abigen_core::{AbstractClass, TAXONOMY, TypeCategory, TypeDescriptor, derive_identifier};
use abigen_emit::Config;
use serde::Serialize;

pub struct ListArgs {
    pub json: bool,
}

#[derive(Serialize)]
struct CategoryRow<'a> {
    name: &'a str,
    functions: Vec<FunctionRow<'a>>,
}

#[derive(Serialize)]
struct FunctionRow<'a> {
    symbol: String,
    #[serde(flatten)]
    descriptor: &'a TypeDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<usize>,
}

pub fn run(args: ListArgs) {
    let output = if args.json {
        match render_json(TAXONOMY) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        render_text(TAXONOMY)
    };
    println!("{}", output);
}

pub(crate) fn render_text(categories: &[TypeCategory]) -> String {
    let config = Config::new();
    let mut out = String::new();
    for category in categories {
        out.push_str(&format!("{} ({}):\n", category.name, category.types.len()));
        for ty in category.types {
            let class = ty.abstract_class.map_or("-", AbstractClass::as_str);
            let symbol = config.symbol(&derive_identifier(ty.source_name));
            out.push_str(&format!(
                "  {:<26} {:<22} {:<13} {}\n",
                symbol, ty.source_name, class, ty.expected_location
            ));
        }
    }
    out.truncate(out.trim_end().len());
    out
}

pub(crate) fn render_json(categories: &[TypeCategory]) -> serde_json::Result<String> {
    let config = Config::new();
    let rows: Vec<CategoryRow<'_>> = categories
        .iter()
        .map(|category| CategoryRow {
            name: category.name,
            functions: category
                .types
                .iter()
                .map(|ty| FunctionRow {
                    symbol: config.symbol(&derive_identifier(ty.source_name)),
                    descriptor: ty,
                    size: ty.abstract_class.map(AbstractClass::size_in_bytes),
                })
                .collect(),
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}
