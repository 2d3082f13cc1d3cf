//! Assertion stream: doctest `TEST_CASE` blocks checked against the
//! inspector's `corpus`.
//!
//! Each type becomes a `SUBCASE` that looks its function up with
//! `get_one(corpus, "test_<id>")` and checks parameter count, location and,
//! when known, classification. Locations are compared as exact strings.

use abigen_core::{NULL_IDENTIFIER, TypeCategory, TypeDescriptor, derive_identifier};

use crate::{Config, GENERATED_HEADER};

/// Append-only builder for the assertion artifact.
pub struct AssertionEmitter<'a> {
    config: &'a Config,
    output: String,
    open: bool,
}

impl<'a> AssertionEmitter<'a> {
    pub fn new(config: &'a Config) -> Self {
        let mut output = String::new();
        output.push_str(GENERATED_HEADER);
        output.push('\n');
        Self {
            config,
            output,
            open: false,
        }
    }

    /// Open the `TEST_CASE` for a category, closing the previous one.
    pub fn begin_category(&mut self, category: &TypeCategory) {
        self.open_test_case(category.name);
    }

    /// Emit the `SUBCASE` for one type inside the open `TEST_CASE`.
    pub fn assertion(&mut self, ty: &TypeDescriptor) {
        debug_assert!(self.open, "assertion emitted outside a TEST_CASE");

        let symbol = self.config.symbol(&derive_identifier(ty.source_name));
        self.open_subcase(ty.source_name, &symbol);
        self.output.push_str("    CHECK(parameters.size() == 1UL);\n");
        self.output.push_str(&format!(
            "    CHECK(parameters[0].location == \"{}\");\n",
            ty.expected_location
        ));
        if let Some(class) = ty.abstract_class {
            self.output.push_str(&format!("    CHECK(parameters[0].type == \"{class}\");\n"));
        }
        self.output.push_str("  }\n");
    }

    /// Emit the `TEST_CASE` for the zero-parameter function.
    pub fn null_case(&mut self) {
        let config = self.config;
        self.open_test_case(&config.null_category);

        let symbol = self.config.symbol(NULL_IDENTIFIER);
        self.open_subcase(NULL_IDENTIFIER, &symbol);
        self.output.push_str("    CHECK(parameters.size() == 0UL);\n");
        self.output.push_str("  }\n");
    }

    pub fn finish(mut self) -> String {
        self.close_test_case();
        self.output
    }

    fn open_test_case(&mut self, category: &str) {
        self.close_test_case();
        let title = self.config.title(category);
        self.output.push_str(&format!("\nTEST_CASE(\"{title}\") {{\n"));
        self.open = true;
    }

    fn close_test_case(&mut self) {
        if self.open {
            self.output.push_str("}\n");
            self.open = false;
        }
    }

    fn open_subcase(&mut self, label: &str, symbol: &str) {
        self.output.push_str(&format!("  SUBCASE(\"{label}\") {{\n"));
        self.output.push_str(&format!(
            "    auto const& func = get_one(corpus, \"{symbol}\");\n"
        ));
        self.output.push_str("    auto const& parameters = func.parameters;\n");
    }
}
