//! Declaration stream: one empty `extern "C"` function per type.

use abigen_core::{NULL_IDENTIFIER, TypeCategory, TypeDescriptor, derive_identifier};

use crate::{Config, GENERATED_HEADER};

/// Append-only builder for the declaration artifact.
pub struct DeclarationEmitter<'a> {
    config: &'a Config,
    output: String,
}

impl<'a> DeclarationEmitter<'a> {
    pub fn new(config: &'a Config) -> Self {
        let mut output = String::new();
        output.push_str(GENERATED_HEADER);
        output.push('\n');
        Self { config, output }
    }

    /// Emit the comment that introduces a category.
    pub fn begin_category(&mut self, category: &TypeCategory) {
        self.output.push_str(&format!("\n// {}\n", category.name));
    }

    /// Emit `extern "C" void test_<id>(<type> x) {}`.
    pub fn declaration(&mut self, ty: &TypeDescriptor) {
        let symbol = self.config.symbol(&derive_identifier(ty.source_name));
        self.output.push_str(&format!(
            "extern \"C\" void {}({} {}) {{}}\n",
            symbol, ty.source_name, self.config.param_name
        ));
    }

    /// Emit the zero-parameter function.
    pub fn null_case(&mut self) {
        let title = self.config.title(&self.config.null_category);
        let symbol = self.config.symbol(NULL_IDENTIFIER);
        self.output.push_str(&format!("\n// {title}\n"));
        self.output.push_str(&format!("extern \"C\" void {symbol}() {{}}\n"));
    }

    pub fn finish(self) -> String {
        self.output
    }
}
