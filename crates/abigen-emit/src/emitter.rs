//! Single-pass emission over the taxonomy.

use abigen_core::TypeCategory;

use crate::{AssertionEmitter, Config, DeclarationEmitter};

/// The two generated artifacts. Only useful together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPair {
    pub declarations: String,
    pub assertions: String,
}

/// Emit declarations and assertions for every type in `categories`, followed
/// by the zero-parameter case.
pub fn emit(categories: &[TypeCategory], config: &Config) -> ArtifactPair {
    let mut declarations = DeclarationEmitter::new(config);
    let mut assertions = AssertionEmitter::new(config);

    for category in categories {
        tracing::debug!(
            category = category.name,
            types = category.types.len(),
            "emitting category"
        );
        declarations.begin_category(category);
        assertions.begin_category(category);
        for ty in category.types {
            declarations.declaration(ty);
            assertions.assertion(ty);
        }
    }

    declarations.null_case();
    assertions.null_case();

    ArtifactPair {
        declarations: declarations.finish(),
        assertions: assertions.finish(),
    }
}
