#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data for abigen: the parameter type taxonomy.
//!
//! Two layers:
//! - **Taxonomy**: static, ordered catalog of C/C++ parameter types with the
//!   classification and location an ABI inspector is expected to report
//! - **Identifiers**: the whitespace-free symbol names that link a generated
//!   declaration to its generated assertion

mod class;
mod ident;
mod taxonomy;

#[cfg(test)]
mod taxonomy_tests;

pub use class::AbstractClass;
pub use ident::{NULL_IDENTIFIER, TaxonomyError, check_identifiers, derive_identifier};
pub use taxonomy::{FRAMEBASE_8, RDI, TAXONOMY, TypeCategory, TypeDescriptor, XMM0};

/// Total number of type descriptors across all categories.
pub fn type_count(categories: &[TypeCategory]) -> usize {
    categories.iter().map(|c| c.types.len()).sum()
}
