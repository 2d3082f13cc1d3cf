//! Identifier derivation and the taxonomy consistency check.

use std::collections::HashMap;

use crate::TypeCategory;

/// Identifier of the zero-parameter function.
///
/// `void` is never a legal parameter type, so no taxonomy entry can derive it.
pub const NULL_IDENTIFIER: &str = "void";

/// Replace every whitespace run in a type spelling with a single `_`.
///
/// # Examples
/// ```
/// use abigen_core::derive_identifier;
/// assert_eq!(derive_identifier("long long"), "long_long");
/// assert_eq!(derive_identifier("size_t"), "size_t");
/// ```
pub fn derive_identifier(source_name: &str) -> String {
    let mut result = String::with_capacity(source_name.len());
    let mut in_whitespace = false;
    for c in source_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                result.push('_');
            }
            in_whitespace = true;
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }
    result
}

/// Errors found by [`check_identifiers`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
    #[error("`{first}` and `{second}` both derive identifier `{identifier}`")]
    DuplicateIdentifier {
        identifier: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("`{source_name}` derives the reserved identifier `void`")]
    ReservedIdentifier { source_name: &'static str },
}

/// Verify that identifier derivation is injective over `categories` and
/// never yields [`NULL_IDENTIFIER`].
pub fn check_identifiers(categories: &[TypeCategory]) -> Result<(), TaxonomyError> {
    let mut seen: HashMap<String, &'static str> = HashMap::new();

    for ty in categories.iter().flat_map(|c| c.types) {
        let identifier = derive_identifier(ty.source_name);
        if identifier == NULL_IDENTIFIER {
            return Err(TaxonomyError::ReservedIdentifier {
                source_name: ty.source_name,
            });
        }
        if let Some(first) = seen.insert(identifier.clone(), ty.source_name) {
            return Err(TaxonomyError::DuplicateIdentifier {
                identifier,
                first,
                second: ty.source_name,
            });
        }
    }

    Ok(())
}
