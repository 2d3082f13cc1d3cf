#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Dual emitter: turns the type taxonomy into two synchronized artifacts.
//!
//! - `declarations` - one `extern "C"` function per type, for the compiler
//! - `assertions` - one doctest block per category, for the test runner
//!
//! Both streams are built in a single traversal and share the identifier
//! derived from each type's spelling, so every lookup in the assertions has
//! a matching declaration by construction.

mod assertions;
mod config;
mod declarations;
mod emitter;
mod sink;

#[cfg(test)]
mod declarations_tests;

pub use assertions::AssertionEmitter;
pub use config::Config;
pub use declarations::DeclarationEmitter;
pub use emitter::{ArtifactPair, emit};
pub use sink::SinkError;

/// First line of every generated artifact.
pub const GENERATED_HEADER: &str = "// @generated by abigen. Do not edit.";
