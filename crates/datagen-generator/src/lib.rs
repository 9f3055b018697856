//! Schema-driven synthetic data generator.
//!
//! This crate provides the `SchemaGenerator` which expands a declarative
//! schema (see [`datagen_core::SchemaNode`]) into any number of records. All
//! randomness comes from a [`RandomProvider`]; with a seeded provider the same
//! schema and count always yield the same records.
//!
//! # Architecture
//!
//! ```text
//! FieldTuple (node, options)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   SchemaGenerator    │
//! │                      │      ┌──────────────────┐
//! │  - root tuple        │      │  RandomProvider  │
//! │  - provider ─────────┼─────▶│ (ChanceProvider) │
//! └──────────┬───────────┘      └──────────────────┘
//!            │
//!            ▼
//!     GeneratedValue records
//! ```
//!
//! # Example
//!
//! ```rust
//! use datagen_core::{FieldOptions, FieldTuple, SchemaNode, Seed};
//! use datagen_generator::SchemaGenerator;
//!
//! let schema = FieldTuple::with_options(
//!     SchemaNode::object([
//!         ("title", FieldTuple::new("company")),
//!         ("isFolder", FieldTuple::new(true)),
//!         ("children", FieldTuple::new(SchemaNode::recursion_point())),
//!     ]),
//!     FieldOptions::new().recurse("children", 3),
//! );
//!
//! let mut generator = SchemaGenerator::new(schema, Some(&Seed::from("docs")));
//! let records = generator.generate(5, 0);
//! assert_eq!(records.len(), 5);
//! ```
//!
//! # Node kinds
//!
//! - boolean - provider `boolean` (`likelihood`)
//! - NaN, `null`, undefined - provider `falsy` (`pool`)
//! - negative number - provider `integer` (`min`, `max`)
//! - non-negative number - provider `natural` (`min`, `max`, `exclude`)
//! - `""` - provider `string`
//! - other strings - named provider generator, or `string` if unknown
//! - date marker - provider `date`
//! - array - literal template, or a recursion point when empty and named by
//!   the enclosing `recurse` option
//! - object - fields in declaration order, honoring `dependency`

pub mod chance;
pub mod generator;
pub mod provider;

// Re-exports for convenience
pub use chance::{ChanceProvider, MAX_SAFE_INTEGER};
pub use generator::{Context, Records, SchemaGenerator};
pub use provider::{seeded_rng, NamedGenerator, RandomProvider};

use datagen_core::{FieldTuple, GeneratedValue, Seed};

/// Generate `count` records from `schema` with a fresh [`ChanceProvider`].
///
/// This builds one generator per call; `count <= 0` returns an empty vector.
pub fn generate(schema: FieldTuple, count: i64, seed: Option<&Seed>) -> Vec<GeneratedValue> {
    SchemaGenerator::new(schema, seed).generate(count, 0)
}
