//! Core types for the datagen synthetic data generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the CLI:
//!
//! - [`SchemaNode`] / [`FieldTuple`] - the recursive schema grammar
//! - [`FieldOptions`] / [`GeneratorOptions`] - per-field generation settings
//! - [`GeneratedValue`] - values produced by the generator
//! - [`SchemaDocument`] - schema files (YAML/JSON) with run settings
//!
//! # Architecture
//!
//! ```text
//! datagen-core (this crate)
//!    │
//!    └─── datagen-generator   (SchemaGenerator + randomness providers)
//!            │
//!            └─── datagen     (CLI and record writers)
//! ```
//!
//! # Example
//!
//! ```rust
//! use datagen_core::{FieldTuple, NodeKind, SchemaNode};
//!
//! let tuple: FieldTuple = serde_json::from_str(r#"[{"id": ["guid"], "age": [30]}]"#).unwrap();
//! let SchemaNode::Object(fields) = &tuple.node else { unreachable!() };
//! assert_eq!(fields["id"].node.kind(), NodeKind::Named("guid"));
//! assert_eq!(fields["age"].node.kind(), NodeKind::Natural);
//! ```

pub mod document;
pub mod options;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use document::{SchemaDocument, SchemaError, Seed};
pub use options::{FieldOptions, GeneratorOptions};
pub use schema::{FieldTuple, NodeKind, SchemaFields, SchemaNode, DATE_MARKER_KEY};
pub use values::{GeneratedValue, ValueMap};
