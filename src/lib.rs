//! Datagen library
//!
//! Command-line plumbing around the schema-driven generator: argument
//! definitions, run settings resolved from schema documents, and record
//! writers.
//!
//! # Features
//!
//! - Schema documents in YAML or JSON, optionally carrying seed and count
//! - Seed-reproducible output (numeric or text seeds)
//! - JSON Lines or JSON array output with write metrics
//!
//! # CLI Usage
//!
//! ```bash
//! # 70 folder records as JSON Lines
//! datagen generate --schema folders.yaml --count 70 --seed folders
//!
//! # Pretty JSON array written to a file
//! datagen generate -s users.json --format json --pretty -o users.json.out
//!
//! # List named generators usable as string markers
//! datagen generators
//! ```
//!
//! # Example
//!
//! ```rust
//! use datagen::{OutputFormat, RecordWriter};
//! use datagen_core::{FieldTuple, SchemaNode, Seed};
//! use datagen_generator::SchemaGenerator;
//!
//! let schema = FieldTuple::new(SchemaNode::object([("id", FieldTuple::new("guid"))]));
//! let mut generator = SchemaGenerator::new(schema, Some(&Seed::Number(42)));
//!
//! let mut out = Vec::new();
//! let metrics = RecordWriter::new(OutputFormat::Jsonl)
//!     .write(&mut out, generator.records(3, 0))
//!     .unwrap();
//! assert_eq!(metrics.records_written, 3);
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod writer;

pub use args::GenerateArgs;
pub use config::{GenerateConfig, DEFAULT_COUNT};
pub use error::WriterError;
pub use writer::{OutputFormat, RecordWriter, WriteMetrics};
