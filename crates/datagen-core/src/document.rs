//! Schema documents loaded from YAML or JSON files.
//!
//! A document is either a bare field tuple:
//!
//! ```yaml
//! - name: [name]
//!   email: [email]
//! ```
//!
//! or a mapping that also carries run settings:
//!
//! ```yaml
//! seed: folders
//! count: 70
//! schema:
//!   - key: [guid]
//!     title: [company]
//!     isFolder: [true]
//!     children: [[]]
//!   - recurse: children
//!     depth: 4
//! ```

use crate::schema::FieldTuple;
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for schema document operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Seed for reproducible generation. Either an integer or arbitrary text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl std::str::FromStr for Seed {
    type Err = std::convert::Infallible;

    /// Digit-only input becomes a numeric seed; anything else is text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<u64>()
            .map(Seed::Number)
            .unwrap_or_else(|_| Seed::Text(s.to_string())))
    }
}

/// A schema plus optional run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    /// Seed for reproducible output
    pub seed: Option<Seed>,
    /// Number of records to generate
    pub count: Option<i64>,
    /// Depth the root records start at
    pub start_depth: Option<u32>,
    /// Root field tuple
    pub schema: FieldTuple,
}

impl SchemaDocument {
    /// Wrap a bare field tuple with no run settings.
    pub fn from_tuple(schema: FieldTuple) -> Self {
        Self {
            seed: None,
            count: None,
            start_depth: None,
            schema,
        }
    }

    /// Load a document from a file. `.json` files are parsed as JSON,
    /// everything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse a document from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DocumentFields {
    #[serde(default)]
    seed: Option<Seed>,
    #[serde(default)]
    count: Option<i64>,
    #[serde(default)]
    start_depth: Option<u32>,
    schema: FieldTuple,
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = SchemaDocument;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a field tuple or a mapping with a `schema` key")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<SchemaDocument, A::Error> {
        let schema = FieldTuple::deserialize(SeqAccessDeserializer::new(seq))?;
        Ok(SchemaDocument::from_tuple(schema))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<SchemaDocument, A::Error> {
        let fields = DocumentFields::deserialize(MapAccessDeserializer::new(map))?;
        Ok(SchemaDocument {
            seed: fields.seed,
            count: fields.count,
            start_depth: fields.start_depth,
            schema: fields.schema,
        })
    }
}

impl<'de> Deserialize<'de> for SchemaDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

impl From<FieldTuple> for SchemaDocument {
    fn from(schema: FieldTuple) -> Self {
        Self::from_tuple(schema)
    }
}
