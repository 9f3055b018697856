//! Schema grammar for the data generator.
//!
//! A schema is a tree of [`SchemaNode`]s. Object nodes map field names to
//! [`FieldTuple`]s, which pair a child node with its [`FieldOptions`].
//!
//! ## Document encoding
//!
//! Schemas are usually written in YAML or JSON:
//!
//! | Document value              | Node                          |
//! |-----------------------------|-------------------------------|
//! | `true` / `false`            | boolean marker                |
//! | number (`.nan` in YAML)     | number marker                 |
//! | `""`                        | generic string                |
//! | `"name"`, `"guid"`, ...     | named generator               |
//! | `null` / `~`                | null (falsy) marker           |
//! | `[]` as a field tuple       | undefined (falsy) marker      |
//! | `{"$date": ...}`            | date marker                   |
//! | sequence                    | array marker                  |
//! | mapping of field tuples     | object marker                 |

use crate::options::FieldOptions;
use indexmap::IndexMap;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Reserved mapping key that marks a date node.
pub const DATE_MARKER_KEY: &str = "$date";

/// Ordered field declarations of an object node.
pub type SchemaFields = IndexMap<String, FieldTuple>;

/// One node of the schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Boolean marker; the literal value is irrelevant.
    Bool(bool),

    /// Number marker. Negative means signed integer, non-negative means
    /// natural number and NaN means falsy value.
    Number(f64),

    /// Empty string means generic string, anything else names a generator.
    Str(String),

    /// Null marker
    Null,

    /// Undefined marker (an empty field tuple)
    Undefined,

    /// Date marker
    Date,

    /// Literal array template; an empty array doubles as a recursion point.
    Array(Vec<SchemaNode>),

    /// Object marker
    Object(SchemaFields),
}

/// Structural classification of a node, one variant per dispatch arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind<'a> {
    Boolean,
    Falsy,
    Integer,
    Natural,
    Named(&'a str),
    Text,
    Date,
    Array(&'a [SchemaNode]),
    Object(&'a SchemaFields),
}

impl SchemaNode {
    /// Classify the node for generation.
    pub fn kind(&self) -> NodeKind<'_> {
        match self {
            Self::Bool(_) => NodeKind::Boolean,
            Self::Number(n) if n.is_nan() => NodeKind::Falsy,
            Self::Number(n) if *n < 0.0 => NodeKind::Integer,
            Self::Number(_) => NodeKind::Natural,
            Self::Str(name) if name.is_empty() => NodeKind::Text,
            Self::Str(name) => NodeKind::Named(name),
            Self::Null | Self::Undefined => NodeKind::Falsy,
            Self::Date => NodeKind::Date,
            Self::Array(items) => NodeKind::Array(items),
            Self::Object(fields) => NodeKind::Object(fields),
        }
    }

    /// Build an object node from `(name, tuple)` pairs, keeping their order.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldTuple)>,
    {
        Self::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a literal array node.
    pub fn array(items: Vec<SchemaNode>) -> Self {
        Self::Array(items)
    }

    /// The empty-array marker used as a recursion point.
    pub fn recursion_point() -> Self {
        Self::Array(Vec::new())
    }

    /// Whether this node is the empty-array marker.
    pub fn is_empty_array(&self) -> bool {
        matches!(self, Self::Array(items) if items.is_empty())
    }
}

impl From<bool> for SchemaNode {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for SchemaNode {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for SchemaNode {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for SchemaNode {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for SchemaNode {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for SchemaNode {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// A `(node, options)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTuple {
    pub node: SchemaNode,
    pub options: FieldOptions,
}

impl FieldTuple {
    /// A tuple with empty options.
    pub fn new(node: impl Into<SchemaNode>) -> Self {
        Self {
            node: node.into(),
            options: FieldOptions::default(),
        }
    }

    pub fn with_options(node: impl Into<SchemaNode>, options: FieldOptions) -> Self {
        Self {
            node: node.into(),
            options,
        }
    }
}

impl Default for FieldTuple {
    fn default() -> Self {
        Self::new(SchemaNode::Undefined)
    }
}

// ============================================================================
// Deserialization
// ============================================================================

struct SchemaNodeVisitor;

impl<'de> Visitor<'de> for SchemaNodeVisitor {
    type Value = SchemaNode;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a schema node (bool, number, string, null, sequence or mapping)")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Str(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<SchemaNode, D::Error> {
        SchemaNode::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<SchemaNode, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<SchemaNode>()? {
            items.push(item);
        }
        Ok(SchemaNode::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SchemaNode, A::Error> {
        let Some(first) = map.next_key::<String>()? else {
            return Ok(SchemaNode::Object(SchemaFields::new()));
        };

        if first == DATE_MARKER_KEY {
            map.next_value::<IgnoredAny>()?;
            if map.next_key::<IgnoredAny>()?.is_some() {
                return Err(de::Error::custom(format!(
                    "`{DATE_MARKER_KEY}` must be the only key of a date marker"
                )));
            }
            return Ok(SchemaNode::Date);
        }

        let mut fields = SchemaFields::with_capacity(map.size_hint().unwrap_or(0) + 1);
        fields.insert(first, map.next_value::<FieldTuple>()?);
        while let Some((name, tuple)) = map.next_entry::<String, FieldTuple>()? {
            fields.insert(name, tuple);
        }
        Ok(SchemaNode::Object(fields))
    }
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SchemaNodeVisitor)
    }
}

struct FieldTupleVisitor;

impl<'de> Visitor<'de> for FieldTupleVisitor {
    type Value = FieldTuple;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a field tuple: [node] or [node, options]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<FieldTuple, A::Error> {
        let node = seq
            .next_element::<SchemaNode>()?
            .unwrap_or(SchemaNode::Undefined);
        let options = seq
            .next_element::<Option<FieldOptions>>()?
            .flatten()
            .unwrap_or_default();
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }
        Ok(FieldTuple { node, options })
    }
}

impl<'de> Deserialize<'de> for FieldTuple {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(FieldTupleVisitor)
    }
}
