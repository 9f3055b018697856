//! Field options attached to schema nodes.
//!
//! A field tuple carries three options the generator itself interprets
//! (`dependency`, `recurse`, `depth`). Everything else is passed verbatim to
//! the randomness provider as [`GeneratorOptions`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Options forwarded untouched to the randomness provider.
///
/// Each provider function reads the keys it understands (`min`, `max`,
/// `pool`, `likelihood`, `casing`, ...) and ignores the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratorOptions(Map<String, Value>);

impl GeneratorOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a single option.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw access to an option value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Read an option as an integer. Floats are truncated.
    pub fn int(&self, key: &str) -> Option<i64> {
        let value = self.0.get(key)?;
        value
            .as_i64()
            .or_else(|| value.as_u64().map(|u| u.min(i64::MAX as u64) as i64))
            .or_else(|| value.as_f64().map(|f| f as i64))
    }

    /// Read an option as a float.
    pub fn float(&self, key: &str) -> Option<f64> {
        self.0.get(key)?.as_f64()
    }

    /// Read an option as a boolean flag.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.0.get(key)?.as_bool()
    }

    /// Read an option as a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    /// Read an option as a list.
    pub fn list(&self, key: &str) -> Option<&[Value]> {
        self.0.get(key)?.as_array().map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for GeneratorOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// The options half of a field tuple.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Name of a previously generated sibling; the field is only generated
    /// when that sibling's value is truthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency: Option<String>,

    /// Name of the field (holding an empty array) where the root schema
    /// recurses into itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurse: Option<String>,

    /// Maximum recursion depth, also the upper bound of the branch count.
    /// Fractions are truncated and non-positive numbers read as 0.
    #[serde(
        default,
        deserialize_with = "lenient_depth",
        skip_serializing_if = "Option::is_none"
    )]
    pub depth: Option<u32>,

    /// Everything else, forwarded to the provider.
    #[serde(flatten)]
    pub params: GeneratorOptions,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dependency(mut self, field: impl Into<String>) -> Self {
        self.dependency = Some(field.into());
        self
    }

    pub fn recurse(mut self, field: impl Into<String>, depth: u32) -> Self {
        self.recurse = Some(field.into());
        self.depth = Some(depth);
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key, value);
        self
    }
}

/// Accept any number as a depth; a depth of 0 disables recursion.
fn lenient_depth<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let depth = Option::<f64>::deserialize(deserializer)?;
    // `as` saturates: negatives and NaN become 0, huge values u32::MAX.
    Ok(depth.map(|d| d.trunc() as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_options_split_known_keys() {
        let options: FieldOptions = serde_json::from_value(json!({
            "dependency": "bool",
            "depth": 3,
            "min": 5,
            "casing": "upper"
        }))
        .unwrap();

        assert_eq!(options.dependency.as_deref(), Some("bool"));
        assert_eq!(options.depth, Some(3));
        assert!(options.recurse.is_none());
        assert_eq!(options.params.int("min"), Some(5));
        assert_eq!(options.params.text("casing"), Some("upper"));
        assert!(options.params.get("dependency").is_none());
    }

    #[test]
    fn test_generator_options_accessors() {
        let options = GeneratorOptions::new()
            .with("max", 7.9)
            .with("alpha", true)
            .with("pool", json!([0, ""]));

        assert_eq!(options.int("max"), Some(7));
        assert_eq!(options.float("max"), Some(7.9));
        assert_eq!(options.flag("alpha"), Some(true));
        assert_eq!(options.list("pool").map(<[Value]>::len), Some(2));
        assert_eq!(options.text("alpha"), None);
        assert_eq!(options.int("missing"), None);
    }

    #[test]
    fn test_builder_helpers() {
        let options = FieldOptions::new()
            .recurse("children", 4)
            .param("likelihood", 30);
        assert_eq!(options.recurse.as_deref(), Some("children"));
        assert_eq!(options.depth, Some(4));
        assert_eq!(options.params.int("likelihood"), Some(30));
    }

    #[test]
    fn test_depth_accepts_any_number() {
        let depth = |value: Value| {
            serde_json::from_value::<FieldOptions>(json!({ "depth": value }))
                .unwrap()
                .depth
        };
        assert_eq!(depth(json!(2.9)), Some(2));
        assert_eq!(depth(json!(-1)), Some(0));
        assert_eq!(depth(json!(0)), Some(0));
        assert_eq!(depth(json!(1e12)), Some(u32::MAX));
        assert_eq!(depth(Value::Null), None);

        let options: FieldOptions =
            serde_yaml::from_str("{ recurse: children, depth: 2.5 }").unwrap();
        assert_eq!(options.depth, Some(2));
        assert_eq!(options.recurse.as_deref(), Some("children"));
    }
}
