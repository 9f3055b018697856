//! Generation properties exercised through YAML schema documents.

use datagen_core::{FieldTuple, GeneratedValue, SchemaDocument, Seed};
use datagen_generator::{generate, SchemaGenerator};

const TREE_SCHEMA: &str = r#"
seed: "tree"
count: 40
schema:
  - key: [guid]
    title: [company]
    isFolder: [true, { likelihood: 30 }]
    children: [[]]
  - recurse: children
    depth: 3
"#;

fn max_depth(record: &GeneratedValue) -> usize {
    record
        .get("children")
        .and_then(GeneratedValue::as_array)
        .map(|children| children.iter().map(|c| 1 + max_depth(c)).max().unwrap_or(0))
        .unwrap_or(0)
}

fn tuple(yaml: &str) -> FieldTuple {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn test_tree_document_shape() {
    let doc = SchemaDocument::from_yaml(TREE_SCHEMA).unwrap();
    let count = doc.count.unwrap();
    let mut generator = SchemaGenerator::new(doc.schema, doc.seed.as_ref());
    let records = generator.generate(count, doc.start_depth.unwrap_or(0));

    assert_eq!(records.len(), 40);
    for record in &records {
        assert!(max_depth(record) <= 3);
        let key = record.get("key").and_then(GeneratedValue::as_str).unwrap();
        assert_eq!(key.len(), 36);
        assert!(record.get("title").and_then(GeneratedValue::as_str).is_some());
        assert!(matches!(record.get("isFolder"), Some(GeneratedValue::Bool(_))));
    }
}

#[test]
fn test_tree_document_is_reproducible() {
    let doc = SchemaDocument::from_yaml(TREE_SCHEMA).unwrap();
    let a = generate(doc.schema.clone(), 10, doc.seed.as_ref());
    let b = generate(doc.schema, 10, doc.seed.as_ref());
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_different_seeds_diverge() {
    let schema = tuple(r#"[{ id: [guid], n: [1000] }]"#);
    let a = generate(schema.clone(), 5, Some(&Seed::Number(1)));
    let b = generate(schema, 5, Some(&Seed::Number(2)));
    assert_ne!(a, b);
}

#[test]
fn test_dependency_document() {
    let schema = tuple(
        r#"
- str: [""]
  bool: [true]
  maybe: ["", { dependency: bool }]
"#,
    );
    for record in generate(schema, 100, Some(&Seed::from("deps"))) {
        let truthy = record.get("bool").unwrap().is_truthy();
        assert_eq!(record.get("maybe").is_some(), truthy);
    }
}

#[test]
fn test_markers_from_document() {
    let schema = tuple(
        r#"
- nan: [.nan]
  nothing: [~]
  undefined: []
  negative: [-30, { min: -10, max: -5 }]
  natural: [30, { max: 3 }]
  when: [{ $date: true }]
  label: [date, { string: true, year: 2000, month: 1, day: 2 }]
  pair: [[1, ""]]
"#,
    );
    for record in generate(schema, 30, Some(&Seed::Number(5))) {
        assert!(record.get("nan").unwrap().is_falsy());
        assert!(record.get("nothing").unwrap().is_falsy());
        assert!(record.get("undefined").unwrap().is_falsy());

        let negative = record.get("negative").unwrap().as_i64().unwrap();
        assert!((-10..=-5).contains(&negative));
        let natural = record.get("natural").unwrap().as_i64().unwrap();
        assert!((0..=3).contains(&natural));

        assert!(record.get("when").unwrap().as_datetime().is_some());
        assert_eq!(record.get("label").unwrap().as_str(), Some("1/2/2000"));

        let pair = record.get("pair").unwrap().as_array().unwrap();
        assert_eq!(pair.len(), 2);
        assert!(pair[0].as_i64().is_some());
        assert!(pair[1].as_str().is_some());
    }
}

#[test]
fn test_start_depth_at_limit_disables_recursion() {
    let doc = SchemaDocument::from_yaml(TREE_SCHEMA).unwrap();
    let mut generator = SchemaGenerator::new(doc.schema, doc.seed.as_ref());
    for record in generator.generate(10, 3) {
        assert_eq!(record.get("children"), Some(&GeneratedValue::Array(vec![])));
    }
}

#[test]
fn test_records_serialize_without_undefined_fields() {
    let schema = tuple(
        r#"
- flag: [false, { likelihood: 0 }]
  hidden: ["", { dependency: flag }]
  shown: [""]
"#,
    );
    let records = generate(schema, 3, Some(&Seed::Number(11)));
    for record in records {
        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("hidden"));
        assert_eq!(object.get("flag"), Some(&serde_json::Value::Bool(false)));
        assert!(object.get("shown").unwrap().is_string());
    }
}
