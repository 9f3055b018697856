//! Effective settings of a generation run.

use crate::args::GenerateArgs;
use datagen_core::{FieldTuple, SchemaDocument, SchemaError, Seed};
use tracing::debug;

/// Record count used when neither the flags nor the document set one.
pub const DEFAULT_COUNT: i64 = 1;

/// Schema plus resolved run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    pub schema: FieldTuple,
    pub seed: Option<Seed>,
    pub count: i64,
    pub start_depth: u32,
}

impl GenerateConfig {
    /// Load the schema document named by `args` and resolve the settings.
    pub fn load(args: &GenerateArgs) -> Result<Self, SchemaError> {
        let document = SchemaDocument::from_file(&args.schema)?;
        Ok(Self::resolve(args, document))
    }

    /// Merge flags over document settings, then defaults.
    pub fn resolve(args: &GenerateArgs, document: SchemaDocument) -> Self {
        let config = Self {
            seed: args.seed.clone().or(document.seed),
            count: args.count.or(document.count).unwrap_or(DEFAULT_COUNT),
            start_depth: args.start_depth.or(document.start_depth).unwrap_or(0),
            schema: document.schema,
        };
        debug!(
            seed = ?config.seed,
            count = config.count,
            start_depth = config.start_depth,
            "resolved generation settings"
        );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::OutputFormat;
    use std::io::Write;
    use std::path::PathBuf;

    fn args() -> GenerateArgs {
        GenerateArgs {
            schema: PathBuf::from("schema.yaml"),
            count: None,
            seed: None,
            start_depth: None,
            format: OutputFormat::Jsonl,
            pretty: false,
            output: None,
        }
    }

    fn document() -> SchemaDocument {
        SchemaDocument::from_yaml(
            r#"
seed: 7
count: 12
start_depth: 1
schema: [name]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_document_settings_used() {
        let config = GenerateConfig::resolve(&args(), document());
        assert_eq!(config.seed, Some(Seed::Number(7)));
        assert_eq!(config.count, 12);
        assert_eq!(config.start_depth, 1);
        assert_eq!(config.schema, FieldTuple::new("name"));
    }

    #[test]
    fn test_flags_override_document() {
        let mut args = args();
        args.count = Some(3);
        args.seed = Some(Seed::from("flag"));
        args.start_depth = Some(0);
        let config = GenerateConfig::resolve(&args, document());
        assert_eq!(config.seed, Some(Seed::from("flag")));
        assert_eq!(config.count, 3);
        assert_eq!(config.start_depth, 0);
    }

    #[test]
    fn test_defaults_for_bare_tuple() {
        let document = SchemaDocument::from_yaml("[\"\"]").unwrap();
        let config = GenerateConfig::resolve(&args(), document);
        assert_eq!(config.seed, None);
        assert_eq!(config.count, DEFAULT_COUNT);
        assert_eq!(config.start_depth, 0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"count": 4, "schema": [{{"id": ["guid"]}}]}}"#).unwrap();

        let mut args = args();
        args.schema = file.path().to_path_buf();
        let config = GenerateConfig::load(&args).unwrap();
        assert_eq!(config.count, 4);
    }

    #[test]
    fn test_load_missing_file() {
        let mut args = args();
        args.schema = PathBuf::from("/nonexistent/schema.yaml");
        assert!(matches!(
            GenerateConfig::load(&args),
            Err(SchemaError::IoError(_))
        ));
    }
}
