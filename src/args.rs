//! CLI argument definitions for record generation.

use crate::writer::OutputFormat;
use clap::Args;
use datagen_core::Seed;
use std::path::PathBuf;

/// Arguments of `datagen generate`.
///
/// Flags override the settings stored in the schema document.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to schema document (YAML, or JSON with a `.json` extension)
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Number of records to generate (zero or less generates nothing)
    #[arg(long, short = 'n', env = "DATAGEN_COUNT", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Seed for reproducible output; digits are a numeric seed, anything else is hashed
    #[arg(long, env = "DATAGEN_SEED")]
    pub seed: Option<Seed>,

    /// Recursion depth the root records start at
    #[arg(long)]
    pub start_depth: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Jsonl)]
    pub format: OutputFormat,

    /// Pretty-print the JSON array output
    #[arg(long)]
    pub pretty: bool,

    /// Output file (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
