//! Command-line interface for datagen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Records as JSON Lines on stdout, settings from the document
//! datagen generate --schema folders.yaml
//!
//! # Override count and seed, write a pretty JSON array to a file
//! datagen generate --schema folders.yaml --count 500 --seed 42 \
//!   --format json --pretty --output folders.json
//!
//! # Seed and count from the environment
//! DATAGEN_SEED=nightly DATAGEN_COUNT=1000 datagen generate -s users.yaml
//! ```
//!
//! ## Named generators
//! ```bash
//! datagen generators
//! ```
//!
//! Logs go to stderr and are controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=datagen_generator=debug`).

use anyhow::Context;
use clap::{Parser, Subcommand};
use datagen::{GenerateArgs, GenerateConfig, OutputFormat, RecordWriter};
use datagen_generator::{ChanceProvider, SchemaGenerator};
use std::fs::File;
use std::io::{self, Write};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "datagen")]
#[command(about = "Generate seed-reproducible synthetic records from a schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records from a schema document
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// List the named generators usable as string markers
    Generators,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for records
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(args),
        Commands::Generators => run_generators(),
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = GenerateConfig::load(&args)
        .with_context(|| format!("Failed to load schema from {:?}", args.schema))?;

    if args.pretty && args.format == OutputFormat::Jsonl {
        warn!("--pretty only applies to --format json, ignoring");
    }

    info!(
        "Generating {} records from {:?} (seed: {})",
        config.count,
        args.schema,
        config
            .seed
            .as_ref()
            .map_or_else(|| "entropy".to_string(), ToString::to_string)
    );

    let mut generator = SchemaGenerator::new(config.schema, config.seed.as_ref());
    let records = generator.records(config.count, config.start_depth);
    let writer = RecordWriter::new(args.format).pretty(args.pretty);

    let metrics = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {path:?}"))?;
            writer.write(file, records)
        }
        None => writer.write(io::stdout().lock(), records),
    }
    .context("Failed to write records")?;

    info!(
        "Generated {} records ({} bytes, generation {:?}, write {:?})",
        metrics.records_written,
        metrics.bytes_written,
        metrics.generation_duration,
        metrics.write_duration
    );
    Ok(())
}

fn run_generators() -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    for name in ChanceProvider::names() {
        writeln!(stdout, "{name}")?;
    }
    Ok(())
}
