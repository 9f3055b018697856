//! Record writers.
//!
//! Records are streamed from any iterator (usually
//! [`SchemaGenerator::records`](datagen_generator::SchemaGenerator::records))
//! to any `io::Write`, either as JSON Lines or as a single JSON array.

use crate::error::WriterError;
use clap::ValueEnum;
use datagen_core::GeneratedValue;
use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for record writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Output encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document per line
    #[default]
    Jsonl,
    /// A single JSON array
    Json,
}

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Bytes handed to the output.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating records.
    pub generation_duration: Duration,
    /// Time spent serializing and writing records.
    pub write_duration: Duration,
}

impl WriteMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes generated records in a chosen [`OutputFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordWriter {
    format: OutputFormat,
    pretty: bool,
}

impl RecordWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Pretty-print JSON arrays. JSON Lines output stays one record per line.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Drain `records` into `output`.
    ///
    /// Generation time is measured separately from serialization so lazy
    /// iterators report where the time went.
    pub fn write<W, I>(&self, output: W, records: I) -> Result<WriteMetrics, WriterError>
    where
        W: Write,
        I: IntoIterator<Item = GeneratedValue>,
    {
        let start_time = Instant::now();
        let mut metrics = WriteMetrics::default();
        let mut writer = CountingWriter::new(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, output));

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;
        let pretty_array = self.format == OutputFormat::Json && self.pretty;

        let (open, close) = if pretty_array {
            (b"[\n".as_slice(), b"\n]\n".as_slice())
        } else {
            (b"[".as_slice(), b"]\n".as_slice())
        };
        if self.format == OutputFormat::Json {
            writer.write_all(open)?;
        }

        let mut records = records.into_iter();
        loop {
            let gen_start = Instant::now();
            let Some(record) = records.next() else {
                break;
            };
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            match self.format {
                OutputFormat::Jsonl => {
                    serde_json::to_writer(&mut writer, &record)?;
                    writeln!(writer)?;
                }
                OutputFormat::Json if pretty_array => {
                    if metrics.records_written > 0 {
                        writer.write_all(b",\n")?;
                    }
                    serde_json::to_writer_pretty(&mut writer, &record)?;
                }
                OutputFormat::Json => {
                    if metrics.records_written > 0 {
                        writer.write_all(b",")?;
                    }
                    serde_json::to_writer(&mut writer, &record)?;
                }
            }
            write_time += write_start.elapsed();

            metrics.records_written += 1;

            if metrics.records_written % 10000 == 0 {
                debug!("Written {} records", metrics.records_written);
            }
        }

        if self.format == OutputFormat::Json {
            writer.write_all(close)?;
        }
        writer.flush()?;

        metrics.bytes_written = writer.bytes;
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "Write complete: {} records, {} bytes in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }
}

/// Counts bytes passed through to the inner writer.
struct CountingWriter<W> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.bytes += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
