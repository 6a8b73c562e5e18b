//! Local harness for the CSV timestamp decoder
//!
//! Stands in for the ETL host: resolves decoder properties from command-line
//! options and environment variables, feeds newline-delimited records through
//! a [`MessageDecoder`] and writes every decoded record as a JSON line.
//!
//! # CLI Usage
//!
//! ```bash
//! # Timestamp in the second column
//! csv-timestamp-decoder decode --input events.csv --timestamp-index 1
//!
//! # Stamp records with wall-clock time instead
//! cat events.csv | csv-timestamp-decoder decode --timestamp-parse false
//!
//! # Arbitrary decoder properties
//! csv-timestamp-decoder decode --property camus.message.timestamp.format=unix_seconds
//! ```

use anyhow::Context;
use clap::Parser;
use decoder_types::{DecoderProperties, Message, MessageDecoder};
use serde::Serialize;
use std::io::{BufRead, Write};

pub use csv_decoder as csv;

/// Topic name used when none is given.
pub const DEFAULT_TOPIC: &str = "local";

#[derive(Parser, Clone, Debug)]
pub struct DecoderOpts {
    /// Topic name reported to the decoder
    #[arg(long, default_value = DEFAULT_TOPIC, env = "CAMUS_TOPIC")]
    pub topic: String,

    /// Zero-based CSV column holding the record timestamp
    #[arg(long, env = "CAMUS_MESSAGE_TIMESTAMP_INDEX")]
    pub timestamp_index: Option<String>,

    /// Read timestamps from records ("true") or use wall-clock time ("false")
    #[arg(long, env = "CAMUS_MESSAGE_TIMESTAMP_PARSE")]
    pub timestamp_parse: Option<String>,

    /// Unit of the timestamp column (unix_seconds or unix_milliseconds)
    #[arg(long, env = "CAMUS_MESSAGE_TIMESTAMP_FORMAT")]
    pub timestamp_format: Option<String>,

    /// Extra decoder property; overrides the dedicated options above
    #[arg(long = "property", value_name = "KEY=VALUE")]
    pub properties: Vec<String>,
}

impl Default for DecoderOpts {
    fn default() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            timestamp_index: None,
            timestamp_parse: None,
            timestamp_format: None,
            properties: Vec::new(),
        }
    }
}

impl DecoderOpts {
    /// Build the decoder properties. Dedicated options are applied first, then
    /// `--property` pairs in the order given.
    pub fn to_properties(&self) -> anyhow::Result<DecoderProperties> {
        let mut props = DecoderProperties::new();

        let dedicated = [
            (csv::CAMUS_MESSAGE_TIMESTAMP_INDEX, &self.timestamp_index),
            (csv::CAMUS_MESSAGE_TIMESTAMP_PARSE, &self.timestamp_parse),
            (csv::CAMUS_MESSAGE_TIMESTAMP_FORMAT, &self.timestamp_format),
        ];
        for (key, value) in dedicated {
            if let Some(value) = value {
                props.set(key, value.as_str());
            }
        }

        for pair in &self.properties {
            let (key, value) = DecoderProperties::parse_pair(pair)
                .with_context(|| format!("Invalid --property argument: {pair}"))?;
            props.set(key, value);
        }

        Ok(props)
    }
}

/// Decode every line of `reader` and write one JSON record per line to `writer`.
///
/// Lines are read as raw bytes so payloads that are not valid UTF-8 still
/// reach the decoder. Line endings are stripped and blank lines skipped. The
/// zero-based line number is used as the message offset.
///
/// Returns the number of records written.
pub fn decode_lines<D, R, W>(
    decoder: &D,
    mut reader: R,
    writer: &mut W,
) -> anyhow::Result<usize>
where
    D: MessageDecoder,
    D::Record: Serialize,
    R: BufRead,
    W: Write,
{
    let mut line = Vec::new();
    let mut offset: i64 = 0;
    let mut written = 0;

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .context("Failed to read input line")?;
        if read == 0 {
            break;
        }

        let payload = strip_line_ending(&line);
        if !payload.iter().all(u8::is_ascii_whitespace) {
            let message = Message::new(payload)
                .with_topic(decoder.topic_name())
                .with_offset(offset);
            let record = decoder.decode(&message);
            tracing::trace!(offset, timestamp = record.timestamp(), "Decoded record");

            serde_json::to_writer(&mut *writer, &record)
                .context("Failed to serialize decoded record")?;
            writer.write_all(b"\n").context("Failed to write output")?;
            written += 1;
        }

        offset += 1;
    }

    writer.flush().context("Failed to flush output")?;
    tracing::debug!(records = written, lines = offset, "Finished decoding input");
    Ok(written)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
