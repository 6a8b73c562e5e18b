//! Command-line interface for csv-timestamp-decoder
//!
//! # Usage Examples
//!
//! ```bash
//! # Decode a file whose second column holds epoch milliseconds
//! csv-timestamp-decoder decode --input events.csv --timestamp-index 1
//!
//! # Decode stdin, timestamps in seconds, with debug logging on stderr
//! RUST_LOG=debug csv-timestamp-decoder decode \
//!   --property camus.message.timestamp.format=unix_seconds < events.csv
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use csv_timestamp_decoder::csv::CsvTimestampDecoder;
use csv_timestamp_decoder::{decode_lines, DecoderOpts};
use decoder_types::MessageDecoder;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csv-timestamp-decoder")]
#[command(about = "Decode CSV records and resolve their timestamps")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode newline-delimited CSV records into JSON lines
    Decode {
        /// Input file (reads stdin when omitted)
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Decoder options
        #[command(flatten)]
        opts: DecoderOpts,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the decoded records
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { input, opts } => {
            let props = opts.to_properties()?;
            if props.is_empty() {
                tracing::debug!("No decoder properties set, using defaults");
            }
            for (key, value) in props.iter() {
                tracing::debug!(key, value, "Decoder property");
            }
            let decoder = CsvTimestampDecoder::init(&props, &opts.topic);

            let reader: Box<dyn BufRead> = match &input {
                Some(path) => {
                    let file = std::fs::File::open(path)
                        .with_context(|| format!("Failed to open input file {path:?}"))?;
                    Box::new(BufReader::new(file))
                }
                None => Box::new(std::io::stdin().lock()),
            };

            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            let count = decode_lines(&decoder, reader, &mut writer)?;

            tracing::info!(
                records = count,
                topic = %decoder.topic_name(),
                "Decoded {} record(s)",
                count
            );
        }
    }

    Ok(())
}
