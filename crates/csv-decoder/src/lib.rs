//! CSV message decoder for Kafka ETL hosts.
//!
//! [`CsvTimestampDecoder`] implements [`decoder_types::MessageDecoder`] for
//! comma-separated payloads. Each record keeps its payload text unchanged and
//! is stamped with the epoch value found in a configured column.
//!
//! # Configuration
//!
//! | Property | Default | Meaning |
//! |---|---|---|
//! | `camus.message.timestamp.index` | `0` | Zero-based column holding the timestamp |
//! | `camus.message.timestamp.parse` | `true` | Read the timestamp from the record; otherwise use wall-clock time |
//! | `camus.message.timestamp.format` | `unix_milliseconds` | Unit of the column value (`unix_seconds` or `unix_milliseconds`) |
//!
//! # Example
//!
//! ```
//! use csv_decoder::CsvTimestampDecoder;
//! use decoder_types::{DecoderProperties, Message, MessageDecoder};
//!
//! let props: DecoderProperties = [("camus.message.timestamp.index", "1")].into_iter().collect();
//! let decoder = CsvTimestampDecoder::init(&props, "events");
//!
//! let record = decoder.decode(&Message::from("foo,1620000000000,bar"));
//! assert_eq!(record.timestamp, 1620000000000);
//! assert_eq!(record.payload, "foo,1620000000000,bar");
//! ```

pub mod config;
mod decoder;
pub mod parse;

#[cfg(test)]
mod tests;

pub use config::{
    CsvDecoderConfig, TimestampUnit, CAMUS_MESSAGE_TIMESTAMP_FORMAT,
    CAMUS_MESSAGE_TIMESTAMP_INDEX, CAMUS_MESSAGE_TIMESTAMP_PARSE, DEFAULT_TIMESTAMP_FORMAT,
    DEFAULT_TIMESTAMP_INDEX, DEFAULT_TIMESTAMP_PARSE,
};
pub use decoder::CsvTimestampDecoder;
