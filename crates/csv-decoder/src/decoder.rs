//! CSV decoder that stamps each record with a timestamp read from one of its columns.

use crate::config::CsvDecoderConfig;
use crate::parse::{decode_utf8, parse_timestamp, split_columns};
use decoder_types::{DecodedRecord, DecoderProperties, Message, MessageDecoder};
use tracing::{debug, error};

/// Decodes comma-separated payloads into string records.
///
/// The record timestamp is read from the configured column as an epoch
/// value. When timestamp parsing is disabled the wall-clock time at decode is
/// used instead. Decoding never fails: undecodable bytes, a missing column or
/// a non-numeric value are logged and the record gets a default timestamp
/// of `0`.
#[derive(Debug, Clone)]
pub struct CsvTimestampDecoder {
    config: CsvDecoderConfig,
    topic_name: String,
}

impl CsvTimestampDecoder {
    /// Create a decoder from an already resolved configuration.
    pub fn new(config: CsvDecoderConfig, topic_name: impl Into<String>) -> Self {
        Self {
            config,
            topic_name: topic_name.into(),
        }
    }

    pub fn config(&self) -> &CsvDecoderConfig {
        &self.config
    }

    /// Decode a raw payload.
    ///
    /// The returned payload is the payload text as-is; only the timestamp is
    /// derived from its columns.
    pub fn decode_payload(&self, payload: &[u8]) -> DecodedRecord<String> {
        let text = match decode_utf8(payload) {
            Ok(text) => text.to_string(),
            Err(e) => {
                error!(
                    topic = %self.topic_name,
                    error = %e,
                    "Unable to decode payload as UTF-8, falling back to lossy decoding"
                );
                String::from_utf8_lossy(payload).into_owned()
            }
        };

        if !self.config.timestamp_parse {
            return DecodedRecord::new(text, now_millis());
        }

        let timestamp = self.resolve_timestamp(&text);
        DecodedRecord::new(text, timestamp)
    }

    fn resolve_timestamp(&self, text: &str) -> i64 {
        let columns = split_columns(text);
        let index = self.config.timestamp_index;

        match parse_timestamp(&columns, index, self.config.timestamp_unit) {
            Ok(timestamp) => {
                debug!(topic = %self.topic_name, index, timestamp, "Resolved record timestamp");
                timestamp
            }
            Err(e) => {
                error!(
                    topic = %self.topic_name,
                    index,
                    error = %e,
                    "Unable to parse timestamp from CSV column, falling back to 0"
                );
                0
            }
        }
    }
}

impl MessageDecoder for CsvTimestampDecoder {
    type Record = String;

    fn init(properties: &DecoderProperties, topic_name: &str) -> Self {
        let config = CsvDecoderConfig::from_properties(properties);
        debug!(
            topic = %topic_name,
            timestamp_index = config.timestamp_index,
            timestamp_parse = config.timestamp_parse,
            timestamp_unit = %config.timestamp_unit,
            "Initialized CSV timestamp decoder"
        );
        Self::new(config, topic_name)
    }

    fn decode(&self, message: &Message) -> DecodedRecord<String> {
        self.decode_payload(message.payload())
    }

    fn topic_name(&self) -> &str {
        &self.topic_name
    }

    fn name(&self) -> &str {
        "csv-timestamp"
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
