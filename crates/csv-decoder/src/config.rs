//! Decoder configuration resolved once at initialization.

use crate::parse::{parse_bool, parse_index, parse_unit};
use decoder_types::DecoderProperties;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Property holding the zero-based CSV column that carries the timestamp.
pub const CAMUS_MESSAGE_TIMESTAMP_INDEX: &str = "camus.message.timestamp.index";
pub const DEFAULT_TIMESTAMP_INDEX: &str = "0";

/// Property enabling timestamp extraction. When disabled, records are stamped
/// with the wall-clock time at decode.
pub const CAMUS_MESSAGE_TIMESTAMP_PARSE: &str = "camus.message.timestamp.parse";
pub const DEFAULT_TIMESTAMP_PARSE: &str = "true";

/// Property naming the unit of the epoch value in the timestamp column.
pub const CAMUS_MESSAGE_TIMESTAMP_FORMAT: &str = "camus.message.timestamp.format";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "unix_milliseconds";

/// Unit of the epoch value stored in the timestamp column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampUnit {
    UnixSeconds,
    #[default]
    UnixMilliseconds,
}

impl TimestampUnit {
    /// Property value naming this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestampUnit::UnixSeconds => "unix_seconds",
            TimestampUnit::UnixMilliseconds => "unix_milliseconds",
        }
    }

    /// Convert a value in this unit to milliseconds, or `None` on overflow.
    pub fn to_millis(self, value: i64) -> Option<i64> {
        match self {
            TimestampUnit::UnixSeconds => value.checked_mul(1000),
            TimestampUnit::UnixMilliseconds => Some(value),
        }
    }
}

impl std::fmt::Display for TimestampUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for [`crate::CsvTimestampDecoder`].
///
/// Immutable once built. Malformed property values never fail construction;
/// they are logged and replaced by the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvDecoderConfig {
    /// Zero-based column holding the timestamp
    pub timestamp_index: usize,
    /// Whether to extract the timestamp from the record at all
    pub timestamp_parse: bool,
    /// Unit of the value in the timestamp column
    pub timestamp_unit: TimestampUnit,
}

impl Default for CsvDecoderConfig {
    fn default() -> Self {
        Self {
            timestamp_index: 0,
            timestamp_parse: true,
            timestamp_unit: TimestampUnit::UnixMilliseconds,
        }
    }
}

impl CsvDecoderConfig {
    /// Resolve configuration from host properties, falling back to defaults
    /// for absent or malformed values.
    pub fn from_properties(properties: &DecoderProperties) -> Self {
        let defaults = Self::default();

        let timestamp_index = parse_index(
            CAMUS_MESSAGE_TIMESTAMP_INDEX,
            properties.get_or(CAMUS_MESSAGE_TIMESTAMP_INDEX, DEFAULT_TIMESTAMP_INDEX),
        )
        .unwrap_or_else(|e| {
            error!(error = %e, "Unable to parse index, falling back to default 0");
            defaults.timestamp_index
        });

        let timestamp_parse = parse_bool(
            CAMUS_MESSAGE_TIMESTAMP_PARSE,
            properties.get_or(CAMUS_MESSAGE_TIMESTAMP_PARSE, DEFAULT_TIMESTAMP_PARSE),
        )
        .unwrap_or_else(|e| {
            error!(error = %e, "Unable to parse boolean, falling back to default true");
            defaults.timestamp_parse
        });

        let timestamp_unit = parse_unit(
            CAMUS_MESSAGE_TIMESTAMP_FORMAT,
            properties.get_or(CAMUS_MESSAGE_TIMESTAMP_FORMAT, DEFAULT_TIMESTAMP_FORMAT),
        )
        .unwrap_or_else(|e| {
            error!(error = %e, "Unable to parse timestamp format, falling back to default unix_milliseconds");
            defaults.timestamp_unit
        });

        Self {
            timestamp_index,
            timestamp_parse,
            timestamp_unit,
        }
    }
}
