//! Best-effort parsing helpers.
//!
//! Each helper reports failure through [`DecodeError`] and leaves the
//! fallback to the caller.

use crate::config::TimestampUnit;
use decoder_types::{DecodeError, Result};

/// Decode a payload as UTF-8.
pub fn decode_utf8(payload: &[u8]) -> Result<&str> {
    std::str::from_utf8(payload).map_err(|e| DecodeError::Encoding(e.to_string()))
}

/// Parse a boolean property. Accepts `true`/`false` in any case.
pub fn parse_bool(key: &str, value: &str) -> Result<bool> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(DecodeError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// Parse a zero-based column index property.
pub fn parse_index(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| DecodeError::InvalidIndex {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Parse a timestamp unit property (`unix_seconds` or `unix_milliseconds`).
pub fn parse_unit(key: &str, value: &str) -> Result<TimestampUnit> {
    match value.trim().to_ascii_lowercase().as_str() {
        "unix_seconds" => Ok(TimestampUnit::UnixSeconds),
        "unix_milliseconds" => Ok(TimestampUnit::UnixMilliseconds),
        _ => Err(DecodeError::InvalidFormat {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Split a CSV record on commas, trimming ASCII whitespace around each field.
///
/// Quoting is not interpreted; a comma always separates fields. Non-ASCII
/// whitespace such as U+00A0 is kept as part of the field.
pub fn split_columns(text: &str) -> Vec<&str> {
    text.split(',')
        .map(|field| field.trim_matches(|c: char| c.is_ascii_whitespace()))
        .collect()
}

/// Parse the epoch value at `index` and convert it to milliseconds.
pub fn parse_timestamp(columns: &[&str], index: usize, unit: TimestampUnit) -> Result<i64> {
    let value = columns.get(index).ok_or(DecodeError::MissingColumn {
        index,
        columns: columns.len(),
    })?;

    let parsed = value
        .parse::<i64>()
        .map_err(|e| DecodeError::InvalidTimestamp {
            value: value.to_string(),
            message: e.to_string(),
        })?;

    unit.to_millis(parsed)
        .ok_or_else(|| DecodeError::InvalidTimestamp {
            value: value.to_string(),
            message: format!("overflow converting {unit} to milliseconds"),
        })
}
