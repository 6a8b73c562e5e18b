//! Decoded record handed back to the host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A decoded payload together with its resolved timestamp.
///
/// Built fresh for every decoded message and handed straight to the host,
/// which uses `timestamp` for time-based partitioning of its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedRecord<R> {
    /// Decoded payload
    pub payload: R,
    /// Record timestamp in milliseconds since epoch
    pub timestamp: i64,
}

impl<R> DecodedRecord<R> {
    pub fn new(payload: R, timestamp: i64) -> Self {
        Self { payload, timestamp }
    }

    pub fn payload(&self) -> &R {
        &self.payload
    }

    /// Timestamp in milliseconds since epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn into_payload(self) -> R {
        self.payload
    }

    /// The timestamp as a UTC datetime, or `None` if it is out of chrono's range.
    pub fn timestamp_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}
