//! Raw Kafka message handed to a decoder.

/// A raw message as read from a Kafka topic.
///
/// Decoders only look at the payload. The Kafka metadata is carried along so a
/// host can build a `Message` straight from whatever its consumer returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Raw payload bytes
    pub payload: Vec<u8>,
    /// Kafka topic name (if known)
    pub topic: Option<String>,
    /// Kafka partition number
    pub partition: i32,
    /// Kafka offset within the partition
    pub offset: i64,
    /// Message key (if any)
    pub key: Option<Vec<u8>>,
    /// Broker timestamp in milliseconds since epoch (if available)
    pub timestamp: Option<i64>,
}

impl Message {
    /// Create a message holding only a payload.
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            ..Default::default()
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_partition(mut self, partition: i32) -> Self {
        self.partition = partition;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp_millis: i64) -> Self {
        self.timestamp = Some(timestamp_millis);
        self
    }

    /// Raw payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl From<&str> for Message {
    fn from(payload: &str) -> Self {
        Self::new(payload.as_bytes())
    }
}
