//! Decoder abstraction driven by the host.

use crate::message::Message;
use crate::properties::DecoderProperties;
use crate::record::DecodedRecord;

/// Trait for decoders that turn raw Kafka messages into records the host can write.
///
/// The host calls [`MessageDecoder::init`] once per job and topic, then
/// [`MessageDecoder::decode`] for every message. Decoding is synchronous and
/// infallible from the host's point of view: a decoder that cannot make
/// sense of part of a message logs it and falls back to a default.
///
/// Implementations hold only configuration fixed at `init`, so a single
/// instance may be shared between worker threads.
pub trait MessageDecoder: Send + Sync {
    /// Decoded payload type
    type Record;

    /// Create a decoder from the host's properties for the given topic.
    fn init(properties: &DecoderProperties, topic_name: &str) -> Self
    where
        Self: Sized;

    /// Decode a single message.
    fn decode(&self, message: &Message) -> DecodedRecord<Self::Record>;

    /// Topic this decoder was initialized for.
    fn topic_name(&self) -> &str;

    /// Get a human-readable name for this decoder
    fn name(&self) -> &str;
}
