//! Message decoder contract shared between decoders and the hosts that drive them.
//!
//! A host framework (the ETL job that owns the Kafka consumer, partitioning and
//! output writers) resolves its configuration into [`DecoderProperties`],
//! initializes a [`MessageDecoder`] once per topic and then calls
//! [`MessageDecoder::decode`] for every [`Message`] it reads.
//!
//! # Architecture
//!
//! ```text
//! host config  → DecoderProperties → MessageDecoder::init(props, topic)
//! Kafka record → Message           → MessageDecoder::decode → DecodedRecord
//! ```
//!
//! # Modules
//!
//! - [`decoder`] - The `MessageDecoder` trait
//! - [`message`] - Raw message with its Kafka metadata
//! - [`record`] - Decoded payload plus resolved timestamp
//! - [`properties`] - String key/value configuration handed over by the host
//! - [`error`] - Error taxonomy for best-effort decoding steps

pub mod decoder;
pub mod error;
pub mod message;
pub mod properties;
pub mod record;

// Re-export main types for convenient access
pub use decoder::MessageDecoder;
pub use error::{DecodeError, Result};
pub use message::Message;
pub use properties::DecoderProperties;
pub use record::DecodedRecord;
