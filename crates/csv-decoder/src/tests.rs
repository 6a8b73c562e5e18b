//! Unit tests for the CSV timestamp decoder.

use std::sync::Arc;

use decoder_types::{DecoderProperties, Message, MessageDecoder};

use crate::{
    CsvDecoderConfig, CsvTimestampDecoder, TimestampUnit, CAMUS_MESSAGE_TIMESTAMP_FORMAT,
    CAMUS_MESSAGE_TIMESTAMP_INDEX, CAMUS_MESSAGE_TIMESTAMP_PARSE,
};

/// Tolerance when comparing against the wall clock.
const CLOCK_TOLERANCE_MS: i64 = 5_000;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn decoder_with(pairs: &[(&str, &str)]) -> CsvTimestampDecoder {
    init_logging();
    let props: DecoderProperties = pairs.iter().copied().collect();
    CsvTimestampDecoder::init(&props, "test-topic")
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// ============================================================================
// Timestamp extraction
// ============================================================================

#[test]
fn test_timestamp_from_first_column() {
    let decoder = decoder_with(&[]);
    let record = decoder.decode(&Message::from("1620000000000,foo,bar"));
    assert_eq!(record.timestamp, 1_620_000_000_000);
    assert_eq!(record.payload, "1620000000000,foo,bar");
}

#[test]
fn test_timestamp_from_configured_column() {
    let decoder = decoder_with(&[(CAMUS_MESSAGE_TIMESTAMP_INDEX, "1")]);
    let record = decoder.decode(&Message::from("foo,1620000000000,bar"));
    assert_eq!(record.timestamp, 1_620_000_000_000);
}

#[test]
fn test_whitespace_around_commas_is_ignored() {
    let decoder = decoder_with(&[(CAMUS_MESSAGE_TIMESTAMP_INDEX, "2")]);
    let record = decoder.decode(&Message::from("foo ,  bar , 1620000000000 "));
    assert_eq!(record.timestamp, 1_620_000_000_000);
    assert_eq!(record.payload, "foo ,  bar , 1620000000000 ");
}

#[test]
fn test_timestamp_in_seconds_is_scaled() {
    let decoder = decoder_with(&[(CAMUS_MESSAGE_TIMESTAMP_FORMAT, "unix_seconds")]);
    let record = decoder.decode(&Message::from("1620000000,x"));
    assert_eq!(record.timestamp, 1_620_000_000_000);
}

// ============================================================================
// Fallbacks
// ============================================================================

#[test]
fn test_index_out_of_range_yields_zero() {
    let decoder = decoder_with(&[(CAMUS_MESSAGE_TIMESTAMP_INDEX, "5")]);
    let record = decoder.decode(&Message::from("foo,bar"));
    assert_eq!(record.timestamp, 0);
    assert_eq!(record.payload, "foo,bar");
}

#[test]
fn test_non_numeric_column_yields_zero() {
    let decoder = decoder_with(&[(CAMUS_MESSAGE_TIMESTAMP_INDEX, "1")]);
    let record = decoder.decode(&Message::from("1620000000000,not-a-time"));
    assert_eq!(record.timestamp, 0);
}

#[test]
fn test_empty_payload_yields_zero() {
    let decoder = decoder_with(&[]);
    let record = decoder.decode(&Message::new(Vec::new()));
    assert_eq!(record.timestamp, 0);
    assert_eq!(record.payload, "");
}

#[test]
fn test_non_numeric_index_falls_back_to_first_column() {
    let decoder = decoder_with(&[(CAMUS_MESSAGE_TIMESTAMP_INDEX, "third")]);
    assert_eq!(decoder.config().timestamp_index, 0);

    let record = decoder.decode(&Message::from("1620000000000,foo,1700000000000"));
    assert_eq!(record.timestamp, 1_620_000_000_000);

    let record = decoder.decode(&Message::from("foo,1620000000000"));
    assert_eq!(record.timestamp, 0);
}

#[test]
fn test_negative_index_falls_back_to_first_column() {
    let decoder = decoder_with(&[(CAMUS_MESSAGE_TIMESTAMP_INDEX, "-2")]);
    let record = decoder.decode(&Message::from("1620000000000,foo"));
    assert_eq!(record.timestamp, 1_620_000_000_000);
}

#[test]
fn test_malformed_parse_flag_keeps_parsing_enabled() {
    let decoder = decoder_with(&[(CAMUS_MESSAGE_TIMESTAMP_PARSE, "sometimes")]);
    assert!(decoder.config().timestamp_parse);
    let record = decoder.decode(&Message::from("1620000000000,foo"));
    assert_eq!(record.timestamp, 1_620_000_000_000);
}

#[test]
fn test_invalid_utf8_is_decoded_lossily() {
    let decoder = decoder_with(&[]);
    let mut payload = b"1620000000000,caf".to_vec();
    payload.push(0xE9);
    let record = decoder.decode(&Message::new(payload));
    assert_eq!(record.timestamp, 1_620_000_000_000);
    assert_eq!(record.payload, "1620000000000,caf\u{FFFD}");
}

// ============================================================================
// Timestamp parsing disabled
// ============================================================================

#[test]
fn test_parse_disabled_uses_wall_clock() {
    let decoder = decoder_with(&[
        (CAMUS_MESSAGE_TIMESTAMP_PARSE, "false"),
        (CAMUS_MESSAGE_TIMESTAMP_INDEX, "0"),
    ]);
    let before = now_millis();
    let record = decoder.decode(&Message::from("1620000000000,foo,bar"));
    let after = now_millis();

    assert!(record.timestamp >= before - CLOCK_TOLERANCE_MS);
    assert!(record.timestamp <= after + CLOCK_TOLERANCE_MS);
    assert_eq!(record.payload, "1620000000000,foo,bar");
}

#[test]
fn test_parse_disabled_accepts_any_payload() {
    let decoder = decoder_with(&[(CAMUS_MESSAGE_TIMESTAMP_PARSE, "FALSE")]);
    for payload in ["", "no commas here", ",,,", "ünïcödé,✓"] {
        let before = now_millis();
        let record = decoder.decode(&Message::from(payload));
        assert!(
            (record.timestamp - before).abs() <= CLOCK_TOLERANCE_MS,
            "Timestamp not close to now for payload: {payload:?}"
        );
        assert_eq!(record.payload, payload);
    }
}

// ============================================================================
// Decoder contract
// ============================================================================

#[test]
fn test_payload_round_trips_unchanged() {
    let decoder = decoder_with(&[(CAMUS_MESSAGE_TIMESTAMP_INDEX, "1")]);
    for payload in [
        "a,1620000000000,c",
        "  leading, 1620000000000 ,trailing  ",
        "quoted \"x,y\",1",
        "日本,1620000000000",
    ] {
        let record = decoder.decode(&Message::from(payload));
        assert_eq!(record.payload, payload);
    }
}

#[test]
fn test_metadata_does_not_affect_decoding() {
    let decoder = decoder_with(&[]);
    let message = Message::from("1620000000000,foo")
        .with_topic("other-topic")
        .with_partition(7)
        .with_offset(99)
        .with_timestamp(1);
    let record = decoder.decode(&message);
    assert_eq!(record.timestamp, 1_620_000_000_000);
}

#[test]
fn test_init_records_topic_and_name() {
    let decoder = decoder_with(&[]);
    assert_eq!(decoder.topic_name(), "test-topic");
    assert_eq!(decoder.name(), "csv-timestamp");
}

#[test]
fn test_new_with_explicit_config() {
    let config = CsvDecoderConfig {
        timestamp_index: 2,
        timestamp_parse: true,
        timestamp_unit: TimestampUnit::UnixSeconds,
    };
    let decoder = CsvTimestampDecoder::new(config, "explicit");
    let record = decoder.decode_payload(b"a,b,1620000000");
    assert_eq!(record.timestamp, 1_620_000_000_000);
    assert_eq!(decoder.topic_name(), "explicit");
}

#[test]
fn test_shared_decoder_across_threads() {
    let decoder = Arc::new(decoder_with(&[(CAMUS_MESSAGE_TIMESTAMP_INDEX, "1")]));

    let handles: Vec<_> = (0..8i64)
        .map(|i| {
            let decoder = Arc::clone(&decoder);
            std::thread::spawn(move || {
                (0..100i64)
                    .map(|j| {
                        let ts = 1_620_000_000_000 + i * 1000 + j;
                        let record = decoder.decode(&Message::from(format!("w{i},{ts}").as_str()));
                        (ts, record.timestamp)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (expected, actual) in handle.join().unwrap() {
            assert_eq!(expected, actual);
        }
    }
}
