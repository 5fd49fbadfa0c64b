use na_doc::{
    Error, FormatError, HEADER_SIZE, ReadConfig, Tag, Value, decode, decode_with, doc, encode_be,
    encode_le,
};

// ==================== Helper Functions ====================

fn header_be(count: u64) -> Vec<u8> {
    let mut data = b"NAD\x01\xFE\xFF".to_vec();
    data.extend_from_slice(&count.to_be_bytes());
    data
}

fn nested(depth: usize) -> na_doc::Document {
    let mut d = doc! { "leaf" => 1u8 };
    for _ in 0..depth {
        d = doc! { "d" => d };
    }
    d
}

// ==================== Header ====================

#[test]
fn test_empty_slice() {
    match decode(&[]) {
        Err(Error::TruncatedBuffer {
            offset: 0,
            needed: 3,
            remaining: 0,
        }) => {}
        other => panic!("expected TruncatedBuffer, got {other:?}"),
    }
}

#[test]
fn test_bad_magic() {
    let mut data = header_be(0);
    data[0] = b'X';
    match decode(&data) {
        Err(Error::Format(FormatError::BadMagic(magic))) => assert_eq!(&magic, b"XAD"),
        other => panic!("expected BadMagic, got {other:?}"),
    }
}

#[test]
fn test_unsupported_version() {
    let mut data = header_be(0);
    data[3] = 2;
    assert!(matches!(
        decode(&data),
        Err(Error::Format(FormatError::UnsupportedVersion(2)))
    ));
}

#[test]
fn test_bad_byte_order_marker() {
    let mut data = header_be(0);
    data[4] = 0x12;
    data[5] = 0x34;
    assert!(matches!(
        decode(&data),
        Err(Error::Format(FormatError::BadByteOrderMarker([0x12, 0x34])))
    ));
}

#[test]
fn test_bad_nested_header() {
    let mut data = encode_be(&doc! { "c" => doc! {} }).unwrap();
    let nested_at = HEADER_SIZE + 4 + 1 + 1;
    data[nested_at] = 0;
    assert!(matches!(
        decode(&data),
        Err(Error::Format(FormatError::BadMagic(_)))
    ));
}

// ==================== Entries ====================

#[test]
fn test_unsupported_tag() {
    let mut data = header_be(1);
    data.extend_from_slice(&[0, 0, 0, 1, b'k', 0xFF]);
    assert!(matches!(decode(&data), Err(Error::UnsupportedTag(0xFF))));

    let mut data = header_be(1);
    data.extend_from_slice(&[0, 0, 0, 1, b'k', 24]);
    assert!(matches!(decode(&data), Err(Error::UnsupportedTag(24))));
}

#[test]
fn test_invalid_utf8_key() {
    let mut data = header_be(1);
    data.extend_from_slice(&[0, 0, 0, 2, 0xC3, 0x28, Tag::Void as u8]);
    match decode(&data) {
        Err(Error::InvalidUtf8 { offset, .. }) => assert_eq!(offset, HEADER_SIZE + 4),
        other => panic!("expected InvalidUtf8, got {other:?}"),
    }
}

#[test]
fn test_invalid_utf8_string_value() {
    let mut data = header_be(1);
    data.extend_from_slice(&[0, 0, 0, 1, b's', Tag::String as u8, 0, 0, 0, 1, 0xFF]);
    assert!(matches!(decode(&data), Err(Error::InvalidUtf8 { .. })));
}

#[test]
fn test_key_length_beyond_input() {
    let mut data = header_be(1);
    data.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF, b'k']);
    assert!(matches!(decode(&data), Err(Error::TruncatedBuffer { .. })));
}

#[test]
fn test_entry_count_beyond_input() {
    let mut data = encode_be(&doc! { "a" => 1u8 }).unwrap();
    data[6..HEADER_SIZE].copy_from_slice(&2u64.to_be_bytes());
    assert!(matches!(decode(&data), Err(Error::TruncatedBuffer { .. })));
}

// ==================== Truncation ====================

#[test]
fn test_every_prefix_fails_cleanly() {
    let d = doc! {
        "a" => 7i32,
        "b" => "hi",
        "c" => doc! { "x" => 1u8, "ys" => vec![String::from("y")] },
        "v" => Value::void(),
        "f" => vec![1.5f64, 2.5],
    };
    for bytes in [encode_be(&d).unwrap(), encode_le(&d).unwrap()] {
        assert!(decode(&bytes).is_ok());
        for cut in 0..bytes.len() {
            match decode(&bytes[..cut]) {
                Err(Error::TruncatedBuffer { .. }) | Err(Error::Format(_)) => {}
                other => panic!("prefix of {cut} bytes: unexpected {other:?}"),
            }
        }
    }
}

// ==================== Config ====================

#[test]
fn test_trailing_data() {
    let mut data = encode_be(&doc! { "a" => 1u8 }).unwrap();
    data.extend_from_slice(&[0xAB, 0xCD]);
    assert!(matches!(decode(&data), Err(Error::TrailingData(2))));

    let config = ReadConfig::new().with_trailing_data(true);
    assert_eq!(decode_with(&data, &config).unwrap(), doc! { "a" => 1u8 });
}

#[test]
fn test_depth_limit() {
    let bytes = encode_be(&nested(8)).unwrap();

    let config = ReadConfig::new().with_max_depth(8);
    assert_eq!(decode_with(&bytes, &config).unwrap(), nested(8));

    let config = ReadConfig::new().with_max_depth(7);
    assert!(matches!(
        decode_with(&bytes, &config),
        Err(Error::DepthLimitExceeded(7))
    ));
}

#[test]
fn test_default_depth_limit_stops_deep_input() {
    let bytes = encode_le(&nested(na_doc::DEFAULT_MAX_DEPTH + 1)).unwrap();
    assert!(matches!(
        decode(&bytes),
        Err(Error::DepthLimitExceeded(na_doc::DEFAULT_MAX_DEPTH))
    ));
}

#[test]
fn test_default_depth_limit_accepts_its_own_depth() {
    let d = nested(na_doc::DEFAULT_MAX_DEPTH);
    assert_eq!(decode(&encode_le(&d).unwrap()).unwrap(), d);
    assert_eq!(decode(&encode_be(&d).unwrap()).unwrap(), d);
}

#[test]
fn test_encoding_past_default_depth_needs_raised_limit() {
    let d = nested(na_doc::DEFAULT_MAX_DEPTH + 1);
    let bytes = encode_be(&d).unwrap();
    assert!(matches!(
        decode(&bytes),
        Err(Error::DepthLimitExceeded(_))
    ));

    let config = ReadConfig::new().with_max_depth(na_doc::DEFAULT_MAX_DEPTH + 1);
    assert_eq!(decode_with(&bytes, &config).unwrap(), d);
}

// ==================== Display ====================

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::UnsupportedTag(0x2a).to_string(),
        "unsupported tag 0x2a"
    );
    assert_eq!(
        Error::TypeMismatch {
            expected: Tag::Int32,
            actual: Tag::String
        }
        .to_string(),
        "type mismatch: expected int32, found string"
    );
    assert_eq!(
        Error::KeyNotFound("k".into()).to_string(),
        "key not found: \"k\""
    );
    assert_eq!(
        Error::from(FormatError::UnsupportedVersion(9)).to_string(),
        "invalid document header: unsupported format version 9"
    );
}
