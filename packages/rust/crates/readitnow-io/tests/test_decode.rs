//! Tests for decode module - strict UTF-8 decoding.

use readitnow_io::{IoError, decode_buffer};

#[test]
fn test_decode_text() -> Result<(), Box<dyn std::error::Error>> {
    let result = decode_buffer("Notes with ünïcode".as_bytes().to_vec())?;
    assert_eq!(result, "Notes with ünïcode");
    Ok(())
}

#[test]
fn test_decode_control_bytes_in_utf8() -> Result<(), Box<dyn std::error::Error>> {
    let result = decode_buffer(b"# Title\nBody\0text".to_vec())?;
    assert_eq!(result, "# Title\nBody\u{0}text");
    Ok(())
}

#[test]
fn test_decode_invalid_utf8_is_rejected() {
    let result = decode_buffer(vec![0x48, 0x65, 0x6c, 0xff, 0x6f]);
    assert!(matches!(result, Err(IoError::Encoding)));
}
