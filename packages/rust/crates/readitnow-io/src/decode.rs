//! Strict text decoding for note bytes.

use crate::error::IoError;

/// Decode bytes to a UTF-8 `String`.
///
/// Notes are rewritten in place by the read-marker mutations, so a lossy
/// decode would silently corrupt the file on the next write. Invalid UTF-8
/// is rejected instead. Any valid UTF-8 is accepted, control characters
/// included.
///
/// # Errors
/// Returns `IoError::Encoding` when the bytes are not valid UTF-8.
pub fn decode_buffer(buffer: Vec<u8>) -> Result<String, IoError> {
    String::from_utf8(buffer).map_err(|_| IoError::Encoding)
}
