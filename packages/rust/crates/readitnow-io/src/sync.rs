//! Bounded synchronous text reads.

use std::fs as std_fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::decode::decode_buffer;
use crate::error::IoError;

/// Read text from a regular file with size and encoding checks.
///
/// # Arguments
/// * `path` - Path to the file
/// * `max_bytes` - Maximum file size in bytes
///
/// # Returns
/// Decoded text content or an error.
///
/// # Errors
/// `IoError::NotFound` when the path does not exist, `IoError::TooLarge`
/// above `max_bytes`, `IoError::Encoding` for undecodable content,
/// `IoError::System` for anything else (including paths that are not regular
/// files).
///
/// # Example
///
/// ```rust,ignore
/// use readitnow_io::read_text_safe;
///
/// let content = read_text_safe("Inbox/article.md", 1024 * 1024)?;
/// ```
pub fn read_text_safe<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata = std_fs::metadata(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => IoError::NotFound(path.to_string_lossy().to_string()),
        _ => IoError::System(err),
    })?;

    if !metadata.is_file() {
        return Err(IoError::System(std::io::Error::new(
            ErrorKind::InvalidInput,
            format!("not a regular file: {}", path.display()),
        )));
    }

    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = std_fs::File::open(path)?;
    let capacity = usize::try_from(metadata.len()).unwrap_or_default();
    let mut buffer = Vec::with_capacity(capacity);
    file.read_to_end(&mut buffer)?;

    decode_buffer(buffer)
}
