#![allow(clippy::doc_markdown)]

//! readitnow-io - Safe file I/O for ReadItNow note files
//!
//! Every note the vault engine touches goes through this crate: reads are
//! bounded and reject non-UTF-8 payloads, writes replace the target
//! in a single rename so a reader never observes a half-written note.
//!
//! # Architecture
//!
//! ```text
//! readitnow-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── decode.rs   # Strict UTF-8 decoding
//! ├── sync.rs     # Bounded text reads
//! └── atomic.rs   # Temp-file + rename writes
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use readitnow_io::{atomic_write_text, read_text_safe};
//!
//! let content = read_text_safe("note.md", 1024 * 1024)?;
//! atomic_write_text("note.md", &format!("{content}\n\n[[readitnow/read]]"))?;
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod atomic;
mod decode;
mod error;
mod sync;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use atomic::atomic_write_text;
pub use decode::decode_buffer;
pub use error::IoError;
pub use sync::read_text_safe;

