// bcpack — a lossless byte-stream compressor around a 16-opcode container format

pub mod cli;
pub mod compress;
pub mod container;
pub mod decompress;
pub mod dict;
pub mod error;
pub mod io;
pub mod matchers;
pub mod opcode;
pub mod planner;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level convenience re-exports for the most common API entry points.
// ─────────────────────────────────────────────────────────────────────────────

/// One-shot compression of an in-memory buffer into a complete container.
pub use compress::compress;
/// One-shot decompression of a complete container back to its original bytes.
pub use decompress::decompress;

/// Error type for container decoding.
pub use error::DecodeError;
/// Error type for the seekable-buffer I/O shim.
pub use error::IoError;

/// The opcode record type and its sixteen kinds.
pub use opcode::{Kind, Opcode};

/// Seekable in-memory buffer used for both the input and the growing output.
pub use io::{MemBuffer, SeekableBuffer};

/// Dictionary table used by the matchers and populated by the builder.
pub use dict::DictTable;
