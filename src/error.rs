//! Error types for encoding, decoding and value access.
//!
//! Every fallible operation in this crate returns [`Result`], whose error is
//! the single [`Error`] enum below.
//!
//! # Example
//!
//! ```
//! use na_doc::{Error, Result, decode};
//!
//! fn try_parse(data: &[u8]) -> Result<()> {
//!     match decode(data) {
//!         Ok(doc) => {
//!             println!("parsed {} entries", doc.len());
//!             Ok(())
//!         }
//!         Err(e @ Error::TruncatedBuffer { .. }) => {
//!             println!("data was truncated");
//!             Err(e)
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! assert!(try_parse(&[]).is_err());
//! ```

use std::str::Utf8Error;

use thiserror::Error;

use crate::Tag;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The document header is not one this crate understands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("bad magic bytes {0:02x?}")]
    BadMagic([u8; 3]),

    #[error("unsupported format version {0}")]
    UnsupportedVersion(u8),

    #[error("unrecognized byte order marker {0:02x?}")]
    BadByteOrderMarker([u8; 2]),
}

/// This type represents all possible errors that can occur when decoding,
/// encoding, or accessing values.
#[derive(Debug, Error)]
pub enum Error {
    /// A document header (root or nested) failed validation.
    #[error("invalid document header: {0}")]
    Format(#[from] FormatError),

    /// A read would run past the end of the input.
    ///
    /// `offset` is where the read started, `needed` how many bytes it wanted.
    #[error(
        "unexpected end of input at offset {offset}: needed {needed} bytes, {remaining} remaining"
    )]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A tag byte with no registered kind.
    #[error("unsupported tag {0:#04x}")]
    UnsupportedTag(u8),

    /// The requested kind is not the stored kind.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: Tag, actual: Tag },

    /// Typed access on a void value.
    #[error("cannot access void value as {expected}")]
    EmptyValueAccess { expected: Tag },

    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// A key or string payload is not valid UTF-8.
    #[error("invalid UTF-8 at offset {offset}")]
    InvalidUtf8 {
        offset: usize,
        #[source]
        source: Utf8Error,
    },

    /// Documents nest deeper than the configured limit.
    #[error("nesting depth exceeds limit of {0}")]
    DepthLimitExceeded(usize),

    /// Bytes remain after the root document.
    #[error("trailing data after end of input: {0} bytes remaining")]
    TrailingData(usize),

    /// A key or string is too long for its 32-bit length prefix.
    #[error("length too long: {0}")]
    LengthOverflow(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
