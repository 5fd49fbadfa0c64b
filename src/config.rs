//! Decoder configuration.
//!
//! ```
//! use na_doc::{ReadConfig, decode_with, doc, encode_le};
//!
//! let bytes = encode_le(&doc! { "a" => 1i32 }).unwrap();
//! let config = ReadConfig::new().with_max_depth(4).with_trailing_data(true);
//! assert_eq!(decode_with(&bytes, &config).unwrap(), doc! { "a" => 1i32 });
//! ```

/// Nesting depth accepted by [`ReadConfig::default`].
///
/// The encoder applies no limit, so a document nested deeper than this
/// encodes fine but only decodes with a raised
/// [`max_depth`](ReadConfig::max_depth). Decoding recurses once per level;
/// raise the limit only on threads with stack to match.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied while decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadConfig {
    /// Deepest document nesting accepted; the root document is depth 0.
    pub max_depth: usize,
    /// Accept bytes after the root document instead of failing with
    /// [`Error::TrailingData`](crate::Error::TrailingData).
    pub allow_trailing_data: bool,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing_data: false,
        }
    }
}

impl ReadConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_trailing_data(mut self, allow: bool) -> Self {
        self.allow_trailing_data = allow;
        self
    }
}
