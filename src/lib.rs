//! A self-describing binary format for dynamically typed documents.
//!
//! A [`Document`] maps string keys to [`Value`]s. A value is void, a fixed-width
//! number, a string, a nested document, or a homogeneous array of numbers or
//! strings. Values are reference-counted and copy-on-write.
//!
//! # Wire format
//!
//! Every document, nested ones included, is a self-contained message:
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 3 | magic `NAD` |
//! | 3 | 1 | version `1` |
//! | 4 | 2 | byte order marker `0xFEFF` in the message's order |
//! | 6 | 8 | entry count |
//! | 14 | .. | entries |
//!
//! An entry is `u32 key length | key | u8 tag | payload`. Strings carry a `u32`
//! length, arrays a `u64` element count.
//!
//! # Example
//!
//! ```
//! use na_doc::{BigEndian, decode, doc, encode};
//!
//! let original = doc! {
//!     "a" => 7i32,
//!     "b" => "hi",
//!     "c" => doc! { "x" => 1u8 },
//! };
//! let bytes = encode::<BigEndian>(&original).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), original);
//! ```

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;
pub use zerocopy::NativeEndian;

mod config;
#[cfg(feature = "serde")]
mod de;
mod document;
mod error;
mod kind;
mod macros;
mod read;
#[cfg(feature = "serde")]
mod ser;
mod tag;
mod util;
mod value;
mod write;

pub use config::*;
pub use document::*;
pub use error::*;
pub use kind::*;
pub use read::*;
pub use tag::*;
pub use util::*;
pub use value::*;
pub use write::*;
