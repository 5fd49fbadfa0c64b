use std::fmt::{self, Display};

use crate::Error;

/// The one-byte wire identifier of a value's kind.
///
/// Discriminants are part of format version 1 and never change. Arrays of
/// documents have no tag in this version.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Tag {
    Void = 0,
    Int8 = 1,
    Int16 = 2,
    Int32 = 3,
    Int64 = 4,
    UInt8 = 5,
    UInt16 = 6,
    UInt32 = 7,
    UInt64 = 8,
    Float32 = 9,
    Float64 = 10,
    String = 11,
    Document = 12,
    Int8Array = 13,
    Int16Array = 14,
    Int32Array = 15,
    Int64Array = 16,
    UInt8Array = 17,
    UInt16Array = 18,
    UInt32Array = 19,
    UInt64Array = 20,
    Float32Array = 21,
    Float64Array = 22,
    StringArray = 23,
}

impl Tag {
    /// Every tag, in discriminant order.
    pub const ALL: [Tag; 24] = [
        Tag::Void,
        Tag::Int8,
        Tag::Int16,
        Tag::Int32,
        Tag::Int64,
        Tag::UInt8,
        Tag::UInt16,
        Tag::UInt32,
        Tag::UInt64,
        Tag::Float32,
        Tag::Float64,
        Tag::String,
        Tag::Document,
        Tag::Int8Array,
        Tag::Int16Array,
        Tag::Int32Array,
        Tag::Int64Array,
        Tag::UInt8Array,
        Tag::UInt16Array,
        Tag::UInt32Array,
        Tag::UInt64Array,
        Tag::Float32Array,
        Tag::Float64Array,
        Tag::StringArray,
    ];

    /// Looks up the tag for a raw byte, or `None` if no kind is registered for it.
    ///
    /// # Example
    ///
    /// ```
    /// use na_doc::Tag;
    ///
    /// assert_eq!(Tag::from_u8(3), Some(Tag::Int32));
    /// assert_eq!(Tag::from_u8(0xFF), None);
    /// ```
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        if (value as usize) < Self::ALL.len() {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Diagnostic name of the kind. Never written to the wire.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Void => "void",
            Tag::Int8 => "int8",
            Tag::Int16 => "int16",
            Tag::Int32 => "int32",
            Tag::Int64 => "int64",
            Tag::UInt8 => "uint8",
            Tag::UInt16 => "uint16",
            Tag::UInt32 => "uint32",
            Tag::UInt64 => "uint64",
            Tag::Float32 => "float32",
            Tag::Float64 => "float64",
            Tag::String => "string",
            Tag::Document => "document",
            Tag::Int8Array => "int8[]",
            Tag::Int16Array => "int16[]",
            Tag::Int32Array => "int32[]",
            Tag::Int64Array => "int64[]",
            Tag::UInt8Array => "uint8[]",
            Tag::UInt16Array => "uint16[]",
            Tag::UInt32Array => "uint32[]",
            Tag::UInt64Array => "uint64[]",
            Tag::Float32Array => "float32[]",
            Tag::Float64Array => "float64[]",
            Tag::StringArray => "string[]",
        }
    }

    /// Returns `true` for the fixed-width numeric kinds.
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::UInt8
                | Self::UInt16
                | Self::UInt32
                | Self::UInt64
                | Self::Float32
                | Self::Float64
        )
    }

    /// Returns `true` for the homogeneous array kinds.
    pub const fn is_array(self) -> bool {
        self.element().is_some()
    }

    /// The element kind of an array tag.
    ///
    /// ```
    /// use na_doc::Tag;
    ///
    /// assert_eq!(Tag::Float64Array.element(), Some(Tag::Float64));
    /// assert_eq!(Tag::String.element(), None);
    /// ```
    pub const fn element(self) -> Option<Tag> {
        match self {
            Tag::Int8Array => Some(Tag::Int8),
            Tag::Int16Array => Some(Tag::Int16),
            Tag::Int32Array => Some(Tag::Int32),
            Tag::Int64Array => Some(Tag::Int64),
            Tag::UInt8Array => Some(Tag::UInt8),
            Tag::UInt16Array => Some(Tag::UInt16),
            Tag::UInt32Array => Some(Tag::UInt32),
            Tag::UInt64Array => Some(Tag::UInt64),
            Tag::Float32Array => Some(Tag::Float32),
            Tag::Float64Array => Some(Tag::Float64),
            Tag::StringArray => Some(Tag::String),
            _ => None,
        }
    }

    /// The array tag whose elements are of this kind, if the format has one.
    pub const fn array_of(self) -> Option<Tag> {
        match self {
            Tag::Int8 => Some(Tag::Int8Array),
            Tag::Int16 => Some(Tag::Int16Array),
            Tag::Int32 => Some(Tag::Int32Array),
            Tag::Int64 => Some(Tag::Int64Array),
            Tag::UInt8 => Some(Tag::UInt8Array),
            Tag::UInt16 => Some(Tag::UInt16Array),
            Tag::UInt32 => Some(Tag::UInt32Array),
            Tag::UInt64 => Some(Tag::UInt64Array),
            Tag::Float32 => Some(Tag::Float32Array),
            Tag::Float64 => Some(Tag::Float64Array),
            Tag::String => Some(Tag::StringArray),
            _ => None,
        }
    }

    /// Wire width of a scalar kind in bytes.
    pub const fn width(self) -> Option<usize> {
        match self {
            Tag::Int8 | Tag::UInt8 => Some(1),
            Tag::Int16 | Tag::UInt16 => Some(2),
            Tag::Int32 | Tag::UInt32 | Tag::Float32 => Some(4),
            Tag::Int64 | Tag::UInt64 | Tag::Float64 => Some(8),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Tag {
    type Error = Error;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tag::from_u8(value).ok_or(Error::UnsupportedTag(value))
    }
}

impl From<Tag> for u8 {
    #[inline]
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
