use crate::{Document, Tag};

/// The typed content behind a non-void [`Value`](crate::Value).
///
/// Obtained through [`Value::payload`](crate::Value::payload) for exhaustive
/// matching. Equality is structural; floats compare with `==`, so `NaN` is
/// never equal to itself.
#[derive(Clone, PartialEq, Debug)]
pub enum Payload {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
    Document(Document),
    Int8Array(Vec<i8>),
    Int16Array(Vec<i16>),
    Int32Array(Vec<i32>),
    Int64Array(Vec<i64>),
    UInt8Array(Vec<u8>),
    UInt16Array(Vec<u16>),
    UInt32Array(Vec<u32>),
    UInt64Array(Vec<u64>),
    Float32Array(Vec<f32>),
    Float64Array(Vec<f64>),
    StringArray(Vec<String>),
}

impl Payload {
    #[inline]
    pub fn tag(&self) -> Tag {
        match self {
            Payload::Int8(_) => Tag::Int8,
            Payload::Int16(_) => Tag::Int16,
            Payload::Int32(_) => Tag::Int32,
            Payload::Int64(_) => Tag::Int64,
            Payload::UInt8(_) => Tag::UInt8,
            Payload::UInt16(_) => Tag::UInt16,
            Payload::UInt32(_) => Tag::UInt32,
            Payload::UInt64(_) => Tag::UInt64,
            Payload::Float32(_) => Tag::Float32,
            Payload::Float64(_) => Tag::Float64,
            Payload::String(_) => Tag::String,
            Payload::Document(_) => Tag::Document,
            Payload::Int8Array(_) => Tag::Int8Array,
            Payload::Int16Array(_) => Tag::Int16Array,
            Payload::Int32Array(_) => Tag::Int32Array,
            Payload::Int64Array(_) => Tag::Int64Array,
            Payload::UInt8Array(_) => Tag::UInt8Array,
            Payload::UInt16Array(_) => Tag::UInt16Array,
            Payload::UInt32Array(_) => Tag::UInt32Array,
            Payload::UInt64Array(_) => Tag::UInt64Array,
            Payload::Float32Array(_) => Tag::Float32Array,
            Payload::Float64Array(_) => Tag::Float64Array,
            Payload::StringArray(_) => Tag::StringArray,
        }
    }

    /// Clones the payload with no sharing left anywhere below it.
    ///
    /// Only documents differ from `clone`: their values are deep-cloned too.
    pub fn deep_clone(&self) -> Self {
        match self {
            Payload::Document(document) => Payload::Document(document.deep_clone()),
            other => other.clone(),
        }
    }
}
