//! [`serde::Serialize`] for the document model.
//!
//! Void serializes as unit, documents as maps in document order, arrays as
//! sequences. The binary format itself does not go through serde.

use serde::{Serialize, Serializer};

use crate::{Document, Payload, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.payload() {
            Some(payload) => payload.serialize(serializer),
            None => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Int8(v) => serializer.serialize_i8(*v),
            Payload::Int16(v) => serializer.serialize_i16(*v),
            Payload::Int32(v) => serializer.serialize_i32(*v),
            Payload::Int64(v) => serializer.serialize_i64(*v),
            Payload::UInt8(v) => serializer.serialize_u8(*v),
            Payload::UInt16(v) => serializer.serialize_u16(*v),
            Payload::UInt32(v) => serializer.serialize_u32(*v),
            Payload::UInt64(v) => serializer.serialize_u64(*v),
            Payload::Float32(v) => serializer.serialize_f32(*v),
            Payload::Float64(v) => serializer.serialize_f64(*v),
            Payload::String(v) => serializer.serialize_str(v),
            Payload::Document(v) => v.serialize(serializer),
            Payload::Int8Array(v) => serializer.collect_seq(v),
            Payload::Int16Array(v) => serializer.collect_seq(v),
            Payload::Int32Array(v) => serializer.collect_seq(v),
            Payload::Int64Array(v) => serializer.collect_seq(v),
            Payload::UInt8Array(v) => serializer.collect_seq(v),
            Payload::UInt16Array(v) => serializer.collect_seq(v),
            Payload::UInt32Array(v) => serializer.collect_seq(v),
            Payload::UInt64Array(v) => serializer.collect_seq(v),
            Payload::Float32Array(v) => serializer.collect_seq(v),
            Payload::Float64Array(v) => serializer.collect_seq(v),
            Payload::StringArray(v) => serializer.collect_seq(v),
        }
    }
}

impl Serialize for Document {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
