//! [`serde::Deserialize`] for the document model.
//!
//! Each serde primitive becomes the kind of the same width, unit and `None`
//! become void, maps become documents. Sequences must be homogeneous:
//!
//! - one scalar or string kind throughout: that kind's array
//! - integers of mixed kinds: `int64[]`, or `uint64[]` if a value exceeds
//!   `i64::MAX` and none is negative
//! - numbers including a float: `float64[]`
//! - empty: `int64[]`
//!
//! Anything else, including sequences of maps, is rejected.

use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, SeqAccess, Visitor},
};

use crate::{Document, Kind, Payload, Tag, Value};

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, string, unit, homogeneous sequence or string-keyed map")
    }

    fn visit_i8<E: de::Error>(self, v: i8) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_i16<E: de::Error>(self, v: i16) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_i32<E: de::Error>(self, v: i32) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_u8<E: de::Error>(self, v: u8) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_u16<E: de::Error>(self, v: u16) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_u32<E: de::Error>(self, v: u32) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_f32<E: de::Error>(self, v: f32) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::void())
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::void())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        collect_array(&items).map_err(de::Error::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Value, A::Error> {
        DocumentVisitor.visit_map(map).map(Value::from)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string-keyed map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Document, A::Error> {
        let mut document = Document::with_capacity(map.size_hint().unwrap_or(0).min(4096));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            document.set(key, value);
        }
        Ok(document)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

fn same_kind<T: Kind>(items: &[Value]) -> Vec<T> {
    items
        .iter()
        .filter_map(|item| item.read_as::<T>().ok().cloned())
        .collect()
}

enum Number {
    Int(i128),
    Float(f64),
}

fn number(value: &Value) -> Option<Number> {
    Some(match value.payload()? {
        Payload::Int8(v) => Number::Int(*v as i128),
        Payload::Int16(v) => Number::Int(*v as i128),
        Payload::Int32(v) => Number::Int(*v as i128),
        Payload::Int64(v) => Number::Int(*v as i128),
        Payload::UInt8(v) => Number::Int(*v as i128),
        Payload::UInt16(v) => Number::Int(*v as i128),
        Payload::UInt32(v) => Number::Int(*v as i128),
        Payload::UInt64(v) => Number::Int(*v as i128),
        Payload::Float32(v) => Number::Float(*v as f64),
        Payload::Float64(v) => Number::Float(*v),
        _ => return None,
    })
}

fn collect_array(items: &[Value]) -> Result<Value, &'static str> {
    let Some(first) = items.first() else {
        return Ok(Value::new(Vec::<i64>::new()));
    };
    let tag = first.tag();
    if items.iter().all(|item| item.tag() == tag) {
        macro_rules! homogeneous {
            ($($variant:ident => $ty:ty),* $(,)?) => {
                match tag {
                    $(Tag::$variant => return Ok(Value::new(same_kind::<$ty>(items))),)*
                    _ => {}
                }
            };
        }
        homogeneous!(
            Int8 => i8,
            Int16 => i16,
            Int32 => i32,
            Int64 => i64,
            UInt8 => u8,
            UInt16 => u16,
            UInt32 => u32,
            UInt64 => u64,
            Float32 => f32,
            Float64 => f64,
            String => String,
        );
    }

    let Some(numbers) = items.iter().map(number).collect::<Option<Vec<_>>>() else {
        return Err("sequence elements must all be numbers or all be strings");
    };
    if numbers.iter().any(|n| matches!(n, Number::Float(_))) {
        let floats = numbers
            .iter()
            .map(|n| match *n {
                Number::Int(v) => v as f64,
                Number::Float(v) => v,
            })
            .collect::<Vec<f64>>();
        return Ok(Value::new(floats));
    }
    let ints = numbers
        .iter()
        .filter_map(|n| match *n {
            Number::Int(v) => Some(v),
            Number::Float(_) => None,
        })
        .collect::<Vec<i128>>();
    if let Ok(signed) = ints.iter().map(|&v| i64::try_from(v)).collect::<Result<Vec<_>, _>>() {
        return Ok(Value::new(signed));
    }
    if let Ok(unsigned) = ints.iter().map(|&v| u64::try_from(v)).collect::<Result<Vec<_>, _>>() {
        return Ok(Value::new(unsigned));
    }
    Err("integer sequence mixes negative values with values above i64::MAX")
}
