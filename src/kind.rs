use crate::{Document, Payload, Tag, Value};

mod private {
    pub trait Sealed {}
}

/// A concrete Rust type that a [`Value`] can hold.
///
/// The mapping from type to [`Tag`] is fixed at compile time: asking for the tag
/// of a type that is not a `Kind` does not compile.
///
/// | Rust type | Tag |
/// |---|---|
/// | `i8`, `i16`, `i32`, `i64` | `Int8` .. `Int64` |
/// | `u8`, `u16`, `u32`, `u64` | `UInt8` .. `UInt64` |
/// | `f32`, `f64` | `Float32`, `Float64` |
/// | `String` | `String` |
/// | [`Document`] | `Document` |
/// | `Vec<T>` for each scalar `T` and for `String` | the matching `*Array` tag |
pub trait Kind: private::Sealed + Clone + PartialEq + Sized + 'static {
    const TAG: Tag;

    #[doc(hidden)]
    fn into_payload(self) -> Payload;

    #[doc(hidden)]
    fn from_payload(payload: &Payload) -> Option<&Self>;

    #[doc(hidden)]
    fn from_payload_mut(payload: &mut Payload) -> Option<&mut Self>;
}

/// Returns the wire tag registered for `T`.
///
/// ```
/// use na_doc::{Document, Tag, tag_of};
///
/// assert_eq!(tag_of::<i32>(), Tag::Int32);
/// assert_eq!(tag_of::<Vec<String>>(), Tag::StringArray);
/// assert_eq!(tag_of::<Document>(), Tag::Document);
/// ```
#[inline]
pub const fn tag_of<T: Kind>() -> Tag {
    T::TAG
}

macro_rules! register_kind {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Kind for $ty {
                const TAG: Tag = Tag::$variant;

                #[inline]
                fn into_payload(self) -> Payload {
                    Payload::$variant(self)
                }

                #[inline]
                fn from_payload(payload: &Payload) -> Option<&Self> {
                    match payload {
                        Payload::$variant(value) => Some(value),
                        _ => None,
                    }
                }

                #[inline]
                fn from_payload_mut(payload: &mut Payload) -> Option<&mut Self> {
                    match payload {
                        Payload::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::new(value)
                }
            }
        )*
    };
}

register_kind!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    String => String,
    Document => Document,
    Vec<i8> => Int8Array,
    Vec<i16> => Int16Array,
    Vec<i32> => Int32Array,
    Vec<i64> => Int64Array,
    Vec<u8> => UInt8Array,
    Vec<u16> => UInt16Array,
    Vec<u32> => UInt32Array,
    Vec<u64> => UInt64Array,
    Vec<f32> => Float32Array,
    Vec<f64> => Float64Array,
    Vec<String> => StringArray,
);

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::new(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn registry_is_injective() {
        let tags = [
            tag_of::<i8>(),
            tag_of::<i16>(),
            tag_of::<i32>(),
            tag_of::<i64>(),
            tag_of::<u8>(),
            tag_of::<u16>(),
            tag_of::<u32>(),
            tag_of::<u64>(),
            tag_of::<f32>(),
            tag_of::<f64>(),
            tag_of::<String>(),
            tag_of::<Document>(),
            tag_of::<Vec<i8>>(),
            tag_of::<Vec<i16>>(),
            tag_of::<Vec<i32>>(),
            tag_of::<Vec<i64>>(),
            tag_of::<Vec<u8>>(),
            tag_of::<Vec<u16>>(),
            tag_of::<Vec<u32>>(),
            tag_of::<Vec<u64>>(),
            tag_of::<Vec<f32>>(),
            tag_of::<Vec<f64>>(),
            tag_of::<Vec<String>>(),
        ];
        let unique: HashSet<Tag> = tags.iter().copied().collect();
        assert_eq!(unique.len(), tags.len());
        assert!(!unique.contains(&Tag::Void));
    }

    #[test]
    fn payload_tag_agrees_with_registry() {
        assert_eq!(7i32.into_payload().tag(), Tag::Int32);
        assert_eq!(vec![1.0f32].into_payload().tag(), Tag::Float32Array);
        assert_eq!(Document::new().into_payload().tag(), Tag::Document);
    }
}
