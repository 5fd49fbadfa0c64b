use std::{fmt, sync::Arc};

use crate::{Error, Kind, Result, Tag, cold_path};

mod payload;

pub use payload::*;

/// A dynamically typed, reference-counted value.
///
/// A `Value` is either void or a shared handle to one [`Payload`]. `clone` only
/// bumps the reference count; [`mutate_as`](Value::mutate_as) makes the payload
/// private before handing out a mutable reference, so a mutation is never
/// visible through another `Value`.
///
/// Three ways to copy a value, from cheapest to most isolated:
///
/// - `clone` shares the payload. Use it to pass values around.
/// - [`quick_clone`](Value::quick_clone) gives documents a fresh container at
///   every level but shares all leaf payloads. Use it when the copy's document
///   structure will be edited (keys inserted or removed) and leaves are read-only
///   or mutated through `mutate_as`.
/// - [`deep_clone`](Value::deep_clone) shares nothing. Use it before handing a
///   value to code that must not observe or contend on the original's reference
///   counts, e.g. another thread.
///
/// # Example
///
/// ```
/// use na_doc::Value;
///
/// let v1 = Value::from(vec![1i32, 2, 3]);
/// let mut v2 = v1.clone();
/// assert!(!v1.is_unique());
///
/// v2.mutate_as::<Vec<i32>>().unwrap().push(4);
/// assert_eq!(v1.read_as::<Vec<i32>>().unwrap(), &[1, 2, 3]);
/// assert_eq!(v2.read_as::<Vec<i32>>().unwrap(), &[1, 2, 3, 4]);
/// ```
#[derive(Clone, Default)]
pub struct Value {
    payload: Option<Arc<Payload>>,
}

impl Value {
    /// Wraps `data` in a fresh, uniquely owned payload.
    #[inline]
    pub fn new<T: Kind>(data: T) -> Self {
        Self {
            payload: Some(Arc::new(data.into_payload())),
        }
    }

    /// The void value. Holds no payload.
    #[inline]
    pub const fn void() -> Self {
        Self { payload: None }
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        match &self.payload {
            Some(payload) => payload.tag(),
            None => Tag::Void,
        }
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.payload.is_none()
    }

    /// The payload for exhaustive matching, or `None` for void.
    #[inline]
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_deref()
    }

    /// Returns `true` if no other `Value` shares this payload. Void is always unique.
    #[inline]
    pub fn is_unique(&self) -> bool {
        self.share_count() <= 1
    }

    /// Number of values sharing this payload, `0` for void.
    #[inline]
    pub fn share_count(&self) -> usize {
        self.payload.as_ref().map_or(0, Arc::strong_count)
    }

    /// Borrows the payload as `T`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyValueAccess`] if the value is void, [`Error::TypeMismatch`]
    /// if it holds another kind.
    pub fn read_as<T: Kind>(&self) -> Result<&T> {
        let Some(payload) = self.payload.as_deref() else {
            cold_path();
            return Err(Error::EmptyValueAccess { expected: T::TAG });
        };
        T::from_payload(payload).ok_or_else(|| {
            cold_path();
            Error::TypeMismatch {
                expected: T::TAG,
                actual: payload.tag(),
            }
        })
    }

    /// Mutably borrows the payload as `T`, first deep-cloning it if it is shared.
    ///
    /// # Errors
    ///
    /// Same as [`read_as`](Value::read_as). A failed call leaves the value untouched.
    pub fn mutate_as<T: Kind>(&mut self) -> Result<&mut T> {
        let Some(handle) = self.payload.as_mut() else {
            cold_path();
            return Err(Error::EmptyValueAccess { expected: T::TAG });
        };
        let actual = handle.tag();
        if actual != T::TAG {
            cold_path();
            return Err(Error::TypeMismatch {
                expected: T::TAG,
                actual,
            });
        }
        if Arc::get_mut(handle).is_none() {
            *handle = Arc::new(handle.deep_clone());
        }
        T::from_payload_mut(Arc::make_mut(handle)).ok_or(Error::TypeMismatch {
            expected: T::TAG,
            actual,
        })
    }

    /// Replaces the content with `data`, possibly of another kind, and returns
    /// the previous value. Other values sharing the old payload keep it.
    #[inline]
    pub fn replace<T: Kind>(&mut self, data: T) -> Value {
        std::mem::replace(self, Value::new(data))
    }

    /// Leaves void in place of this value and returns it.
    #[inline]
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Clones the payload recursively; the result shares nothing with `self`.
    pub fn deep_clone(&self) -> Self {
        Self {
            payload: self
                .payload
                .as_ref()
                .map(|payload| Arc::new(payload.deep_clone())),
        }
    }

    /// Shares every payload except documents, which get a fresh container whose
    /// entries are themselves quick-cloned.
    pub fn quick_clone(&self) -> Self {
        match self.payload.as_deref() {
            Some(Payload::Document(document)) => Self {
                payload: Some(Arc::new(Payload::Document(document.quick_clone()))),
            },
            _ => self.clone(),
        }
    }

    /// Returns `true` if both values share one payload allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (&self.payload, &other.payload) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (&self.payload, &other.payload) {
            (None, None) => true,
            (Some(a), Some(b)) => (Arc::ptr_eq(a, b) && !has_nan(a)) || **a == **b,
            _ => false,
        }
    }
}

// A shared NaN still has to compare unequal to itself.
fn has_nan(payload: &Payload) -> bool {
    match payload {
        Payload::Float32(v) => v.is_nan(),
        Payload::Float64(v) => v.is_nan(),
        Payload::Float32Array(v) => v.iter().any(|v| v.is_nan()),
        Payload::Float64Array(v) => v.iter().any(|v| v.is_nan()),
        Payload::Document(_) => true,
        _ => false,
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload.as_deref() {
            Some(payload) => payload.fmt(f),
            None => f.write_str("Void"),
        }
    }
}
