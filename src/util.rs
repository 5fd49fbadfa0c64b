use std::any::TypeId;

use zerocopy::{BigEndian, FromBytes, Immutable, IntoBytes, LittleEndian, byteorder};

use crate::Kind;

#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

pub trait ByteOrder: zerocopy::ByteOrder + Send + Sync + 'static {}

impl<T: zerocopy::ByteOrder + Send + Sync + 'static> ByteOrder for T {}

/// Returns `true` if `O` is the byte order of the running machine.
#[inline]
pub(crate) fn is_native<O: ByteOrder>() -> bool {
    TypeId::of::<O>() == TypeId::of::<zerocopy::NativeEndian>()
}

/// Run-time counterpart of the [`ByteOrder`] type parameter.
///
/// The encoder is generic over the byte order; `Endian` is for callers that only
/// know the target order at run time, and is what [`peek_endian`](crate::peek_endian)
/// reports for an encoded buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// The byte order of the running machine.
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    /// The two marker bytes a header carries when written in this order.
    #[inline]
    pub fn marker(self) -> [u8; 2] {
        match self {
            Endian::Little => byteorder::U16::<LittleEndian>::new(BYTE_ORDER_MARK).to_bytes(),
            Endian::Big => byteorder::U16::<BigEndian>::new(BYTE_ORDER_MARK).to_bytes(),
        }
    }

    /// Classifies header marker bytes, or `None` if they match neither order.
    #[inline]
    pub fn from_marker(marker: [u8; 2]) -> Option<Self> {
        if marker == Endian::Big.marker() {
            Some(Endian::Big)
        } else if marker == Endian::Little.marker() {
            Some(Endian::Little)
        } else {
            None
        }
    }
}

/// Format identifier at offset 0 of every document header.
pub const MAGIC: [u8; 3] = *b"NAD";

/// The only format version this crate reads and writes.
pub const VERSION: u8 = 1;

/// Written with the message's byte order; reads back as `0xFEFF` only in that order.
pub const BYTE_ORDER_MARK: u16 = 0xFEFF;

/// Size of the fixed document header: magic, version, marker and entry count.
pub const HEADER_SIZE: usize = 3 + 1 + 2 + 8;

mod private {
    pub trait Sealed {}
}

/// A fixed-width number that travels as raw bytes in the message byte order.
///
/// Implemented for every scalar [`Kind`]; the single-byte types ignore the byte order.
pub trait Scalar:
    Kind + Copy + Default + FromBytes + IntoBytes + Immutable + private::Sealed
{
    /// Width on the wire, in bytes.
    const WIDTH: usize;

    #[doc(hidden)]
    fn put<O: ByteOrder>(self, out: &mut Vec<u8>);

    /// `raw` is exactly [`WIDTH`](Scalar::WIDTH) bytes long.
    #[doc(hidden)]
    fn get<O: ByteOrder>(raw: &[u8]) -> Self;
}

impl private::Sealed for i8 {}

impl Scalar for i8 {
    const WIDTH: usize = 1;

    #[inline]
    fn put<O: ByteOrder>(self, out: &mut Vec<u8>) {
        out.push(self as u8);
    }

    #[inline]
    fn get<O: ByteOrder>(raw: &[u8]) -> Self {
        raw[0] as i8
    }
}

impl private::Sealed for u8 {}

impl Scalar for u8 {
    const WIDTH: usize = 1;

    #[inline]
    fn put<O: ByteOrder>(self, out: &mut Vec<u8>) {
        out.push(self);
    }

    #[inline]
    fn get<O: ByteOrder>(raw: &[u8]) -> Self {
        raw[0]
    }
}

macro_rules! wide_scalar {
    ($($ty:ty => $wire:ident, $width:literal);* $(;)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Scalar for $ty {
                const WIDTH: usize = $width;

                #[inline]
                fn put<O: ByteOrder>(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&byteorder::$wire::<O>::new(self).to_bytes());
                }

                #[inline]
                fn get<O: ByteOrder>(raw: &[u8]) -> Self {
                    let mut bytes = [0u8; $width];
                    bytes.copy_from_slice(raw);
                    byteorder::$wire::<O>::from_bytes(bytes).get()
                }
            }
        )*
    };
}

wide_scalar!(
    i16 => I16, 2;
    i32 => I32, 4;
    i64 => I64, 8;
    u16 => U16, 2;
    u32 => U32, 4;
    u64 => U64, 8;
    f32 => F32, 4;
    f64 => F64, 8;
);
