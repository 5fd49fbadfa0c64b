use std::io::Write;

use zerocopy::{BigEndian, IntoBytes, LittleEndian, byteorder};

use crate::{
    BYTE_ORDER_MARK, ByteOrder, Document, Endian, Error, HEADER_SIZE, MAGIC, Payload, Result,
    Scalar, VERSION, Value, cold_path, is_native,
};

/// Encodes `document` in byte order `O`.
///
/// # Example
///
/// ```
/// use na_doc::{BigEndian, decode, doc, encode};
///
/// let d = doc! { "a" => 7i32 };
/// let bytes = encode::<BigEndian>(&d).unwrap();
/// assert_eq!(&bytes[..6], b"NAD\x01\xFE\xFF");
/// assert_eq!(decode(&bytes).unwrap(), d);
/// ```
///
/// # Errors
///
/// [`Error::LengthOverflow`] if a key or string exceeds `u32::MAX` bytes.
///
/// Nesting depth is not limited here. Output nested deeper than
/// [`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH) needs a raised
/// [`ReadConfig::max_depth`](crate::ReadConfig::max_depth) to decode.
pub fn encode<O: ByteOrder>(document: &Document) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    encode_into::<O>(document, &mut out)?;
    Ok(out)
}

#[inline]
pub fn encode_be(document: &Document) -> Result<Vec<u8>> {
    encode::<BigEndian>(document)
}

#[inline]
pub fn encode_le(document: &Document) -> Result<Vec<u8>> {
    encode::<LittleEndian>(document)
}

/// Encodes with a byte order chosen at run time.
pub fn encode_with(document: &Document, endian: Endian) -> Result<Vec<u8>> {
    match endian {
        Endian::Little => encode::<LittleEndian>(document),
        Endian::Big => encode::<BigEndian>(document),
    }
}

/// Appends the encoding of `document` to `out`.
///
/// On error `out` is truncated back to its original length.
pub fn encode_into<O: ByteOrder>(document: &Document, out: &mut Vec<u8>) -> Result<()> {
    let start = out.len();
    match write_document::<O>(document, out) {
        Ok(()) => {
            tracing::trace!(
                entries = document.len(),
                bytes = out.len() - start,
                "encoded document"
            );
            Ok(())
        }
        Err(e) => {
            cold_path();
            out.truncate(start);
            Err(e)
        }
    }
}

/// Encodes `document` and writes it to `writer` in one call.
pub fn encode_to_writer<O: ByteOrder, W: Write>(document: &Document, mut writer: W) -> Result<()> {
    let bytes = encode::<O>(document)?;
    writer.write_all(&bytes)?;
    Ok(())
}

impl Document {
    /// Shorthand for [`encode`].
    #[inline]
    pub fn to_vec<O: ByteOrder>(&self) -> Result<Vec<u8>> {
        encode::<O>(self)
    }
}

fn write_document<O: ByteOrder>(document: &Document, out: &mut Vec<u8>) -> Result<()> {
    out.reserve(HEADER_SIZE);
    out.extend_from_slice(&MAGIC);
    out.push(VERSION);
    out.extend_from_slice(&byteorder::U16::<O>::new(BYTE_ORDER_MARK).to_bytes());
    out.extend_from_slice(&byteorder::U64::<O>::new(document.len() as u64).to_bytes());

    for (key, value) in document {
        write_str::<O>(key, out)?;
        out.push(value.tag() as u8);
        write_value::<O>(value, out)?;
    }
    Ok(())
}

fn write_value<O: ByteOrder>(value: &Value, out: &mut Vec<u8>) -> Result<()> {
    let Some(payload) = value.payload() else {
        return Ok(());
    };
    match payload {
        Payload::Int8(v) => v.put::<O>(out),
        Payload::Int16(v) => v.put::<O>(out),
        Payload::Int32(v) => v.put::<O>(out),
        Payload::Int64(v) => v.put::<O>(out),
        Payload::UInt8(v) => v.put::<O>(out),
        Payload::UInt16(v) => v.put::<O>(out),
        Payload::UInt32(v) => v.put::<O>(out),
        Payload::UInt64(v) => v.put::<O>(out),
        Payload::Float32(v) => v.put::<O>(out),
        Payload::Float64(v) => v.put::<O>(out),
        Payload::String(v) => write_str::<O>(v, out)?,
        Payload::Document(v) => write_document::<O>(v, out)?,
        Payload::Int8Array(v) => write_scalar_array::<O, _>(v, out),
        Payload::Int16Array(v) => write_scalar_array::<O, _>(v, out),
        Payload::Int32Array(v) => write_scalar_array::<O, _>(v, out),
        Payload::Int64Array(v) => write_scalar_array::<O, _>(v, out),
        Payload::UInt8Array(v) => write_scalar_array::<O, _>(v, out),
        Payload::UInt16Array(v) => write_scalar_array::<O, _>(v, out),
        Payload::UInt32Array(v) => write_scalar_array::<O, _>(v, out),
        Payload::UInt64Array(v) => write_scalar_array::<O, _>(v, out),
        Payload::Float32Array(v) => write_scalar_array::<O, _>(v, out),
        Payload::Float64Array(v) => write_scalar_array::<O, _>(v, out),
        Payload::StringArray(v) => {
            out.extend_from_slice(&byteorder::U64::<O>::new(v.len() as u64).to_bytes());
            for s in v {
                write_str::<O>(s, out)?;
            }
        }
    }
    Ok(())
}

#[inline]
fn write_str<O: ByteOrder>(s: &str, out: &mut Vec<u8>) -> Result<()> {
    let len = u32::try_from(s.len()).map_err(|_| {
        cold_path();
        Error::LengthOverflow(s.len())
    })?;
    out.reserve(4 + s.len());
    out.extend_from_slice(&byteorder::U32::<O>::new(len).to_bytes());
    out.extend_from_slice(s.as_bytes());
    Ok(())
}

#[inline]
fn write_scalar_array<O: ByteOrder, T: Scalar>(values: &[T], out: &mut Vec<u8>) {
    out.reserve(8 + values.len() * T::WIDTH);
    out.extend_from_slice(&byteorder::U64::<O>::new(values.len() as u64).to_bytes());
    if T::WIDTH == 1 || is_native::<O>() {
        out.extend_from_slice(values.as_bytes());
    } else {
        for &value in values {
            value.put::<O>(out);
        }
    }
}
