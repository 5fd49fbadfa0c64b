use std::str;

use zerocopy::{BigEndian, IntoBytes, LittleEndian, byteorder};

use crate::{
    ByteOrder, Document, Endian, Error, FormatError, MAGIC, ReadConfig, Result, Scalar, Tag,
    VERSION, Value, cold_path, is_native,
};

/// Smallest possible entry: a 4-byte key length, an empty key and a void tag.
const MIN_ENTRY_SIZE: usize = 4 + 1;

/// Decodes a document using [`ReadConfig::default`].
///
/// The byte order is taken from each document header, so buffers written with
/// either order decode on any machine.
///
/// # Errors
///
/// Any malformed input aborts the whole decode; no partial document is returned.
/// A buffer cut short anywhere fails with [`Error::TruncatedBuffer`], or with
/// [`Error::Format`] if the cut leaves a bad header.
pub fn decode(source: &[u8]) -> Result<Document> {
    decode_with(source, &ReadConfig::default())
}

/// Decodes a document with explicit limits.
pub fn decode_with(source: &[u8], config: &ReadConfig) -> Result<Document> {
    let mut reader = Reader::new(source);
    let result = read_document(&mut reader, 0, config).and_then(|document| {
        let remaining = reader.remaining();
        if remaining != 0 && !config.allow_trailing_data {
            cold_path();
            return Err(Error::TrailingData(remaining));
        }
        Ok(document)
    });
    if let Err(e) = &result {
        tracing::debug!(error = %e, len = source.len(), "document decode failed");
    }
    result
}

/// Validates the root header and reports the byte order it declares.
///
/// ```
/// use na_doc::{Endian, Document, encode_be, peek_endian};
///
/// let bytes = encode_be(&Document::new()).unwrap();
/// assert_eq!(peek_endian(&bytes).unwrap(), Endian::Big);
/// ```
pub fn peek_endian(source: &[u8]) -> Result<Endian> {
    read_header(&mut Reader::new(source))
}

impl Document {
    /// Shorthand for [`decode`].
    #[inline]
    pub fn from_slice(source: &[u8]) -> Result<Self> {
        decode(source)
    }
}

/// Bounds-checked cursor over the input. Never reads past `source`.
struct Reader<'s> {
    source: &'s [u8],
    pos: usize,
}

impl<'s> Reader<'s> {
    #[inline]
    fn new(source: &'s [u8]) -> Self {
        Self { source, pos: 0 }
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.source.len() - self.pos
    }

    #[inline]
    fn truncated(&self, needed: usize) -> Error {
        Error::TruncatedBuffer {
            offset: self.pos,
            needed,
            remaining: self.remaining(),
        }
    }

    #[inline]
    fn take(&mut self, len: usize) -> Result<&'s [u8]> {
        if len > self.remaining() {
            cold_path();
            return Err(self.truncated(len));
        }
        let bytes = &self.source[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    #[inline]
    fn bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    #[inline]
    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    #[inline]
    fn len32<O: ByteOrder>(&mut self) -> Result<usize> {
        Ok(byteorder::U32::<O>::from_bytes(self.bytes()?).get() as usize)
    }

    #[inline]
    fn len64<O: ByteOrder>(&mut self) -> Result<usize> {
        let len = byteorder::U64::<O>::from_bytes(self.bytes()?).get();
        // a count past usize::MAX cannot be backed by the input anyway
        usize::try_from(len).map_err(|_| self.truncated(usize::MAX))
    }

    #[inline]
    fn scalar<O: ByteOrder, T: Scalar>(&mut self) -> Result<T> {
        Ok(T::get::<O>(self.take(T::WIDTH)?))
    }

    fn string<O: ByteOrder>(&mut self) -> Result<String> {
        let len = self.len32::<O>()?;
        let offset = self.pos;
        let raw = self.take(len)?;
        str::from_utf8(raw)
            .map(str::to_owned)
            .map_err(|source| Error::InvalidUtf8 { offset, source })
    }
}

fn read_header(reader: &mut Reader<'_>) -> Result<Endian> {
    let magic = reader.bytes::<3>()?;
    if magic != MAGIC {
        cold_path();
        return Err(FormatError::BadMagic(magic).into());
    }
    let version = reader.u8()?;
    if version != VERSION {
        cold_path();
        return Err(FormatError::UnsupportedVersion(version).into());
    }
    let marker = reader.bytes::<2>()?;
    Endian::from_marker(marker).ok_or_else(|| FormatError::BadByteOrderMarker(marker).into())
}

fn read_document(reader: &mut Reader<'_>, depth: usize, config: &ReadConfig) -> Result<Document> {
    if depth > config.max_depth {
        cold_path();
        return Err(Error::DepthLimitExceeded(config.max_depth));
    }
    let endian = read_header(reader)?;
    tracing::trace!(?endian, depth, offset = reader.pos, "document header accepted");
    // nested headers carry their own marker, so each document picks its order anew
    match endian {
        Endian::Little => read_entries::<LittleEndian>(reader, depth, config),
        Endian::Big => read_entries::<BigEndian>(reader, depth, config),
    }
}

fn read_entries<O: ByteOrder>(
    reader: &mut Reader<'_>,
    depth: usize,
    config: &ReadConfig,
) -> Result<Document> {
    let count = reader.len64::<O>()?;
    let mut document = Document::with_capacity(count.min(reader.remaining() / MIN_ENTRY_SIZE));
    for _ in 0..count {
        let key = reader.string::<O>()?;
        let raw = reader.u8()?;
        let Some(tag) = Tag::from_u8(raw) else {
            cold_path();
            return Err(Error::UnsupportedTag(raw));
        };
        // only documents recurse; leaves decode in their own frame
        let value = match tag {
            Tag::Document => Value::new(read_document(reader, depth + 1, config)?),
            _ => read_leaf::<O>(reader, tag)?,
        };
        document.set(key, value);
    }
    Ok(document)
}

#[inline(never)]
fn read_leaf<O: ByteOrder>(reader: &mut Reader<'_>, tag: Tag) -> Result<Value> {
    Ok(match tag {
        Tag::Void => Value::void(),
        Tag::Int8 => Value::new(reader.scalar::<O, i8>()?),
        Tag::Int16 => Value::new(reader.scalar::<O, i16>()?),
        Tag::Int32 => Value::new(reader.scalar::<O, i32>()?),
        Tag::Int64 => Value::new(reader.scalar::<O, i64>()?),
        Tag::UInt8 => Value::new(reader.scalar::<O, u8>()?),
        Tag::UInt16 => Value::new(reader.scalar::<O, u16>()?),
        Tag::UInt32 => Value::new(reader.scalar::<O, u32>()?),
        Tag::UInt64 => Value::new(reader.scalar::<O, u64>()?),
        Tag::Float32 => Value::new(reader.scalar::<O, f32>()?),
        Tag::Float64 => Value::new(reader.scalar::<O, f64>()?),
        Tag::String => Value::new(reader.string::<O>()?),
        Tag::Int8Array => Value::new(read_scalar_array::<O, i8>(reader)?),
        Tag::Int16Array => Value::new(read_scalar_array::<O, i16>(reader)?),
        Tag::Int32Array => Value::new(read_scalar_array::<O, i32>(reader)?),
        Tag::Int64Array => Value::new(read_scalar_array::<O, i64>(reader)?),
        Tag::UInt8Array => Value::new(read_scalar_array::<O, u8>(reader)?),
        Tag::UInt16Array => Value::new(read_scalar_array::<O, u16>(reader)?),
        Tag::UInt32Array => Value::new(read_scalar_array::<O, u32>(reader)?),
        Tag::UInt64Array => Value::new(read_scalar_array::<O, u64>(reader)?),
        Tag::Float32Array => Value::new(read_scalar_array::<O, f32>(reader)?),
        Tag::Float64Array => Value::new(read_scalar_array::<O, f64>(reader)?),
        Tag::StringArray => {
            let len = reader.len64::<O>()?;
            let mut strings = Vec::with_capacity(len.min(reader.remaining() / 4));
            for _ in 0..len {
                strings.push(reader.string::<O>()?);
            }
            Value::new(strings)
        }
        // nested documents go through read_entries, never here
        Tag::Document => {
            cold_path();
            return Err(Error::UnsupportedTag(tag as u8));
        }
    })
}

fn read_scalar_array<O: ByteOrder, T: Scalar>(reader: &mut Reader<'_>) -> Result<Vec<T>> {
    let len = reader.len64::<O>()?;
    let Some(byte_len) = len.checked_mul(T::WIDTH) else {
        cold_path();
        return Err(reader.truncated(usize::MAX));
    };
    let raw = reader.take(byte_len)?;
    if T::WIDTH == 1 || is_native::<O>() {
        let mut values = vec![T::default(); len];
        values.as_mut_slice().as_mut_bytes().copy_from_slice(raw);
        Ok(values)
    } else {
        Ok(raw.chunks_exact(T::WIDTH).map(T::get::<O>).collect())
    }
}
