//! Ordered-field binary codec used to hand value objects across process boundaries.
//!
//! Every `Parcelable` writes its fields in a fixed order and reads them back in
//! that same order. Encodings are big-endian:
//!
//! * bool: one byte, `0` or `1`
//! * u32 / i32: four bytes
//! * optional string: i32 byte length (`-1` when absent) followed by UTF-8
//! * optional object: presence byte followed by the object's own fields
//! * list: u32 element count followed by each element
//!
//! Writing a string longer than `i32::MAX` bytes or a list longer than `u32::MAX`
//! items is a `Codec` error rather than a truncated encoding.

use crate::error::{BraintreeError, Result};
use bytes::{Buf, BufMut, Bytes, BytesMut};

const ABSENT: i32 = -1;

fn string_length(len: usize) -> Result<i32> {
    i32::try_from(len)
        .map_err(|_| BraintreeError::Codec(format!("string of {len} bytes exceeds the parcel limit")))
}

fn list_count(len: usize) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| BraintreeError::Codec(format!("list of {len} items exceeds the parcel limit")))
}

/// Write half of the codec.
#[derive(Debug, Default)]
pub struct Parcel {
    buf: BytesMut,
}

impl Parcel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_bool(&mut self, value: bool) {
        self.buf.put_u8(u8::from(value));
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.put_u32(value);
    }

    /// Writes an optional string. Strings longer than `i32::MAX` bytes are rejected.
    pub fn write_string(&mut self, value: Option<&str>) -> Result<()> {
        match value {
            Some(s) => {
                self.buf.put_i32(string_length(s.len())?);
                self.buf.put_slice(s.as_bytes());
            }
            None => self.buf.put_i32(ABSENT),
        }
        Ok(())
    }

    pub fn write_parcelable<T: Parcelable>(&mut self, value: Option<&T>) -> Result<()> {
        match value {
            Some(inner) => {
                self.write_bool(true);
                inner.write_to(self)
            }
            None => {
                self.write_bool(false);
                Ok(())
            }
        }
    }

    /// Writes a count-prefixed list. Lists longer than `u32::MAX` are rejected.
    pub fn write_list<T: Parcelable>(&mut self, items: &[T]) -> Result<()> {
        self.write_u32(list_count(items.len())?);
        for item in items {
            item.write_to(self)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Freezes the written bytes.
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }
}

/// Read half of the codec.
#[derive(Debug)]
pub struct ParcelReader {
    buf: Bytes,
}

impl ParcelReader {
    pub fn new(buf: Bytes) -> Self {
        Self { buf }
    }

    fn ensure(&self, needed: usize, what: &str) -> Result<()> {
        if self.buf.remaining() < needed {
            return Err(BraintreeError::Codec(format!(
                "unexpected end of parcel reading {what}: need {needed} bytes, {} left",
                self.buf.remaining()
            )));
        }
        Ok(())
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        self.ensure(1, "bool")?;
        match self.buf.get_u8() {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(BraintreeError::Codec(format!("invalid bool tag {other}"))),
        }
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.ensure(4, "u32")?;
        Ok(self.buf.get_u32())
    }

    pub fn read_string(&mut self) -> Result<Option<String>> {
        self.ensure(4, "string length")?;
        let len = self.buf.get_i32();
        if len == ABSENT {
            return Ok(None);
        }
        let len = usize::try_from(len)
            .map_err(|_| BraintreeError::Codec(format!("invalid string length {len}")))?;
        self.ensure(len, "string")?;
        let raw = self.buf.split_to(len);
        String::from_utf8(raw.to_vec())
            .map(Some)
            .map_err(|e| BraintreeError::Codec(format!("invalid UTF-8 in string: {e}")))
    }

    pub fn read_parcelable<T: Parcelable>(&mut self) -> Result<Option<T>> {
        if self.read_bool()? {
            T::read_from(self).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn read_list<T: Parcelable>(&mut self) -> Result<Vec<T>> {
        let count = self.read_u32()? as usize;
        // Each element occupies at least one byte; guards against absurd counts.
        self.ensure(count.min(self.buf.remaining() + 1), "list")?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(T::read_from(self)?);
        }
        Ok(items)
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }
}

/// A value that can be flattened into a `Parcel` and rebuilt from a `ParcelReader`.
pub trait Parcelable: Sized {
    fn write_to(&self, parcel: &mut Parcel) -> Result<()>;
    fn read_from(reader: &mut ParcelReader) -> Result<Self>;
}

/// Encodes a single value. Fails when a string or list is too long for the wire format.
pub fn to_bytes<T: Parcelable>(value: &T) -> Result<Bytes> {
    let mut parcel = Parcel::new();
    value.write_to(&mut parcel)?;
    Ok(parcel.into_bytes())
}

/// Decodes a single value, rejecting trailing bytes.
pub fn from_bytes<T: Parcelable>(bytes: Bytes) -> Result<T> {
    let mut reader = ParcelReader::new(bytes);
    let value = T::read_from(&mut reader)?;
    if reader.remaining() != 0 {
        return Err(BraintreeError::Codec(format!(
            "{} trailing bytes after value",
            reader.remaining()
        )));
    }
    Ok(value)
}
