//! Low-level wire-format writer.
//!
//! [`WireWriter`] emits the primitive encodings (varints, fixed-width
//! values, length-delimited bytes, field tags) onto any [`OutputStream`].
//! Generated serializers and the RPC envelope codec build on it; the size
//! free functions let them compute `byte_size` without encoding.

use crate::error::WireError;
use crate::stream::OutputStream;
use crate::types::{FieldTag, WireType, zigzag_encode32, zigzag_encode64};

/// Longest possible varint encoding of a 64-bit value.
pub const MAX_VARINT_LEN: usize = 10;

/// Number of bytes the varint encoding of `value` occupies.
pub fn varint_size(mut value: u64) -> usize {
    let mut size = 1;
    while value >= 0x80 {
        value >>= 7;
        size += 1;
    }
    size
}

/// Number of bytes the tag for `field_number` occupies (wire type does not
/// change the size).
pub fn tag_size(field_number: u32) -> usize {
    varint_size(u64::from(field_number) << 3)
}

/// Varint size of a zigzag-encoded `sint32`.
pub fn sint32_size(value: i32) -> usize {
    varint_size(u64::from(zigzag_encode32(value)))
}

/// Varint size of a zigzag-encoded `sint64`.
pub fn sint64_size(value: i64) -> usize {
    varint_size(zigzag_encode64(value))
}

/// Varint size of an `int32`/`int64` family value. Negative values are
/// sign-extended to 64 bits, so they always occupy ten bytes.
pub fn int64_size(value: i64) -> usize {
    varint_size(value as u64)
}

/// Size of a length-delimited value: prefix plus body.
pub fn len_delimited_size(len: usize) -> usize {
    varint_size(len as u64) + len
}

/// Encode `value` as a varint into `buf`, returning the number of bytes
/// used.
pub fn encode_varint(mut value: u64, buf: &mut [u8; MAX_VARINT_LEN]) -> usize {
    let mut i = 0;
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf[i] = byte;
            return i + 1;
        }
        buf[i] = byte | 0x80;
        i += 1;
    }
}

/// Wire-format writer over an output stream.
pub struct WireWriter<'a, S: OutputStream + ?Sized> {
    stream: &'a mut S,
}

impl<'a, S: OutputStream + ?Sized> WireWriter<'a, S> {
    pub fn new(stream: &'a mut S) -> Self {
        WireWriter { stream }
    }

    /// The underlying stream, for callers that need to interleave raw
    /// writes (nested message bodies, stored unknown-field bytes).
    pub fn stream(&mut self) -> &mut S {
        self.stream
    }

    pub fn position(&self) -> usize {
        self.stream.position()
    }

    /// Write a base-128 varint.
    pub fn write_varint(&mut self, value: u64) -> Result<(), WireError> {
        let mut buf = [0u8; MAX_VARINT_LEN];
        let len = encode_varint(value, &mut buf);
        self.stream.write(&buf[..len])
    }

    /// Write a field tag.
    pub fn write_tag(&mut self, field_number: u32, wire_type: WireType) -> Result<(), WireError> {
        if field_number == 0 || field_number > crate::types::MAX_FIELD_NUMBER {
            return Err(WireError::InvalidFieldNumber(u64::from(field_number)));
        }
        self.write_varint(u64::from(FieldTag::new(field_number, wire_type).as_wire()))
    }

    /// Write four bytes, little-endian.
    pub fn write_fixed32(&mut self, value: u32) -> Result<(), WireError> {
        self.stream.write(&value.to_le_bytes())
    }

    /// Write eight bytes, little-endian.
    pub fn write_fixed64(&mut self, value: u64) -> Result<(), WireError> {
        self.stream.write(&value.to_le_bytes())
    }

    pub fn write_sfixed32(&mut self, value: i32) -> Result<(), WireError> {
        self.write_fixed32(value as u32)
    }

    pub fn write_sfixed64(&mut self, value: i64) -> Result<(), WireError> {
        self.write_fixed64(value as u64)
    }

    /// Write an IEEE-754 single, bit-cast, little-endian.
    pub fn write_float(&mut self, value: f32) -> Result<(), WireError> {
        self.write_fixed32(value.to_bits())
    }

    /// Write an IEEE-754 double, bit-cast, little-endian.
    pub fn write_double(&mut self, value: f64) -> Result<(), WireError> {
        self.write_fixed64(value.to_bits())
    }

    /// Write a varint length prefix followed by `data`.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), WireError> {
        self.write_varint(data.len() as u64)?;
        self.stream.write(data)
    }

    /// Write a varint length prefix followed by the bytes of a string
    /// field. Content passes through unvalidated, so a
    /// [`ProtoString`](crate::ProtoString) holding malformed text
    /// round-trips unchanged.
    pub fn write_string<V: AsRef<[u8]> + ?Sized>(&mut self, value: &V) -> Result<(), WireError> {
        self.write_bytes(value.as_ref())
    }

    /// Write raw bytes with no prefix.
    pub fn write_raw(&mut self, data: &[u8]) -> Result<(), WireError> {
        self.stream.write(data)
    }

    /// Zigzag-encode and write a signed 32-bit value.
    pub fn write_sint32(&mut self, value: i32) -> Result<(), WireError> {
        self.write_varint(u64::from(zigzag_encode32(value)))
    }

    /// Zigzag-encode and write a signed 64-bit value.
    pub fn write_sint64(&mut self, value: i64) -> Result<(), WireError> {
        self.write_varint(zigzag_encode64(value))
    }
}
