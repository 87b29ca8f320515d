//! Field-level helpers for generated serializers.
//!
//! The code generator emits one `encode` / `merge` / `byte_size` triple per
//! message and leans on these helpers for the per-field mechanics: tag
//! placement, the proto-type-to-wire-type mapping, packed repeated bodies,
//! and submessage recursion. Write helpers emit unconditionally; whether a
//! field should be skipped at its default value is the caller's decision
//! (proto3 implicit fields elide defaults, explicit-presence fields do
//! not).
//!
//! Read helpers verify the incoming wire type against the field's declared
//! type and fail with [`WireError::WireTypeMismatch`] otherwise, except for
//! repeated scalars where both the packed and the expanded form are always
//! accepted.

use crate::error::WireError;
use crate::message::Message;
use crate::reader::WireReader;
use crate::stream::{InputStream, OutputStream};
use crate::text::ProtoString;
use crate::types::WireType;
use crate::writer::{WireWriter, len_delimited_size, tag_size, varint_size};

// ---------------------------------------------------------------------------
// Scalar writes: tag + value.
// ---------------------------------------------------------------------------

pub fn write_int32<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: i32,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::Varint)?;
    w.write_varint(i64::from(value) as u64)
}

pub fn write_int64<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: i64,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::Varint)?;
    w.write_varint(value as u64)
}

pub fn write_uint32<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: u32,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::Varint)?;
    w.write_varint(u64::from(value))
}

pub fn write_uint64<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: u64,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::Varint)?;
    w.write_varint(value)
}

pub fn write_sint32<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: i32,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::Varint)?;
    w.write_sint32(value)
}

pub fn write_sint64<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: i64,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::Varint)?;
    w.write_sint64(value)
}

pub fn write_bool<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: bool,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::Varint)?;
    w.write_varint(u64::from(value))
}

/// Enums travel as `int32`.
pub fn write_enum<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: i32,
) -> Result<(), WireError> {
    write_int32(w, field_number, value)
}

pub fn write_fixed32<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: u32,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::Fixed32)?;
    w.write_fixed32(value)
}

pub fn write_fixed64<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: u64,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::Fixed64)?;
    w.write_fixed64(value)
}

pub fn write_sfixed32<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: i32,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::Fixed32)?;
    w.write_sfixed32(value)
}

pub fn write_sfixed64<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: i64,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::Fixed64)?;
    w.write_sfixed64(value)
}

pub fn write_float<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: f32,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::Fixed32)?;
    w.write_float(value)
}

pub fn write_double<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: f64,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::Fixed64)?;
    w.write_double(value)
}

pub fn write_string<S: OutputStream + ?Sized, V: AsRef<[u8]> + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: &V,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::LengthDelimited)?;
    w.write_string(value)
}

pub fn write_bytes<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    value: &[u8],
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::LengthDelimited)?;
    w.write_bytes(value)
}

pub fn write_message<S: OutputStream + ?Sized, M: Message>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    msg: &M,
) -> Result<(), WireError> {
    w.write_tag(field_number, WireType::LengthDelimited)?;
    w.write_varint(msg.byte_size() as u64)?;
    msg.encode(w.stream())
}

// ---------------------------------------------------------------------------
// Scalar sizes: tag + value.
// ---------------------------------------------------------------------------

pub fn int32_size(field_number: u32, value: i32) -> usize {
    tag_size(field_number) + varint_size(i64::from(value) as u64)
}

pub fn int64_size(field_number: u32, value: i64) -> usize {
    tag_size(field_number) + varint_size(value as u64)
}

pub fn uint32_size(field_number: u32, value: u32) -> usize {
    tag_size(field_number) + varint_size(u64::from(value))
}

pub fn uint64_size(field_number: u32, value: u64) -> usize {
    tag_size(field_number) + varint_size(value)
}

pub fn sint32_size(field_number: u32, value: i32) -> usize {
    tag_size(field_number) + crate::writer::sint32_size(value)
}

pub fn sint64_size(field_number: u32, value: i64) -> usize {
    tag_size(field_number) + crate::writer::sint64_size(value)
}

pub fn bool_size(field_number: u32) -> usize {
    tag_size(field_number) + 1
}

pub fn enum_size(field_number: u32, value: i32) -> usize {
    int32_size(field_number, value)
}

pub fn fixed32_size(field_number: u32) -> usize {
    tag_size(field_number) + 4
}

pub fn fixed64_size(field_number: u32) -> usize {
    tag_size(field_number) + 8
}

pub fn float_size(field_number: u32) -> usize {
    fixed32_size(field_number)
}

pub fn double_size(field_number: u32) -> usize {
    fixed64_size(field_number)
}

pub fn string_size<V: AsRef<[u8]> + ?Sized>(field_number: u32, value: &V) -> usize {
    tag_size(field_number) + len_delimited_size(value.as_ref().len())
}

pub fn bytes_size(field_number: u32, value: &[u8]) -> usize {
    tag_size(field_number) + len_delimited_size(value.len())
}

pub fn message_size<M: Message>(field_number: u32, msg: &M) -> usize {
    tag_size(field_number) + len_delimited_size(msg.byte_size())
}

// ---------------------------------------------------------------------------
// Scalar reads: wire-type check + value.
// ---------------------------------------------------------------------------

fn check_wire_type(wire_type: WireType, expected: WireType) -> Result<(), WireError> {
    if wire_type == expected {
        Ok(())
    } else {
        Err(WireError::WireTypeMismatch)
    }
}

pub fn read_int32<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<i32, WireError> {
    check_wire_type(wire_type, WireType::Varint)?;
    Ok(r.read_varint()? as i32)
}

pub fn read_int64<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<i64, WireError> {
    check_wire_type(wire_type, WireType::Varint)?;
    Ok(r.read_varint()? as i64)
}

pub fn read_uint32<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<u32, WireError> {
    check_wire_type(wire_type, WireType::Varint)?;
    Ok(r.read_varint()? as u32)
}

pub fn read_uint64<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<u64, WireError> {
    check_wire_type(wire_type, WireType::Varint)?;
    r.read_varint()
}

pub fn read_sint32<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<i32, WireError> {
    check_wire_type(wire_type, WireType::Varint)?;
    r.read_sint32()
}

pub fn read_sint64<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<i64, WireError> {
    check_wire_type(wire_type, WireType::Varint)?;
    r.read_sint64()
}

pub fn read_bool<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<bool, WireError> {
    check_wire_type(wire_type, WireType::Varint)?;
    Ok(r.read_varint()? != 0)
}

pub fn read_enum<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<i32, WireError> {
    read_int32(r, wire_type)
}

pub fn read_fixed32<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<u32, WireError> {
    check_wire_type(wire_type, WireType::Fixed32)?;
    r.read_fixed32()
}

pub fn read_fixed64<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<u64, WireError> {
    check_wire_type(wire_type, WireType::Fixed64)?;
    r.read_fixed64()
}

pub fn read_sfixed32<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<i32, WireError> {
    check_wire_type(wire_type, WireType::Fixed32)?;
    r.read_sfixed32()
}

pub fn read_sfixed64<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<i64, WireError> {
    check_wire_type(wire_type, WireType::Fixed64)?;
    r.read_sfixed64()
}

pub fn read_float<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<f32, WireError> {
    check_wire_type(wire_type, WireType::Fixed32)?;
    r.read_float()
}

pub fn read_double<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<f64, WireError> {
    check_wire_type(wire_type, WireType::Fixed64)?;
    r.read_double()
}

pub fn read_string<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<ProtoString, WireError> {
    check_wire_type(wire_type, WireType::LengthDelimited)?;
    r.read_string()
}

pub fn read_bytes<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
) -> Result<Vec<u8>, WireError> {
    check_wire_type(wire_type, WireType::LengthDelimited)?;
    r.read_bytes()
}

/// Merge a submessage field into `msg`.
///
/// A second occurrence of the same field merges field-by-field rather than
/// replacing, which is what makes producers that split a submessage across
/// two wire occurrences interoperate.
pub fn merge_message<S: InputStream + ?Sized, M: Message>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    msg: &mut M,
) -> Result<(), WireError> {
    check_wire_type(wire_type, WireType::LengthDelimited)?;
    let body = r.read_bytes()?;
    msg.merge_from_slice(&body)
}

// ---------------------------------------------------------------------------
// Repeated scalars: packed writes, packed sizes, and merge accepting both
// wire forms.
// ---------------------------------------------------------------------------

fn write_packed_varints<S: OutputStream + ?Sized, T: Copy>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[T],
    to_u64: impl Fn(T) -> u64,
) -> Result<(), WireError> {
    if values.is_empty() {
        return Ok(());
    }
    let mut body = 0usize;
    for &v in values {
        body += varint_size(to_u64(v));
    }
    w.write_tag(field_number, WireType::LengthDelimited)?;
    w.write_varint(body as u64)?;
    for &v in values {
        w.write_varint(to_u64(v))?;
    }
    Ok(())
}

fn packed_varints_size<T: Copy>(field_number: u32, values: &[T], to_u64: impl Fn(T) -> u64) -> usize {
    if values.is_empty() {
        return 0;
    }
    let mut body = 0usize;
    for &v in values {
        body += varint_size(to_u64(v));
    }
    tag_size(field_number) + len_delimited_size(body)
}

fn write_packed_fixed<S: OutputStream + ?Sized, T: Copy>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[T],
    width: usize,
    mut write_one: impl FnMut(&mut WireWriter<'_, S>, T) -> Result<(), WireError>,
) -> Result<(), WireError> {
    if values.is_empty() {
        return Ok(());
    }
    w.write_tag(field_number, WireType::LengthDelimited)?;
    w.write_varint((values.len() * width) as u64)?;
    for &v in values {
        write_one(w, v)?;
    }
    Ok(())
}

fn packed_fixed_size(field_number: u32, count: usize, width: usize) -> usize {
    if count == 0 {
        return 0;
    }
    tag_size(field_number) + len_delimited_size(count * width)
}

/// Merge one wire occurrence of a repeated scalar field, accepting the
/// packed form for any element type and the expanded form at its natural
/// wire type.
fn merge_repeated_with<S: InputStream + ?Sized, T>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    element_type: WireType,
    out: &mut Vec<T>,
    mut read_one: impl FnMut(&mut WireReader<'_, S>) -> Result<T, WireError>,
) -> Result<(), WireError> {
    if wire_type == WireType::LengthDelimited {
        let len = r.read_length()?;
        let end = r.position() + len;
        while r.position() < end {
            out.push(read_one(r)?);
        }
        if r.position() != end {
            return Err(WireError::Truncated);
        }
        Ok(())
    } else if wire_type == element_type {
        out.push(read_one(r)?);
        Ok(())
    } else {
        Err(WireError::WireTypeMismatch)
    }
}

pub fn write_packed_int32<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[i32],
) -> Result<(), WireError> {
    write_packed_varints(w, field_number, values, |v| i64::from(v) as u64)
}

pub fn packed_int32_size(field_number: u32, values: &[i32]) -> usize {
    packed_varints_size(field_number, values, |v| i64::from(v) as u64)
}

pub fn merge_repeated_int32<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<i32>,
) -> Result<(), WireError> {
    merge_repeated_with(r, wire_type, WireType::Varint, out, |r| {
        Ok(r.read_varint()? as i32)
    })
}

pub fn write_packed_int64<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[i64],
) -> Result<(), WireError> {
    write_packed_varints(w, field_number, values, |v| v as u64)
}

pub fn packed_int64_size(field_number: u32, values: &[i64]) -> usize {
    packed_varints_size(field_number, values, |v| v as u64)
}

pub fn merge_repeated_int64<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<i64>,
) -> Result<(), WireError> {
    merge_repeated_with(r, wire_type, WireType::Varint, out, |r| {
        Ok(r.read_varint()? as i64)
    })
}

pub fn write_packed_uint32<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[u32],
) -> Result<(), WireError> {
    write_packed_varints(w, field_number, values, u64::from)
}

pub fn packed_uint32_size(field_number: u32, values: &[u32]) -> usize {
    packed_varints_size(field_number, values, u64::from)
}

pub fn merge_repeated_uint32<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<u32>,
) -> Result<(), WireError> {
    merge_repeated_with(r, wire_type, WireType::Varint, out, |r| {
        Ok(r.read_varint()? as u32)
    })
}

pub fn write_packed_uint64<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[u64],
) -> Result<(), WireError> {
    write_packed_varints(w, field_number, values, |v| v)
}

pub fn packed_uint64_size(field_number: u32, values: &[u64]) -> usize {
    packed_varints_size(field_number, values, |v| v)
}

pub fn merge_repeated_uint64<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<u64>,
) -> Result<(), WireError> {
    merge_repeated_with(r, wire_type, WireType::Varint, out, |r| r.read_varint())
}

pub fn write_packed_sint32<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[i32],
) -> Result<(), WireError> {
    write_packed_varints(w, field_number, values, |v| {
        u64::from(crate::types::zigzag_encode32(v))
    })
}

pub fn packed_sint32_size(field_number: u32, values: &[i32]) -> usize {
    packed_varints_size(field_number, values, |v| {
        u64::from(crate::types::zigzag_encode32(v))
    })
}

pub fn merge_repeated_sint32<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<i32>,
) -> Result<(), WireError> {
    merge_repeated_with(r, wire_type, WireType::Varint, out, |r| r.read_sint32())
}

pub fn write_packed_sint64<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[i64],
) -> Result<(), WireError> {
    write_packed_varints(w, field_number, values, crate::types::zigzag_encode64)
}

pub fn packed_sint64_size(field_number: u32, values: &[i64]) -> usize {
    packed_varints_size(field_number, values, crate::types::zigzag_encode64)
}

pub fn merge_repeated_sint64<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<i64>,
) -> Result<(), WireError> {
    merge_repeated_with(r, wire_type, WireType::Varint, out, |r| r.read_sint64())
}

pub fn write_packed_bool<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[bool],
) -> Result<(), WireError> {
    write_packed_varints(w, field_number, values, u64::from)
}

pub fn packed_bool_size(field_number: u32, values: &[bool]) -> usize {
    packed_varints_size(field_number, values, u64::from)
}

pub fn merge_repeated_bool<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<bool>,
) -> Result<(), WireError> {
    merge_repeated_with(r, wire_type, WireType::Varint, out, |r| {
        Ok(r.read_varint()? != 0)
    })
}

pub fn write_packed_enum<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[i32],
) -> Result<(), WireError> {
    write_packed_int32(w, field_number, values)
}

pub fn packed_enum_size(field_number: u32, values: &[i32]) -> usize {
    packed_int32_size(field_number, values)
}

pub fn merge_repeated_enum<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<i32>,
) -> Result<(), WireError> {
    merge_repeated_int32(r, wire_type, out)
}

pub fn write_packed_fixed32<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[u32],
) -> Result<(), WireError> {
    write_packed_fixed(w, field_number, values, 4, |w, v| w.write_fixed32(v))
}

pub fn packed_fixed32_size(field_number: u32, values: &[u32]) -> usize {
    packed_fixed_size(field_number, values.len(), 4)
}

pub fn merge_repeated_fixed32<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<u32>,
) -> Result<(), WireError> {
    merge_repeated_with(r, wire_type, WireType::Fixed32, out, |r| r.read_fixed32())
}

pub fn write_packed_fixed64<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[u64],
) -> Result<(), WireError> {
    write_packed_fixed(w, field_number, values, 8, |w, v| w.write_fixed64(v))
}

pub fn packed_fixed64_size(field_number: u32, values: &[u64]) -> usize {
    packed_fixed_size(field_number, values.len(), 8)
}

pub fn merge_repeated_fixed64<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<u64>,
) -> Result<(), WireError> {
    merge_repeated_with(r, wire_type, WireType::Fixed64, out, |r| r.read_fixed64())
}

pub fn write_packed_sfixed32<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[i32],
) -> Result<(), WireError> {
    write_packed_fixed(w, field_number, values, 4, |w, v| w.write_sfixed32(v))
}

pub fn packed_sfixed32_size(field_number: u32, values: &[i32]) -> usize {
    packed_fixed_size(field_number, values.len(), 4)
}

pub fn merge_repeated_sfixed32<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<i32>,
) -> Result<(), WireError> {
    merge_repeated_with(r, wire_type, WireType::Fixed32, out, |r| r.read_sfixed32())
}

pub fn write_packed_sfixed64<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[i64],
) -> Result<(), WireError> {
    write_packed_fixed(w, field_number, values, 8, |w, v| w.write_sfixed64(v))
}

pub fn packed_sfixed64_size(field_number: u32, values: &[i64]) -> usize {
    packed_fixed_size(field_number, values.len(), 8)
}

pub fn merge_repeated_sfixed64<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<i64>,
) -> Result<(), WireError> {
    merge_repeated_with(r, wire_type, WireType::Fixed64, out, |r| r.read_sfixed64())
}

pub fn write_packed_float<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[f32],
) -> Result<(), WireError> {
    write_packed_fixed(w, field_number, values, 4, |w, v| w.write_float(v))
}

pub fn packed_float_size(field_number: u32, values: &[f32]) -> usize {
    packed_fixed_size(field_number, values.len(), 4)
}

pub fn merge_repeated_float<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<f32>,
) -> Result<(), WireError> {
    merge_repeated_with(r, wire_type, WireType::Fixed32, out, |r| r.read_float())
}

pub fn write_packed_double<S: OutputStream + ?Sized>(
    w: &mut WireWriter<'_, S>,
    field_number: u32,
    values: &[f64],
) -> Result<(), WireError> {
    write_packed_fixed(w, field_number, values, 8, |w, v| w.write_double(v))
}

pub fn packed_double_size(field_number: u32, values: &[f64]) -> usize {
    packed_fixed_size(field_number, values.len(), 8)
}

pub fn merge_repeated_double<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<f64>,
) -> Result<(), WireError> {
    merge_repeated_with(r, wire_type, WireType::Fixed64, out, |r| r.read_double())
}

// ---------------------------------------------------------------------------
// Repeated length-delimited fields (never packed).
// ---------------------------------------------------------------------------

pub fn merge_repeated_string<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<ProtoString>,
) -> Result<(), WireError> {
    out.push(read_string(r, wire_type)?);
    Ok(())
}

pub fn merge_repeated_bytes<S: InputStream + ?Sized>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<Vec<u8>>,
) -> Result<(), WireError> {
    out.push(read_bytes(r, wire_type)?);
    Ok(())
}

pub fn merge_repeated_message<S: InputStream + ?Sized, M: Message>(
    r: &mut WireReader<'_, S>,
    wire_type: WireType,
    out: &mut Vec<M>,
) -> Result<(), WireError> {
    check_wire_type(wire_type, WireType::LengthDelimited)?;
    let body = r.read_bytes()?;
    out.push(M::decode_from_slice(&body)?);
    Ok(())
}
