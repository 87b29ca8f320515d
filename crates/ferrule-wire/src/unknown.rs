//! Preservation of fields the current schema does not know about.
//!
//! A decoder that meets an unrecognized field number stores the raw wire
//! body here so a later re-encode reproduces the bytes it was given. The
//! set keeps insertion order, which equals wire order, so extension fields
//! written by a newer peer survive a round trip through an older one.

use crate::error::WireError;
use crate::stream::OutputStream;
use crate::types::WireType;
use crate::writer::{MAX_VARINT_LEN, WireWriter, encode_varint, tag_size};

/// A single unrecognized field, stored as raw wire bytes.
///
/// For `VARINT`, `FIXED32` and `FIXED64` the data is the value body as it
/// appeared on the wire. For `LENGTH_DELIMITED` the data includes the
/// length prefix so replay is a single copy. For `START_GROUP` the data is
/// the captured group interior; the closing `END_GROUP` tag is synthesized
/// on replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField {
    field_number: u32,
    wire_type: WireType,
    data: Vec<u8>,
}

impl UnknownField {
    pub fn field_number(&self) -> u32 {
        self.field_number
    }

    pub fn wire_type(&self) -> WireType {
        self.wire_type
    }

    /// Raw stored bytes; layout depends on the wire type.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Ordered collection of unrecognized fields attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownFieldSet {
    fields: Vec<UnknownField>,
}

impl UnknownFieldSet {
    pub fn new() -> Self {
        UnknownFieldSet::default()
    }

    /// Store a varint field. The value is re-encoded canonically.
    pub fn add_varint(&mut self, field_number: u32, value: u64) {
        let mut buf = [0u8; MAX_VARINT_LEN];
        let len = encode_varint(value, &mut buf);
        self.fields.push(UnknownField {
            field_number,
            wire_type: WireType::Varint,
            data: buf[..len].to_vec(),
        });
    }

    /// Store a fixed32 field, little-endian.
    pub fn add_fixed32(&mut self, field_number: u32, value: u32) {
        self.fields.push(UnknownField {
            field_number,
            wire_type: WireType::Fixed32,
            data: value.to_le_bytes().to_vec(),
        });
    }

    /// Store a fixed64 field, little-endian.
    pub fn add_fixed64(&mut self, field_number: u32, value: u64) {
        self.fields.push(UnknownField {
            field_number,
            wire_type: WireType::Fixed64,
            data: value.to_le_bytes().to_vec(),
        });
    }

    /// Store a length-delimited field. The length prefix is encoded here so
    /// replay is a single copy.
    pub fn add_length_delimited(&mut self, field_number: u32, body: &[u8]) {
        let mut buf = [0u8; MAX_VARINT_LEN];
        let prefix = encode_varint(body.len() as u64, &mut buf);
        let mut data = Vec::with_capacity(prefix + body.len());
        data.extend_from_slice(&buf[..prefix]);
        data.extend_from_slice(body);
        self.fields.push(UnknownField {
            field_number,
            wire_type: WireType::LengthDelimited,
            data,
        });
    }

    /// Store a captured group interior (everything between `START_GROUP`
    /// and its matching `END_GROUP`, both tags excluded).
    pub fn add_group(&mut self, field_number: u32, interior: &[u8]) {
        self.fields.push(UnknownField {
            field_number,
            wire_type: WireType::StartGroup,
            data: interior.to_vec(),
        });
    }

    /// Re-emit every stored field, in insertion order.
    pub fn serialize_to<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut writer = WireWriter::new(stream);
        for field in &self.fields {
            writer.write_tag(field.field_number, field.wire_type)?;
            writer.write_raw(&field.data)?;
            if field.wire_type == WireType::StartGroup {
                writer.write_tag(field.field_number, WireType::EndGroup)?;
            }
        }
        Ok(())
    }

    /// Exact number of bytes [`serialize_to`](Self::serialize_to) produces.
    pub fn byte_size(&self) -> usize {
        let mut total = 0;
        for field in &self.fields {
            total += tag_size(field.field_number) + field.data.len();
            if field.wire_type == WireType::StartGroup {
                total += tag_size(field.field_number);
            }
        }
        total
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnknownField> {
        self.fields.iter()
    }

    /// Move every field of `other` to the end of this set.
    pub fn append(&mut self, other: &mut UnknownFieldSet) {
        self.fields.append(&mut other.fields);
    }
}

impl<'a> IntoIterator for &'a UnknownFieldSet {
    type Item = &'a UnknownField;
    type IntoIter = std::slice::Iter<'a, UnknownField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
