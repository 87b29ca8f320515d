//! Hand-written message types in the shape the code generator produces:
//! plain structs carrying an `UnknownFieldSet`, with an
//! encode/merge/byte_size triple built from the `field` helpers.

// Each test binary uses its own subset of these types.
#![allow(dead_code)]

use std::collections::HashMap;

use ferrule_wire::{
    InputStream, Message, OutputStream, ProtoString, UnknownFieldSet, WireError, WireReader,
    WireType, WireWriter, field,
};

/// Simple three-field message: `name = 1`, `age = 2`, `email = 3`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub name: ProtoString,
    pub age: i32,
    pub email: ProtoString,
    pub unknown_fields: UnknownFieldSet,
}

impl Message for Person {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if !self.name.is_empty() {
            field::write_string(&mut w, 1, &self.name)?;
        }
        if self.age != 0 {
            field::write_int32(&mut w, 2, self.age)?;
        }
        if !self.email.is_empty() {
            field::write_string(&mut w, 3, &self.email)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.name = field::read_string(&mut r, tag.wire_type)?,
                2 => self.age = field::read_int32(&mut r, tag.wire_type)?,
                3 => self.email = field::read_string(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if !self.name.is_empty() {
            size += field::string_size(1, &self.name);
        }
        if self.age != 0 {
            size += field::int32_size(2, self.age);
        }
        if !self.email.is_empty() {
            size += field::string_size(3, &self.email);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// Proto3 enum; travels as `int32`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Color {
    #[default]
    Unspecified = 0,
    Red = 1,
    Green = 2,
    Blue = 3,
}

impl Color {
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Blue,
            _ => Color::Unspecified,
        }
    }
}

/// Submessage used for nesting and merge tests: `id = 1`, `label = 2`,
/// `tags = 3` (repeated string).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedMessage {
    pub id: i32,
    pub label: ProtoString,
    pub tags: Vec<ProtoString>,
    pub unknown_fields: UnknownFieldSet,
}

impl Message for NestedMessage {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.id != 0 {
            field::write_int32(&mut w, 1, self.id)?;
        }
        if !self.label.is_empty() {
            field::write_string(&mut w, 2, &self.label)?;
        }
        for tag in &self.tags {
            field::write_string(&mut w, 3, tag)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.id = field::read_int32(&mut r, tag.wire_type)?,
                2 => self.label = field::read_string(&mut r, tag.wire_type)?,
                3 => field::merge_repeated_string(&mut r, tag.wire_type, &mut self.tags)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.id != 0 {
            size += field::int32_size(1, self.id);
        }
        if !self.label.is_empty() {
            size += field::string_size(2, &self.label);
        }
        for tag in &self.tags {
            size += field::string_size(3, tag);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// Oneof with an int, a string, and a message variant
/// (fields 20, 21, 22).
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    Int(i32),
    Text(ProtoString),
    Nested(NestedMessage),
}

/// One field of every scalar type plus enum, repeated, map, submessage and
/// oneof.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeShowcase {
    pub int32_v: i32,          // 1
    pub int64_v: i64,          // 2
    pub uint32_v: u32,         // 3
    pub uint64_v: u64,         // 4
    pub sint32_v: i32,         // 5
    pub sint64_v: i64,         // 6
    pub fixed32_v: u32,        // 7
    pub fixed64_v: u64,        // 8
    pub sfixed32_v: i32,       // 9
    pub sfixed64_v: i64,       // 10
    pub float_v: f32,          // 11
    pub double_v: f64,         // 12
    pub bool_v: bool,          // 13
    pub string_v: ProtoString, // 14
    pub bytes_v: Vec<u8>,      // 15
    pub color: Color,          // 16
    pub numbers: Vec<i32>,     // 17, packed
    pub counts: HashMap<ProtoString, i32>, // 18, map<string, int32>
    pub nested: Option<NestedMessage>, // 19
    pub choice: Option<Choice>, // oneof: 20 / 21 / 22
    pub unknown_fields: UnknownFieldSet,
}

fn map_entry_size(key: &ProtoString, value: i32) -> usize {
    let mut size = 0;
    if !key.is_empty() {
        size += field::string_size(1, key);
    }
    if value != 0 {
        size += field::int32_size(2, value);
    }
    size
}

impl Message for TypeShowcase {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.int32_v != 0 {
            field::write_int32(&mut w, 1, self.int32_v)?;
        }
        if self.int64_v != 0 {
            field::write_int64(&mut w, 2, self.int64_v)?;
        }
        if self.uint32_v != 0 {
            field::write_uint32(&mut w, 3, self.uint32_v)?;
        }
        if self.uint64_v != 0 {
            field::write_uint64(&mut w, 4, self.uint64_v)?;
        }
        if self.sint32_v != 0 {
            field::write_sint32(&mut w, 5, self.sint32_v)?;
        }
        if self.sint64_v != 0 {
            field::write_sint64(&mut w, 6, self.sint64_v)?;
        }
        if self.fixed32_v != 0 {
            field::write_fixed32(&mut w, 7, self.fixed32_v)?;
        }
        if self.fixed64_v != 0 {
            field::write_fixed64(&mut w, 8, self.fixed64_v)?;
        }
        if self.sfixed32_v != 0 {
            field::write_sfixed32(&mut w, 9, self.sfixed32_v)?;
        }
        if self.sfixed64_v != 0 {
            field::write_sfixed64(&mut w, 10, self.sfixed64_v)?;
        }
        if self.float_v != 0.0 {
            field::write_float(&mut w, 11, self.float_v)?;
        }
        if self.double_v != 0.0 {
            field::write_double(&mut w, 12, self.double_v)?;
        }
        if self.bool_v {
            field::write_bool(&mut w, 13, self.bool_v)?;
        }
        if !self.string_v.is_empty() {
            field::write_string(&mut w, 14, &self.string_v)?;
        }
        if !self.bytes_v.is_empty() {
            field::write_bytes(&mut w, 15, &self.bytes_v)?;
        }
        if self.color != Color::Unspecified {
            field::write_enum(&mut w, 16, self.color as i32)?;
        }
        field::write_packed_int32(&mut w, 17, &self.numbers)?;
        for (key, value) in &self.counts {
            w.write_tag(18, WireType::LengthDelimited)?;
            w.write_varint(map_entry_size(key, *value) as u64)?;
            if !key.is_empty() {
                field::write_string(&mut w, 1, key)?;
            }
            if *value != 0 {
                field::write_int32(&mut w, 2, *value)?;
            }
        }
        if let Some(nested) = &self.nested {
            field::write_message(&mut w, 19, nested)?;
        }
        match &self.choice {
            Some(Choice::Int(v)) => field::write_int32(&mut w, 20, *v)?,
            Some(Choice::Text(v)) => field::write_string(&mut w, 21, v)?,
            Some(Choice::Nested(v)) => field::write_message(&mut w, 22, v)?,
            None => {}
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.int32_v = field::read_int32(&mut r, tag.wire_type)?,
                2 => self.int64_v = field::read_int64(&mut r, tag.wire_type)?,
                3 => self.uint32_v = field::read_uint32(&mut r, tag.wire_type)?,
                4 => self.uint64_v = field::read_uint64(&mut r, tag.wire_type)?,
                5 => self.sint32_v = field::read_sint32(&mut r, tag.wire_type)?,
                6 => self.sint64_v = field::read_sint64(&mut r, tag.wire_type)?,
                7 => self.fixed32_v = field::read_fixed32(&mut r, tag.wire_type)?,
                8 => self.fixed64_v = field::read_fixed64(&mut r, tag.wire_type)?,
                9 => self.sfixed32_v = field::read_sfixed32(&mut r, tag.wire_type)?,
                10 => self.sfixed64_v = field::read_sfixed64(&mut r, tag.wire_type)?,
                11 => self.float_v = field::read_float(&mut r, tag.wire_type)?,
                12 => self.double_v = field::read_double(&mut r, tag.wire_type)?,
                13 => self.bool_v = field::read_bool(&mut r, tag.wire_type)?,
                14 => self.string_v = field::read_string(&mut r, tag.wire_type)?,
                15 => self.bytes_v = field::read_bytes(&mut r, tag.wire_type)?,
                16 => self.color = Color::from_i32(field::read_enum(&mut r, tag.wire_type)?),
                17 => field::merge_repeated_int32(&mut r, tag.wire_type, &mut self.numbers)?,
                18 => {
                    // Map entry: a message with key = 1, value = 2; the
                    // latest occurrence of a key wins.
                    let body = field::read_bytes(&mut r, tag.wire_type)?;
                    let mut input = ferrule_wire::SliceInputStream::new(&body);
                    let mut entry = WireReader::new(&mut input);
                    let mut key = ProtoString::new();
                    let mut value = 0i32;
                    while let Some(entry_tag) = entry.read_tag()? {
                        match entry_tag.field_number {
                            1 => key = field::read_string(&mut entry, entry_tag.wire_type)?,
                            2 => value = field::read_int32(&mut entry, entry_tag.wire_type)?,
                            _ => entry.skip_field(entry_tag.wire_type)?,
                        }
                    }
                    self.counts.insert(key, value);
                }
                19 => {
                    let nested = self.nested.get_or_insert_with(NestedMessage::default);
                    field::merge_message(&mut r, tag.wire_type, nested)?;
                }
                20 => {
                    let v = field::read_int32(&mut r, tag.wire_type)?;
                    self.choice = Some(Choice::Int(v));
                }
                21 => {
                    let v = field::read_string(&mut r, tag.wire_type)?;
                    self.choice = Some(Choice::Text(v));
                }
                22 => {
                    // Same oneof variant twice merges; a different variant
                    // replaces.
                    if let Some(Choice::Nested(existing)) = &mut self.choice {
                        field::merge_message(&mut r, tag.wire_type, existing)?;
                    } else {
                        let mut nested = NestedMessage::default();
                        field::merge_message(&mut r, tag.wire_type, &mut nested)?;
                        self.choice = Some(Choice::Nested(nested));
                    }
                }
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.int32_v != 0 {
            size += field::int32_size(1, self.int32_v);
        }
        if self.int64_v != 0 {
            size += field::int64_size(2, self.int64_v);
        }
        if self.uint32_v != 0 {
            size += field::uint32_size(3, self.uint32_v);
        }
        if self.uint64_v != 0 {
            size += field::uint64_size(4, self.uint64_v);
        }
        if self.sint32_v != 0 {
            size += field::sint32_size(5, self.sint32_v);
        }
        if self.sint64_v != 0 {
            size += field::sint64_size(6, self.sint64_v);
        }
        if self.fixed32_v != 0 {
            size += field::fixed32_size(7);
        }
        if self.fixed64_v != 0 {
            size += field::fixed64_size(8);
        }
        if self.sfixed32_v != 0 {
            size += field::fixed32_size(9);
        }
        if self.sfixed64_v != 0 {
            size += field::fixed64_size(10);
        }
        if self.float_v != 0.0 {
            size += field::float_size(11);
        }
        if self.double_v != 0.0 {
            size += field::double_size(12);
        }
        if self.bool_v {
            size += field::bool_size(13);
        }
        if !self.string_v.is_empty() {
            size += field::string_size(14, &self.string_v);
        }
        if !self.bytes_v.is_empty() {
            size += field::bytes_size(15, &self.bytes_v);
        }
        if self.color != Color::Unspecified {
            size += field::enum_size(16, self.color as i32);
        }
        size += field::packed_int32_size(17, &self.numbers);
        for (key, value) in &self.counts {
            let entry = map_entry_size(key, *value);
            size += ferrule_wire::tag_size(18) + ferrule_wire::len_delimited_size(entry);
        }
        if let Some(nested) = &self.nested {
            size += field::message_size(19, nested);
        }
        match &self.choice {
            Some(Choice::Int(v)) => size += field::int32_size(20, *v),
            Some(Choice::Text(v)) => size += field::string_size(21, v),
            Some(Choice::Nested(v)) => size += field::message_size(22, v),
            None => {}
        }
        size + self.unknown_fields.byte_size()
    }
}

/// Explicit-presence fields: a present default value is still emitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionalsMessage {
    pub opt_int32: Option<i32>,    // 1
    pub opt_string: Option<ProtoString>, // 2
    pub opt_bool: Option<bool>,    // 3
    pub unknown_fields: UnknownFieldSet,
}

impl Message for OptionalsMessage {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if let Some(v) = self.opt_int32 {
            field::write_int32(&mut w, 1, v)?;
        }
        if let Some(v) = &self.opt_string {
            field::write_string(&mut w, 2, v)?;
        }
        if let Some(v) = self.opt_bool {
            field::write_bool(&mut w, 3, v)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.opt_int32 = Some(field::read_int32(&mut r, tag.wire_type)?),
                2 => self.opt_string = Some(field::read_string(&mut r, tag.wire_type)?),
                3 => self.opt_bool = Some(field::read_bool(&mut r, tag.wire_type)?),
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if let Some(v) = self.opt_int32 {
            size += field::int32_size(1, v);
        }
        if let Some(v) = &self.opt_string {
            size += field::string_size(2, v);
        }
        if self.opt_bool.is_some() {
            size += field::bool_size(3);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// The "new schema" writer for forward-compatibility tests: fields 2..4
/// are unknown to [`VersionedOld`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionedNew {
    pub known: i32,        // 1, varint
    pub extra_varint: u64, // 2, varint
    pub extra_fixed: u32,  // 3, fixed32
    pub extra_text: ProtoString, // 4, length-delimited
    pub unknown_fields: UnknownFieldSet,
}

impl Message for VersionedNew {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.known != 0 {
            field::write_int32(&mut w, 1, self.known)?;
        }
        if self.extra_varint != 0 {
            field::write_uint64(&mut w, 2, self.extra_varint)?;
        }
        if self.extra_fixed != 0 {
            field::write_fixed32(&mut w, 3, self.extra_fixed)?;
        }
        if !self.extra_text.is_empty() {
            field::write_string(&mut w, 4, &self.extra_text)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.known = field::read_int32(&mut r, tag.wire_type)?,
                2 => self.extra_varint = field::read_uint64(&mut r, tag.wire_type)?,
                3 => self.extra_fixed = field::read_fixed32(&mut r, tag.wire_type)?,
                4 => self.extra_text = field::read_string(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.known != 0 {
            size += field::int32_size(1, self.known);
        }
        if self.extra_varint != 0 {
            size += field::uint64_size(2, self.extra_varint);
        }
        if self.extra_fixed != 0 {
            size += field::fixed32_size(3);
        }
        if !self.extra_text.is_empty() {
            size += field::string_size(4, &self.extra_text);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// The "old schema" reader: only field 1 is known; everything else lands
/// in the unknown set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionedOld {
    pub known: i32, // 1
    pub unknown_fields: UnknownFieldSet,
}

impl Message for VersionedOld {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.known != 0 {
            field::write_int32(&mut w, 1, self.known)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.known = field::read_int32(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.known != 0 {
            size += field::int32_size(1, self.known);
        }
        size + self.unknown_fields.byte_size()
    }
}
