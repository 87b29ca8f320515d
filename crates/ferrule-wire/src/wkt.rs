//! Built-in serializers for Google's well-known types.
//!
//! These are wire-compatible with the standard `google.protobuf`
//! definitions: `Empty`, `Timestamp`, `Duration`, the scalar wrappers, and
//! `Any`. All of them carry an [`UnknownFieldSet`] so fields added by newer
//! schema revisions survive a round trip.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::WireError;
use crate::field;
use crate::message::Message;
use crate::reader::WireReader;
use crate::stream::{InputStream, OutputStream};
use crate::text::ProtoString;
use crate::unknown::UnknownFieldSet;
use crate::writer::WireWriter;

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const MILLIS_PER_SECOND: i64 = 1_000;

/// `google.protobuf.Empty` — no known fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Empty {
    pub unknown_fields: UnknownFieldSet,
}

impl Message for Empty {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        self.unknown_fields.serialize_to(stream)
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?;
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        self.unknown_fields.byte_size()
    }
}

/// `google.protobuf.Timestamp` — a point in time as seconds and nanos
/// since the Unix epoch, UTC.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timestamp {
    /// Seconds since `1970-01-01T00:00:00Z`.
    pub seconds: i64,
    /// Non-negative fraction of a second at nanosecond resolution.
    pub nanos: i32,
    pub unknown_fields: UnknownFieldSet,
}

impl Timestamp {
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Timestamp {
            seconds,
            nanos,
            unknown_fields: UnknownFieldSet::new(),
        }
    }

    /// Whole seconds since the epoch, fraction discarded.
    pub fn to_unix_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn from_unix_seconds(seconds: i64) -> Self {
        Timestamp::new(seconds, 0)
    }

    /// The current wall-clock time.
    pub fn now() -> Self {
        SystemTime::now().into()
    }

    /// Convert to a [`SystemTime`], or `None` if the value falls outside
    /// the platform's representable range.
    pub fn to_system_time(&self) -> Option<SystemTime> {
        let base = if self.seconds >= 0 {
            UNIX_EPOCH.checked_add(std::time::Duration::from_secs(self.seconds as u64))?
        } else {
            UNIX_EPOCH.checked_sub(std::time::Duration::from_secs(self.seconds.unsigned_abs()))?
        };
        if self.nanos >= 0 {
            base.checked_add(std::time::Duration::from_nanos(self.nanos as u64))
        } else {
            base.checked_sub(std::time::Duration::from_nanos(self.nanos.unsigned_abs().into()))
        }
    }
}

impl From<SystemTime> for Timestamp {
    fn from(t: SystemTime) -> Self {
        match t.duration_since(UNIX_EPOCH) {
            Ok(d) => Timestamp::new(d.as_secs() as i64, d.subsec_nanos() as i32),
            Err(e) => {
                // Before the epoch: keep nanos in [0, 1e9) as the wkt
                // definition requires.
                let d = e.duration();
                let mut seconds = -(d.as_secs() as i64);
                let mut nanos = -(d.subsec_nanos() as i32);
                if nanos < 0 {
                    seconds -= 1;
                    nanos += NANOS_PER_SECOND as i32;
                }
                Timestamp::new(seconds, nanos)
            }
        }
    }
}

impl Message for Timestamp {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.seconds != 0 {
            field::write_int64(&mut w, 1, self.seconds)?;
        }
        if self.nanos != 0 {
            field::write_int32(&mut w, 2, self.nanos)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.seconds = field::read_int64(&mut r, tag.wire_type)?,
                2 => self.nanos = field::read_int32(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.seconds != 0 {
            size += field::int64_size(1, self.seconds);
        }
        if self.nanos != 0 {
            size += field::int32_size(2, self.nanos);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// `google.protobuf.Duration` — a signed span of time as seconds and
/// nanos. Both components carry the same sign.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Duration {
    pub seconds: i64,
    pub nanos: i32,
    pub unknown_fields: UnknownFieldSet,
}

impl Duration {
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Duration {
            seconds,
            nanos,
            unknown_fields: UnknownFieldSet::new(),
        }
    }

    pub fn from_millis(millis: i64) -> Self {
        Duration::new(
            millis / MILLIS_PER_SECOND,
            ((millis % MILLIS_PER_SECOND) * NANOS_PER_MILLI) as i32,
        )
    }

    /// Whole milliseconds, sub-millisecond fraction discarded.
    pub fn to_millis(&self) -> i64 {
        self.seconds * MILLIS_PER_SECOND + i64::from(self.nanos) / NANOS_PER_MILLI
    }

    /// Convert to an unsigned [`std::time::Duration`], or `None` when
    /// negative.
    pub fn to_std(&self) -> Option<std::time::Duration> {
        if self.seconds < 0 || self.nanos < 0 {
            return None;
        }
        Some(std::time::Duration::new(self.seconds as u64, self.nanos as u32))
    }
}

impl From<std::time::Duration> for Duration {
    fn from(d: std::time::Duration) -> Self {
        Duration::new(d.as_secs() as i64, d.subsec_nanos() as i32)
    }
}

impl Message for Duration {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.seconds != 0 {
            field::write_int64(&mut w, 1, self.seconds)?;
        }
        if self.nanos != 0 {
            field::write_int32(&mut w, 2, self.nanos)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.seconds = field::read_int64(&mut r, tag.wire_type)?,
                2 => self.nanos = field::read_int32(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.seconds != 0 {
            size += field::int64_size(1, self.seconds);
        }
        if self.nanos != 0 {
            size += field::int32_size(2, self.nanos);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// `google.protobuf.DoubleValue`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoubleValue {
    pub value: f64,
    pub unknown_fields: UnknownFieldSet,
}

impl DoubleValue {
    pub fn new(value: f64) -> Self {
        DoubleValue {
            value,
            unknown_fields: UnknownFieldSet::new(),
        }
    }
}

impl From<f64> for DoubleValue {
    fn from(value: f64) -> Self {
        DoubleValue::new(value)
    }
}

impl From<DoubleValue> for f64 {
    fn from(v: DoubleValue) -> f64 {
        v.value
    }
}

impl Message for DoubleValue {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.value != 0.0 {
            field::write_double(&mut w, 1, self.value)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.value = field::read_double(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.value != 0.0 {
            size += field::double_size(1);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// `google.protobuf.FloatValue`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloatValue {
    pub value: f32,
    pub unknown_fields: UnknownFieldSet,
}

impl FloatValue {
    pub fn new(value: f32) -> Self {
        FloatValue {
            value,
            unknown_fields: UnknownFieldSet::new(),
        }
    }
}

impl From<f32> for FloatValue {
    fn from(value: f32) -> Self {
        FloatValue::new(value)
    }
}

impl From<FloatValue> for f32 {
    fn from(v: FloatValue) -> f32 {
        v.value
    }
}

impl Message for FloatValue {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.value != 0.0 {
            field::write_float(&mut w, 1, self.value)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.value = field::read_float(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.value != 0.0 {
            size += field::float_size(1);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// `google.protobuf.Int64Value`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Int64Value {
    pub value: i64,
    pub unknown_fields: UnknownFieldSet,
}

impl Int64Value {
    pub fn new(value: i64) -> Self {
        Int64Value {
            value,
            unknown_fields: UnknownFieldSet::new(),
        }
    }
}

impl From<i64> for Int64Value {
    fn from(value: i64) -> Self {
        Int64Value::new(value)
    }
}

impl From<Int64Value> for i64 {
    fn from(v: Int64Value) -> i64 {
        v.value
    }
}

impl Message for Int64Value {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.value != 0 {
            field::write_int64(&mut w, 1, self.value)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.value = field::read_int64(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.value != 0 {
            size += field::int64_size(1, self.value);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// `google.protobuf.UInt64Value`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UInt64Value {
    pub value: u64,
    pub unknown_fields: UnknownFieldSet,
}

impl UInt64Value {
    pub fn new(value: u64) -> Self {
        UInt64Value {
            value,
            unknown_fields: UnknownFieldSet::new(),
        }
    }
}

impl From<u64> for UInt64Value {
    fn from(value: u64) -> Self {
        UInt64Value::new(value)
    }
}

impl From<UInt64Value> for u64 {
    fn from(v: UInt64Value) -> u64 {
        v.value
    }
}

impl Message for UInt64Value {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.value != 0 {
            field::write_uint64(&mut w, 1, self.value)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.value = field::read_uint64(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.value != 0 {
            size += field::uint64_size(1, self.value);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// `google.protobuf.Int32Value`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Int32Value {
    pub value: i32,
    pub unknown_fields: UnknownFieldSet,
}

impl Int32Value {
    pub fn new(value: i32) -> Self {
        Int32Value {
            value,
            unknown_fields: UnknownFieldSet::new(),
        }
    }
}

impl From<i32> for Int32Value {
    fn from(value: i32) -> Self {
        Int32Value::new(value)
    }
}

impl From<Int32Value> for i32 {
    fn from(v: Int32Value) -> i32 {
        v.value
    }
}

impl Message for Int32Value {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.value != 0 {
            field::write_int32(&mut w, 1, self.value)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.value = field::read_int32(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.value != 0 {
            size += field::int32_size(1, self.value);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// `google.protobuf.UInt32Value`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UInt32Value {
    pub value: u32,
    pub unknown_fields: UnknownFieldSet,
}

impl UInt32Value {
    pub fn new(value: u32) -> Self {
        UInt32Value {
            value,
            unknown_fields: UnknownFieldSet::new(),
        }
    }
}

impl From<u32> for UInt32Value {
    fn from(value: u32) -> Self {
        UInt32Value::new(value)
    }
}

impl From<UInt32Value> for u32 {
    fn from(v: UInt32Value) -> u32 {
        v.value
    }
}

impl Message for UInt32Value {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.value != 0 {
            field::write_uint32(&mut w, 1, self.value)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.value = field::read_uint32(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.value != 0 {
            size += field::uint32_size(1, self.value);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// `google.protobuf.BoolValue`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolValue {
    pub value: bool,
    pub unknown_fields: UnknownFieldSet,
}

impl BoolValue {
    pub fn new(value: bool) -> Self {
        BoolValue {
            value,
            unknown_fields: UnknownFieldSet::new(),
        }
    }
}

impl From<bool> for BoolValue {
    fn from(value: bool) -> Self {
        BoolValue::new(value)
    }
}

impl From<BoolValue> for bool {
    fn from(v: BoolValue) -> bool {
        v.value
    }
}

impl Message for BoolValue {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.value {
            field::write_bool(&mut w, 1, self.value)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.value = field::read_bool(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.value {
            size += field::bool_size(1);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// `google.protobuf.StringValue`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringValue {
    pub value: ProtoString,
    pub unknown_fields: UnknownFieldSet,
}

impl StringValue {
    pub fn new(value: impl Into<ProtoString>) -> Self {
        StringValue {
            value: value.into(),
            unknown_fields: UnknownFieldSet::new(),
        }
    }
}

impl From<String> for StringValue {
    fn from(value: String) -> Self {
        StringValue::new(value)
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        StringValue::new(value)
    }
}

impl Message for StringValue {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if !self.value.is_empty() {
            field::write_string(&mut w, 1, &self.value)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.value = field::read_string(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if !self.value.is_empty() {
            size += field::string_size(1, &self.value);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// `google.protobuf.BytesValue`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BytesValue {
    pub value: Vec<u8>,
    pub unknown_fields: UnknownFieldSet,
}

impl BytesValue {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        BytesValue {
            value: value.into(),
            unknown_fields: UnknownFieldSet::new(),
        }
    }
}

impl From<Vec<u8>> for BytesValue {
    fn from(value: Vec<u8>) -> Self {
        BytesValue::new(value)
    }
}

impl From<BytesValue> for Vec<u8> {
    fn from(v: BytesValue) -> Vec<u8> {
        v.value
    }
}

impl Message for BytesValue {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if !self.value.is_empty() {
            field::write_bytes(&mut w, 1, &self.value)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.value = field::read_bytes(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if !self.value.is_empty() {
            size += field::bytes_size(1, &self.value);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// Default URL prefix for [`Any::set_type`].
pub const TYPE_URL_PREFIX: &str = "type.googleapis.com/";

/// `google.protobuf.Any` — an arbitrary serialized message tagged with a
/// URL naming its type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Any {
    /// URL identifying the message type, usually
    /// `type.googleapis.com/full.type.Name`.
    pub type_url: ProtoString,
    /// Serialized message bytes.
    pub value: Vec<u8>,
    pub unknown_fields: UnknownFieldSet,
}

impl Any {
    /// Whether this `Any` holds a message of `full_type_name`, judged by
    /// the segment after the last `/` of the type URL.
    pub fn is(&self, full_type_name: &str) -> bool {
        if self.type_url.is_empty() {
            return false;
        }
        let bytes = self.type_url.as_bytes();
        match bytes.rsplit(|&b| b == b'/').next() {
            Some(name) => name == full_type_name.as_bytes(),
            None => false,
        }
    }

    /// Set the type URL to `type.googleapis.com/` followed by
    /// `full_type_name`.
    pub fn set_type(&mut self, full_type_name: &str) {
        self.set_type_with_prefix(full_type_name, TYPE_URL_PREFIX);
    }

    /// Set the type URL with an explicit prefix.
    pub fn set_type_with_prefix(&mut self, full_type_name: &str, url_prefix: &str) {
        let mut url = String::with_capacity(url_prefix.len() + full_type_name.len());
        url.push_str(url_prefix);
        url.push_str(full_type_name);
        self.type_url = url.into();
    }
}

impl Message for Any {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if !self.type_url.is_empty() {
            field::write_string(&mut w, 1, &self.type_url)?;
        }
        if !self.value.is_empty() {
            field::write_bytes(&mut w, 2, &self.value)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.type_url = field::read_string(&mut r, tag.wire_type)?,
                2 => self.value = field::read_bytes(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if !self.type_url.is_empty() {
            size += field::string_size(1, &self.type_url);
        }
        if !self.value.is_empty() {
            size += field::bytes_size(2, &self.value);
        }
        size + self.unknown_fields.byte_size()
    }
}
