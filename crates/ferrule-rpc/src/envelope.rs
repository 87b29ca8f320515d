//! The protocol messages every frame carries.
//!
//! [`RpcEnvelope`] is itself a Protocol Buffers message; its field numbers
//! are part of the public protocol and fixed forever. The payload field is
//! kept as raw bytes here because its interpretation depends on the
//! message type: request and event payloads are the caller's serialized
//! message, response payloads are a serialized [`RpcResponse`]. Addressing
//! is deliberately absent; it travels out-of-band through the transport.

use ferrule_wire::{
    InputStream, Message, OutputStream, UnknownFieldSet, WireError, WireReader, WireWriter, field,
};

use crate::error::ErrorCode;

/// Protocol version this implementation speaks. Envelopes carrying any
/// other version are dropped silently.
pub const PROTOCOL_VERSION: u32 = 1;

/// Reserved `msg_id` for fire-and-forget events.
pub const EVENT_MSG_ID: u16 = 0;

/// What an envelope's payload means.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// Unset or unrecognized; dropped at dispatch.
    #[default]
    Unspecified = 0,
    /// A call expecting a response.
    Request = 1,
    /// The response to an earlier request.
    Response = 2,
    /// Fire-and-forget; never answered.
    Event = 3,
}

impl MessageType {
    /// Decode a wire value. Unrecognized values collapse to
    /// [`MessageType::Unspecified`].
    pub fn from_wire(value: u64) -> Self {
        match value {
            1 => MessageType::Request,
            2 => MessageType::Response,
            3 => MessageType::Event,
            _ => MessageType::Unspecified,
        }
    }

    pub fn as_wire(self) -> u32 {
        self as u32
    }
}

/// Body of a `RESPONSE` envelope: outcome code plus the handler's
/// serialized response message (empty on error).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RpcResponse {
    pub error_code: ErrorCode,
    pub response_data: Vec<u8>,
    pub unknown_fields: UnknownFieldSet,
}

impl RpcResponse {
    pub fn ok(response_data: Vec<u8>) -> Self {
        RpcResponse {
            error_code: ErrorCode::Ok,
            response_data,
            unknown_fields: UnknownFieldSet::new(),
        }
    }

    pub fn error(code: ErrorCode) -> Self {
        RpcResponse {
            error_code: code,
            response_data: Vec::new(),
            unknown_fields: UnknownFieldSet::new(),
        }
    }
}

impl Message for RpcResponse {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if !self.error_code.is_ok() {
            field::write_uint32(&mut w, 1, self.error_code.as_wire())?;
        }
        if !self.response_data.is_empty() {
            field::write_bytes(&mut w, 2, &self.response_data)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => {
                    let raw = u64::from(field::read_uint32(&mut r, tag.wire_type)?);
                    self.error_code = ErrorCode::from_wire(raw);
                }
                2 => self.response_data = field::read_bytes(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if !self.error_code.is_ok() {
            size += field::uint32_size(1, self.error_code.as_wire());
        }
        if !self.response_data.is_empty() {
            size += field::bytes_size(2, &self.response_data);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// The outer message wrapping every RPC payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RpcEnvelope {
    /// Protocol version; field 1.
    pub version: u32,
    /// Target service; field 2.
    pub service_id: u16,
    /// Target method (0 on responses); field 3.
    pub method_id: u32,
    /// Payload interpretation; field 4.
    pub message_type: MessageType,
    /// Correlation id (0 for events); field 5.
    pub msg_id: u16,
    /// Serialized payload; field 6.
    pub payload: Vec<u8>,
    pub unknown_fields: UnknownFieldSet,
}

impl RpcEnvelope {
    /// Build a `REQUEST` envelope at the current protocol version.
    pub fn request(service_id: u16, method_id: u32, msg_id: u16, payload: Vec<u8>) -> Self {
        RpcEnvelope {
            version: PROTOCOL_VERSION,
            service_id,
            method_id,
            message_type: MessageType::Request,
            msg_id,
            payload,
            unknown_fields: UnknownFieldSet::new(),
        }
    }

    /// Build a `RESPONSE` envelope correlated to `msg_id`, serializing
    /// `response` into the payload. Responses carry `method_id = 0`.
    pub fn response(service_id: u16, msg_id: u16, response: &RpcResponse) -> Result<Self, WireError> {
        Ok(RpcEnvelope {
            version: PROTOCOL_VERSION,
            service_id,
            method_id: 0,
            message_type: MessageType::Response,
            msg_id,
            payload: response.encode_to_vec()?,
            unknown_fields: UnknownFieldSet::new(),
        })
    }

    /// Build an `EVENT` envelope. Events carry the reserved
    /// [`EVENT_MSG_ID`].
    pub fn event(service_id: u16, method_id: u32, payload: Vec<u8>) -> Self {
        RpcEnvelope {
            version: PROTOCOL_VERSION,
            service_id,
            method_id,
            message_type: MessageType::Event,
            msg_id: EVENT_MSG_ID,
            payload,
            unknown_fields: UnknownFieldSet::new(),
        }
    }
}

impl Message for RpcEnvelope {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.version != 0 {
            field::write_uint32(&mut w, 1, self.version)?;
        }
        if self.service_id != 0 {
            field::write_uint32(&mut w, 2, u32::from(self.service_id))?;
        }
        if self.method_id != 0 {
            field::write_uint32(&mut w, 3, self.method_id)?;
        }
        if self.message_type != MessageType::Unspecified {
            field::write_uint32(&mut w, 4, self.message_type.as_wire())?;
        }
        if self.msg_id != 0 {
            field::write_uint32(&mut w, 5, u32::from(self.msg_id))?;
        }
        if !self.payload.is_empty() {
            field::write_bytes(&mut w, 6, &self.payload)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.version = field::read_uint32(&mut r, tag.wire_type)?,
                2 => self.service_id = field::read_uint32(&mut r, tag.wire_type)? as u16,
                3 => self.method_id = field::read_uint32(&mut r, tag.wire_type)?,
                4 => {
                    let raw = u64::from(field::read_uint32(&mut r, tag.wire_type)?);
                    self.message_type = MessageType::from_wire(raw);
                }
                5 => self.msg_id = field::read_uint32(&mut r, tag.wire_type)? as u16,
                6 => self.payload = field::read_bytes(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.version != 0 {
            size += field::uint32_size(1, self.version);
        }
        if self.service_id != 0 {
            size += field::uint32_size(2, u32::from(self.service_id));
        }
        if self.method_id != 0 {
            size += field::uint32_size(3, self.method_id);
        }
        if self.message_type != MessageType::Unspecified {
            size += field::uint32_size(4, self.message_type.as_wire());
        }
        if self.msg_id != 0 {
            size += field::uint32_size(5, u32::from(self.msg_id));
        }
        if !self.payload.is_empty() {
            size += field::bytes_size(6, &self.payload);
        }
        size + self.unknown_fields.byte_size()
    }
}
