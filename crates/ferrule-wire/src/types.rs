use std::fmt;

use crate::error::WireError;

/// Largest field number a tag can carry (`2^29 - 1`).
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Protocol Buffers wire type.
///
/// Each field on the wire is tagged with one of these codes, which tells
/// the decoder how the value bytes that follow are laid out. The two group
/// codes are recognized on input for unknown-field capture only; the codec
/// never emits them for known fields.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WireType {
    /// Base-128 varint (`int32`, `int64`, `uint32`, `uint64`, `sint32`,
    /// `sint64`, `bool`, `enum`).
    Varint = 0,
    /// Eight bytes, little-endian (`fixed64`, `sfixed64`, `double`).
    Fixed64 = 1,
    /// Varint length prefix followed by that many bytes (`string`, `bytes`,
    /// embedded messages, packed repeated fields).
    LengthDelimited = 2,
    /// Start of a group (legacy; input only).
    StartGroup = 3,
    /// End of a group (legacy; input only).
    EndGroup = 4,
    /// Four bytes, little-endian (`fixed32`, `sfixed32`, `float`).
    Fixed32 = 5,
}

impl WireType {
    /// Convert from the 3-bit wire code.
    pub fn from_wire(code: u8) -> Result<Self, WireError> {
        match code {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            3 => Ok(WireType::StartGroup),
            4 => Ok(WireType::EndGroup),
            5 => Ok(WireType::Fixed32),
            _ => Err(WireError::InvalidWireType(code)),
        }
    }

    /// Convert to the 3-bit wire code.
    pub fn as_wire(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WireType::Varint => "varint",
            WireType::Fixed64 => "fixed64",
            WireType::LengthDelimited => "length-delimited",
            WireType::StartGroup => "start-group",
            WireType::EndGroup => "end-group",
            WireType::Fixed32 => "fixed32",
        };
        write!(f, "{}", name)
    }
}

/// A parsed field tag: field number plus wire type.
///
/// On the wire a tag is a single varint, `(field_number << 3) | wire_type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldTag {
    pub field_number: u32,
    pub wire_type: WireType,
}

impl FieldTag {
    pub fn new(field_number: u32, wire_type: WireType) -> Self {
        FieldTag {
            field_number,
            wire_type,
        }
    }

    /// Decode a tag from its raw varint value.
    ///
    /// Rejects field numbers outside `[1, 2^29 - 1]` and wire codes the
    /// codec cannot process.
    pub fn from_wire(raw: u64) -> Result<Self, WireError> {
        let field_number = raw >> 3;
        if field_number == 0 || field_number > u64::from(MAX_FIELD_NUMBER) {
            return Err(WireError::InvalidFieldNumber(field_number));
        }
        let wire_type = WireType::from_wire((raw & 7) as u8)?;
        Ok(FieldTag {
            field_number: field_number as u32,
            wire_type,
        })
    }

    /// Encode the tag into its raw varint value.
    pub fn as_wire(self) -> u32 {
        (self.field_number << 3) | u32::from(self.wire_type.as_wire())
    }
}

/// Zigzag-encode a signed 32-bit value so small magnitudes get small varints.
pub fn zigzag_encode32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Invert [`zigzag_encode32`].
pub fn zigzag_decode32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Zigzag-encode a signed 64-bit value so small magnitudes get small varints.
pub fn zigzag_encode64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Invert [`zigzag_encode64`].
pub fn zigzag_decode64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
