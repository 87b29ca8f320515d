use std::fmt;

/// Errors produced by the stream layer and the wire codec.
///
/// The codec never panics on malformed input; every failure condition maps
/// to one of these variants and leaves the caller free to discard the
/// message and keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// Input ended before the requested bytes or value were complete.
    Truncated,

    /// A varint ran past ten bytes, or its tenth byte exceeded `0x01`.
    VarintOverflow,

    /// A fixed-capacity output stream cannot hold the write.
    CapacityExceeded,

    /// A field tag carried field number zero or above `2^29 - 1`.
    InvalidFieldNumber(u64),

    /// A wire-type code the codec cannot process.
    InvalidWireType(u8),

    /// A field arrived with a wire type incompatible with its declared type.
    WireTypeMismatch,

    /// An `END_GROUP` tag with no matching `START_GROUP`.
    UnexpectedEndGroup,

    /// Input ended inside a group before its `END_GROUP` tag.
    UnterminatedGroup,
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::Truncated => write!(f, "input truncated"),
            WireError::VarintOverflow => write!(f, "varint overflows 64 bits"),
            WireError::CapacityExceeded => write!(f, "output buffer capacity exceeded"),
            WireError::InvalidFieldNumber(n) => write!(f, "invalid field number: {}", n),
            WireError::InvalidWireType(code) => write!(f, "invalid wire type code: {}", code),
            WireError::WireTypeMismatch => write!(f, "wire type does not match field type"),
            WireError::UnexpectedEndGroup => write!(f, "END_GROUP tag without matching START_GROUP"),
            WireError::UnterminatedGroup => write!(f, "group not terminated before end of input"),
        }
    }
}

impl std::error::Error for WireError {}
