//! Mapping envelopes onto transport units.
//!
//! Stream transports carry no message boundaries, so each envelope is
//! prefixed with a varint length; receivers accumulate bytes until a whole
//! frame is present. Packet transports preserve boundaries, so the
//! envelope body is the packet and its length is implied.

use ferrule_wire::{Message, VecOutputStream, WireError, WireWriter};

use crate::envelope::RpcEnvelope;

/// How envelopes are delimited on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramingMode {
    /// Varint length prefix before each envelope.
    Stream,
    /// One envelope per packet, length implied.
    Packet,
}

/// Outcome of a frame decode attempt against a receive buffer.
#[derive(Debug, PartialEq)]
pub enum FrameDecode {
    /// A whole envelope was decoded; drop `consumed` bytes from the head
    /// of the buffer.
    Complete {
        envelope: RpcEnvelope,
        consumed: usize,
    },
    /// Not enough bytes yet; try again after the next receive.
    Incomplete,
    /// The head of the buffer cannot be a frame; drop `discard` bytes and
    /// retry.
    Malformed { discard: usize },
}

/// Serialize `envelope` into `out` under the given framing mode.
pub fn encode_frame(
    envelope: &RpcEnvelope,
    out: &mut VecOutputStream,
    mode: FramingMode,
) -> Result<(), WireError> {
    if mode == FramingMode::Stream {
        let mut w = WireWriter::new(out);
        w.write_varint(envelope.byte_size() as u64)?;
    }
    envelope.encode(out)
}

/// Try to decode one envelope from the head of `buf`.
///
/// In packet mode the whole buffer is one envelope. In stream mode the
/// varint length prefix is parsed incrementally: a prefix that has not
/// fully arrived is `Incomplete`, an overlong or overflowing prefix is
/// `Malformed` (the buffer cannot resynchronize, so all of it is
/// discarded), and a complete frame whose body fails to parse discards
/// exactly that frame.
pub fn decode_frame(buf: &[u8], mode: FramingMode) -> FrameDecode {
    match mode {
        FramingMode::Packet => {
            if buf.is_empty() {
                return FrameDecode::Incomplete;
            }
            match RpcEnvelope::decode_from_slice(buf) {
                Ok(envelope) => FrameDecode::Complete {
                    envelope,
                    consumed: buf.len(),
                },
                Err(_) => FrameDecode::Malformed { discard: buf.len() },
            }
        }
        FramingMode::Stream => {
            let mut value: u64 = 0;
            let mut shift = 0u32;
            for (i, &byte) in buf.iter().take(ferrule_wire::MAX_VARINT_LEN).enumerate() {
                if i == ferrule_wire::MAX_VARINT_LEN - 1 && byte > 1 {
                    return FrameDecode::Malformed { discard: buf.len() };
                }
                value |= u64::from(byte & 0x7F) << shift;
                if byte & 0x80 == 0 {
                    let prefix = i + 1;
                    let total = prefix as u64 + value;
                    if (buf.len() as u64) < total {
                        return FrameDecode::Incomplete;
                    }
                    let total = total as usize;
                    return match RpcEnvelope::decode_from_slice(&buf[prefix..total]) {
                        Ok(envelope) => FrameDecode::Complete {
                            envelope,
                            consumed: total,
                        },
                        Err(_) => FrameDecode::Malformed { discard: total },
                    };
                }
                shift += 7;
            }
            if buf.len() < ferrule_wire::MAX_VARINT_LEN {
                FrameDecode::Incomplete
            } else {
                FrameDecode::Malformed { discard: buf.len() }
            }
        }
    }
}
