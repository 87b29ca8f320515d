//! The contract every message type satisfies.
//!
//! Generated code (and the hand-written well-known types) implement
//! [`Message`] as a triple of operations: `encode`, `merge`, `byte_size`.
//! The invariants are:
//!
//! - `byte_size` equals the exact length `encode` produces.
//! - `merge` accepts fields in any order and treats repeated occurrences
//!   per Protocol Buffers semantics: scalars last-wins, repeated fields
//!   append, submessages merge recursively, oneofs keep the last variant,
//!   map keys keep their last value.
//! - Unrecognized fields are captured into the message's
//!   [`UnknownFieldSet`](crate::UnknownFieldSet) and re-emitted after the
//!   known fields on encode.

use crate::error::WireError;
use crate::stream::{InputStream, OutputStream, SliceInputStream, VecOutputStream};

/// A Protocol Buffers message.
pub trait Message: Default {
    /// Write all set fields, ascending field number, unknown fields last.
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError>;

    /// Parse fields from `stream` until it is exhausted, merging into
    /// `self`.
    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError>;

    /// Exact number of bytes [`encode`](Self::encode) will produce.
    fn byte_size(&self) -> usize;

    /// Parse a fresh value from `stream`.
    fn decode<S: InputStream + ?Sized>(stream: &mut S) -> Result<Self, WireError> {
        let mut msg = Self::default();
        msg.merge(stream)?;
        Ok(msg)
    }

    /// Encode into a new `Vec<u8>` sized up front from
    /// [`byte_size`](Self::byte_size).
    fn encode_to_vec(&self) -> Result<Vec<u8>, WireError> {
        let mut out = VecOutputStream::with_capacity(self.byte_size());
        self.encode(&mut out)?;
        Ok(out.into_inner())
    }

    /// Parse a fresh value from a byte slice.
    fn decode_from_slice(bytes: &[u8]) -> Result<Self, WireError> {
        let mut input = SliceInputStream::new(bytes);
        Self::decode(&mut input)
    }

    /// Merge fields parsed from a byte slice into `self`.
    fn merge_from_slice(&mut self, bytes: &[u8]) -> Result<(), WireError> {
        let mut input = SliceInputStream::new(bytes);
        self.merge(&mut input)
    }
}
