//! Protocol Buffers wire codec.
//!
//! This crate is the serialization half of ferrule: byte-stream
//! abstractions, the low-level wire reader/writer, unknown-field
//! preservation, the [`Message`] contract that generated code implements,
//! the field helpers that generated code calls into, and built-in
//! serializers for Google's well-known types.
//!
//! ```
//! use ferrule_wire::{Message, wkt::Timestamp};
//!
//! let ts = Timestamp::new(1_700_000_000, 0);
//! let bytes = ts.encode_to_vec().unwrap();
//! assert_eq!(bytes.len(), ts.byte_size());
//! assert_eq!(Timestamp::decode_from_slice(&bytes).unwrap(), ts);
//! ```

#![forbid(unsafe_code)]

mod error;
mod message;
mod reader;
mod stream;
mod text;
mod types;
mod unknown;
mod writer;

pub mod field;
pub mod wkt;

pub use error::WireError;
pub use message::Message;
pub use reader::WireReader;
pub use stream::{
    ArrayInputStream, ArrayOutputStream, InputStream, OutputStream, SliceInputStream,
    VecOutputStream,
};
pub use text::ProtoString;
pub use types::{
    FieldTag, MAX_FIELD_NUMBER, WireType, zigzag_decode32, zigzag_decode64, zigzag_encode32,
    zigzag_encode64,
};
pub use unknown::{UnknownField, UnknownFieldSet};
pub use writer::{
    MAX_VARINT_LEN, WireWriter, encode_varint, len_delimited_size, sint32_size, sint64_size,
    tag_size, varint_size,
};
