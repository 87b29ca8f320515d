//! Lightweight Protocol Buffers runtime plus a bidirectional peer-to-peer
//! RPC channel.
//!
//! This facade re-exports the two halves of the workspace:
//!
//! - [`ferrule_wire`] (re-exported as [`wire`]): streams, the wire codec,
//!   unknown-field preservation, the [`Message`] contract, and the
//!   well-known types.
//! - [`ferrule_rpc`] (re-exported as [`rpc`]): the envelope protocol,
//!   framing, and the cooperative [`RpcChannel`].
//!
//! Most code gets by with the [`prelude`]:
//!
//! ```
//! use ferrule::prelude::*;
//!
//! let ts = wkt::Timestamp::new(1_700_000_000, 0);
//! let bytes = ts.encode_to_vec().unwrap();
//! assert_eq!(wkt::Timestamp::decode_from_slice(&bytes).unwrap(), ts);
//! ```

#![forbid(unsafe_code)]

pub use ferrule_rpc as rpc;
pub use ferrule_wire as wire;

// The types most call sites touch, at the crate root.
pub use ferrule_rpc::{
    Address, BROADCAST, ChannelConfig, Clock, ErrorCode, LoopbackTransport, ManualClock,
    MonotonicClock, PacketTransport, RpcChannel, RpcError, Transport, TransportError,
    TransportKind, WILDCARD,
};
pub use ferrule_wire::{
    InputStream, Message, OutputStream, ProtoString, SliceInputStream, UnknownFieldSet,
    VecOutputStream, WireError, WireReader, WireType, WireWriter,
};

/// Well-known types, re-exported at the conventional name.
pub use ferrule_wire::wkt;

/// Convenient imports for application code.
///
/// ```ignore
/// use ferrule::prelude::*;
/// ```
pub mod prelude {
    pub use ferrule_rpc::{
        Address, BROADCAST, ChannelConfig, ErrorCode, RpcChannel, RpcError, Transport,
        TransportKind, WILDCARD,
    };
    pub use ferrule_wire::{Message, ProtoString, UnknownFieldSet, WireError, wkt};
}
