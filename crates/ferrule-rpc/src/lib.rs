//! Bidirectional peer-to-peer RPC over the ferrule wire codec.
//!
//! Every connected peer holds an [`RpcChannel`]: a single-threaded,
//! cooperatively driven endpoint that multiplexes many in-flight calls
//! over one transport, correlates responses to requests by message id,
//! enforces per-call deadlines, and dispatches inbound requests and
//! events to registered handlers.
//!
//! ```
//! use ferrule_rpc::{LoopbackTransport, RpcChannel, TransportKind};
//! use ferrule_wire::wkt::{Int32Value, StringValue};
//! use std::{cell::RefCell, rc::Rc};
//!
//! let (a, b) = LoopbackTransport::pair(TransportKind::Stream);
//! let mut caller = RpcChannel::new(a, 1);
//! let mut server = RpcChannel::new(b, 2);
//!
//! server.on_request(1, 1, |_src, req: Int32Value| {
//!     Ok::<_, ferrule_rpc::RpcError>(StringValue::new(req.value.to_string()))
//! });
//!
//! let got = Rc::new(RefCell::new(None));
//! let slot = got.clone();
//! caller.call(1, 1, &Int32Value::new(7), 2, None, move |result: Result<StringValue, _>| {
//!     *slot.borrow_mut() = Some(result);
//! });
//!
//! server.process();
//! caller.process();
//! assert_eq!(got.borrow().as_ref().unwrap().as_ref().unwrap().value, "7");
//! ```

#![forbid(unsafe_code)]

mod addressing;
mod channel;
mod clock;
mod envelope;
mod error;
mod framing;
mod handler;
mod msgid;
mod pending;
mod transport;

pub use addressing::{Address, BROADCAST, WILDCARD, is_local_destination, pending_peer};
pub use channel::{ChannelConfig, RpcChannel};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use envelope::{EVENT_MSG_ID, MessageType, PROTOCOL_VERSION, RpcEnvelope, RpcResponse};
pub use error::{ErrorCode, RpcError};
pub use framing::{FrameDecode, FramingMode, decode_frame, encode_frame};
pub use handler::HandlerKey;
pub use msgid::MessageIdGenerator;
pub use pending::PendingKey;
pub use transport::{
    LoopbackTransport, PacketTransport, Recv, Transport, TransportError, TransportKind,
};
