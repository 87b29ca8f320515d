//! Transport contract.
//!
//! The channel is transport-agnostic: anything that can move bytes between
//! two addressed endpoints can carry it. Concrete transports (serial
//! lines, TCP, UDP sockets) live with the application; this crate ships
//! only the in-process [`loopback`] pair.
//!
//! Addressing is out-of-band: `send` takes `(src, dst)` next to the bytes
//! and `recv` reports the pair it observed, encoded however the transport
//! likes (socket addresses for UDP, link-layer headers for serial). The
//! envelope itself never carries addresses.

use std::fmt;

use crate::addressing::Address;

/// Whether a transport preserves message boundaries.
///
/// The channel picks its framing mode from this: stream transports get a
/// varint length prefix per envelope, packet transports carry one envelope
/// per packet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKind {
    /// Continuous byte stream, no intrinsic boundaries (UART, TCP).
    Stream,
    /// Discrete datagrams, boundaries preserved (UDP, LoRa, CAN).
    Packet,
}

/// Transport-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The peer or the transport itself has shut down; no further sends
    /// will succeed.
    Closed,
    /// This send was refused (full queue, oversized packet); later sends
    /// may succeed.
    Rejected,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Closed => write!(f, "transport closed"),
            TransportError::Rejected => write!(f, "send rejected by transport"),
        }
    }
}

impl std::error::Error for TransportError {}

/// What one `recv` call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recv {
    /// Bytes written into the caller's buffer; 0 means nothing was
    /// pending.
    pub len: usize,
    /// Source address the transport observed.
    pub src: Address,
    /// Destination address the transport observed.
    pub dst: Address,
}

impl Recv {
    /// A `recv` that found nothing.
    pub fn empty() -> Self {
        Recv {
            len: 0,
            src: crate::addressing::WILDCARD,
            dst: crate::addressing::WILDCARD,
        }
    }
}

/// A byte mover between addressed endpoints.
///
/// Implementations must be non-blocking: `recv` returns what is pending
/// (possibly nothing) and never waits. Partial sends are not part of the
/// contract; a transport that cannot accept the whole buffer fails the
/// send. Packet transports deliver exactly one whole packet per `recv`.
pub trait Transport {
    fn kind(&self) -> TransportKind;

    /// Queue `data` for delivery from `src` to `dst`, all or nothing.
    fn send(&mut self, data: &[u8], src: Address, dst: Address) -> Result<(), TransportError>;

    /// Move pending bytes into `buf` and report how many, with the
    /// addressing the transport observed.
    fn recv(&mut self, buf: &mut [u8]) -> Result<Recv, TransportError>;

    /// Whether a `recv` right now could return data. A `true` here with a
    /// zero-length `recv` is permitted as a transient condition.
    fn available(&self) -> bool;
}

/// Datagram-native surface for packet transports.
///
/// The channel drives every transport through the base [`Transport`]
/// contract; this one exists for hosts that talk to the datagram layer
/// directly (MTU-aware senders, batching receivers). Boundaries are
/// strict: each `recv_packet` yields exactly one whole packet or nothing,
/// each `send_packet` transmits atomically or fails. Fragmentation is the
/// caller's problem; the codec never splits an envelope.
pub trait PacketTransport: Transport {
    /// Send one packet atomically.
    fn send_packet(
        &mut self,
        data: &[u8],
        src: Address,
        dst: Address,
    ) -> Result<(), TransportError>;

    /// Receive exactly one whole packet, or nothing.
    fn recv_packet(&mut self, buf: &mut [u8]) -> Result<Recv, TransportError>;
}

pub mod loopback;

pub use loopback::LoopbackTransport;
