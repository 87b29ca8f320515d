//! Node addressing.
//!
//! Addresses are opaque 64-bit values assigned by the application; the
//! transport decides how they map onto real endpoints (socket addresses,
//! link-layer ids, bus positions). Two values are reserved.

/// Opaque node address.
pub type Address = u64;

/// "Any peer": as a call destination it accepts a response from any node;
/// stored in the pending table it matches any responder.
pub const WILDCARD: Address = 0x0000_0000_0000_0000;

/// "Every peer": delivered to all reachable nodes. Responses, if any,
/// arrive from distinct sources.
pub const BROADCAST: Address = 0xFFFF_FFFF_FFFF_FFFF;

/// Whether a frame addressed to `dst` should be delivered to a node at
/// `local`. Transports that deliver promiscuously (a shared bus) rely on
/// this check; point-to-point transports never present foreign frames.
pub fn is_local_destination(dst: Address, local: Address) -> bool {
    dst == local || dst == WILDCARD || dst == BROADCAST
}

/// The peer address a pending call is stored under: the destination for a
/// directed call, the wildcard for broadcast or wildcard destinations.
pub fn pending_peer(dst: Address) -> Address {
    if dst == WILDCARD || dst == BROADCAST {
        WILDCARD
    } else {
        dst
    }
}
