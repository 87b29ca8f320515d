//! The RPC channel driver.
//!
//! A channel owns one transport and everything needed to multiplex many
//! in-flight calls over it: the message-id allocator, the pending-call
//! table, the handler table and the receive buffer. It is single-threaded
//! and cooperative; nothing happens between calls to [`RpcChannel::process`],
//! and every callback runs to completion inside it on the caller's thread.

use bytes::{Buf, BytesMut};
use tracing::{debug, trace, warn};

use ferrule_wire::{Message, VecOutputStream};

use crate::addressing::{Address, is_local_destination, pending_peer};
use crate::clock::{Clock, MonotonicClock};
use crate::envelope::{EVENT_MSG_ID, MessageType, PROTOCOL_VERSION, RpcEnvelope, RpcResponse};
use crate::error::{ErrorCode, RpcError};
use crate::framing::{FrameDecode, FramingMode, decode_frame, encode_frame};
use crate::handler::{HandlerKey, HandlerTable};
use crate::msgid::MessageIdGenerator;
use crate::pending::{PendingKey, PendingTable};
use crate::transport::{Transport, TransportKind};

/// Construction-time knobs.
#[derive(Debug, Clone, Copy)]
pub struct ChannelConfig {
    /// Starting size of the receive staging buffer; it doubles on demand.
    pub initial_buffer_size: usize,
    /// Per-call timeout applied when the caller does not name one.
    pub default_timeout_ms: u64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        ChannelConfig {
            initial_buffer_size: 1024,
            default_timeout_ms: 5000,
        }
    }
}

/// A bidirectional RPC endpoint over one transport.
///
/// Both peers of a connection hold one of these; each side can call,
/// serve, and emit events independently. Drive it by calling
/// [`process`](Self::process) periodically: timeouts fire only there, and
/// inbound traffic is decoded and dispatched only there.
pub struct RpcChannel<T: Transport> {
    transport: T,
    local_address: Address,
    config: ChannelConfig,
    clock: Box<dyn Clock>,
    framing: FramingMode,
    id_gen: MessageIdGenerator,
    pending: PendingTable,
    handlers: HandlerTable,
    /// Assembled-but-unconsumed stream bytes.
    rx_buf: BytesMut,
    /// Addressing of the most recent receive, applied to the frame
    /// currently being assembled.
    rx_src: Address,
    rx_dst: Address,
    /// Staging buffer handed to `transport.recv`.
    scratch: Vec<u8>,
}

impl<T: Transport> RpcChannel<T> {
    pub fn new(transport: T, local_address: Address) -> Self {
        Self::with_config(transport, local_address, ChannelConfig::default())
    }

    pub fn with_config(transport: T, local_address: Address, config: ChannelConfig) -> Self {
        let framing = match transport.kind() {
            TransportKind::Stream => FramingMode::Stream,
            TransportKind::Packet => FramingMode::Packet,
        };
        let scratch = vec![0u8; config.initial_buffer_size.max(1)];
        RpcChannel {
            transport,
            local_address,
            config,
            clock: Box::new(MonotonicClock::new()),
            framing,
            id_gen: MessageIdGenerator::new(),
            pending: PendingTable::new(),
            handlers: HandlerTable::new(),
            rx_buf: BytesMut::new(),
            rx_src: crate::addressing::WILDCARD,
            rx_dst: crate::addressing::WILDCARD,
            scratch,
        }
    }

    /// Replace the time source. Meant to be called right after
    /// construction, before any calls are outstanding.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn local_address(&self) -> Address {
        self.local_address
    }

    /// Calls awaiting a response or a deadline.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Registered request and event handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Register a request handler for `(service_id, method_id)`.
    ///
    /// The handler receives the source address and the decoded request; its
    /// result travels back to the caller as a `RESPONSE` envelope. A request
    /// that fails to decode is answered with a `PARSE_ERROR` response
    /// without reaching the handler. Registering the same key again
    /// replaces the handler.
    pub fn on_request<Req, Resp, F>(&mut self, service_id: u16, method_id: u32, mut handler: F)
    where
        Req: Message,
        Resp: Message,
        F: FnMut(Address, Req) -> Result<Resp, RpcError> + 'static,
    {
        debug!(service_id, method_id, "registering request handler");
        let dispatch = move |src: Address, msg_id: u16, payload: &[u8]| -> Option<RpcEnvelope> {
            let request = match Req::decode_from_slice(payload) {
                Ok(request) => request,
                Err(e) => {
                    warn!(service_id, method_id, %e, "request failed to decode");
                    let response = RpcResponse::error(ErrorCode::ParseError);
                    return RpcEnvelope::response(service_id, msg_id, &response).ok();
                }
            };
            let response = match handler(src, request) {
                Ok(value) => match value.encode_to_vec() {
                    Ok(data) => RpcResponse::ok(data),
                    Err(e) => {
                        warn!(service_id, method_id, %e, "response failed to encode");
                        RpcResponse::error(ErrorCode::ParseError)
                    }
                },
                Err(err) => {
                    // A handler cannot fail with a success code.
                    let code = if err.code().is_ok() {
                        ErrorCode::Unknown
                    } else {
                        err.code()
                    };
                    RpcResponse::error(code)
                }
            };
            RpcEnvelope::response(service_id, msg_id, &response).ok()
        };
        self.handlers.insert(
            HandlerKey {
                service_id,
                method_id,
            },
            Box::new(dispatch),
        );
    }

    /// Register an event handler for `(service_id, method_id)`.
    ///
    /// Events are fire-and-forget: the handler's return is `()` and no
    /// response is ever produced. An event that fails to decode is dropped.
    pub fn on_event<Evt, F>(&mut self, service_id: u16, method_id: u32, mut handler: F)
    where
        Evt: Message,
        F: FnMut(Address, Evt) + 'static,
    {
        debug!(service_id, method_id, "registering event handler");
        let dispatch = move |src: Address, _msg_id: u16, payload: &[u8]| -> Option<RpcEnvelope> {
            match Evt::decode_from_slice(payload) {
                Ok(event) => handler(src, event),
                Err(e) => trace!(service_id, method_id, %e, "event failed to decode, dropped"),
            }
            None
        };
        self.handlers.insert(
            HandlerKey {
                service_id,
                method_id,
            },
            Box::new(dispatch),
        );
    }

    /// Start a call to `(service_id, method_id)` at `dst_addr`.
    ///
    /// `callback` fires exactly once, from inside [`process`](Self::process)
    /// or, on an immediate failure, from inside this call: with the decoded
    /// response, with the error code the responder chose, or with
    /// `TIMEOUT` / `TRANSPORT_ERROR` locally. `timeout_ms` of `None`
    /// applies the channel default. Returns whether the request was handed
    /// to the transport.
    pub fn call<Req, Resp, F>(
        &mut self,
        service_id: u16,
        method_id: u32,
        request: &Req,
        dst_addr: Address,
        timeout_ms: Option<u64>,
        callback: F,
    ) -> bool
    where
        Req: Message,
        Resp: Message + 'static,
        F: FnOnce(Result<Resp, RpcError>) + 'static,
    {
        let peer_addr = pending_peer(dst_addr);
        let msg_id = self.allocate_msg_id(peer_addr);

        let payload = match request.encode_to_vec() {
            Ok(payload) => payload,
            Err(e) => {
                warn!(service_id, method_id, %e, "request failed to encode");
                callback(Err(RpcError::parse_error()));
                return false;
            }
        };

        let envelope = RpcEnvelope::request(service_id, method_id, msg_id, payload);
        if self.send_envelope(&envelope, dst_addr).is_err() {
            callback(Err(RpcError::transport_error()));
            return false;
        }

        let timeout = timeout_ms.unwrap_or(self.config.default_timeout_ms);
        let deadline_ms = self.clock.now_ms().saturating_add(timeout);
        debug!(service_id, method_id, msg_id, dst_addr, deadline_ms, "call pending");

        let typed = move |outcome: Result<RpcResponse, RpcError>| {
            let result = outcome.and_then(|response| match response.error_code {
                ErrorCode::Ok => Resp::decode_from_slice(&response.response_data)
                    .map_err(|_| RpcError::parse_error()),
                code => Err(RpcError::new(code)),
            });
            callback(result);
        };
        self.pending.insert(
            PendingKey {
                peer_addr,
                service_id,
                msg_id,
            },
            deadline_ms,
            Box::new(typed),
        );
        true
    }

    /// Send a fire-and-forget event to `(service_id, method_id)` at
    /// `dst_addr`. No response will ever arrive and no state is kept.
    /// Returns whether the event was handed to the transport.
    pub fn send_event<Evt: Message>(
        &mut self,
        service_id: u16,
        method_id: u32,
        event: &Evt,
        dst_addr: Address,
    ) -> bool {
        let payload = match event.encode_to_vec() {
            Ok(payload) => payload,
            Err(e) => {
                warn!(service_id, method_id, %e, "event failed to encode");
                return false;
            }
        };
        let envelope = RpcEnvelope::event(service_id, method_id, payload);
        self.send_envelope(&envelope, dst_addr).is_ok()
    }

    /// Advance all work: sweep timeouts, drain the transport, decode and
    /// dispatch. Never blocks beyond the transport's non-blocking `recv`.
    pub fn process(&mut self) {
        self.check_timeouts();
        self.receive();
    }

    fn check_timeouts(&mut self) {
        let now_ms = self.clock.now_ms();
        for (key, call) in self.pending.take_expired(now_ms) {
            debug!(
                msg_id = key.msg_id,
                service_id = key.service_id,
                peer_addr = key.peer_addr,
                "call timed out"
            );
            (call.callback)(Err(RpcError::timeout()));
        }
    }

    fn receive(&mut self) {
        while self.transport.available() {
            let recv = match self.transport.recv(&mut self.scratch) {
                Ok(recv) => recv,
                Err(e) => {
                    warn!(%e, "transport receive failed");
                    break;
                }
            };
            if recv.len == 0 {
                break;
            }
            let filled = recv.len == self.scratch.len();

            match self.framing {
                FramingMode::Packet => {
                    let outcome = decode_frame(&self.scratch[..recv.len], FramingMode::Packet);
                    match outcome {
                        FrameDecode::Complete { envelope, .. } => {
                            self.dispatch(envelope, recv.src, recv.dst);
                        }
                        FrameDecode::Malformed { discard } => {
                            warn!(discard, "malformed packet dropped");
                        }
                        FrameDecode::Incomplete => {}
                    }
                }
                FramingMode::Stream => {
                    self.rx_buf.extend_from_slice(&self.scratch[..recv.len]);
                    self.rx_src = recv.src;
                    self.rx_dst = recv.dst;
                    self.drain_stream_frames();
                }
            }

            if filled {
                // The transport had more than one buffer's worth pending;
                // double so the next read drains faster.
                let doubled = self.scratch.len().saturating_mul(2);
                self.scratch.resize(doubled, 0);
            }
        }
    }

    fn drain_stream_frames(&mut self) {
        while !self.rx_buf.is_empty() {
            match decode_frame(&self.rx_buf, FramingMode::Stream) {
                FrameDecode::Complete { envelope, consumed } => {
                    self.rx_buf.advance(consumed);
                    let (src, dst) = (self.rx_src, self.rx_dst);
                    self.dispatch(envelope, src, dst);
                }
                FrameDecode::Incomplete => return,
                FrameDecode::Malformed { discard } => {
                    let n = discard.clamp(1, self.rx_buf.len());
                    warn!(discard = n, "malformed frame bytes dropped");
                    self.rx_buf.advance(n);
                }
            }
        }
    }

    fn dispatch(&mut self, envelope: RpcEnvelope, src_addr: Address, dst_addr: Address) {
        if envelope.version != PROTOCOL_VERSION {
            warn!(version = envelope.version, "protocol version mismatch, dropped");
            return;
        }
        trace!(
            message_type = ?envelope.message_type,
            service_id = envelope.service_id,
            method_id = envelope.method_id,
            msg_id = envelope.msg_id,
            src_addr,
            dst_addr,
            "dispatching envelope"
        );
        match envelope.message_type {
            MessageType::Request => self.dispatch_request(envelope, src_addr, dst_addr),
            MessageType::Response => self.dispatch_response(envelope, src_addr),
            MessageType::Event => self.dispatch_event(envelope, src_addr, dst_addr),
            MessageType::Unspecified => {
                warn!("envelope with unrecognized message type dropped");
            }
        }
    }

    fn dispatch_request(&mut self, envelope: RpcEnvelope, src_addr: Address, dst_addr: Address) {
        if !is_local_destination(dst_addr, self.local_address) {
            trace!(dst_addr, "request for another node ignored");
            return;
        }
        let key = HandlerKey {
            service_id: envelope.service_id,
            method_id: envelope.method_id,
        };
        let reply = match self.handlers.get_mut(&key) {
            Some(handler) => handler(src_addr, envelope.msg_id, &envelope.payload),
            None => {
                warn!(
                    service_id = key.service_id,
                    method_id = key.method_id,
                    "no handler for request"
                );
                let response = RpcResponse::error(ErrorCode::HandlerNotFound);
                RpcEnvelope::response(envelope.service_id, envelope.msg_id, &response).ok()
            }
        };
        if let Some(reply) = reply {
            if self.send_envelope(&reply, src_addr).is_err() {
                warn!(src_addr, "failed to send response");
            }
        }
    }

    fn dispatch_response(&mut self, envelope: RpcEnvelope, src_addr: Address) {
        match self
            .pending
            .take_match(src_addr, envelope.service_id, envelope.msg_id)
        {
            Some(call) => {
                let outcome = RpcResponse::decode_from_slice(&envelope.payload)
                    .map_err(|_| RpcError::parse_error());
                (call.callback)(outcome);
            }
            None => {
                // Late (already timed out), duplicated, or from the wrong
                // peer. All of them drop silently.
                trace!(
                    msg_id = envelope.msg_id,
                    service_id = envelope.service_id,
                    src_addr,
                    "unmatched response dropped"
                );
            }
        }
    }

    fn dispatch_event(&mut self, envelope: RpcEnvelope, src_addr: Address, dst_addr: Address) {
        if !is_local_destination(dst_addr, self.local_address) {
            trace!(dst_addr, "event for another node ignored");
            return;
        }
        let key = HandlerKey {
            service_id: envelope.service_id,
            method_id: envelope.method_id,
        };
        match self.handlers.get_mut(&key) {
            Some(handler) => {
                handler(src_addr, EVENT_MSG_ID, &envelope.payload);
            }
            None => {
                trace!(
                    service_id = key.service_id,
                    method_id = key.method_id,
                    "no handler for event, dropped"
                );
            }
        }
    }

    fn send_envelope(&mut self, envelope: &RpcEnvelope, dst_addr: Address) -> Result<(), RpcError> {
        let mut out = VecOutputStream::with_capacity(envelope.byte_size() + 5);
        if encode_frame(envelope, &mut out, self.framing).is_err() {
            return Err(RpcError::transport_error());
        }
        self.transport
            .send(out.data(), self.local_address, dst_addr)
            .map_err(|e| {
                debug!(%e, dst_addr, "transport send failed");
                RpcError::transport_error()
            })
    }

    fn allocate_msg_id(&mut self, peer_addr: Address) -> u16 {
        // Skip ids that still key an outstanding call toward this peer.
        // Bounded: after a full lap the id space is exhausted and reuse is
        // the only option left.
        for _ in 0..=u16::MAX as u32 {
            let id = self.id_gen.next_id();
            if !self.pending.has_msg_id(peer_addr, id) {
                return id;
            }
        }
        warn!(peer_addr, "message id space exhausted, reusing");
        self.id_gen.next_id()
    }
}

impl<T: Transport> Drop for RpcChannel<T> {
    /// Shutting down cancels everything: every pending call fires exactly
    /// once with `TRANSPORT_ERROR`.
    fn drop(&mut self) {
        for (key, call) in self.pending.drain() {
            debug!(
                msg_id = key.msg_id,
                service_id = key.service_id,
                "channel dropped with call pending"
            );
            (call.callback)(Err(RpcError::transport_error()));
        }
    }
}
