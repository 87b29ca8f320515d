//! In-process transport pair.
//!
//! Two endpoints joined by a pair of queues, single-threaded by design:
//! what one side sends, the other receives on its next `recv`. Works in
//! both stream and packet modes, which makes it the reference transport
//! for exercising the channel (framing, reassembly, timeouts, shutdown)
//! without touching a real link.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::addressing::Address;

use super::{PacketTransport, Recv, Transport, TransportError, TransportKind};

#[derive(Debug)]
struct Datagram {
    data: Vec<u8>,
    read: usize,
    src: Address,
    dst: Address,
}

type Queue = Rc<RefCell<VecDeque<Datagram>>>;

/// One endpoint of an in-process pair.
///
/// Clones share the endpoint, so a test can keep a handle (to close the
/// link or throttle reads) after moving the transport into a channel.
#[derive(Debug, Clone)]
pub struct LoopbackTransport {
    kind: TransportKind,
    incoming: Queue,
    outgoing: Queue,
    closed: Rc<Cell<bool>>,
    recv_limit: Rc<Cell<usize>>,
}

impl LoopbackTransport {
    /// Create a connected pair of endpoints.
    pub fn pair(kind: TransportKind) -> (Self, Self) {
        let a_to_b: Queue = Rc::new(RefCell::new(VecDeque::new()));
        let b_to_a: Queue = Rc::new(RefCell::new(VecDeque::new()));
        let closed = Rc::new(Cell::new(false));

        let a = LoopbackTransport {
            kind,
            incoming: b_to_a.clone(),
            outgoing: a_to_b.clone(),
            closed: closed.clone(),
            recv_limit: Rc::new(Cell::new(usize::MAX)),
        };
        let b = LoopbackTransport {
            kind,
            incoming: a_to_b,
            outgoing: b_to_a,
            closed,
            recv_limit: Rc::new(Cell::new(usize::MAX)),
        };
        (a, b)
    }

    /// Shut the link down for both endpoints: sends fail from now on,
    /// reads drain nothing further.
    pub fn close(&self) {
        self.closed.set(true);
        self.incoming.borrow_mut().clear();
        self.outgoing.borrow_mut().clear();
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Cap how many bytes a single stream-mode `recv` returns. Lets tests
    /// split one frame across arbitrarily many reads.
    pub fn set_recv_limit(&self, limit: usize) {
        self.recv_limit.set(limit.max(1));
    }

    /// Datagrams queued toward this endpoint.
    pub fn pending_incoming(&self) -> usize {
        self.incoming.borrow().len()
    }
}

impl Transport for LoopbackTransport {
    fn kind(&self) -> TransportKind {
        self.kind
    }

    fn send(&mut self, data: &[u8], src: Address, dst: Address) -> Result<(), TransportError> {
        if self.closed.get() {
            return Err(TransportError::Closed);
        }
        self.outgoing.borrow_mut().push_back(Datagram {
            data: data.to_vec(),
            read: 0,
            src,
            dst,
        });
        Ok(())
    }

    fn recv(&mut self, buf: &mut [u8]) -> Result<Recv, TransportError> {
        if self.closed.get() {
            // Shutdown reads as end-of-stream, not an error.
            return Ok(Recv::empty());
        }
        let mut queue = self.incoming.borrow_mut();
        match self.kind {
            TransportKind::Stream => {
                // Byte-stream semantics: hand out as much of the front
                // datagram as fits, keep the rest for the next call.
                let Some(front) = queue.front_mut() else {
                    return Ok(Recv::empty());
                };
                let src = front.src;
                let dst = front.dst;
                let want = buf.len().min(self.recv_limit.get());
                let remaining = front.data.len() - front.read;
                let n = want.min(remaining);
                buf[..n].copy_from_slice(&front.data[front.read..front.read + n]);
                front.read += n;
                if front.read == front.data.len() {
                    queue.pop_front();
                }
                Ok(Recv { len: n, src, dst })
            }
            TransportKind::Packet => {
                // Datagram semantics: one whole packet per call. A packet
                // larger than the buffer is truncated.
                let Some(packet) = queue.pop_front() else {
                    return Ok(Recv::empty());
                };
                let n = packet.data.len().min(buf.len());
                buf[..n].copy_from_slice(&packet.data[..n]);
                Ok(Recv {
                    len: n,
                    src: packet.src,
                    dst: packet.dst,
                })
            }
        }
    }

    fn available(&self) -> bool {
        !self.closed.get() && !self.incoming.borrow().is_empty()
    }
}

impl PacketTransport for LoopbackTransport {
    fn send_packet(
        &mut self,
        data: &[u8],
        src: Address,
        dst: Address,
    ) -> Result<(), TransportError> {
        self.send(data, src, dst)
    }

    fn recv_packet(&mut self, buf: &mut [u8]) -> Result<Recv, TransportError> {
        if self.closed.get() {
            return Ok(Recv::empty());
        }
        // One whole datagram per call, independent of the endpoint's
        // stream/packet mode. Skip any bytes a stream-mode recv already
        // handed out.
        let Some(packet) = self.incoming.borrow_mut().pop_front() else {
            return Ok(Recv::empty());
        };
        let n = (packet.data.len() - packet.read).min(buf.len());
        buf[..n].copy_from_slice(&packet.data[packet.read..packet.read + n]);
        Ok(Recv {
            len: n,
            src: packet.src,
            dst: packet.dst,
        })
    }
}
