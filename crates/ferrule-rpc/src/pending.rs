//! Outstanding calls awaiting a response or a deadline.
//!
//! Each entry owns its completion callback as a `FnOnce`; removal from the
//! table transfers ownership to exactly one firing site (matched response,
//! timeout sweep, or shutdown drain), which is what makes the
//! exactly-once callback guarantee structural rather than convention.

use std::collections::HashMap;

use crate::addressing::{Address, WILDCARD};
use crate::envelope::RpcResponse;
use crate::error::RpcError;

/// Identity of a pending call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PendingKey {
    /// Expected responder; [`WILDCARD`] accepts any source.
    pub peer_addr: Address,
    pub service_id: u16,
    pub msg_id: u16,
}

/// Type-erased completion callback. The typed wrapper built at the call
/// site decodes the response payload and maps error codes before invoking
/// the user's closure.
pub(crate) type ResponseCallback = Box<dyn FnOnce(Result<RpcResponse, RpcError>)>;

pub(crate) struct PendingCall {
    pub deadline_ms: u64,
    pub callback: ResponseCallback,
}

#[derive(Default)]
pub(crate) struct PendingTable {
    calls: HashMap<PendingKey, PendingCall>,
}

impl PendingTable {
    pub fn new() -> Self {
        PendingTable::default()
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn insert(&mut self, key: PendingKey, deadline_ms: u64, callback: ResponseCallback) {
        self.calls.insert(
            key,
            PendingCall {
                deadline_ms,
                callback,
            },
        );
    }

    /// Whether `msg_id` still keys a pending call toward `peer_addr`, on
    /// any service. Consulted before reusing an id.
    pub fn has_msg_id(&self, peer_addr: Address, msg_id: u16) -> bool {
        self.calls
            .keys()
            .any(|k| k.peer_addr == peer_addr && k.msg_id == msg_id)
    }

    /// Match an arriving response: the exact peer row first, the wildcard
    /// row on miss. The matched entry is removed.
    pub fn take_match(
        &mut self,
        src_addr: Address,
        service_id: u16,
        msg_id: u16,
    ) -> Option<PendingCall> {
        let direct = PendingKey {
            peer_addr: src_addr,
            service_id,
            msg_id,
        };
        if let Some(call) = self.calls.remove(&direct) {
            return Some(call);
        }
        self.calls.remove(&PendingKey {
            peer_addr: WILDCARD,
            service_id,
            msg_id,
        })
    }

    /// Remove and return every entry whose deadline has passed.
    pub fn take_expired(&mut self, now_ms: u64) -> Vec<(PendingKey, PendingCall)> {
        let expired: Vec<PendingKey> = self
            .calls
            .iter()
            .filter(|(_, call)| call.deadline_ms <= now_ms)
            .map(|(key, _)| *key)
            .collect();
        expired
            .into_iter()
            .filter_map(|key| self.calls.remove(&key).map(|call| (key, call)))
            .collect()
    }

    /// Remove and return everything; used when the channel shuts down.
    pub fn drain(&mut self) -> Vec<(PendingKey, PendingCall)> {
        self.calls.drain().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn noop() -> ResponseCallback {
        Box::new(|_| {})
    }

    fn key(peer: Address, msg_id: u16) -> PendingKey {
        PendingKey {
            peer_addr: peer,
            service_id: 1,
            msg_id,
        }
    }

    #[test]
    fn direct_match_removes_entry() {
        let mut table = PendingTable::new();
        table.insert(key(5, 10), 100, noop());
        assert!(table.take_match(5, 1, 10).is_some());
        assert_eq!(table.len(), 0);
        assert!(table.take_match(5, 1, 10).is_none());
    }

    #[test]
    fn wildcard_row_matches_any_source() {
        let mut table = PendingTable::new();
        table.insert(key(WILDCARD, 10), 100, noop());
        assert!(table.take_match(99, 1, 10).is_some());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn exact_peer_wins_over_wildcard() {
        let fired = Rc::new(Cell::new(0u32));

        let mut table = PendingTable::new();
        let f = fired.clone();
        table.insert(
            key(5, 10),
            100,
            Box::new(move |_| f.set(f.get() + 1)),
        );
        table.insert(key(WILDCARD, 10), 100, noop());

        let call = table.take_match(5, 1, 10).unwrap();
        (call.callback)(Ok(RpcResponse::default()));
        assert_eq!(fired.get(), 1);
        // The wildcard row is still there for some other responder.
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn mismatched_source_does_not_match() {
        let mut table = PendingTable::new();
        table.insert(key(5, 10), 100, noop());
        assert!(table.take_match(6, 1, 10).is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn mismatched_service_or_id_does_not_match() {
        let mut table = PendingTable::new();
        table.insert(key(5, 10), 100, noop());
        assert!(table.take_match(5, 2, 10).is_none());
        assert!(table.take_match(5, 1, 11).is_none());
    }

    #[test]
    fn expiry_is_deadline_inclusive() {
        let mut table = PendingTable::new();
        table.insert(key(5, 1), 100, noop());
        table.insert(key(5, 2), 200, noop());

        assert!(table.take_expired(99).is_empty());
        let expired = table.take_expired(100);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].0.msg_id, 1);
        assert_eq!(table.len(), 1);

        let expired = table.take_expired(u64::MAX);
        assert_eq!(expired.len(), 1);
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn has_msg_id_spans_services() {
        let mut table = PendingTable::new();
        table.insert(
            PendingKey {
                peer_addr: 5,
                service_id: 3,
                msg_id: 77,
            },
            100,
            noop(),
        );
        assert!(table.has_msg_id(5, 77));
        assert!(!table.has_msg_id(5, 78));
        assert!(!table.has_msg_id(6, 77));
    }

    #[test]
    fn drain_returns_everything() {
        let mut table = PendingTable::new();
        table.insert(key(1, 1), 100, noop());
        table.insert(key(2, 2), 100, noop());
        assert_eq!(table.drain().len(), 2);
        assert_eq!(table.len(), 0);
    }
}
