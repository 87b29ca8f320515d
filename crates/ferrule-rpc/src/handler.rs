//! Inbound dispatch table.
//!
//! Registered handlers are stored as type-erasing closures: the typed
//! decode/invoke/encode path is captured at registration time, and at
//! dispatch the closure either returns a reply envelope (requests) or
//! nothing (events). The channel sends whatever comes back; keeping the
//! send on the channel side is what lets the closure stay free of any
//! reference to the channel itself.

use std::collections::HashMap;

use crate::addressing::Address;
use crate::envelope::RpcEnvelope;

/// Identity of a callable method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerKey {
    pub service_id: u16,
    pub method_id: u32,
}

/// Type-erased dispatch closure: `(src_addr, msg_id, payload)` in, an
/// optional reply envelope out.
pub(crate) type HandlerFn = Box<dyn FnMut(Address, u16, &[u8]) -> Option<RpcEnvelope>>;

#[derive(Default)]
pub(crate) struct HandlerTable {
    handlers: HashMap<HandlerKey, HandlerFn>,
}

impl HandlerTable {
    pub fn new() -> Self {
        HandlerTable::default()
    }

    /// Register `handler`, replacing any previous registration for the
    /// same key.
    pub fn insert(&mut self, key: HandlerKey, handler: HandlerFn) {
        self.handlers.insert(key, handler);
    }

    pub fn get_mut(&mut self, key: &HandlerKey) -> Option<&mut HandlerFn> {
        self.handlers.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}
