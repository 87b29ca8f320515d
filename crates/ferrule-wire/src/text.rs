//! Contents of proto `string` fields.
//!
//! Writers are supposed to put UTF-8 in `string` fields, but the codec
//! does not enforce that on input: whatever bytes arrived are kept and
//! re-emitted unchanged, so a message passing through a node with an
//! older or stricter schema is never corrupted. [`ProtoString`] is the
//! container for that: raw bytes with validated and lossy views on top.

use std::borrow::{Borrow, Cow};
use std::fmt;

/// A `string` field value: UTF-8 by convention, raw bytes in fact.
///
/// Comparison, hashing and round-tripping all operate on the exact bytes.
/// Use [`as_str`](ProtoString::as_str) when the caller needs validated
/// text and [`to_string_lossy`](ProtoString::to_string_lossy) for
/// display.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProtoString {
    bytes: Vec<u8>,
}

impl ProtoString {
    pub fn new() -> Self {
        ProtoString::default()
    }

    /// Wrap raw bytes without validation.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        ProtoString { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// The content as `&str`, or `None` when it is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// The content as text, replacing invalid sequences with U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

impl From<&str> for ProtoString {
    fn from(value: &str) -> Self {
        ProtoString {
            bytes: value.as_bytes().to_vec(),
        }
    }
}

impl From<String> for ProtoString {
    fn from(value: String) -> Self {
        ProtoString {
            bytes: value.into_bytes(),
        }
    }
}

impl AsRef<[u8]> for ProtoString {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Borrow<[u8]> for ProtoString {
    fn borrow(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq<str> for ProtoString {
    fn eq(&self, other: &str) -> bool {
        self.bytes.as_slice() == other.as_bytes()
    }
}

impl PartialEq<&str> for ProtoString {
    fn eq(&self, other: &&str) -> bool {
        self.bytes.as_slice() == other.as_bytes()
    }
}

impl PartialEq<String> for ProtoString {
    fn eq(&self, other: &String) -> bool {
        self.bytes.as_slice() == other.as_bytes()
    }
}

impl fmt::Debug for ProtoString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

impl fmt::Display for ProtoString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}
