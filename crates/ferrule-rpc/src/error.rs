use std::fmt;

/// Wire-level RPC outcome codes.
///
/// These travel in the `error_code` field of an `RpcResponse`. The numeric
/// values are part of the protocol and must match across implementations.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Success.
    #[default]
    Ok = 0,

    /// No response arrived before the deadline.
    Timeout = 1,

    /// A request or response could not be decoded.
    ParseError = 2,

    /// The transport refused the send, or the connection is gone.
    TransportError = 3,

    /// No handler is registered for `(service_id, method_id)` at the
    /// target.
    HandlerNotFound = 4,

    /// Catch-all for error codes this version does not recognize. Never
    /// produced locally; only decoded off the wire.
    Unknown = 5,
}

impl ErrorCode {
    /// Decode a wire value. Unrecognized values collapse to
    /// [`ErrorCode::Unknown`] so newer peers stay intelligible.
    pub fn from_wire(value: u64) -> Self {
        match value {
            0 => ErrorCode::Ok,
            1 => ErrorCode::Timeout,
            2 => ErrorCode::ParseError,
            3 => ErrorCode::TransportError,
            4 => ErrorCode::HandlerNotFound,
            _ => ErrorCode::Unknown,
        }
    }

    pub fn as_wire(self) -> u32 {
        self as u32
    }

    pub fn is_ok(self) -> bool {
        self == ErrorCode::Ok
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCode::Ok => "ok",
            ErrorCode::Timeout => "timeout",
            ErrorCode::ParseError => "parse error",
            ErrorCode::TransportError => "transport error",
            ErrorCode::HandlerNotFound => "handler not found",
            ErrorCode::Unknown => "unknown error",
        };
        write!(f, "{}", name)
    }
}

/// Error surfaced to call sites: a completion callback's `Err` value and
/// the `Err` a request handler returns to fail a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpcError {
    code: ErrorCode,
}

impl RpcError {
    pub fn new(code: ErrorCode) -> Self {
        RpcError { code }
    }

    pub fn timeout() -> Self {
        RpcError::new(ErrorCode::Timeout)
    }

    pub fn parse_error() -> Self {
        RpcError::new(ErrorCode::ParseError)
    }

    pub fn transport_error() -> Self {
        RpcError::new(ErrorCode::TransportError)
    }

    pub fn handler_not_found() -> Self {
        RpcError::new(ErrorCode::HandlerNotFound)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rpc failed: {}", self.code)
    }
}

impl std::error::Error for RpcError {}

impl From<ErrorCode> for RpcError {
    fn from(code: ErrorCode) -> Self {
        RpcError::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_match_protocol() {
        assert_eq!(ErrorCode::Ok.as_wire(), 0);
        assert_eq!(ErrorCode::Timeout.as_wire(), 1);
        assert_eq!(ErrorCode::ParseError.as_wire(), 2);
        assert_eq!(ErrorCode::TransportError.as_wire(), 3);
        assert_eq!(ErrorCode::HandlerNotFound.as_wire(), 4);
        assert_eq!(ErrorCode::Unknown.as_wire(), 5);
    }

    #[test]
    fn roundtrip_known_codes() {
        for code in [
            ErrorCode::Ok,
            ErrorCode::Timeout,
            ErrorCode::ParseError,
            ErrorCode::TransportError,
            ErrorCode::HandlerNotFound,
            ErrorCode::Unknown,
        ] {
            assert_eq!(ErrorCode::from_wire(u64::from(code.as_wire())), code);
        }
    }

    #[test]
    fn unrecognized_codes_collapse_to_unknown() {
        assert_eq!(ErrorCode::from_wire(6), ErrorCode::Unknown);
        assert_eq!(ErrorCode::from_wire(999), ErrorCode::Unknown);
        assert_eq!(ErrorCode::from_wire(u64::MAX), ErrorCode::Unknown);
    }

    #[test]
    fn rpc_error_display() {
        let s = format!("{}", RpcError::timeout());
        assert!(s.contains("timeout"));
    }
}
