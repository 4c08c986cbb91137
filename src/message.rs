//! Protocol-independent request and response values.
//!
//! These are the opaque exchange types the host hands to
//! [`Handler::process`](crate::Handler::process). The host owns all framing
//! and parsing; from this crate's perspective a request is a byte payload
//! plus whatever string attributes the dispatcher chose to attach, and a
//! response is an append-only byte body the host consumes afterwards.
//!
//! # Example
//!
//! ```
//! use servkit::{Request, Response};
//!
//! let req = Request::new("ping".into()).with_attribute("peer", "10.0.0.7");
//! assert_eq!(req.attribute("peer"), Some("10.0.0.7"));
//!
//! let mut res = Response::new();
//! res.write(req.payload().clone());
//! assert_eq!(&res.into_payload()[..], b"ping");
//! ```

use std::collections::HashMap;

use bytes::{Bytes, BytesMut};

/// One inbound request as seen by a handler.
#[derive(Debug, Clone, Default)]
pub struct Request {
    payload: Bytes,
    attributes: HashMap<String, String>,
}

impl Request {
    /// Create a request carrying the given payload.
    pub fn new(payload: Bytes) -> Self {
        Self {
            payload,
            attributes: HashMap::new(),
        }
    }

    /// Attach a named attribute (dispatcher metadata such as peer address).
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The raw payload. Zero-copy; `Bytes` clones share the buffer.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Look up a dispatcher attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// The outbound body a handler produces for one exchange.
#[derive(Debug, Default)]
pub struct Response {
    body: BytesMut,
}

impl Response {
    /// Create an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes to the body.
    pub fn write(&mut self, chunk: impl AsRef<[u8]>) {
        self.body.extend_from_slice(chunk.as_ref());
    }

    /// Append a UTF-8 string to the body.
    pub fn write_str(&mut self, text: &str) {
        self.write(text.as_bytes());
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Consume the response, yielding the body for the host to send.
    pub fn into_payload(self) -> Bytes {
        self.body.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_attributes() {
        let req = Request::new(Bytes::from_static(b"data"))
            .with_attribute("peer", "127.0.0.1")
            .with_attribute("trace", "abc123");

        assert_eq!(req.attribute("peer"), Some("127.0.0.1"));
        assert_eq!(req.attribute("trace"), Some("abc123"));
        assert_eq!(req.attribute("missing"), None);
        assert_eq!(&req.payload()[..], b"data");
    }

    #[test]
    fn test_response_accumulates_writes() {
        let mut res = Response::new();
        assert!(res.is_empty());

        res.write_str("hello");
        res.write(b", ");
        res.write_str("world");

        assert_eq!(res.len(), 12);
        assert_eq!(&res.into_payload()[..], b"hello, world");
    }

    #[test]
    fn test_empty_response_payload() {
        let res = Response::new();
        assert!(res.into_payload().is_empty());
    }
}
