//! HTTP Response
//!
//! A [`Response`] collects the fields of an HTTP/1.0 response and serializes them with
//! [`write_response`]. Every field is validated before anything is written, so serialization
//! either returns the complete message or an error.
//!
//! # Examples
//!
//! ```
//! use httpgram::{http::{StatusCode, Version}, response::Response};
//!
//! let bytes = Response::from_status(Version::HTTP_10, StatusCode::OK)
//!     .header("Content-Length", "2")
//!     .body("hi")
//!     .serialize()
//!     .unwrap();
//!
//! assert_eq!(&bytes[..], b"HTTP/1.0 200 OK\r\nContent-Length:2\r\n\r\nhi");
//! ```
use bytes::Bytes;

use crate::{
    Error,
    http::{StatusCode, Version},
    request::Header,
};

mod write;

pub use write::write_response;


/// HTTP/1.0 response.
#[derive(Debug, Clone)]
pub struct Response {
    version: Version,
    code: Bytes,
    reason: Bytes,
    headers: Vec<Header>,
    body: Bytes,
}

/// Constructor
impl Response {
    /// Create new [`Response`] with the given status line and an empty body.
    ///
    /// `code` and `reason` are validated when serialized.
    #[inline]
    pub fn new(version: Version, code: impl Into<Bytes>, reason: impl Into<Bytes>) -> Self {
        Self {
            version,
            code: code.into(),
            reason: reason.into(),
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Create new [`Response`] with the code and reason phrase of a [`StatusCode`].
    #[inline]
    pub fn from_status(version: Version, status: StatusCode) -> Self {
        Self::new(
            version,
            Bytes::from_static(status.status_str().as_bytes()),
            Bytes::from_static(status.message().as_bytes()),
        )
    }

    /// Append a header.
    ///
    /// Headers are written in insertion order, duplicates are kept.
    #[inline]
    pub fn header(mut self, name: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }

    /// Set the entity body.
    #[inline]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}

impl Response {
    /// Returns the HTTP version.
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the status code, e.g: `b"200"`.
    #[inline]
    pub fn code(&self) -> &[u8] {
        &self.code
    }

    /// Returns the reason phrase, e.g: `b"OK"`.
    #[inline]
    pub fn reason(&self) -> &[u8] {
        &self.reason
    }

    /// Returns headers in insertion order.
    #[inline]
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Returns mutable reference to the headers.
    #[inline]
    pub fn headers_mut(&mut self) -> &mut Vec<Header> {
        &mut self.headers
    }

    /// Returns the entity body.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.body
    }

    /// Serialize the response into wire format.
    ///
    /// # Errors
    ///
    /// See [`write_response`].
    #[inline]
    pub fn serialize(&self) -> Result<Bytes, Error> {
        write_response(
            self.version,
            &self.code,
            &self.reason,
            &self.headers,
            &self.body,
        )
    }
}
