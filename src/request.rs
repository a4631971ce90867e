//! HTTP Request
//!
//! A [`Request`] is the request head of an HTTP/1.0 message: the [`RequestLine`] followed by an
//! ordered list of [`Header`]s. The entity body is not part of it, bytes after the head are left
//! in the caller buffer.
//!
//! # Ownership
//!
//! The method, request target and header names are [`Bytes`] views into the request head, they
//! are never copied. The head is split from the caller buffer and shared by reference counting,
//! so it lives exactly as long as the last view referencing it.
//!
//! Header values are allocated separately, because folding linear whitespace rewrites the bytes.
//!
//! # Examples
//!
//! ```
//! use httpgram::{http::Version, request::Request};
//!
//! let request = Request::parse(b"GET /index.html HTTP/1.0\r\nHost: example.test\r\n\r\n").unwrap();
//!
//! assert_eq!(request.method(), "GET");
//! assert_eq!(request.target(), b"/index.html");
//! assert_eq!(request.version(), Version::HTTP_10);
//! assert_eq!(request.header("host"), Some(&b"example.test"[..]));
//! ```
use bytes::{Bytes, BytesMut};

use crate::{Error, http::Version};

mod limits;
mod parser;

pub use limits::Limits;
pub use parser::{parse_header, parse_request, parse_request_line, parse_request_with};

#[cfg(test)]
mod test;

// ===== Request Line =====

/// HTTP Request-Line.
///
/// ```not_rust
/// Request-Line = Method SP Request-URI SP HTTP-Version CRLF
/// ```
#[derive(Clone)]
pub struct RequestLine {
    method: Bytes,
    target: Bytes,
    version: Version,
}

impl RequestLine {
    pub(crate) fn new(method: Bytes, target: Bytes, version: Version) -> Self {
        Self { method, target, version }
    }

    /// Returns the request method, e.g: `"GET"`.
    #[inline]
    pub fn method(&self) -> &str {
        // SAFETY: method is validated as token, which only contains ASCII
        unsafe { std::str::from_utf8_unchecked(&self.method) }
    }

    /// Returns the request method bytes view.
    #[inline]
    pub fn method_bytes(&self) -> &Bytes {
        &self.method
    }

    /// Returns the request target, e.g: `b"/index.html"`.
    ///
    /// Escapes are not decoded.
    #[inline]
    pub fn target(&self) -> &[u8] {
        &self.target
    }

    /// Returns the request target bytes view.
    #[inline]
    pub fn target_bytes(&self) -> &Bytes {
        &self.target
    }

    /// Returns the request target as `str`, if it is valid UTF-8.
    ///
    /// The target can contain `national` bytes, which are not ASCII.
    #[inline]
    pub fn target_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.target).ok()
    }

    /// Returns the HTTP version.
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }
}

impl std::fmt::Debug for RequestLine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("RequestLine")
            .field("method", &self.method())
            .field("target", &self.target.escape_ascii().to_string())
            .field("version", &self.version)
            .finish()
    }
}

// ===== Header =====

/// HTTP Header field.
///
/// A parsed header always contains a valid `field-name` and `field-content`. A header created
/// with [`Header::new`] is validated when it is written.
#[derive(Clone, PartialEq, Eq)]
pub struct Header {
    name: Bytes,
    value: Bytes,
}

impl Header {
    /// Create new [`Header`].
    #[inline]
    pub fn new(name: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create new [`Header`] from static strings.
    #[inline]
    pub const fn from_static(name: &'static str, value: &'static str) -> Self {
        Self {
            name: Bytes::from_static(name.as_bytes()),
            value: Bytes::from_static(value.as_bytes()),
        }
    }

    /// Returns the header name.
    #[inline]
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// Returns the header name as `str`, if it is valid UTF-8.
    #[inline]
    pub fn name_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.name).ok()
    }

    /// Returns the header value.
    ///
    /// For a parsed header, leading and trailing LWS is removed and every embedded LWS run is
    /// replaced with a single SP, including inside a quoted-string.
    #[inline]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Returns the header value as `str`, if it is valid UTF-8.
    #[inline]
    pub fn value_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }

    /// Returns `true` if header name is equal to `name`, ignoring ASCII case.
    #[inline]
    pub fn is(&self, name: impl AsRef<[u8]>) -> bool {
        self.name.eq_ignore_ascii_case(name.as_ref())
    }

    /// Consume header returning its name and value.
    #[inline]
    pub fn into_parts(self) -> (Bytes, Bytes) {
        (self.name, self.value)
    }
}

impl std::fmt::Debug for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("Header")
            .field(&self.name.escape_ascii().to_string())
            .field(&self.value.escape_ascii().to_string())
            .finish()
    }
}

// ===== Request =====

/// HTTP/1.0 request head.
#[derive(Debug, Clone)]
pub struct Request {
    line: RequestLine,
    headers: Vec<Header>,
}

/// Constructor
impl Request {
    /// Parse request head by copying from slice reference.
    ///
    /// No length limit is applied, see [`Request::parse_with`].
    ///
    /// # Errors
    ///
    /// See [`parse_request`].
    #[inline]
    pub fn parse(bytes: &[u8]) -> Result<Self, Error> {
        parse_request(&mut BytesMut::from(bytes))
    }

    /// Parse request head by copying from slice reference, enforcing [`Limits`].
    ///
    /// # Errors
    ///
    /// See [`parse_request_with`].
    #[inline]
    pub fn parse_with(bytes: &[u8], limits: &Limits) -> Result<Self, Error> {
        parse_request_with(&mut BytesMut::from(bytes), limits)
    }

    pub(crate) fn from_parts(line: RequestLine, headers: Vec<Header>) -> Self {
        Self { line, headers }
    }
}

impl Request {
    /// Returns shared reference to [`RequestLine`].
    #[inline]
    pub fn line(&self) -> &RequestLine {
        &self.line
    }

    /// Returns the request method.
    #[inline]
    pub fn method(&self) -> &str {
        self.line.method()
    }

    /// Returns the request target.
    #[inline]
    pub fn target(&self) -> &[u8] {
        self.line.target()
    }

    /// Returns the HTTP version.
    #[inline]
    pub fn version(&self) -> Version {
        self.line.version()
    }

    /// Returns headers in wire order.
    #[inline]
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Returns the value of the first header with the given name, ignoring ASCII case.
    pub fn header(&self, name: impl AsRef<[u8]>) -> Option<&[u8]> {
        let name = name.as_ref();
        self.headers.iter().find(|e| e.is(name)).map(Header::value)
    }

    /// Returns all headers with the given name, ignoring ASCII case, in wire order.
    pub fn headers_all<'a>(&'a self, name: &'a [u8]) -> impl Iterator<Item = &'a Header> + 'a {
        self.headers.iter().filter(move |e| e.is(name))
    }

    /// Consume request returning its request line and headers.
    #[inline]
    pub fn into_parts(self) -> (RequestLine, Vec<Header>) {
        (self.line, self.headers)
    }
}
