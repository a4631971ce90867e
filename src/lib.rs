//! HTTP/1.0 Grammar Toolkit
//!
//! Validation and decomposition of HTTP/1.0 ([RFC 1945]) wire text:
//!
//! - [`matches`], byte classes of the RFC lexical alphabet
//! - [`grammar`], prefix matchers for each grammar production
//! - [`request`], request head tokenizer
//! - [`response`], response assembler
//!
//! The crate performs no I/O, every operation works on an in-memory buffer owned by the caller.
//!
//! # Examples
//!
//! ```
//! use httpgram::{Request, Response, http::StatusCode};
//!
//! let request = Request::parse(b"GET / HTTP/1.0\r\nHost: example.test\r\n\r\n").unwrap();
//!
//! let bytes = Response::from_status(request.version(), StatusCode::NO_CONTENT)
//!     .serialize()
//!     .unwrap();
//!
//! assert_eq!(&bytes[..], b"HTTP/1.0 204 No Content\r\n\r\n");
//! ```
//!
//! [RFC 1945]: <https://www.rfc-editor.org/rfc/rfc1945>
#![warn(missing_debug_implementations)]

mod log;
mod error;

pub mod matches;
pub mod grammar;
pub mod http;
pub mod request;
pub mod response;

pub use error::{Error, status_message};
pub use request::{Header, Limits, Request};
pub use response::{Response, write_response};
