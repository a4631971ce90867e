/// Request head length limits.
///
/// A value exceeding its limit is rejected with [`Error::RequestTooLong`]. Every limit is
/// inclusive, a value of exactly the limit is accepted.
///
/// [`Error::RequestTooLong`]: crate::Error::RequestTooLong
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum length of the method.
    pub max_method_len: usize,
    /// Maximum length of the request target.
    pub max_uri_len: usize,
    /// Maximum length of the version token, e.g: `HTTP/1.0`.
    pub max_version_len: usize,
    /// Maximum length of the whole request line, excluding CRLF.
    ///
    /// The default is the sum of the method, target and version limits plus two SP, so a request
    /// line with every part at its own limit is accepted.
    ///
    /// This limit is checked before the CRLF is found, so an oversized request line is rejected
    /// without waiting for the rest of the bytes.
    pub max_request_line_len: usize,
    /// Maximum length of a header field, excluding its CRLF and including folded continuation
    /// lines.
    ///
    /// Like [`max_request_line_len`][Limits::max_request_line_len], this is checked before the
    /// field is terminated.
    pub max_header_line_len: usize,
    /// Maximum number of header fields.
    pub max_headers: usize,
}

const METHOD: usize = 255;
const URI: usize = 1023;
const VERSION: usize = 63;
const HEADER_LINE: usize = 1 << 13;

impl Limits {
    /// Creates new [`Limits`] with the default bounds.
    pub const fn new() -> Self {
        Self {
            max_method_len: METHOD,
            max_uri_len: URI,
            max_version_len: VERSION,
            max_request_line_len: METHOD + 1 + URI + 1 + VERSION,
            max_header_line_len: HEADER_LINE,
            max_headers: 64,
        }
    }

    /// Creates new [`Limits`] which does not bound anything.
    pub const fn unbounded() -> Self {
        Self {
            max_method_len: usize::MAX,
            max_uri_len: usize::MAX,
            max_version_len: usize::MAX,
            max_request_line_len: usize::MAX,
            max_header_line_len: usize::MAX,
            max_headers: usize::MAX,
        }
    }
}

impl Default for Limits {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
