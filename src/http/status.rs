use std::num::NonZeroU16;

/// HTTP [Status Code][rfc] defined by HTTP/1.0.
///
/// Only the codes registered by the RFC are representable. Arbitrary codes can still be written
/// through [`Response::new`][crate::response::Response::new].
///
/// [rfc]: <https://www.rfc-editor.org/rfc/rfc1945#section-9>
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(NonZeroU16);

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

macro_rules! status_code {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident $msg:literal;
        )*
    ) => {
        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $id: Self = Self(NonZeroU16::new($int).unwrap());
            )*

            /// Returns [`StatusCode`] of a registered status code value.
            #[inline]
            pub const fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $($int => Some(Self::$id),)*
                    _ => None,
                }
            }

            /// Returns `(code, reason, status line)` strings.
            const fn strings(&self) -> (&'static str, &'static str, &'static str) {
                match self.0.get() {
                    $(
                        $int => (stringify!($int), $msg, concat!(stringify!($int), " ", $msg)),
                    )*
                    // SAFETY: StatusCode value is privately constructed from the table above
                    _ => unsafe { std::hint::unreachable_unchecked() },
                }
            }
        }
    };
}

impl StatusCode {
    /// Returns status code value, e.g: `200`.
    #[inline]
    pub const fn status(&self) -> u16 {
        self.0.get()
    }

    /// Returns status code and reason phrase, e.g: `"200 OK"`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.strings().2
    }

    /// Returns status code as str, e.g: `"200"`.
    #[inline]
    pub const fn status_str(&self) -> &'static str {
        self.strings().0
    }

    /// Returns the reason phrase, e.g: `"OK"`.
    #[inline]
    pub const fn message(&self) -> &'static str {
        self.strings().1
    }
}

status_code! {
    /// `200`. The request has succeeded.
    200 OK "OK";
    /// `201`. The request has been fulfilled and resulted in a new resource being created.
    201 CREATED "Created";
    /// `202`. The request has been accepted for processing, but the processing has not been
    /// completed.
    202 ACCEPTED "Accepted";
    /// `204`. The server has fulfilled the request but there is no new information to send back.
    204 NO_CONTENT "No Content";
    /// `301`. The requested resource has been assigned a new permanent URL.
    301 MOVED_PERMANENTLY "Moved Permanently";
    /// `302`. The requested resource resides temporarily under a different URL.
    302 MOVED_TEMPORARILY "Moved Temporarily";
    /// `304`. The client has performed a conditional GET request and the document has not been
    /// modified.
    304 NOT_MODIFIED "Not Modified";
    /// `400`. The request could not be understood by the server due to malformed syntax.
    400 BAD_REQUEST "Bad Request";
    /// `401`. The request requires user authentication.
    401 UNAUTHORIZED "Unauthorized";
    /// `403`. The server understood the request, but is refusing to fulfill it.
    403 FORBIDDEN "Forbidden";
    /// `404`. The server has not found anything matching the Request-URI.
    404 NOT_FOUND "Not Found";
    /// `500`. The server encountered an unexpected condition which prevented it from fulfilling
    /// the request.
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
    /// `501`. The server does not support the functionality required to fulfill the request.
    501 NOT_IMPLEMENTED "Not Implemented";
    /// `502`. The server, while acting as a gateway or proxy, received an invalid response from
    /// the upstream server.
    502 BAD_GATEWAY "Bad Gateway";
    /// `503`. The server is currently unable to handle the request due to a temporary overloading
    /// or maintenance of the server.
    503 SERVICE_UNAVAILABLE "Service Unavailable";
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("StatusCode").field(&self.as_str()).finish()
    }
}
