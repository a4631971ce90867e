//! Error types shared by the parser and the response writer.
use std::collections::TryReserveError;

/// An error that can occur while parsing a request or writing a response.
///
/// Errors are terminal for the call that produced them. Nothing is retried internally, and any
/// state allocated during the call is released before the error is returned.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The buffer ends before a required terminator was found.
    ///
    /// This is not a rejection, the caller should read more bytes and retry.
    RequestIncomplete,
    /// A caller supplied argument is not valid.
    InvalidParameter,
    /// A bounded field or number exceeded its maximum.
    RequestTooLong,
    /// The input violates the HTTP/1.0 grammar.
    BadRequest,
    /// Allocator failed while building a value.
    MemoryAllocation,
    /// An internal invariant was violated.
    Internal,
}

macro_rules! gen_error {
    ($($variant:ident => $msg:literal),* $(,)?) => {
        impl Error {
            /// Returns the diagnostic message of the error.
            pub const fn message(&self) -> &'static str {
                match self {
                    $(Self::$variant => $msg,)*
                }
            }
        }

        impl std::fmt::Display for Error {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($msg),)*
                }
            }
        }
    };
}

gen_error! {
    RequestIncomplete => "Request incomplete",
    InvalidParameter => "Invalid parameter",
    RequestTooLong => "Request too long",
    BadRequest => "Bad request",
    MemoryAllocation => "Memory allocation",
    Internal => "Internal error",
}

impl Error {
    /// Returns `true` if more bytes may complete the request.
    #[inline]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, Self::RequestIncomplete)
    }

    /// Returns `true` if the error is a final rejection.
    #[inline]
    pub const fn is_final(&self) -> bool {
        !self.is_incomplete()
    }
}

/// Returns the diagnostic message of an operation outcome.
///
/// `Ok` renders as `"Success"`.
///
/// # Examples
///
/// ```
/// use httpgram::{Error, status_message};
///
/// assert_eq!(status_message(&Ok::<(), Error>(())), "Success");
/// assert_eq!(status_message(&Err::<(), _>(Error::BadRequest)), "Bad request");
/// ```
pub const fn status_message<T>(result: &Result<T, Error>) -> &'static str {
    match result {
        Ok(_) => "Success",
        Err(err) => err.message(),
    }
}

impl std::error::Error for Error { }

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl From<TryReserveError> for Error {
    #[inline]
    fn from(_: TryReserveError) -> Self {
        Self::MemoryAllocation
    }
}
