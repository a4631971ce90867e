use bytes::BufMut;

use crate::{Error, matches};

const PREFIX: &[u8] = b"HTTP/";

/// HTTP Version.
///
/// ```not_rust
/// HTTP-Version   = "HTTP" "/" 1*DIGIT "." 1*DIGIT
/// ```
///
/// [RFC 1945 §3.1](https://www.rfc-editor.org/rfc/rfc1945#section-3.1)
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
}

impl Version {
    /// `HTTP/0.9`
    pub const HTTP_09: Version = Version::new(0, 9);

    /// `HTTP/1.0`
    pub const HTTP_10: Version = Version::new(1, 0);

    /// `HTTP/1.1`
    pub const HTTP_11: Version = Version::new(1, 1);

    /// Create new [`Version`].
    #[inline]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Returns the major version.
    #[inline]
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// Returns the minor version.
    #[inline]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// Parse version from bytes, the whole input must be an `HTTP-Version`.
    ///
    /// Leading zeros are accepted, `HTTP/01.00` is `HTTP/1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadRequest`] if the input is malformed, or [`Error::RequestTooLong`] if
    /// a number does not fit in `u32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use httpgram::{Error, http::Version};
    ///
    /// assert_eq!(Version::parse(b"HTTP/1.0"), Ok(Version::HTTP_10));
    /// assert_eq!(Version::parse(b"HTTPS/1.0"), Err(Error::BadRequest));
    /// assert_eq!(Version::parse(b"HTTP/4294967296.0"), Err(Error::RequestTooLong));
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self, Error> {
        let Some(rest) = bytes.strip_prefix(PREFIX) else {
            return Err(Error::BadRequest);
        };

        let (major, rest) = parse_digits(rest)?;

        let Some((b'.', rest)) = rest.split_first() else {
            return Err(Error::BadRequest);
        };

        let (minor, rest) = parse_digits(rest)?;

        if !rest.is_empty() {
            return Err(Error::BadRequest);
        }

        Ok(Self { major, minor })
    }

    /// Returns the length of the version in wire format.
    pub fn encoded_len(&self) -> usize {
        PREFIX.len()
            + itoa::Buffer::new().format(self.major).len()
            + 1
            + itoa::Buffer::new().format(self.minor).len()
    }

    /// Write the version in wire format, e.g: `HTTP/1.0`.
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(PREFIX);
        buf.put_slice(itoa::Buffer::new().format(self.major).as_bytes());
        buf.put_u8(b'.');
        buf.put_slice(itoa::Buffer::new().format(self.minor).as_bytes());
    }
}

/// 1*DIGIT
fn parse_digits(bytes: &[u8]) -> Result<(u32, &[u8]), Error> {
    let len = bytes
        .iter()
        .position(|e| !matches::is_digit(*e))
        .unwrap_or(bytes.len());

    if len == 0 {
        return Err(Error::BadRequest);
    }

    let (digits, rest) = bytes.split_at(len);
    let mut value = 0u32;

    for digit in digits {
        value = value
            .checked_mul(10)
            .and_then(|e| e.checked_add(u32::from(digit - b'0')))
            .ok_or(Error::RequestTooLong)?;
    }

    Ok((value, rest))
}

impl Default for Version {
    #[inline]
    fn default() -> Version {
        Version::HTTP_10
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("HTTP/")?;
        f.write_str(itoa::Buffer::new().format(self.major))?;
        f.write_str(".")?;
        f.write_str(itoa::Buffer::new().format(self.minor))
    }
}

impl std::fmt::Debug for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
