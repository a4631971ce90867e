use bytes::{BufMut, Bytes};

use crate::{Error, grammar, http::Version, log, request::Header};

const CRLF: &[u8] = b"\r\n";

/// Serialize a response into a single buffer.
///
/// ```not_rust
/// Full-Response = Status-Line *( HTTP-header ) CRLF [ Entity-Body ]
/// Status-Line   = HTTP-Version SP Status-Code SP Reason-Phrase CRLF
/// HTTP-header   = field-name ":" field-value CRLF
/// ```
///
/// Headers are written as `name:value` in slice order. The body is appended verbatim, no
/// `Content-Length` is added.
///
/// # Errors
///
/// - [`Error::InvalidParameter`], `code` is not a `Status-Code`, `reason` is not a
///   `Reason-Phrase`, or a header name or value is not a `field-name` or `field-content`
/// - [`Error::MemoryAllocation`], allocating the output buffer failed
/// - [`Error::Internal`], the written length disagrees with the computed length
///
/// # Examples
///
/// ```
/// use httpgram::{Error, http::Version, response::write_response};
///
/// let bytes = write_response(Version::HTTP_10, b"200", b"OK", &[], b"hi").unwrap();
/// assert_eq!(&bytes[..], b"HTTP/1.0 200 OK\r\n\r\nhi");
///
/// let err = write_response(Version::HTTP_10, b"200", b"O\x01K", &[], b"hi").unwrap_err();
/// assert_eq!(err, Error::InvalidParameter);
/// ```
pub fn write_response(
    version: Version,
    code: &[u8],
    reason: &[u8],
    headers: &[Header],
    body: &[u8],
) -> Result<Bytes, Error> {
    validate(code, reason, headers)?;

    let len = version.encoded_len()
        + 1
        + code.len()
        + 1
        + reason.len()
        + CRLF.len()
        + headers
            .iter()
            .map(|e| e.name().len() + 1 + e.value().len() + CRLF.len())
            .sum::<usize>()
        + CRLF.len()
        + body.len();

    let mut buf = Vec::new();
    buf.try_reserve_exact(len)?;

    write_head(version, code, reason, headers, &mut buf);
    buf.put_slice(body);

    if buf.len() != len {
        log::warning!("response length mismatch: expected {len}, written {}", buf.len());
        return Err(Error::Internal);
    }

    log::debug!("response written: {len} byte(s)");

    Ok(Bytes::from(buf))
}

fn validate(code: &[u8], reason: &[u8], headers: &[Header]) -> Result<(), Error> {
    if !grammar::is_status_code(code) {
        log::trace!("invalid Status-Code: {}", code.escape_ascii());
        return Err(Error::InvalidParameter);
    }

    if !grammar::is_reason_phrase(reason) {
        log::trace!("invalid Reason-Phrase: {}", reason.escape_ascii());
        return Err(Error::InvalidParameter);
    }

    for header in headers {
        if !grammar::is_field_name(header.name()) || !grammar::is_field_content(header.value()) {
            log::trace!("invalid header: {header:?}");
            return Err(Error::InvalidParameter);
        }
    }

    Ok(())
}

fn write_head<B: BufMut>(
    version: Version,
    code: &[u8],
    reason: &[u8],
    headers: &[Header],
    buf: &mut B,
) {
    version.write_to(buf);
    buf.put_u8(b' ');
    buf.put_slice(code);
    buf.put_u8(b' ');
    buf.put_slice(reason);
    buf.put_slice(CRLF);

    for header in headers {
        buf.put_slice(header.name());
        buf.put_u8(b':');
        buf.put_slice(header.value());
        buf.put_slice(CRLF);
    }

    buf.put_slice(CRLF);
}
