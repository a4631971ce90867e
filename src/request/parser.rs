//! HTTP/1.0 request head tokenizer.
//!
//! The tokenizer is a state machine over a single buffer holding one message:
//!
//! ```not_rust
//! RequestLine -> HeaderOrEnd -> (HeaderOrEnd | Done)
//! ```
//!
//! Every lexical element is validated in place with the [grammar] matchers. The buffer is only
//! consumed when the whole head is valid: on any error, including [`Error::RequestIncomplete`],
//! the caller buffer is left unchanged, so parsing can be retried after reading more bytes.
//!
//! [grammar]: crate::grammar
use bytes::{Buf, BytesMut};
use std::ops::Range;

use super::{Header, Limits, Request, RequestLine};
use crate::{Error, grammar, http::Version, log};

const CRLF: &[u8] = b"\r\n";

/// Parse a request head, splitting it from `bytes`.
///
/// No length limit is applied, only a version number that does not fit in `u32` is rejected as
/// [`Error::RequestTooLong`].
///
/// # Errors
///
/// - [`Error::RequestIncomplete`], `bytes` ends before the empty line ending the head
/// - [`Error::BadRequest`], the head violates the grammar
/// - [`Error::RequestTooLong`], a version number overflowed
/// - [`Error::MemoryAllocation`], allocating a header value failed
///
/// # Examples
///
/// ```
/// use bytes::BytesMut;
/// use httpgram::request::parse_request;
///
/// let mut bytes = BytesMut::from(&b"POST /form HTTP/1.0\r\nContent-Length: 2\r\n\r\nhi"[..]);
/// let request = parse_request(&mut bytes).unwrap();
///
/// assert_eq!(request.method(), "POST");
/// assert_eq!(request.headers().len(), 1);
/// assert_eq!(&bytes[..], b"hi");
/// ```
#[inline]
pub fn parse_request(bytes: &mut BytesMut) -> Result<Request, Error> {
    parse_request_with(bytes, &Limits::unbounded())
}

/// Parse a request head, splitting it from `bytes`, enforcing [`Limits`].
///
/// A request line longer than [`Limits::max_request_line_len`] is rejected even if its CRLF is
/// not yet in `bytes`.
///
/// # Errors
///
/// Same as [`parse_request`], additionally [`Error::RequestTooLong`] is returned when any limit
/// is exceeded.
pub fn parse_request_with(bytes: &mut BytesMut, limits: &Limits) -> Result<Request, Error> {
    match Tokenizer::new(&bytes[..], limits).run() {
        Ok((head_len, line, fields)) => {
            let head = bytes.split_to(head_len).freeze();

            let line = RequestLine::new(
                head.slice(line.method),
                head.slice(line.target),
                line.version,
            );
            let headers = fields
                .into_iter()
                .map(|field| Header::new(head.slice(field.name), field.value))
                .collect::<Vec<_>>();

            log::debug!(
                "request accepted: {} {} {}, {} header(s)",
                line.method(),
                line.target().escape_ascii(),
                line.version(),
                headers.len(),
            );

            Ok(Request::from_parts(line, headers))
        }
        Err(err) => {
            log::debug!("request rejected: {err}");
            Err(err)
        }
    }
}

/// Parse only the request line, splitting it and its CRLF from `bytes`.
///
/// # Errors
///
/// - [`Error::RequestIncomplete`], CRLF is not found
/// - [`Error::BadRequest`], the request line violates the grammar
/// - [`Error::RequestTooLong`], a version number overflowed
pub fn parse_request_line(bytes: &mut BytesMut) -> Result<RequestLine, Error> {
    let line = scan_request_line(&bytes[..], &Limits::unbounded())?;
    let head = bytes.split_to(line.len).freeze();

    Ok(RequestLine::new(
        head.slice(line.method),
        head.slice(line.target),
        line.version,
    ))
}

/// Parse a single header field, splitting it from `bytes`.
///
/// Returns `Ok(None)` when `bytes` starts with the empty line ending the header fields, the
/// empty line is consumed.
///
/// # Errors
///
/// - [`Error::RequestIncomplete`], the field is not terminated yet
/// - [`Error::BadRequest`], the field violates the grammar
/// - [`Error::MemoryAllocation`], allocating the header value failed
pub fn parse_header(bytes: &mut BytesMut) -> Result<Option<Header>, Error> {
    match scan_field(&bytes[..], 0, usize::MAX)? {
        Field::End => {
            bytes.advance(CRLF.len());
            Ok(None)
        }
        Field::Header(field) => {
            let line = bytes.split_to(field.end).freeze();
            Ok(Some(Header::new(line.slice(field.name), field.value)))
        }
    }
}

// ===== Tokenizer =====

#[derive(Debug)]
enum State {
    RequestLine,
    HeaderOrEnd(LineSpan),
    Done(LineSpan),
}

struct Tokenizer<'a> {
    bytes: &'a [u8],
    limits: &'a Limits,
    read: usize,
    fields: Vec<FieldSpan>,
}

impl<'a> Tokenizer<'a> {
    fn new(bytes: &'a [u8], limits: &'a Limits) -> Self {
        Self {
            bytes,
            limits,
            read: 0,
            fields: Vec::new(),
        }
    }

    /// Returns the head length, the request line, and the header fields.
    fn run(mut self) -> Result<(usize, LineSpan, Vec<FieldSpan>), Error> {
        let mut state = State::RequestLine;

        loop {
            state = match state {
                State::RequestLine => {
                    let line = scan_request_line(self.bytes, self.limits)?;
                    self.read = line.len;
                    State::HeaderOrEnd(line)
                }
                State::HeaderOrEnd(line) => match scan_field(
                    self.bytes,
                    self.read,
                    self.limits.max_header_line_len,
                )? {
                    Field::Header(field) => {
                        if self.fields.len() >= self.limits.max_headers {
                            return Err(Error::RequestTooLong);
                        }
                        self.read = field.end;
                        self.fields.try_reserve(1)?;
                        self.fields.push(field);
                        State::HeaderOrEnd(line)
                    }
                    Field::End => {
                        self.read += CRLF.len();
                        State::Done(line)
                    }
                },
                State::Done(line) => return Ok((self.read, line, self.fields)),
            };
        }
    }
}

// ===== Request Line =====

/// Request line location in the buffer.
#[derive(Debug)]
struct LineSpan {
    method: Range<usize>,
    target: Range<usize>,
    version: Version,
    /// Length including CRLF.
    len: usize,
}

fn scan_request_line(bytes: &[u8], limits: &Limits) -> Result<LineSpan, Error> {
    let Some(line_len) = find_crlf(bytes) else {
        // a trailing CR may be the start of the CRLF
        let pending = bytes.strip_suffix(b"\r").unwrap_or(bytes).len();
        return Err(match pending > limits.max_request_line_len {
            true => Error::RequestTooLong,
            false => Error::RequestIncomplete,
        });
    };

    if line_len > limits.max_request_line_len {
        return Err(Error::RequestTooLong);
    }

    let line = &bytes[..line_len];

    let Some(sp1) = line.iter().position(|e| *e == b' ') else {
        return Err(Error::BadRequest);
    };
    let Some(sp2) = line[sp1 + 1..].iter().position(|e| *e == b' ') else {
        return Err(Error::BadRequest);
    };
    let sp2 = sp1 + 1 + sp2;

    let method = 0..sp1;
    let target = sp1 + 1..sp2;
    let version = &line[sp2 + 1..];

    if method.len() > limits.max_method_len {
        return Err(Error::RequestTooLong);
    }
    if !grammar::is_method(&line[method.clone()]) {
        return Err(Error::BadRequest);
    }

    if target.len() > limits.max_uri_len {
        return Err(Error::RequestTooLong);
    }
    if !grammar::is_request_uri(&line[target.clone()]) {
        return Err(Error::BadRequest);
    }

    if version.len() > limits.max_version_len {
        return Err(Error::RequestTooLong);
    }
    let version = Version::parse(version)?;

    Ok(LineSpan {
        method,
        target,
        version,
        len: line_len + CRLF.len(),
    })
}

/// Returns the position of the first CRLF.
fn find_crlf(bytes: &[u8]) -> Option<usize> {
    let mut offset = 0;

    while let Some(cr) = bytes[offset..].iter().position(|e| *e == b'\r') {
        let at = offset + cr;
        match bytes.get(at + 1) {
            Some(b'\n') => return Some(at),
            Some(_) => offset = at + 1,
            None => return None,
        }
    }

    None
}

// ===== Header Field =====

enum Field {
    Header(FieldSpan),
    End,
}

/// Header field location in the buffer.
#[derive(Debug)]
struct FieldSpan {
    name: Range<usize>,
    value: Vec<u8>,
    /// Offset after the terminating CRLF.
    end: usize,
}

/// Scan header field starting at `at`.
///
/// A field longer than `max_len`, excluding its terminating CRLF and including folded
/// continuation lines, is rejected even if it is not terminated yet.
fn scan_field(bytes: &[u8], at: usize, max_len: usize) -> Result<Field, Error> {
    let line = &bytes[at..];

    match scan_field_line(line) {
        Ok(Field::Header(field)) => {
            if field.end - CRLF.len() > max_len {
                return Err(Error::RequestTooLong);
            }
            Ok(Field::Header(FieldSpan {
                name: at + field.name.start..at + field.name.end,
                value: field.value,
                end: at + field.end,
            }))
        }
        Err(Error::RequestIncomplete) => {
            // a trailing CRLF may still be followed by a continuation line
            let pending = line
                .strip_suffix(CRLF)
                .or_else(|| line.strip_suffix(b"\r"))
                .unwrap_or(line)
                .len();
            Err(match pending > max_len {
                true => Error::RequestTooLong,
                false => Error::RequestIncomplete,
            })
        }
        result => result,
    }
}

/// Scan header field at the start of `line`, offsets are relative to `line`.
///
/// ```not_rust
/// HTTP-header    = field-name ":" [ field-value ] CRLF
/// field-value    = *( field-content | LWS )
/// ```
fn scan_field_line(line: &[u8]) -> Result<Field, Error> {
    match line {
        [] | [b'\r'] => return Err(Error::RequestIncomplete),
        [b'\r', b'\n', ..] => return Ok(Field::End),
        _ => {}
    }

    let mut colon = None;

    for (i, byte) in line.iter().enumerate() {
        match byte {
            b':' => {
                colon = Some(i);
                break;
            }
            // field-name boundary must be the colon
            b' ' | b'\t' | b'\r' | b'\n' => return Err(Error::BadRequest),
            _ => {}
        }
    }

    let Some(colon) = colon else {
        return Err(Error::RequestIncomplete);
    };

    if !grammar::is_field_name(&line[..colon]) {
        return Err(Error::BadRequest);
    }

    let (value, read) = fold_value(&line[colon + 1..])?;

    if !grammar::is_field_content(&value) {
        log::trace!("invalid field-content: {}", value.escape_ascii());
        return Err(Error::BadRequest);
    }

    Ok(Field::Header(FieldSpan {
        name: 0..colon,
        value,
        end: colon + 1 + read,
    }))
}

/// Collect field value until the terminating CRLF, folding out LWS.
///
/// Leading and trailing LWS is removed, embedded LWS is replaced with a single SP. Quoted
/// strings are not special, whitespace inside them is normalized the same way.
///
/// Returns the value and the bytes read including the terminating CRLF.
fn fold_value(bytes: &[u8]) -> Result<(Vec<u8>, usize), Error> {
    let mut value = Vec::new();
    let mut space = false;
    let mut read = 0;

    loop {
        let rest = &bytes[read..];

        // a CRLF is only terminating if the next byte is not SP or HT
        if matches!(rest, [] | [b'\r'] | [b'\r', b'\n']) {
            return Err(Error::RequestIncomplete);
        }

        if let Some(len) = grammar::lws(rest) {
            read += len;
            space = !value.is_empty();
            continue;
        }

        if rest.starts_with(CRLF) {
            read += CRLF.len();
            break;
        }

        value.try_reserve(2)?;
        if space {
            value.push(b' ');
            space = false;
        }
        value.push(rest[0]);
        read += 1;
    }

    Ok((value, read))
}
