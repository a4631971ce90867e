//! Request-URI productions of [RFC 1945 §3.2.1][rfc].
//!
//! ```not_rust
//! Request-URI    = absoluteURI | abs_path
//!
//! absoluteURI    = scheme ":" *( uchar | reserved )
//! abs_path       = "/" rel_path
//! rel_path       = [ path ] [ ";" params ] [ "?" query ]
//!
//! path           = fsegment *( "/" segment )
//! fsegment       = 1*pchar
//! segment        = *pchar
//!
//! params         = param *( ";" param )
//! param          = *( pchar | "/" )
//!
//! scheme         = 1*( ALPHA | DIGIT | "+" | "-" | "." )
//! query          = *( uchar | reserved )
//!
//! pchar          = uchar | ":" | "@" | "&" | "=" | "+"
//! uchar          = unreserved | escape
//! escape         = "%" HEX HEX
//! ```
//!
//! Escapes are validated structurally only, they are never decoded.
//!
//! [rfc]: <https://www.rfc-editor.org/rfc/rfc1945#section-3.2.1>
use crate::matches;

/// escape = "%" HEX HEX
///
/// Returns `Some(3)` if `bytes` starts with an escape.
#[inline]
pub fn escape(bytes: &[u8]) -> Option<usize> {
    match bytes {
        [b'%', hi, lo, ..] if matches::is_hex(*hi) && matches::is_hex(*lo) => Some(3),
        _ => None,
    }
}

/// uchar = unreserved | escape
#[inline]
pub fn uchar(bytes: &[u8]) -> Option<usize> {
    match bytes.first() {
        Some(byte) if matches::is_unreserved(*byte) => Some(1),
        Some(b'%') => escape(bytes),
        _ => None,
    }
}

/// Length of the leading run of `pchar`, possibly zero.
///
/// ```not_rust
/// *( uchar | ":" | "@" | "&" | "=" | "+" )
/// ```
pub fn pchar(bytes: &[u8]) -> usize {
    let mut state = bytes;

    loop {
        match state {
            [byte, rest @ ..] if matches::is_pchar(*byte) => state = rest,
            [b'%', ..] => match escape(state) {
                Some(len) => state = &state[len..],
                None => break,
            },
            _ => break,
        }
    }

    bytes.len() - state.len()
}

/// fsegment = 1*pchar
#[inline]
pub fn fsegment(bytes: &[u8]) -> Option<usize> {
    match pchar(bytes) {
        0 => None,
        len => Some(len),
    }
}

/// segment = *pchar
#[inline]
pub fn segment(bytes: &[u8]) -> usize {
    pchar(bytes)
}

/// path = fsegment *( "/" segment )
pub fn path(bytes: &[u8]) -> Option<usize> {
    let mut read = fsegment(bytes)?;

    while let Some(b'/') = bytes.get(read) {
        read += 1;
        read += segment(&bytes[read..]);
    }

    Some(read)
}

/// param = *( pchar | "/" )
pub fn param(bytes: &[u8]) -> usize {
    let mut read = 0;

    loop {
        read += pchar(&bytes[read..]);
        match bytes.get(read) {
            Some(b'/') => read += 1,
            _ => break read,
        }
    }
}

/// params = param *( ";" param )
pub fn params(bytes: &[u8]) -> usize {
    let mut read = param(bytes);

    while let Some(b';') = bytes.get(read) {
        read += 1;
        read += param(&bytes[read..]);
    }

    read
}

/// query = *( uchar | reserved )
pub fn query(bytes: &[u8]) -> usize {
    let mut state = bytes;

    loop {
        match state {
            [byte, rest @ ..] if matches::is_reserved(*byte) => state = rest,
            _ => match uchar(state) {
                Some(len) => state = &state[len..],
                None => break,
            },
        }
    }

    bytes.len() - state.len()
}

/// rel_path = [ path ] [ ";" params ] [ "?" query ]
///
/// Every section is optional, so this always matches, possibly with zero length.
pub fn rel_path(bytes: &[u8]) -> usize {
    let mut read = path(bytes).unwrap_or(0);

    if let Some(b';') = bytes.get(read) {
        read += 1;
        read += params(&bytes[read..]);
    }

    if let Some(b'?') = bytes.get(read) {
        read += 1;
        read += query(&bytes[read..]);
    }

    read
}

/// abs_path = "/" rel_path
#[inline]
pub fn abs_path(bytes: &[u8]) -> Option<usize> {
    match bytes.split_first() {
        Some((b'/', rest)) => Some(1 + rel_path(rest)),
        _ => None,
    }
}

/// scheme = 1*( ALPHA | DIGIT | "+" | "-" | "." )
pub fn scheme(bytes: &[u8]) -> Option<usize> {
    match bytes.iter().position(|e| !matches::is_scheme(*e)) {
        Some(0) => None,
        Some(len) => Some(len),
        None if bytes.is_empty() => None,
        None => Some(bytes.len()),
    }
}

/// absoluteURI = scheme ":" *( uchar | reserved )
pub fn absolute_uri(bytes: &[u8]) -> Option<usize> {
    let read = scheme(bytes)?;

    match bytes.get(read) {
        Some(b':') => Some(read + 1 + query(&bytes[read + 1..])),
        _ => None,
    }
}

/// Request-URI = absoluteURI | abs_path
///
/// `absoluteURI` is attempted first.
#[inline]
pub fn request_uri(bytes: &[u8]) -> Option<usize> {
    absolute_uri(bytes).or_else(|| abs_path(bytes))
}
