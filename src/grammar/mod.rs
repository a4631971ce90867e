//! HTTP/1.0 grammar matchers.
//!
//! Every production has a matcher with the contract: given `bytes`, does it *start with* a string
//! of the production, and how long is the longest such prefix. Productions that may fail return
//! `Option<usize>`, productions that always match (`*rule`) return the matched `usize`, which can
//! be zero.
//!
//! Matchers never answer whether the *whole* input belongs to a production. That exactness check
//! is done by the `is_*` predicates, which compare the matched length with the input length:
//!
//! - [`is_method`]
//! - [`is_request_uri`]
//! - [`is_field_name`]
//! - [`is_field_content`]
//! - [`is_status_code`]
//! - [`is_reason_phrase`]
//!
//! No production requires backtracking: every repetition and alternative is resolved by a single
//! byte lookahead or an exhausted character class test.
//!
//! # Examples
//!
//! ```
//! use httpgram::grammar;
//!
//! assert_eq!(grammar::token(b"GET /"), Some(3));
//! assert_eq!(grammar::abs_path(b"/a/b c"), Some(4));
//!
//! assert!(grammar::is_method(b"GET"));
//! assert!(!grammar::is_method(b"GET "));
//! assert!(grammar::is_request_uri(b"http://x.test/y"));
//! ```
use crate::matches;

mod uri;

pub use uri::{
    abs_path, absolute_uri, escape, fsegment, param, params, path, pchar, query, rel_path,
    request_uri, scheme, segment, uchar,
};


// ===== Lexical =====

/// token = 1*<any CHAR except CTLs or tspecials>
pub fn token(bytes: &[u8]) -> Option<usize> {
    match bytes.iter().position(|e| !matches::is_token(*e)) {
        Some(0) => None,
        Some(len) => Some(len),
        None if bytes.is_empty() => None,
        None => Some(bytes.len()),
    }
}

/// LWS = [CRLF] 1*( SP | HT )
///
/// A lone CRLF without trailing SP or HT is not LWS.
pub fn lws(bytes: &[u8]) -> Option<usize> {
    let crlf = match bytes {
        [b'\r', b'\n', ..] => 2,
        _ => 0,
    };

    match bytes[crlf..].iter().position(|e| !matches::is_blank(*e)) {
        Some(0) => None,
        Some(len) => Some(crlf + len),
        None if bytes.len() == crlf => None,
        None => Some(bytes.len()),
    }
}

/// Length of the leading `*TEXT` run.
///
/// ```not_rust
/// TEXT = <any OCTET except CTLs, but including LWS>
/// ```
///
/// Control bytes that are part of a valid LWS do not end the run.
#[inline]
pub fn text(bytes: &[u8]) -> usize {
    text_except(bytes, |_| false)
}

/// Length of the leading `*qdtext` run.
///
/// ```not_rust
/// qdtext = <any TEXT except <">>
/// ```
#[inline]
pub fn qdtext(bytes: &[u8]) -> usize {
    text_except(bytes, |byte| byte == b'"')
}

fn text_except(bytes: &[u8], exclude: impl Fn(u8) -> bool) -> usize {
    let mut read = 0;

    while let Some(&byte) = bytes.get(read) {
        if !matches::is_ctl(byte) {
            if exclude(byte) {
                break;
            }
            read += 1;
            continue;
        }

        match lws(&bytes[read..]) {
            Some(len) => read += len,
            None => break,
        }
    }

    read
}

// ===== Header Field =====

/// field-name = token
#[inline]
pub fn field_name(bytes: &[u8]) -> Option<usize> {
    token(bytes)
}

/// Length of the leading `field-content`.
///
/// ```not_rust
/// field-content  = <the OCTETs making up the field-value
///                   and consisting of either *TEXT or combinations
///                   of token, tspecials, and quoted-string>
/// ```
///
/// The `*TEXT` alternative is taken when it covers all of `bytes`, otherwise the longest
/// sequence of tokens, tspecials and qdtext fragments is returned.
pub fn field_content(bytes: &[u8]) -> usize {
    let read = text(bytes);
    if read == bytes.len() {
        return read;
    }

    let mut read = 0;

    while let Some(&byte) = bytes.get(read) {
        if matches::is_tspecial(byte) {
            read += 1;
            continue;
        }

        if let Some(len) = token(&bytes[read..]) {
            read += len;
            continue;
        }

        match qdtext(&bytes[read..]) {
            0 => break,
            len => read += len,
        }
    }

    read
}

// ===== Status Line =====

/// Status-Code = 3DIGIT
///
/// [RFC 1945 §6.1.1](https://www.rfc-editor.org/rfc/rfc1945#section-6.1.1)
#[inline]
pub fn status_code(bytes: &[u8]) -> Option<usize> {
    match bytes {
        [a, b, c, ..] if matches::is_digit(*a) && matches::is_digit(*b) && matches::is_digit(*c) => {
            Some(3)
        }
        _ => None,
    }
}

/// Length of the leading `Reason-Phrase`.
///
/// ```not_rust
/// Reason-Phrase  = *<TEXT, excluding CR, LF>
/// ```
///
/// Without CR and LF, the only LWS left is SP and HT.
pub fn reason_phrase(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|e| matches::is_ctl(*e) && !matches::is_blank(*e))
        .unwrap_or(bytes.len())
}

// ===== Exact =====

/// Returns `true` if all of `bytes` is a `Method`.
///
/// ```not_rust
/// Method = "GET" | "HEAD" | "POST" | extension-method
/// extension-method = token
/// ```
#[inline]
pub fn is_method(bytes: &[u8]) -> bool {
    token(bytes) == Some(bytes.len())
}

/// Returns `true` if all of `bytes` is a `Request-URI`.
#[inline]
pub fn is_request_uri(bytes: &[u8]) -> bool {
    request_uri(bytes) == Some(bytes.len())
}

/// Returns `true` if all of `bytes` is a `field-name`.
#[inline]
pub fn is_field_name(bytes: &[u8]) -> bool {
    field_name(bytes) == Some(bytes.len())
}

/// Returns `true` if all of `bytes` is a `field-content`.
#[inline]
pub fn is_field_content(bytes: &[u8]) -> bool {
    field_content(bytes) == bytes.len()
}

/// Returns `true` if all of `bytes` is a `Status-Code`.
#[inline]
pub fn is_status_code(bytes: &[u8]) -> bool {
    status_code(bytes) == Some(bytes.len())
}

/// Returns `true` if all of `bytes` is a `Reason-Phrase`.
#[inline]
pub fn is_reason_phrase(bytes: &[u8]) -> bool {
    reason_phrase(bytes) == bytes.len()
}
