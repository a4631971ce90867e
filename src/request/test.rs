use bytes::BytesMut;

use super::*;
use crate::http::Version;

macro_rules! ready {
    ($e:expr) => {
        match $e {
            Ok(ok) => ok,
            Err(err) => panic!("unexpected `Err`: {err:?}"),
        }
    };
}

#[test]
fn test_parse_reqline() {
    macro_rules! test {
        (#[$err:ident] $input:literal) => {
            let mut bytes = BytesMut::from(&$input[..]);
            match parse_request_line(&mut bytes) {
                Ok(ok) => panic!("expected `Err` but returns `Ok` with {ok:?}"),
                Err(err) => assert_eq!(err, Error::$err, "{:?}", $input.escape_ascii().to_string()),
            }
            assert_eq!(&bytes[..], $input, "buffer must be unchanged");
        };
        {
            $input:literal;
            $m:literal, $u:literal, ($major:literal, $minor:literal);
            $rest:literal
        } => {
            let mut bytes = BytesMut::from(&$input[..]);
            let reqline = ready!(parse_request_line(&mut bytes));

            assert_eq!(reqline.method(), $m);
            assert_eq!(reqline.target(), $u);
            assert_eq!(reqline.version(), Version::new($major, $minor));
            assert_eq!(&bytes[..], $rest, "invalid remaining bytes");
        };
    }

    test! {
        b"GET /index.html HTTP/1.0\r\n";
        "GET", b"/index.html", (1, 0);
        b""
    };
    test! {
        b"GET / HTTP/1.0\r\nHost: example.test\r\n";
        "GET", b"/", (1, 0);
        b"Host: example.test\r\n"
    };
    test! {
        b"HEAD /a/b;p=1?q=2 HTTP/1.1\r\n";
        "HEAD", b"/a/b;p=1?q=2", (1, 1);
        b""
    };
    test! {
        b"GET http://x.test/y HTTP/1.0\r\n";
        "GET", b"http://x.test/y", (1, 0);
        b""
    };
    test! {
        b"X-PURGE /%7Euser HTTP/12.34\r\n\r\n";
        "X-PURGE", b"/%7Euser", (12, 34);
        b"\r\n"
    };

    test!(#[RequestIncomplete] b"GET /x HTTP/1.0");
    test!(#[RequestIncomplete] b"GET /x HTTP/1.0\r");
    test!(#[RequestIncomplete] b"GET /x HTTP/1.0\n");
    test!(#[RequestIncomplete] b"");

    test!(#[BadRequest] b"GET /x\r\n");
    test!(#[BadRequest] b"GET\r\n");
    test!(#[BadRequest] b"GET  /x HTTP/1.0\r\n");
    test!(#[BadRequest] b"GET /x  HTTP/1.0\r\n");
    test!(#[BadRequest] b"GET /x HTTP/1.0 \r\n");
    test!(#[BadRequest] b"G(T /x HTTP/1.0\r\n");
    test!(#[BadRequest] b" /x HTTP/1.0\r\n");
    test!(#[BadRequest] b"GET x HTTP/1.0\r\n");
    test!(#[BadRequest] b"GET /a#b HTTP/1.0\r\n");
    test!(#[BadRequest] b"GET /x HTTP/1\r\n");
    test!(#[BadRequest] b"GET /x HTTPS/1.0\r\n");
    test!(#[BadRequest] b"GET /x HTTP/1.\r\n");
    test!(#[BadRequest] b"GET /x HTTP/1.0a\r\n");

    test!(#[RequestTooLong] b"GET /x HTTP/99999999999.0\r\n");
    test!(#[RequestTooLong] b"GET /x HTTP/1.4294967296\r\n");
}

#[test]
fn test_parse_header() {
    let mut bytes = BytesMut::from(&b"Host: example.test\r\nX-Flag:yes\r\n\r\nbody"[..]);

    let host = ready!(parse_header(&mut bytes)).unwrap();
    assert_eq!(host.name(), b"Host");
    assert_eq!(host.value(), b"example.test");

    let flag = ready!(parse_header(&mut bytes)).unwrap();
    assert_eq!(flag.name(), b"X-Flag");
    assert_eq!(flag.value(), b"yes");

    assert!(ready!(parse_header(&mut bytes)).is_none());
    assert_eq!(&bytes[..], b"body");
}

#[test]
fn test_parse_header_error() {
    macro_rules! test {
        (#[$err:ident] $input:literal) => {
            let mut bytes = BytesMut::from(&$input[..]);
            match parse_header(&mut bytes) {
                Ok(ok) => panic!("expected `Err` but returns `Ok` with {ok:?}"),
                Err(err) => assert_eq!(err, Error::$err, "{:?}", $input.escape_ascii().to_string()),
            }
            assert_eq!(&bytes[..], $input, "buffer must be unchanged");
        };
    }

    test!(#[BadRequest] b"Bad Name:v\r\n\r\n");
    test!(#[BadRequest] b"Bad\tName:v\r\n\r\n");
    test!(#[BadRequest] b"Name :v\r\n\r\n");
    test!(#[BadRequest] b"NoColon\r\n\r\n");
    test!(#[BadRequest] b":empty\r\n\r\n");
    test!(#[BadRequest] b"Na(me:v\r\n\r\n");
    test!(#[BadRequest] b"Name:a\x01b\r\n\r\n");
    test!(#[BadRequest] b"Name:a\rb\r\n\r\n");
    test!(#[BadRequest] b"Name:a\nb\r\n\r\n");
    test!(#[BadRequest] b"\rName:v\r\n\r\n");

    test!(#[RequestIncomplete] b"");
    test!(#[RequestIncomplete] b"\r");
    test!(#[RequestIncomplete] b"Name");
    test!(#[RequestIncomplete] b"Name:");
    test!(#[RequestIncomplete] b"Name: value");
    test!(#[RequestIncomplete] b"Name: value\r");
    test!(#[RequestIncomplete] b"Name: value\r\n");
    test!(#[RequestIncomplete] b"Name: value\r\n\tcontinued");
}

#[test]
fn test_parse_request() {
    let request = ready!(Request::parse(
        b"GET /index.html HTTP/1.0\r\nHost: example.test\r\nX-Flag:yes\r\n\r\n"
    ));

    assert_eq!(request.method(), "GET");
    assert_eq!(request.target(), b"/index.html");
    assert_eq!(request.version(), Version::HTTP_10);

    let headers = request
        .headers()
        .iter()
        .map(|e| (e.name_str().unwrap(), e.value_str().unwrap()))
        .collect::<Vec<_>>();
    assert_eq!(headers, [("Host", "example.test"), ("X-Flag", "yes")]);
}

#[test]
fn test_parse_request_body() {
    let mut bytes = BytesMut::from(&b"POST /form HTTP/1.0\r\nContent-Length: 5\r\n\r\nhello"[..]);
    let request = ready!(parse_request(&mut bytes));

    assert_eq!(request.method(), "POST");
    assert_eq!(request.header("content-length"), Some(&b"5"[..]));
    assert_eq!(&bytes[..], b"hello");
}

#[test]
fn test_parse_request_no_headers() {
    let request = ready!(Request::parse(b"GET / HTTP/1.0\r\n\r\n"));
    assert!(request.headers().is_empty());
}

#[test]
fn test_parse_request_duplicate() {
    let request = ready!(Request::parse(
        b"GET / HTTP/1.0\r\nAccept: text/html\r\nHost: a\r\naccept: text/plain\r\n\r\n"
    ));

    assert_eq!(request.headers().len(), 3);
    assert_eq!(request.header("ACCEPT"), Some(&b"text/html"[..]));

    let all = request
        .headers_all(b"accept")
        .map(Header::value)
        .collect::<Vec<_>>();
    assert_eq!(all, [&b"text/html"[..], &b"text/plain"[..]]);
}

#[test]
fn test_parse_request_folding() {
    let request = ready!(Request::parse(
        b"GET / HTTP/1.0\r\nX-Long:   first\r\n\tsecond \r\n  third  \r\nEmpty:\r\n\r\n"
    ));

    assert_eq!(request.headers()[0].value(), b"first second third");
    assert_eq!(request.headers()[1].name(), b"Empty");
    assert_eq!(request.headers()[1].value(), b"");

    // quoted-string is not exempt
    let request = ready!(Request::parse(b"GET / HTTP/1.0\r\nX-Quote: \"a  \tb\"\r\n\r\n"));
    assert_eq!(request.headers()[0].value(), b"\"a b\"");
}

#[test]
fn test_parse_request_views() {
    let mut bytes = BytesMut::from(&b"GET /x HTTP/1.0\r\nHost: a\r\n\r\n"[..]);
    let request = ready!(parse_request(&mut bytes));
    let (line, headers) = request.into_parts();

    // views of the same head
    let method = line.method_bytes().as_ptr();
    let target = line.target_bytes().as_ptr();
    assert_eq!(unsafe { target.offset_from(method) }, 4);

    // value is separately allocated
    let (name, value) = headers[0].clone().into_parts();
    assert_eq!(unsafe { name.as_ptr().offset_from(method) }, 17);
    assert_eq!(value, "a");
}

#[test]
fn test_parse_request_error() {
    macro_rules! test {
        (#[$err:ident] $input:literal) => {
            let mut bytes = BytesMut::from(&$input[..]);
            match parse_request(&mut bytes) {
                Ok(ok) => panic!("expected `Err` but returns `Ok` with {ok:?}"),
                Err(err) => assert_eq!(err, Error::$err, "{:?}", $input.escape_ascii().to_string()),
            }
            assert_eq!(&bytes[..], $input, "buffer must be unchanged");
        };
    }

    test!(#[RequestIncomplete] b"GET /x HTTP/1.0");
    test!(#[RequestIncomplete] b"GET /x HTTP/1.0\r\n");
    test!(#[RequestIncomplete] b"GET /x HTTP/1.0\r\nHost: a\r\n");
    test!(#[RequestIncomplete] b"GET /x HTTP/1.0\r\nHost: a\r\n\r");

    test!(#[BadRequest] b"GET /x HTTP/1.0\r\nBad Name:v\r\n\r\n");
    test!(#[BadRequest] b"GET /x HTTP/1.0\r\nHost\r\n\r\n");
    test!(#[BadRequest] b"GET /x HTTP/1\r\n\r\n");
    test!(#[BadRequest] b"GET /x HTTPS/1.0\r\n\r\n");
    test!(#[BadRequest] b"GET a b HTTP/1.0\r\n\r\n");

    test!(#[RequestTooLong] b"GET /x HTTP/1.99999999999\r\n\r\n");
}

#[test]
fn test_limits() {
    let limits = Limits {
        max_method_len: 4,
        max_uri_len: 8,
        max_version_len: 8,
        max_request_line_len: 32,
        max_header_line_len: 16,
        max_headers: 1,
    };

    assert!(Request::parse_with(b"GET /x HTTP/1.0\r\nHost: a\r\n\r\n", &limits).is_ok());

    fn err(input: &[u8], limits: &Limits) -> Error {
        Request::parse_with(input, limits).unwrap_err()
    }

    assert_eq!(err(b"PURGE /x HTTP/1.0\r\n\r\n", &limits), Error::RequestTooLong);
    assert_eq!(err(b"GET /123456789 HTTP/1.0\r\n\r\n", &limits), Error::RequestTooLong);
    assert_eq!(err(b"GET /x HTTP/01.00\r\n\r\n", &limits), Error::RequestTooLong);
    assert_eq!(err(b"GET /x HTTP/1.0\r\nA: 1\r\nB: 2\r\n\r\n", &limits), Error::RequestTooLong);

    // oversized line is rejected before its CRLF arrives
    assert_eq!(err(&[b'A'; 33], &limits), Error::RequestTooLong);
    assert_eq!(err(&[b'A'; 32], &limits), Error::RequestIncomplete);
    assert_eq!(err(b"GET /x HTTP/1.0", &limits), Error::RequestIncomplete);

    let mut line = [b'A'; 33];
    line[32] = b'\r';
    assert_eq!(err(&line, &limits), Error::RequestIncomplete);

    // header field
    assert!(Request::parse_with(b"GET /x HTTP/1.0\r\nX: 0123456789abc\r\n\r\n", &limits).is_ok());
    assert_eq!(err(b"GET /x HTTP/1.0\r\nX: 0123456789abcd\r\n\r\n", &limits), Error::RequestTooLong);
    assert_eq!(err(b"GET /x HTTP/1.0\r\nX: a\r\n b\r\n c\r\n d\r\n e\r\n\r\n", &limits), Error::RequestTooLong);

    // oversized field is rejected before its CRLF arrives
    let field = |len: usize| {
        let mut input = b"GET /x HTTP/1.0\r\nX: ".to_vec();
        input.extend(std::iter::repeat_n(b'a', len));
        input
    };
    assert_eq!(err(&field(13), &limits), Error::RequestIncomplete);
    assert_eq!(err(&field(14), &limits), Error::RequestTooLong);
    assert_eq!(err(b"GET /x HTTP/1.0\r\nXXXXXXXXXXXXXXXXX", &limits), Error::RequestTooLong);
    assert_eq!(err(b"GET /x HTTP/1.0\r\nX: a\r\n b\r\n", &limits), Error::RequestIncomplete);
    assert_eq!(err(b"GET /x HTTP/1.0\r\nX: a\r\n b\r\n c\r\n d\r\n e", &limits), Error::RequestTooLong);
}

#[test]
fn test_limits_inclusive() {
    let limits = Limits {
        max_request_line_len: 15,
        max_header_line_len: 7,
        ..Limits::unbounded()
    };

    assert!(Request::parse_with(b"GET /x HTTP/1.0\r\nHost: a\r\n\r\n", &limits).is_ok());
    assert_eq!(
        Request::parse_with(b"GET /xy HTTP/1.0\r\n\r\n", &limits).unwrap_err(),
        Error::RequestTooLong
    );
    assert_eq!(
        Request::parse_with(b"GET /x HTTP/1.0\r\nHost: ab\r\n\r\n", &limits).unwrap_err(),
        Error::RequestTooLong
    );
}

#[test]
fn test_default_limits() {
    let limits = Limits::default();
    assert_eq!(limits, Limits::new());
    assert_eq!(limits.max_request_line_len, 255 + 1 + 1023 + 1 + 63);

    let mut input = b"GET /".to_vec();
    input.extend(std::iter::repeat_n(b'a', 1023));
    input.extend_from_slice(b" HTTP/1.0\r\n\r\n");

    assert_eq!(Request::parse_with(&input, &limits).unwrap_err(), Error::RequestTooLong);
    assert!(Request::parse(&input).is_ok());

    // unterminated header value
    let mut input = b"GET / HTTP/1.0\r\nX: ".to_vec();
    input.extend(std::iter::repeat_n(b'a', 1 << 20));
    assert_eq!(Request::parse_with(&input, &limits).unwrap_err(), Error::RequestTooLong);
    assert_eq!(Request::parse(&input).unwrap_err(), Error::RequestIncomplete);

    // endless folding
    let mut input = b"GET / HTTP/1.0\r\nX: a".to_vec();
    for _ in 0..10_000 {
        input.extend_from_slice(b"\r\n b");
    }
    assert_eq!(Request::parse_with(&input, &limits).unwrap_err(), Error::RequestTooLong);
    assert_eq!(Request::parse(&input).unwrap_err(), Error::RequestIncomplete);
}

#[test]
fn test_version_roundtrip() {
    let request = ready!(Request::parse(b"GET / HTTP/2.17\r\n\r\n"));

    let mut buf = Vec::new();
    request.version().write_to(&mut buf);
    assert_eq!(buf, b"HTTP/2.17");
}
