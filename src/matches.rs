//! Character classes of [RFC 1945 §2.2][rfc] and [§3.2.1][uri].
//!
//! Every predicate is backed by a 256 entry lookup table computed at compile time.
//!
//! [rfc]: <https://www.rfc-editor.org/rfc/rfc1945#section-2.2>
//! [uri]: <https://www.rfc-editor.org/rfc/rfc1945#section-3.2.1>

macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            const PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

// ===== Basic Rules =====

byte_map! {
    /// CHAR = <any US-ASCII character (octets 0 - 127)>
    #[inline(always)]
    pub const fn is_char(byte: u8) {
        byte < 128
    }
}

byte_map! {
    /// CTL = <any US-ASCII control character (octets 0 - 31) and DEL (127)>
    #[inline(always)]
    pub const fn is_ctl(byte: u8) {
        byte < 32 || byte == 127
    }
}

byte_map! {
    /// UPALPHA = <any US-ASCII uppercase letter "A".."Z">
    #[inline(always)]
    pub const fn is_upalpha(byte: u8) {
        matches!(byte, b'A'..=b'Z')
    }
}

byte_map! {
    /// LOALPHA = <any US-ASCII lowercase letter "a".."z">
    #[inline(always)]
    pub const fn is_loalpha(byte: u8) {
        matches!(byte, b'a'..=b'z')
    }
}

byte_map! {
    /// ALPHA = UPALPHA | LOALPHA
    #[inline(always)]
    pub const fn is_alpha(byte: u8) {
        is_upalpha(byte) || is_loalpha(byte)
    }
}

byte_map! {
    /// DIGIT = <any US-ASCII digit "0".."9">
    #[inline(always)]
    pub const fn is_digit(byte: u8) {
        matches!(byte, b'0'..=b'9')
    }
}

byte_map! {
    /// HEX = "A" | "B" | "C" | "D" | "E" | "F"
    ///     | "a" | "b" | "c" | "d" | "e" | "f" | DIGIT
    #[inline(always)]
    pub const fn is_hex(byte: u8) {
        matches!(byte, b'A'..=b'F' | b'a'..=b'f') || is_digit(byte)
    }
}

byte_map! {
    /// tspecials = "(" | ")" | "<" | ">" | "@"
    ///           | "," | ";" | ":" | "\" | <">
    ///           | "/" | "[" | "]" | "?" | "="
    ///           | "{" | "}" | SP | HT
    #[inline(always)]
    pub const fn is_tspecial(byte: u8) {
        matches!(
            byte,
            | b'(' | b')' | b'<' | b'>' | b'@'
            | b',' | b';' | b':' | b'\\' | b'"'
            | b'/' | b'[' | b']' | b'?' | b'='
            | b'{' | b'}' | b' ' | b'\t'
        )
    }
}

byte_map! {
    /// SP | HT
    #[inline(always)]
    pub const fn is_blank(byte: u8) {
        matches!(byte, b' ' | b'\t')
    }
}

// ===== URI Rules =====

byte_map! {
    /// safe = "$" | "-" | "_" | "."
    #[inline(always)]
    pub const fn is_safe(byte: u8) {
        matches!(byte, b'$' | b'-' | b'_' | b'.')
    }
}

byte_map! {
    /// extra = "!" | "*" | "'" | "(" | ")" | ","
    #[inline(always)]
    pub const fn is_extra(byte: u8) {
        matches!(byte, b'!' | b'*' | b'\'' | b'(' | b')' | b',')
    }
}

byte_map! {
    /// reserved = ";" | "/" | "?" | ":" | "@" | "&" | "=" | "+"
    #[inline(always)]
    pub const fn is_reserved(byte: u8) {
        matches!(byte, b';' | b'/' | b'?' | b':' | b'@' | b'&' | b'=' | b'+')
    }
}

byte_map! {
    /// unsafe = CTL | SP | <"> | "#" | "%" | "<" | ">"
    #[inline(always)]
    pub const fn is_unsafe(byte: u8) {
        is_ctl(byte) || matches!(byte, b' ' | b'"' | b'#' | b'%' | b'<' | b'>')
    }
}

byte_map! {
    /// national = <any OCTET excluding ALPHA, DIGIT,
    ///            reserved, extra, safe, and unsafe>
    #[inline(always)]
    pub const fn is_national(byte: u8) {
        !(is_alpha(byte)
            || is_digit(byte)
            || is_reserved(byte)
            || is_extra(byte)
            || is_safe(byte)
            || is_unsafe(byte))
    }
}

byte_map! {
    /// unreserved = ALPHA | DIGIT | safe | extra | national
    #[inline(always)]
    pub const fn is_unreserved(byte: u8) {
        is_alpha(byte) || is_digit(byte) || is_safe(byte) || is_extra(byte) || is_national(byte)
    }
}

// ===== Production Blocks =====

byte_map! {
    /// token = 1*<any CHAR except CTLs or tspecials>
    #[inline(always)]
    pub const fn is_token(byte: u8) {
        is_char(byte) && !is_ctl(byte) && !is_tspecial(byte)
    }
}

byte_map! {
    /// scheme = 1*( ALPHA | DIGIT | "+" | "-" | "." )
    #[inline(always)]
    pub const fn is_scheme(byte: u8) {
        is_alpha(byte) || is_digit(byte) || matches!(byte, b'+' | b'-' | b'.')
    }
}

byte_map! {
    /// pchar without the `uchar` escape, `":" | "@" | "&" | "=" | "+" | unreserved`
    #[inline(always)]
    pub(crate) const fn is_pchar(byte: u8) {
        is_unreserved(byte) || matches!(byte, b':' | b'@' | b'&' | b'=' | b'+')
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tspecials() {
        for byte in b"()<>@,;:\\\"/[]?={} \t" {
            assert!(is_tspecial(*byte), "{:?}", *byte as char);
            assert!(!is_token(*byte), "{:?}", *byte as char);
        }
        for byte in b"!#$%&'*+-.^_`|~09azAZ" {
            assert!(!is_tspecial(*byte));
            assert!(is_token(*byte), "{:?}", *byte as char);
        }
    }

    #[test]
    fn test_ctl() {
        for byte in 0..32 {
            assert!(is_ctl(byte));
            assert!(!is_token(byte));
        }
        assert!(is_ctl(127));
        assert!(!is_ctl(b' '));
        assert!(!is_ctl(128));
        assert!(!is_char(128));
        assert!(!is_token(200));
    }

    #[test]
    fn test_hex() {
        for byte in b"0123456789abcdefABCDEF" {
            assert!(is_hex(*byte));
        }
        for byte in b"gG%-" {
            assert!(!is_hex(*byte));
        }
    }

    #[test]
    fn test_uri_classes_disjoint() {
        for byte in 0..=255u8 {
            let classes = [
                is_alpha(byte),
                is_digit(byte),
                is_reserved(byte),
                is_extra(byte),
                is_safe(byte),
                is_unsafe(byte),
                is_national(byte),
            ];
            let count = classes.iter().filter(|e| **e).count();
            assert_eq!(count, 1, "byte {byte} belongs to {count} classes");
        }
    }

    #[test]
    fn test_national() {
        for byte in b"{}|\\^~[]`" {
            assert!(is_national(*byte), "{:?}", *byte as char);
            assert!(is_unreserved(*byte));
        }
        assert!(is_national(0x80));
        assert!(is_national(0xff));
        assert!(!is_national(b'%'));
        assert!(!is_national(b'#'));
        assert!(!is_unreserved(b'%'));
        assert!(!is_unreserved(b' '));
    }
}
