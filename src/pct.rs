//! Percent-decoding of URI components.

use crate::{
    error::{DecodeError, DecodeErrorKind},
    table::HEXDIG,
};
use alloc::{borrow::Cow, string::String, vec::Vec};
use core::iter::FusedIterator;

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, assuming that the bytes are hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> u8 {
    debug_assert!(hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit());
    OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize]
}

/// An item returned by the [`Decode`] iterator.
#[derive(Clone, Copy, Debug)]
enum DecodedChunk<'a> {
    /// An unencoded subslice and its starting index.
    Unencoded(&'a str, usize),
    /// A percent-encoded octet, decoded, and the index of its "%".
    PctDecoded(u8, usize),
}

/// An iterator over the chunks of a percent-encoded string.
#[derive(Clone, Debug)]
struct Decode<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Decode<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    fn rem(&self) -> &'a str {
        &self.source[self.pos..]
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = Result<DecodedChunk<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rem = self.rem();
        if rem.is_empty() {
            return None;
        }

        let i = rem.bytes().position(|x| x == b'%').unwrap_or(rem.len());
        let start = self.pos;
        if i > 0 {
            self.pos += i;
            return Some(Ok(DecodedChunk::Unencoded(&rem[..i], start)));
        }

        match rem.as_bytes() {
            [_, hi, lo, ..] if HEXDIG.allows(*hi) && HEXDIG.allows(*lo) => {
                self.pos += 3;
                Some(Ok(DecodedChunk::PctDecoded(decode_octet(*hi, *lo), start)))
            }
            _ => {
                // Fused from here on.
                self.pos = self.source.len();
                Some(Err(DecodeError {
                    index: start,
                    kind: DecodeErrorKind::InvalidOctet,
                }))
            }
        }
    }
}

impl FusedIterator for Decode<'_> {}

/// Decodes a percent-encoded string the way `decodeURIComponent` does.
///
/// Every octet is decoded, reserved or not, and `+` is left alone.
/// This function allocates only when the string contains any percent-encoded octet.
///
/// # Errors
///
/// Returns `Err` if a "%" is not followed by two hexadecimal digits or
/// if the decoded bytes are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use lenient_uri::pct::decode;
///
/// assert_eq!(decode("a%20b+c")?, "a b+c");
/// assert_eq!(decode("%C2%A1Hola%21")?, "\u{a1}Hola!");
/// assert!(decode("100%").is_err());
/// # Ok::<_, lenient_uri::DecodeError>(())
/// ```
pub fn decode(s: &str) -> Result<Cow<'_, str>, DecodeError> {
    if !s.contains('%') {
        return Ok(Cow::Borrowed(s));
    }

    let mut buf = Vec::with_capacity(s.len());
    // Input index of every decoded byte, to locate invalid UTF-8.
    let mut origins = Vec::with_capacity(s.len());
    for chunk in Decode::new(s) {
        match chunk? {
            DecodedChunk::Unencoded(part, start) => {
                buf.extend_from_slice(part.as_bytes());
                origins.extend(start..start + part.len());
            }
            DecodedChunk::PctDecoded(x, index) => {
                buf.push(x);
                origins.push(index);
            }
        }
    }

    String::from_utf8(buf).map(Cow::Owned).map_err(|e| DecodeError {
        index: origins[e.utf8_error().valid_up_to()],
        kind: DecodeErrorKind::InvalidUtf8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrows_when_unencoded() {
        assert!(matches!(decode("plain/text"), Ok(Cow::Borrowed("plain/text"))));
    }

    #[test]
    fn invalid_octet() {
        let e = decode("ab%2").unwrap_err();
        assert_eq!(e.index(), 2);
        assert_eq!(e.kind(), DecodeErrorKind::InvalidOctet);

        let e = decode("%zz").unwrap_err();
        assert_eq!(e.index(), 0);
    }

    #[test]
    fn invalid_utf8() {
        let e = decode("ok%C3%28").unwrap_err();
        assert_eq!(e.kind(), DecodeErrorKind::InvalidUtf8);
        assert_eq!(e.index(), 2);

        let e = decode("x%ED%A0%80").unwrap_err();
        assert_eq!(e.index(), 1);
    }
}
