// Hex codec - converts hexadecimal string fields into raw PDU bytes
//
// This module is the leaf of the crate: a pure decoder from the hex string
// representation used in raw-PDU commands (see 3GPP TS 23.040 for the PDU
// format itself) into byte sequences. It performs no semantic validation of
// the resulting PDU; that is the concern of the telephony stack downstream.

use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;

/// Codec errors with enough context to name the offending input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid hex character '{0}'")]
    InvalidChar(char),

    #[error("odd-length hex string ({0} characters), each byte needs two digits")]
    OddLength(usize),
}

/// Decode a string of hex digits into bytes, two characters per byte,
/// high nibble first.
///
/// Accepts `0-9`, `A-F` and `a-f`. The input length must be even: an
/// odd-length string is rejected with [`CodecError::OddLength`] rather than
/// guessing a padding rule for the dangling digit. An empty string decodes
/// to an empty byte sequence.
///
/// ```
/// use rawsms::codec::decode_hex;
///
/// let bytes = decode_hex("01000A").unwrap();
/// assert_eq!(&bytes[..], &[0x01, 0x00, 0x0A]);
/// ```
pub fn decode_hex(s: &str) -> Result<Bytes, CodecError> {
    if s.len() % 2 != 0 {
        return Err(CodecError::OddLength(s.len()));
    }

    let mut buf = BytesMut::with_capacity(s.len() / 2);
    let mut chars = s.chars();
    while let Some(hi) = chars.next() {
        // Even length was checked above, so the pair is always complete.
        let lo = chars.next().ok_or(CodecError::OddLength(s.len()))?;
        buf.put_u8((hex_digit(hi)? << 4) | hex_digit(lo)?);
    }

    Ok(buf.freeze())
}

/// Decode an optional hex field, propagating absence.
///
/// `None` maps to `Ok(None)` without touching the codec, so an absent field
/// never turns into a decode error.
pub fn decode_hex_opt(s: Option<&str>) -> Result<Option<Bytes>, CodecError> {
    s.map(decode_hex).transpose()
}

fn hex_digit(c: char) -> Result<u8, CodecError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        _ => Err(CodecError::InvalidChar(c)),
    }
}
