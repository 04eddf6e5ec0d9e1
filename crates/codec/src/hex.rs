//! Hex codec: raw bytes to lowercase hex digit pairs and back.

use byteview_seq::{ByteSeq, HexDigit, Raw};

use crate::constants::HEX_CHARS;
use crate::error::CodecError;

/// Encodes raw bytes as lowercase hex, 2 digits per byte.
///
/// Every byte yields exactly two digits; values below 16 are zero-padded
/// (`5` encodes as `"05"`, not `"5"`).
///
/// # Example
///
/// ```
/// use byteview_codec::to_hex;
/// use byteview_seq::ByteSeq;
///
/// let hex = to_hex(&ByteSeq::from_slice(&[255, 5]));
/// assert_eq!(hex.to_text(), "ff05");
/// ```
pub fn to_hex(seq: &ByteSeq<Raw>) -> ByteSeq<HexDigit> {
    seq.iter()
        .flat_map(|b| [HEX_CHARS[usize::from(b >> 4)], HEX_CHARS[usize::from(b & 0x0f)]])
        .collect()
}

/// Decodes a hex digit sequence back to raw bytes.
///
/// The digits are chunked into pairs and each pair parses as a base-16
/// integer.
///
/// # Errors
///
/// Returns [`CodecError::InvalidHexDigit`] on any character outside
/// `0-9a-fA-F`, and on odd-length input (the dangling final digit
/// cannot form a pair).
pub fn from_hex(seq: &ByteSeq<HexDigit>) -> Result<ByteSeq<Raw>, CodecError> {
    let mut bytes = Vec::with_capacity(seq.len() / 2);
    for pair in seq.chunks(2) {
        let digits = pair.as_bytes();
        match *digits {
            [hi, lo] => bytes.push((nibble(hi)? << 4) | nibble(lo)?),
            [dangling] => return Err(CodecError::InvalidHexDigit(char::from(dangling))),
            _ => unreachable!("chunks(2) yields 1 or 2 elements"),
        }
    }
    Ok(ByteSeq::from(bytes))
}

fn nibble(digit: u8) -> Result<u8, CodecError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        other => Err(CodecError::InvalidHexDigit(char::from(other))),
    }
}

/// Encodes a byte slice as a lowercase hex string.
pub fn encode_hex(data: &[u8]) -> String {
    to_hex(&ByteSeq::from_slice(data)).to_text()
}

/// Decodes a hex string to bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidHexDigit`] on non-hex characters or
/// odd-length input.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, CodecError> {
    from_hex(&ByteSeq::from(text)).map(ByteSeq::into_vec)
}
