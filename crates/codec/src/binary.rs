//! Binary codec: raw bytes to '0'/'1' digit sequences and back.
//!
//! The binary view is the pivot representation of the engine: base64
//! encoding and decoding both route through it.

use byteview_seq::{BinaryDigit, ByteSeq, Raw};

use crate::error::CodecError;
use crate::fixed_width::fixed_width_binary;

/// Encodes raw bytes as a binary digit sequence.
///
/// Each byte renders through [`fixed_width_binary`] to exactly 8 digits,
/// so the output length is always `8 * seq.len()`.
///
/// # Example
///
/// ```
/// use byteview_codec::to_binary;
/// use byteview_seq::ByteSeq;
///
/// let bits = to_binary(&ByteSeq::from_slice(&[255, 5]));
/// assert_eq!(bits.to_text(), "1111111100000101");
/// ```
pub fn to_binary(seq: &ByteSeq<Raw>) -> ByteSeq<BinaryDigit> {
    seq.iter()
        .flat_map(|b| fixed_width_binary(u64::from(b)).into_bytes())
        .collect()
}

/// Decodes a binary digit sequence back to raw bytes.
///
/// The digits are chunked into groups of 8 and each group parses as a
/// base-2 integer. A final group shorter than 8 digits (input length not
/// a multiple of 8) is accepted silently and parsed at its natural
/// width.
///
/// # Errors
///
/// Returns [`CodecError::MalformedBinary`] on any character other than
/// `'0'` or `'1'`.
pub fn from_binary(bits: &ByteSeq<BinaryDigit>) -> Result<ByteSeq<Raw>, CodecError> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    for group in bits.chunks(8) {
        bytes.push(binary_to_integer(&group)? as u8);
    }
    Ok(ByteSeq::from(bytes))
}

/// Parses an entire binary digit sequence as a base-2 integer.
///
/// The engine only ever parses 6- and 8-digit groups; sequences longer
/// than 64 digits are outside the contract (high bits shift out).
///
/// # Errors
///
/// Returns [`CodecError::MalformedBinary`] on any character other than
/// `'0'` or `'1'`.
pub fn binary_to_integer(bits: &ByteSeq<BinaryDigit>) -> Result<u64, CodecError> {
    let mut value = 0u64;
    for digit in bits.iter() {
        let bit = match digit {
            b'0' => 0,
            b'1' => 1,
            other => return Err(CodecError::MalformedBinary(char::from(other))),
        };
        value = (value << 1) | bit;
    }
    Ok(value)
}

/// Encodes a byte slice as a binary digit string.
pub fn encode_binary(data: &[u8]) -> String {
    to_binary(&ByteSeq::from_slice(data)).to_text()
}

/// Decodes a binary digit string to bytes.
///
/// # Errors
///
/// Returns [`CodecError::MalformedBinary`] on any character other than
/// `'0'` or `'1'`.
pub fn decode_binary(text: &str) -> Result<Vec<u8>, CodecError> {
    from_binary(&ByteSeq::from(text)).map(ByteSeq::into_vec)
}
