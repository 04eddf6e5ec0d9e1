//! Base64 codec: raw bytes to standard-alphabet characters and back.
//!
//! Both directions route through the binary view. Output is never padded
//! with `'='`; the final 6-bit group is zero-padded on the right when
//! the bit count is not a multiple of 6, and decoding drops trailing
//! bits that do not form a whole byte, so decoding is the exact inverse
//! of encoding for every input length.

use byteview_seq::{Base64Char, BinaryDigit, ByteSeq, Raw};

use crate::binary::{from_binary, to_binary};
use crate::constants::{ALPHABET, INVALID, INVERSE};
use crate::error::CodecError;
use crate::fixed_width::fixed_width_binary;

/// Encodes raw bytes as unpadded standard base64.
///
/// The input converts to its binary view, the bit string is chunked into
/// groups of 6 (the final short group zero-padded on the right), and
/// each group's value indexes the alphabet.
///
/// # Example
///
/// ```
/// use byteview_codec::to_base64;
/// use byteview_seq::ByteSeq;
///
/// let encoded = to_base64(&ByteSeq::from("Man"));
/// assert_eq!(encoded.to_text(), "TWFu");
/// ```
pub fn to_base64(seq: &ByteSeq<Raw>) -> ByteSeq<Base64Char> {
    let bits = to_binary(seq);
    bits.chunks(6)
        .map(|group| {
            // Digits come from to_binary, so only '0'/'1' can appear.
            let mut index = 0u8;
            for digit in group.iter() {
                index = (index << 1) | (digit - b'0');
            }
            index <<= 6 - group.len();
            ALPHABET[usize::from(index)]
        })
        .collect()
}

/// Decodes an unpadded base64 character sequence back to raw bytes.
///
/// Each character maps through the inverse alphabet table to its 6-bit
/// index; the indices render as binary digits, concatenate into one
/// binary view, and delegate to the binary codec after trailing
/// sub-byte bits are dropped.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBase64Character`] on any character
/// absent from the alphabet, including `'='`.
pub fn from_base64(seq: &ByteSeq<Base64Char>) -> Result<ByteSeq<Raw>, CodecError> {
    let mut digits = Vec::with_capacity(seq.len() * 6);
    for c in seq.iter() {
        let index = INVERSE[usize::from(c)];
        if index == INVALID {
            return Err(CodecError::InvalidBase64Character(char::from(c)));
        }
        // Indices fit in 6 bits, so the first 2 of the 8 rendered
        // digits are always '0'.
        let rendered = fixed_width_binary(u64::from(index));
        digits.extend_from_slice(&rendered.as_bytes()[2..]);
    }
    digits.truncate(digits.len() - digits.len() % 8);
    let bits: ByteSeq<BinaryDigit> = ByteSeq::from(digits);
    from_binary(&bits)
}

/// Encodes a byte slice as an unpadded base64 string.
pub fn encode_base64(data: &[u8]) -> String {
    to_base64(&ByteSeq::from_slice(data)).to_text()
}

/// Decodes an unpadded base64 string to bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBase64Character`] on characters outside
/// the standard alphabet.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, CodecError> {
    from_base64(&ByteSeq::from(text)).map(ByteSeq::into_vec)
}
