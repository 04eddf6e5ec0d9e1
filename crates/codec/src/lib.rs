//! byteview-codec - Binary, hex, and base64 codecs over typed byte
//! sequences.
//!
//! Raw bytes convert to three textual views and back:
//!
//! - binary: ASCII `'0'`/`'1'`, 8 digits per byte
//! - hex: lowercase digit pairs, 2 per byte
//! - base64: standard alphabet, 4 characters per 3 bytes, never padded
//!   with `'='`
//!
//! The binary view is the pivot representation: base64 encoding and
//! decoding both route through it, and hex works directly on digit
//! pairs. All conversions are pure functions over immutable
//! [`ByteSeq`](byteview_seq::ByteSeq) values.
//!
//! # Example
//!
//! ```
//! use byteview_codec::{decode_base64, encode_base64, encode_hex};
//!
//! assert_eq!(encode_base64(b"Man"), "TWFu");
//! assert_eq!(decode_base64("TWFu").unwrap(), b"Man");
//! assert_eq!(encode_hex(&[255, 5]), "ff05");
//! ```

mod base64;
mod binary;
mod constants;
mod error;
mod fixed_width;
mod hex;

pub use base64::{decode_base64, encode_base64, from_base64, to_base64};
pub use binary::{binary_to_integer, decode_binary, encode_binary, from_binary, to_binary};
pub use constants::ALPHABET;
pub use error::CodecError;
pub use fixed_width::fixed_width_binary;
pub use hex::{decode_hex, encode_hex, from_hex, to_hex};
