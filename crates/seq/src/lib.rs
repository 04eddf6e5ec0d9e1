//! byteview-seq - Typed byte-sequence container for byteview
//!
//! This crate provides [`ByteSeq`], an ordered, immutable sequence of `u8`
//! elements tagged at the type level with the semantic kind of its elements:
//! raw bytes, binary digit characters, hex digit characters, or base64
//! alphabet characters. The codec layer builds all of its conversions on
//! top of this one container.
//!
//! # Example
//!
//! ```
//! use byteview_seq::{ByteSeq, Raw};
//!
//! let seq: ByteSeq<Raw> = ByteSeq::from_slice(b"Man");
//! assert_eq!(seq.len(), 3);
//!
//! let chunks: Vec<_> = seq.chunks(2).collect();
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0], ByteSeq::from_slice(b"Ma"));
//! assert_eq!(chunks[1], ByteSeq::from_slice(b"n"));
//! ```

mod chunks;
mod element;
mod seq;

pub use chunks::Chunks;
pub use element::{Base64Char, BinaryDigit, ElementKind, HexDigit, Raw};
pub use seq::ByteSeq;
