//! Element-kind markers for [`ByteSeq`](crate::ByteSeq).
//!
//! A sequence stores plain `u8` elements; the marker records how those
//! elements are to be interpreted. Keeping the kind in the type means a
//! hex view can never be accidentally compared with, or decoded as, a
//! base64 view.

use std::fmt;
use std::hash::Hash;

mod private {
    pub trait Sealed {}

    impl Sealed for super::Raw {}
    impl Sealed for super::BinaryDigit {}
    impl Sealed for super::HexDigit {}
    impl Sealed for super::Base64Char {}
}

/// Marker trait for the semantic kind of a sequence's elements.
///
/// Sealed: the four kinds below are the only ones the codec layer knows
/// how to convert between.
pub trait ElementKind: private::Sealed + Copy + Eq + Hash + fmt::Debug {}

/// Raw byte values, 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Raw;

/// Binary digit characters, `'0'` or `'1'`, 8 per raw byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BinaryDigit;

/// Hex digit characters, 2 per raw byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexDigit;

/// Base64 alphabet characters, 4 per 3 raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Base64Char;

impl ElementKind for Raw {}
impl ElementKind for BinaryDigit {}
impl ElementKind for HexDigit {}
impl ElementKind for Base64Char {}
