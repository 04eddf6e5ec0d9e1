//! The core typed byte-sequence container.

use std::fmt;
use std::marker::PhantomData;

use crate::chunks::Chunks;
use crate::element::{ElementKind, Raw};

/// An ordered, immutable sequence of `u8` elements tagged with an
/// element kind.
///
/// The sequence is never mutated after construction; every transform in
/// the codec layer produces a new sequence. Equality is structural over
/// the element contents, and only sequences of the same kind can be
/// compared (cross-kind comparison is a compile error).
///
/// # Example
///
/// ```
/// use byteview_seq::{ByteSeq, Raw};
///
/// let a: ByteSeq<Raw> = b"hello".iter().copied().collect();
/// let b = ByteSeq::from_slice(b"hello");
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ByteSeq<K: ElementKind = Raw> {
    elems: Vec<u8>,
    kind: PhantomData<K>,
}

impl<K: ElementKind> ByteSeq<K> {
    /// Creates a sequence by copying the given elements.
    pub fn from_slice(elems: &[u8]) -> Self {
        Self {
            elems: elems.to_vec(),
            kind: PhantomData,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns `true` if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Returns the elements as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.elems
    }

    /// Consumes the sequence and returns its elements.
    pub fn into_vec(self) -> Vec<u8> {
        self.elems
    }

    /// Returns an iterator over the elements in order.
    ///
    /// The iterator is lazy and finite; each call starts from the
    /// beginning.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.elems.iter().copied()
    }

    /// Returns a lazy iterator over sub-sequences of length `n`.
    ///
    /// Every chunk has exactly `n` elements except possibly the last,
    /// which holds the remainder when `n` does not divide the length
    /// evenly. Each chunk is a [`ByteSeq`] of the same kind.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use byteview_seq::{ByteSeq, Raw};
    ///
    /// let seq: ByteSeq<Raw> = ByteSeq::from_slice(&[1, 2, 3, 4, 5]);
    /// let lens: Vec<usize> = seq.chunks(2).map(|c| c.len()).collect();
    /// assert_eq!(lens, [2, 2, 1]);
    /// ```
    pub fn chunks(&self, n: usize) -> Chunks<'_, K> {
        Chunks::new(&self.elems, n)
    }

    /// Renders the sequence as plain text: the concatenation of its
    /// elements as characters.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl<K: ElementKind> fmt::Display for ByteSeq<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write;
        for &b in &self.elems {
            f.write_char(char::from(b))?;
        }
        Ok(())
    }
}

impl<K: ElementKind> FromIterator<u8> for ByteSeq<K> {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            elems: iter.into_iter().collect(),
            kind: PhantomData,
        }
    }
}

impl<K: ElementKind> From<&[u8]> for ByteSeq<K> {
    fn from(elems: &[u8]) -> Self {
        Self::from_slice(elems)
    }
}

impl<K: ElementKind> From<Vec<u8>> for ByteSeq<K> {
    fn from(elems: Vec<u8>) -> Self {
        Self {
            elems,
            kind: PhantomData,
        }
    }
}

impl<K: ElementKind> From<&str> for ByteSeq<K> {
    fn from(text: &str) -> Self {
        Self::from_slice(text.as_bytes())
    }
}

impl<'a, K: ElementKind> IntoIterator for &'a ByteSeq<K> {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter().copied()
    }
}

impl<K: ElementKind> IntoIterator for ByteSeq<K> {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}
