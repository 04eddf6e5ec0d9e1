//! Lazy chunk iterator over a [`ByteSeq`](crate::ByteSeq).

use std::marker::PhantomData;
use std::slice;

use crate::element::ElementKind;
use crate::seq::ByteSeq;

/// Iterator over fixed-size sub-sequences of a [`ByteSeq`].
///
/// Produced by [`ByteSeq::chunks`]. Yields chunks on demand; the last
/// chunk may be shorter than the requested size.
#[derive(Debug, Clone)]
pub struct Chunks<'a, K: ElementKind> {
    inner: slice::Chunks<'a, u8>,
    kind: PhantomData<K>,
}

impl<'a, K: ElementKind> Chunks<'a, K> {
    pub(crate) fn new(elems: &'a [u8], n: usize) -> Self {
        Self {
            inner: elems.chunks(n),
            kind: PhantomData,
        }
    }
}

impl<K: ElementKind> Iterator for Chunks<'_, K> {
    type Item = ByteSeq<K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(ByteSeq::from_slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: ElementKind> ExactSizeIterator for Chunks<'_, K> {}

#[cfg(test)]
mod tests {
    use crate::{ByteSeq, Raw};

    #[test]
    fn yields_ceil_len_over_n_chunks() {
        let seq: ByteSeq<Raw> = (0u8..10).collect();
        assert_eq!(seq.chunks(3).count(), 4);
        assert_eq!(seq.chunks(5).count(), 2);
        assert_eq!(seq.chunks(10).count(), 1);
        assert_eq!(seq.chunks(11).count(), 1);
    }

    #[test]
    fn all_chunks_full_except_possibly_last() {
        let seq: ByteSeq<Raw> = (0u8..10).collect();
        let chunks: Vec<_> = seq.chunks(4).collect();
        assert_eq!(chunks[0].len(), 4);
        assert_eq!(chunks[1].len(), 4);
        assert_eq!(chunks[2].len(), 2);
    }

    #[test]
    fn concatenating_chunks_reproduces_the_sequence() {
        let seq: ByteSeq<Raw> = (0u8..10).collect();
        let rebuilt: ByteSeq<Raw> = seq.chunks(3).flat_map(|c| c.into_vec()).collect();
        assert_eq!(rebuilt, seq);
    }

    #[test]
    fn evenly_divisible_length_has_no_short_chunk() {
        let seq: ByteSeq<Raw> = (0u8..9).collect();
        assert!(seq.chunks(3).all(|c| c.len() == 3));
    }

    #[test]
    fn empty_sequence_yields_no_chunks() {
        let seq: ByteSeq<Raw> = ByteSeq::default();
        assert_eq!(seq.chunks(8).count(), 0);
    }
}
