//! Ascending iterators over set and unset positions.
//!
//! Both iterators consume one word at a time and pop the lowest remaining
//! bit with `trailing_zeros`, so uniform words cost a single comparison.

use std::iter::FusedIterator;

use crate::word::{tail_mask, Word, WORD_BITS};

struct Scan<'a> {
    words: &'a [Word],
    len: usize,
    invert: bool,
    word_index: usize,
    current: Word,
}

impl<'a> Scan<'a> {
    fn new(words: &'a [Word], len: usize, invert: bool) -> Self {
        let mut scan = Self {
            words,
            len,
            invert,
            word_index: 0,
            current: 0,
        };
        if !words.is_empty() {
            scan.current = scan.load(0);
        }
        scan
    }

    fn load(&self, w: usize) -> Word {
        if !self.invert {
            return self.words[w];
        }
        let inverted = !self.words[w];
        if w + 1 == self.words.len() {
            inverted & tail_mask(self.len)
        } else {
            inverted
        }
    }

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            if self.word_index + 1 >= self.words.len() {
                self.word_index = self.words.len();
                return None;
            }
            self.word_index += 1;
            self.current = self.load(self.word_index);
        }
        let offset = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.word_index * WORD_BITS + offset)
    }
}

/// Iterator over the positions of set bits, in ascending order.
///
/// Created by [`BitVector::ones`](crate::BitVector::ones).
pub struct Ones<'a>(Scan<'a>);

impl<'a> Ones<'a> {
    pub(crate) fn new(words: &'a [Word], len: usize) -> Self {
        Self(Scan::new(words, len, false))
    }
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.0.next()
    }
}

impl FusedIterator for Ones<'_> {}

/// Iterator over the positions of unset bits, in ascending order.
///
/// Padding positions past the vector's length are never yielded.
///
/// Created by [`BitVector::zeros`](crate::BitVector::zeros).
pub struct Zeros<'a>(Scan<'a>);

impl<'a> Zeros<'a> {
    pub(crate) fn new(words: &'a [Word], len: usize) -> Self {
        Self(Scan::new(words, len, true))
    }
}

impl Iterator for Zeros<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.0.next()
    }
}

impl FusedIterator for Zeros<'_> {}

#[cfg(test)]
mod tests {
    use crate::BitVector;
    use crate::WORD_BITS;

    #[test]
    fn test_ones_across_words() {
        let len = WORD_BITS * 3 + 5;
        let picks = [0, 1, WORD_BITS - 1, WORD_BITS * 2, len - 1];
        let bv = BitVector::from_ones(len, picks).unwrap();
        assert_eq!(bv.ones().collect::<Vec<_>>(), picks.to_vec());
    }

    #[test]
    fn test_zeros_skip_padding() {
        let mut bv = BitVector::new(10);
        bv.set(3).unwrap();
        assert_eq!(
            bv.zeros().collect::<Vec<_>>(),
            vec![0, 1, 2, 4, 5, 6, 7, 8, 9]
        );

        bv.set_all();
        assert_eq!(bv.zeros().next(), None);
    }

    #[test]
    fn test_empty_vector_iterators() {
        let bv = BitVector::new(0);
        assert_eq!(bv.ones().next(), None);
        assert_eq!(bv.zeros().next(), None);
    }

    #[test]
    fn test_iterators_are_fused() {
        let bv = BitVector::from_ones(4, [2]).unwrap();
        let mut ones = bv.ones();
        assert_eq!(ones.next(), Some(2));
        assert_eq!(ones.next(), None);
        assert_eq!(ones.next(), None);
    }
}
