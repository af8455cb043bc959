//! Word-level arithmetic.
//!
//! Bit `i` lives in word `i / WORD_BITS` at offset `i % WORD_BITS`, where
//! offset 0 is the least-significant bit.

/// A single storage word.
pub type Word = usize;

/// Number of bits per storage word (the platform's native integer width).
pub const WORD_BITS: usize = Word::BITS as usize;

/// Number of words needed to hold `len` bits.
#[inline]
pub const fn words_for(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

/// Word index and intra-word offset of bit `i`.
#[inline]
pub const fn split(i: usize) -> (usize, usize) {
    (i / WORD_BITS, i % WORD_BITS)
}

/// Single-bit mask at `offset`.
#[inline]
pub const fn bit(offset: usize) -> Word {
    1 << offset
}

/// Mask with bits `[offset, WORD_BITS)` set.
#[inline]
pub const fn mask_from(offset: usize) -> Word {
    Word::MAX << offset
}

/// Mask with bits `[0, offset]` set.
#[inline]
pub const fn mask_through(offset: usize) -> Word {
    Word::MAX >> (WORD_BITS - 1 - offset)
}

/// Mask of the logical bits held by the last word of a `len`-bit vector.
///
/// Returns all ones when `len` is a multiple of the word width.
#[inline]
pub const fn tail_mask(len: usize) -> Word {
    match len % WORD_BITS {
        0 => Word::MAX,
        rem => bit(rem) - 1,
    }
}

/// Offset of the `k`-th (0-indexed) set bit in `word`.
///
/// `k` must be less than `word.count_ones()`.
#[inline]
pub fn select_in_word(mut word: Word, k: usize) -> usize {
    for _ in 0..k {
        word &= word - 1;
    }
    word.trailing_zeros() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_for() {
        assert_eq!(words_for(0), 0);
        assert_eq!(words_for(1), 1);
        assert_eq!(words_for(WORD_BITS), 1);
        assert_eq!(words_for(WORD_BITS + 1), 2);
    }

    #[test]
    fn test_masks() {
        assert_eq!(mask_from(0), Word::MAX);
        assert_eq!(mask_from(WORD_BITS - 1), bit(WORD_BITS - 1));
        assert_eq!(mask_through(0), 1);
        assert_eq!(mask_through(WORD_BITS - 1), Word::MAX);
        assert_eq!(mask_from(3) & mask_through(5), 0b111000);
        assert_eq!(tail_mask(10), 0b11_1111_1111);
        assert_eq!(tail_mask(WORD_BITS), Word::MAX);
    }

    #[test]
    fn test_select_in_word() {
        let w: Word = 0b1010_1000;
        assert_eq!(select_in_word(w, 0), 3);
        assert_eq!(select_in_word(w, 1), 5);
        assert_eq!(select_in_word(w, 2), 7);
    }
}
