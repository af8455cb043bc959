//! Dense fixed-length bit vector with a cached population count.
//!
//! # Layout
//!
//! Bits are packed into `ceil(len / WORD_BITS)` native words, least-significant
//! bit first. Positions past `len` in the last word are padding and are kept
//! at zero by every operation, including [`BitVector::set_all`].
//!
//! The number of set bits is maintained on every mutation, so
//! [`BitVector::count`] is $O(1)$. Range counts and searches scan one word at
//! a time.

#[cfg(feature = "profiling")]
use tracing::trace_span;

use crate::error::{Error, Result};
use crate::iter::{Ones, Zeros};
use crate::word::{self, Word, WORD_BITS};

/// A fixed-length packed bit vector.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitVector {
    words: Vec<Word>,
    len: usize,
    /// Number of set bits in `[0, len)`.
    ones: usize,
}

impl std::fmt::Debug for BitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len)
            .field("ones", &self.ones)
            .finish()
    }
}

impl BitVector {
    /// Create a vector of `len` bits, all unset.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; word::words_for(len)],
            len,
            ones: 0,
        }
    }

    /// Create a vector of `len` bits with each position in `indices` set.
    ///
    /// Fails on the first index outside `[0, len)`.
    pub fn from_ones<I>(len: usize, indices: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut bv = Self::new(len);
        for i in indices {
            bv.set(i)?;
        }
        Ok(bv)
    }

    /// Return the total number of bits in the vector.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the vector has length 0.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of storage words backing the vector.
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Raw storage words. Padding bits are always zero.
    pub fn as_words(&self) -> &[Word] {
        &self.words
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.words.capacity() * std::mem::size_of::<Word>()
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i < self.len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: i,
                len: self.len,
            })
        }
    }

    /// Return true if the bit at `i` is set.
    pub fn is_set(&self, i: usize) -> Result<bool> {
        self.check_index(i)?;
        let (w, o) = word::split(i);
        Ok(self.words[w] & word::bit(o) != 0)
    }

    /// Return the bit at `i` as `0` or `1`.
    pub fn get(&self, i: usize) -> Result<u8> {
        self.is_set(i).map(u8::from)
    }

    /// Set the bit at `i`. Setting an already-set bit is a no-op.
    pub fn set(&mut self, i: usize) -> Result<()> {
        if self.is_set(i)? {
            return Ok(());
        }
        let (w, o) = word::split(i);
        self.words[w] |= word::bit(o);
        self.ones += 1;
        Ok(())
    }

    /// Clear the bit at `i`. Clearing an already-clear bit is a no-op.
    pub fn unset(&mut self, i: usize) -> Result<()> {
        if !self.is_set(i)? {
            return Ok(());
        }
        let (w, o) = word::split(i);
        self.words[w] &= !word::bit(o);
        self.ones -= 1;
        Ok(())
    }

    /// Flip the bit at `i`.
    pub fn toggle(&mut self, i: usize) -> Result<()> {
        if self.is_set(i)? {
            self.unset(i)
        } else {
            self.set(i)
        }
    }

    /// Set every bit.
    pub fn set_all(&mut self) {
        #[cfg(feature = "profiling")]
        let _span = trace_span!("set_all", len = self.len).entered();

        self.words.fill(Word::MAX);
        if let Some(last) = self.words.last_mut() {
            *last &= word::tail_mask(self.len);
        }
        self.ones = self.len;
    }

    /// Clear every bit.
    pub fn unset_all(&mut self) {
        #[cfg(feature = "profiling")]
        let _span = trace_span!("unset_all", len = self.len).entered();

        self.words.fill(0);
        self.ones = 0;
    }

    /// Number of set bits. O(1).
    pub fn count(&self) -> usize {
        self.ones
    }

    /// Number of set bits in the inclusive range `[start, end]`.
    ///
    /// Partial boundary words are masked; interior words are counted whole.
    pub fn count_range(&self, start: usize, end: usize) -> Result<usize> {
        self.check_index(start)?;
        self.check_index(end)?;
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }

        #[cfg(feature = "profiling")]
        let _span = trace_span!("count_range", start, end).entered();

        let (sw, so) = word::split(start);
        let (ew, eo) = word::split(end);
        if sw == ew {
            let masked = self.words[sw] & word::mask_from(so) & word::mask_through(eo);
            return Ok(masked.count_ones() as usize);
        }

        let head = (self.words[sw] & word::mask_from(so)).count_ones() as usize;
        let body: usize = self.words[sw + 1..ew]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum();
        let tail = (self.words[ew] & word::mask_through(eo)).count_ones() as usize;
        Ok(head + body + tail)
    }

    /// Word `w` with logical zeros turned into ones, padding excluded.
    fn zeros_at(&self, w: usize) -> Word {
        let inverted = !self.words[w];
        if w + 1 == self.words.len() {
            inverted & word::tail_mask(self.len)
        } else {
            inverted
        }
    }

    /// Lowest position `>= from` whose bit is 1 (`want_set`) or 0.
    fn scan(&self, from: usize, want_set: bool) -> Option<usize> {
        if from >= self.len {
            return None;
        }

        #[cfg(feature = "profiling")]
        let _span = trace_span!("scan", from, want_set).entered();

        let load = |w: usize| {
            if want_set {
                self.words[w]
            } else {
                self.zeros_at(w)
            }
        };
        let (mut w, o) = word::split(from);
        let mut current = load(w) & word::mask_from(o);
        while current == 0 {
            w += 1;
            if w >= self.words.len() {
                return None;
            }
            current = load(w);
        }
        Some(w * WORD_BITS + current.trailing_zeros() as usize)
    }

    /// Lowest set position.
    pub fn find_first_set(&self) -> Result<usize> {
        self.scan(0, true).ok_or(Error::NotFound)
    }

    /// Lowest unset position.
    pub fn find_first_unset(&self) -> Result<usize> {
        self.scan(0, false).ok_or(Error::NotFound)
    }

    /// Lowest set position `>= from`. `from` itself is a candidate.
    pub fn find_next_set(&self, from: usize) -> Result<usize> {
        self.check_index(from)?;
        self.scan(from, true).ok_or(Error::NotFound)
    }

    /// Lowest unset position `>= from`. `from` itself is a candidate.
    pub fn find_next_unset(&self, from: usize) -> Result<usize> {
        self.check_index(from)?;
        self.scan(from, false).ok_or(Error::NotFound)
    }

    /// Position of the `n`-th set bit, counting from 1.
    ///
    /// Fails with [`Error::InvalidArgument`] for `n == 0` and
    /// [`Error::NotFound`] when fewer than `n` bits are set.
    pub fn find_nth_set(&self, n: usize) -> Result<usize> {
        if n == 0 {
            return Err(Error::InvalidArgument(n));
        }
        if n > self.ones {
            return Err(Error::NotFound);
        }

        #[cfg(feature = "profiling")]
        let _span = trace_span!("find_nth_set", n).entered();

        let mut remaining = n;
        for (w, &bits) in self.words.iter().enumerate() {
            let ones = bits.count_ones() as usize;
            if remaining <= ones {
                return Ok(w * WORD_BITS + word::select_in_word(bits, remaining - 1));
            }
            remaining -= ones;
        }
        Err(Error::NotFound)
    }

    /// Iterate over set positions in ascending order.
    pub fn ones(&self) -> Ones<'_> {
        Ones::new(&self.words, self.len)
    }

    /// Iterate over unset positions in ascending order.
    pub fn zeros(&self) -> Zeros<'_> {
        Zeros::new(&self.words, self.len)
    }
}
