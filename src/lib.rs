//! # Dense Bit Vectors
//!
//! *One bit per flag, word-at-a-time queries.*
//!
//! ## Intuition First
//!
//! A `Vec<bool>` spends a whole byte on every yes/no answer. For a sieve over
//! a billion integers, or a visited-set over a large graph, that is eight
//! times more memory than the information needs. Packing the flags into
//! machine words costs nothing in access time (one shift and one mask) and
//! lets counting and searching look at 64 flags per instruction.
//!
//! ## Layout
//!
//! ```text
//! index:   63 ... 2 1 0 | 127 ... 66 65 64 | ...
//! word:    words[0]     | words[1]         | ...
//! ```
//!
//! Bit `i` lives in `words[i / WORD_BITS]` at offset `i % WORD_BITS`, with
//! offset 0 the least-significant bit. A vector of `len` bits owns exactly
//! `ceil(len / WORD_BITS)` words for its whole lifetime.
//!
//! ## Complexity Analysis
//!
//! - **Point ops** (`is_set`, `set`, `unset`, `toggle`): $O(1)$.
//! - **`count`**: $O(1)$, the population count is cached.
//! - **`count_range`, searches, bulk ops**: $O(\lceil n / w \rceil)$ with
//!   hardware popcount and trailing-zero instructions.
//!
//! ## What Could Go Wrong
//!
//! 1. **Padding bits**: the last word usually holds fewer than `WORD_BITS`
//!    logical bits. Any operation that writes the padding would corrupt
//!    counts and unset-searches, so padding is kept at zero.
//! 2. **Stale cache**: the cached count must move with every mutation and
//!    must not move on a redundant `set`/`unset`.
//!
//! ## Example
//!
//! ```
//! use densebits::{BitVector, Error};
//!
//! let mut bv = BitVector::new(10);
//! for i in [3, 5, 7] {
//!     bv.set(i)?;
//! }
//! assert_eq!(bv.count(), 3);
//! assert_eq!(bv.find_next_set(4)?, 5);
//! assert_eq!(bv.find_nth_set(3)?, 7);
//! assert_eq!(bv.find_next_set(8), Err(Error::NotFound));
//! assert_eq!(bv.count_range(0, 5)?, 2);
//! # Ok::<(), Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitvec;
pub mod error;
pub mod iter;
pub mod word;

pub use bitvec::BitVector;
pub use error::{Error, Result};
pub use iter::{Ones, Zeros};
pub use word::{Word, WORD_BITS};
