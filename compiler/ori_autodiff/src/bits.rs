//! Small bit vector for parameter and result index sets.
//!
//! Most functions have few parameters, so the first 64 bits live inline
//! (`SmallVec<[u64; 1]>`) and only wider sets spill to the heap.
//!
//! # Content Equality
//!
//! Two `IndexBits` are equal when they have exactly the same set bits,
//! regardless of length: the shorter vector is treated as zero-extended.
//! `{0, 2}` with length 3 equals `{0, 2}` with length 5. `Hash` skips
//! trailing zero words so it agrees with `Eq`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use smallvec::SmallVec;

const WORD_BITS: usize = u64::BITS as usize;

/// Fixed-length bit vector with content-based equality.
///
/// Invariant: bits at positions `>= len` in the last word are always zero.
#[derive(Clone, Default)]
#[cfg_attr(
    feature = "cache",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawIndexBits")
)]
pub struct IndexBits {
    words: SmallVec<[u64; 1]>,
    len: usize,
}

/// Wire form of [`IndexBits`], checked before it becomes one.
#[cfg(feature = "cache")]
#[derive(serde::Deserialize)]
struct RawIndexBits {
    words: SmallVec<[u64; 1]>,
    len: usize,
}

#[cfg(feature = "cache")]
impl TryFrom<RawIndexBits> for IndexBits {
    type Error = crate::error::DecodeError;

    fn try_from(raw: RawIndexBits) -> Result<Self, Self::Error> {
        let RawIndexBits { words, len } = raw;
        let expected = words_for(len);
        if words.len() != expected {
            return Err(crate::error::DecodeError::WordCount {
                len,
                expected,
                found: words.len(),
            });
        }
        let tail = len % WORD_BITS;
        if let Some(&last) = words.last() {
            if tail != 0 && last >> tail != 0 {
                return Err(crate::error::DecodeError::BitsPastEnd { len });
            }
        }
        Ok(Self { words, len })
    }
}

#[inline]
fn words_for(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

impl IndexBits {
    /// Create a vector of `len` unset bits.
    pub fn new(len: usize) -> Self {
        Self {
            words: smallvec::smallvec![0; words_for(len)],
            len,
        }
    }

    /// Create a vector of `len` set bits.
    pub fn with_all_set(len: usize) -> Self {
        let mut bits = Self::new(len);
        bits.set_all();
        bits
    }

    /// Number of bits (set or unset).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn check_index(&self, index: usize) {
        assert!(
            index < self.len,
            "bit index {index} out of bounds for length {}",
            self.len
        );
    }

    /// Test bit `index`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.check_index(index);
        self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// Set bit `index`.
    #[inline]
    pub fn set(&mut self, index: usize) {
        self.check_index(index);
        self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
    }

    /// Clear bit `index`.
    #[inline]
    pub fn reset(&mut self, index: usize) {
        self.check_index(index);
        self.words[index / WORD_BITS] &= !(1 << (index % WORD_BITS));
    }

    /// Set every bit in `range` (half-open).
    pub fn set_range(&mut self, range: Range<usize>) {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "bit range {range:?} out of bounds for length {}",
            self.len
        );
        for index in range {
            self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
        }
    }

    /// Set every bit.
    pub fn set_all(&mut self) {
        self.set_range(0..self.len);
    }

    /// Change the length. New bits are unset; truncated bits are discarded.
    pub fn resize(&mut self, len: usize) {
        self.words.resize(words_for(len), 0);
        self.len = len;
        let tail = len % WORD_BITS;
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1 << tail) - 1;
            }
        }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if any bit is set.
    pub fn any(&self) -> bool {
        self.words.iter().any(|&w| w != 0)
    }

    /// Returns `true` if no bit is set.
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Iterate over the positions of set bits, ascending.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |&i| self.get(i))
    }

    /// Words with trailing all-zero words removed.
    fn significant_words(&self) -> &[u64] {
        let end = self
            .words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |last| last + 1);
        &self.words[..end]
    }
}

impl PartialEq for IndexBits {
    fn eq(&self, other: &Self) -> bool {
        // Zero-extend the shorter side: equal iff the XOR is all zero.
        let n = self.words.len().max(other.words.len());
        (0..n).all(|i| {
            let a = self.words.get(i).copied().unwrap_or(0);
            let b = other.words.get(i).copied().unwrap_or(0);
            a ^ b == 0
        })
    }
}

impl Eq for IndexBits {}

impl Hash for IndexBits {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_words().hash(state);
    }
}

impl FromIterator<bool> for IndexBits {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = Self::new(0);
        for (i, bit) in iter.into_iter().enumerate() {
            bits.resize(i + 1);
            if bit {
                bits.set(i);
            }
        }
        bits
    }
}

/// Renders bit 0 first, `1` for set and `0` for unset (e.g. `1110`).
impl fmt::Display for IndexBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len {
            f.write_str(if self.get(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for IndexBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexBits({self})")
    }
}
