//! Fixed-width bit vectors
//!
//! [`BitRange`] is the row storage of the frame buffer. Bit 0 is the
//! least-significant bit, which the buffer maps to the rightmost visual
//! column of a row.
//!
//! All range operations take a start index and a length. The start must be
//! inside the vector (a caller contract, see [`BitRange::set_range`]); a
//! length running past the end is truncated.

use core::fmt;
use core::ops::{BitOr, BitOrAssign, Shl};

/// Widest supported bit vector
pub const MAX_BITS: usize = u128::BITS as usize;

/// Mask with the lowest `len` bits set
pub(crate) const fn low_mask(len: usize) -> u128 {
    if len >= MAX_BITS {
        u128::MAX
    } else {
        (1u128 << len) - 1
    }
}

/// An `N`-bit vector, `1 <= N <= 128`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitRange<const N: usize> {
    bits: u128,
}

impl<const N: usize> BitRange<N> {
    /// Number of bits in this vector
    pub const WIDTH: usize = N;

    /// Every valid bit set
    const FULL: u128 = {
        assert!(N > 0 && N <= MAX_BITS, "BitRange width must be 1..=128");
        low_mask(N)
    };

    /// All bits cleared
    pub const fn new() -> Self {
        // Forces the width check at compile time for every instantiated N
        let _ = Self::FULL;
        Self { bits: 0 }
    }

    /// Build from the low `N` bits of `bits`; higher bits are discarded
    pub const fn from_bits(bits: u128) -> Self {
        Self {
            bits: bits & Self::FULL,
        }
    }

    /// Raw value, bit 0 = index 0
    pub const fn bits(&self) -> u128 {
        self.bits
    }

    /// Read bit `index`
    ///
    /// Indices past the end read as `false`.
    pub fn get(&self, index: usize) -> bool {
        index < N && (self.bits >> index) & 1 == 1
    }

    /// Set or clear bit `index`
    pub fn set(&mut self, index: usize, value: bool) {
        self.set_range(index, 1, value);
    }

    /// Set (or clear) the `length` bits starting at `start`
    ///
    /// Bits at or above `N` are never touched, so `start + length > N` is
    /// allowed. `start >= N` violates the caller contract: it panics in
    /// debug builds and is ignored in release builds.
    pub fn set_range(&mut self, start: usize, length: usize, value: bool) {
        if !precondition!(start < N, "set_range start {} out of range {}", start, N) {
            return;
        }
        let mask = Self::range_mask(start, length);
        if value {
            self.bits |= mask;
        } else {
            self.bits &= !mask;
        }
    }

    /// Invert the `length` bits starting at `start`
    ///
    /// Same contract as [`set_range`](Self::set_range).
    pub fn flip_range(&mut self, start: usize, length: usize) {
        if !precondition!(start < N, "flip_range start {} out of range {}", start, N) {
            return;
        }
        self.bits ^= Self::range_mask(start, length);
    }

    /// Copy bits `[start, start + M)` into a new `M`-bit vector
    ///
    /// Output bit `i` is input bit `start + i`; positions past the end of
    /// this vector come out as zero.
    pub fn extract_range<const M: usize>(&self, start: usize) -> BitRange<M> {
        if !precondition!(start < N, "extract_range start {} out of range {}", start, N) {
            return BitRange::new();
        }
        BitRange::from_bits(self.bits >> start)
    }

    /// Swap bit `i` with bit `N - 1 - i` for every `i`
    pub fn reverse(&mut self) {
        self.bits = self.bits.reverse_bits() >> (MAX_BITS - N);
    }

    /// Reversed copy, see [`reverse`](Self::reverse)
    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }

    /// Clear every bit
    pub fn reset(&mut self) {
        self.bits = 0;
    }

    /// Number of set bits
    pub fn count_ones(&self) -> u32 {
        self.bits.count_ones()
    }

    /// True if no bit is set
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    fn range_mask(start: usize, length: usize) -> u128 {
        let length = length.min(N - start);
        (low_mask(length) << start) & Self::FULL
    }
}

impl<const N: usize> Default for BitRange<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> BitOr for BitRange<N> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<const N: usize> BitOrAssign for BitRange<N> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

/// Shift toward the most-significant end; bits shifted past `N` are lost
impl<const N: usize> Shl<usize> for BitRange<N> {
    type Output = Self;

    fn shl(self, rhs: usize) -> Self {
        if rhs >= N {
            Self::new()
        } else {
            Self::from_bits(self.bits << rhs)
        }
    }
}

impl From<u8> for BitRange<8> {
    fn from(value: u8) -> Self {
        Self::from_bits(value as u128)
    }
}

impl From<BitRange<8>> for u8 {
    fn from(value: BitRange<8>) -> Self {
        value.bits as u8
    }
}

/// MSB first, like a binary literal
impl<const N: usize> fmt::Debug for BitRange<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitRange<{}>(", N)?;
        for i in (0..N).rev() {
            f.write_str(if self.get(i) { "1" } else { "0" })?;
        }
        f.write_str(")")
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for BitRange<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "BitRange<{}>({=u128:b})", N, self.bits);
    }
}
