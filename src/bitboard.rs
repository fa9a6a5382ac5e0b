use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A 64-bit bitboard covering the 8×8 board, one bit per square.
/// Bit `i` corresponds to square index `i` (row * 8 + col).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// All bits zero.
    #[inline]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// Single bit set at `index`.
    #[inline]
    pub fn single(index: usize) -> Self {
        debug_assert!(index < 64);
        Bitboard(1u64 << index)
    }

    /// Construct from a raw mask.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Bitboard(raw)
    }

    /// The raw mask.
    #[inline]
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Test whether bit `index` is set.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < 64);
        (self.0 >> index) & 1 != 0
    }

    /// Set bit `index` to 1.
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < 64);
        self.0 |= 1u64 << index;
    }

    /// Clear bit `index` to 0.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        debug_assert!(index < 64);
        self.0 &= !(1u64 << index);
    }

    /// True if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Population count — number of set bits.
    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// True if every bit set in `self` is also set in `other`.
    #[inline]
    pub fn is_subset_of(&self, other: &Bitboard) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate over indices of set bits, lowest first.
    #[inline]
    pub fn iter_ones(&self) -> BitIterator {
        BitIterator { bits: self.0 }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

/// Iterator over set-bit indices in a `Bitboard`.
pub struct BitIterator {
    bits: u64,
}

impl Iterator for BitIterator {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let bit = self.bits.trailing_zeros() as usize;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some(bit)
    }
}
