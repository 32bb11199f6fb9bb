//! Arbitrary precision unsigned integers stored as a growable run of 32-bit limbs.
//!
//! Limb 0 is the least significant limb, and bit 0 of a limb is its least significant bit.
//! Zero owns no limbs at all, and a non-zero value never carries a zero top limb.

use std::mem;

mod arith;
mod cmp;
mod codec;
mod div;
mod shift;
mod storage;

/// The number of bits in a single limb
pub const LIMB_BITS: u32 = u32::BITS;

#[derive(Debug, Default, Eq, PartialEq, Hash)]
pub struct BigUint {
    /// little endian limbs, the top limb is never zero
    limbs: Vec<u32>,
    /// significant bits in the top limb, 0 iff the number is zero
    top_bits: u32,
}

/// Public utility functions
impl BigUint {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self::from(1u32)
    }

    /// Build a number from little endian limbs, high zero limbs are dropped
    /// ```
    /// use aint::BigUint;
    /// let n = BigUint::from_limbs(&[0, 1, 0, 0]);
    /// assert_eq!(n.limbs(), &[0, 1]);
    /// assert_eq!(n, BigUint::from(1u64 << 32));
    /// ```
    pub fn from_limbs(limbs: &[u32]) -> Self {
        let mut out = Self::zeroed(limbs.len());
        out.limbs.copy_from_slice(limbs);
        out.trim();
        out
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.limbs == [1]
    }

    /// Is the number even
    pub fn is_even(&self) -> bool {
        self.limbs.first().map_or(true, |limb| limb & 1 == 0)
    }

    /// Is the number odd
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// The little endian limbs in use
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// The number of limbs in use
    pub fn num_limbs(&self) -> usize {
        self.limbs.len()
    }

    /// The number of limbs the buffer can hold before it has to grow
    pub fn capacity(&self) -> usize {
        self.limbs.capacity()
    }

    /// The number of significant bits in the most significant limb, zero for zero
    pub fn top_bits(&self) -> u32 {
        self.top_bits
    }

    /// The number of bits required to represent this number
    pub fn bit_length(&self) -> usize {
        match self.limbs.len() {
            0 => 0,
            len => (len - 1) * LIMB_BITS as usize + self.top_bits as usize,
        }
    }

    pub fn count_ones(&self) -> usize {
        self.limbs.iter().map(|limb| limb.count_ones() as usize).sum()
    }

    /// The position of the lowest set bit, zero has none
    pub fn trailing_zeros(&self) -> Option<usize> {
        let zero_limbs = self.limbs.iter().take_while(|&&limb| limb == 0).count();
        self.limbs
            .get(zero_limbs)
            .map(|limb| zero_limbs * LIMB_BITS as usize + limb.trailing_zeros() as usize)
    }

    /// Test if bit N is set, bits past the top are never set
    pub fn test_bit(&self, bit: usize) -> bool {
        let limb_idx = bit / LIMB_BITS as usize;
        let bit_idx = bit % LIMB_BITS as usize;

        self.limbs
            .get(limb_idx)
            .map_or(false, |limb| (limb >> bit_idx) & 1 == 1)
    }

    /// Set bit N, growing the number if the bit lies past the top
    pub fn set_bit(&mut self, bit: usize) {
        let limb_idx = bit / LIMB_BITS as usize;
        let bit_idx = bit % LIMB_BITS as usize;

        if limb_idx >= self.limbs.len() {
            self.resize_zeroed(limb_idx + 1);
        }
        self.limbs[limb_idx] |= 1 << bit_idx;
        self.normalize();
    }

    /// The value as a u32, if it fits
    pub fn to_u32(&self) -> Option<u32> {
        match self.limbs[..] {
            [] => Some(0),
            [limb] => Some(limb),
            _ => None,
        }
    }

    /// The value as a u64, if it fits
    pub fn to_u64(&self) -> Option<u64> {
        match self.limbs[..] {
            [] => Some(0),
            [lo] => Some(u64::from(lo)),
            [lo, hi] => Some((u64::from(hi) << LIMB_BITS) | u64::from(lo)),
            _ => None,
        }
    }

    /// Move the value out, leaving zero behind
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}
