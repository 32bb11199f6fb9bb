use super::{BigUint, LIMB_BITS};

/// The capacity handed to a buffer that has to hold `len` limbs.
/// Leaving half again as much room keeps appends amortised O(1).
#[inline]
pub(super) const fn headroom(len: usize) -> usize {
    len + len / 2 + 1
}

/// The number of significant bits in a limb
#[inline]
pub(super) const fn limb_bits(limb: u32) -> u32 {
    LIMB_BITS - limb.leading_zeros()
}

/// Buffer management, every other component builds its results through these
impl BigUint {
    /// An empty number whose buffer can take `capacity` limbs without growing
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            limbs: Vec::with_capacity(capacity),
            top_bits: 0,
        }
    }

    /// `len` zeroed limbs with headroom, the caller has to `trim` once it is done writing
    pub(super) fn zeroed(len: usize) -> Self {
        let mut out = Self::with_capacity(headroom(len));
        out.limbs.resize(len, 0);
        out
    }

    /// Extend with zero limbs up to `len`, the caller has to `normalize` afterwards
    pub(super) fn resize_zeroed(&mut self, len: usize) {
        if len > self.limbs.capacity() {
            self.grow(headroom(len));
        }
        self.limbs.resize(len, 0);
    }

    /// Append a limb above the current top limb.
    ///
    /// `known_bits` saves measuring the limb when the caller already knows its width,
    /// otherwise the limb's bit length becomes the new `top_bits`.
    pub(super) fn push_limb(&mut self, limb: u32, known_bits: Option<u32>) {
        if self.limbs.len() == self.limbs.capacity() {
            self.grow(headroom(self.limbs.len()));
        }

        self.limbs.push(limb);
        self.top_bits = known_bits.unwrap_or_else(|| limb_bits(limb));
    }

    /// Make sure the buffer holds at least `target` limbs, moving the used limbs over if needed
    pub(super) fn grow(&mut self, target: usize) {
        let capacity = self.limbs.capacity();
        if target <= capacity {
            return;
        }

        log::trace!("growing limb buffer from {capacity} to {target} limbs");
        self.limbs.reserve_exact(target - self.limbs.len());
    }

    /// Drop high zero limbs and recompute `top_bits`, without touching the allocation
    pub(super) fn normalize(&mut self) {
        let used = self
            .limbs
            .iter()
            .rposition(|&limb| limb != 0)
            .map_or(0, |top| top + 1);

        self.limbs.truncate(used);
        self.top_bits = self.limbs.last().map_or(0, |&top| limb_bits(top));
    }

    /// Normalize, then give back memory if the buffer is far larger than the number.
    /// A number that trims down to zero releases its buffer entirely.
    pub(super) fn trim(&mut self) {
        self.normalize();

        if self.limbs.is_empty() {
            *self = Self::zero();
            return;
        }

        let target = headroom(self.limbs.len());
        let capacity = self.limbs.capacity();
        if capacity > 2 * target {
            log::trace!("shrinking limb buffer from {capacity} to {target} limbs");
            self.limbs.shrink_to(target);
        }
    }
}

impl Clone for BigUint {
    /// Deep copy of the used limbs into a fresh buffer with headroom, so that
    /// accumulating into the copy does not reallocate straight away
    fn clone(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let mut limbs = Vec::with_capacity(headroom(self.limbs.len()));
        limbs.extend_from_slice(&self.limbs);
        Self {
            limbs,
            top_bits: self.top_bits,
        }
    }
}
