use super::arith::borrowing_sub;
use super::storage::{headroom, limb_bits};
use super::{BigUint, LIMB_BITS};

impl BigUint {
    /// performs both division and mod and returns the pair (div, mod)
    ///
    /// Division by zero is defined rather than an error: the quotient is zero and the
    /// remainder is the dividend.
    /// ```
    /// use aint::BigUint;
    /// let (q, r) = BigUint::from(1234u32).divmod(&BigUint::from(56u32));
    /// assert_eq!((q, r), (BigUint::from(22u32), BigUint::from(2u32)));
    ///
    /// let (q, r) = BigUint::from(7u32).divmod(&BigUint::zero());
    /// assert_eq!((q, r), (BigUint::zero(), BigUint::from(7u32)));
    /// ```
    pub fn divmod(&self, rhs: &Self) -> (Self, Self) {
        // early exit for simple cases
        if rhs.is_zero() || rhs > self {
            return (Self::zero(), self.clone());
        }

        if rhs.is_one() {
            return (self.clone(), Self::zero());
        }

        let mut quotient = Self::zeroed(self.limbs.len());
        let mut remainder = Self::with_capacity(headroom(rhs.limbs.len() + 1));

        // bring the dividend down one bit at a time, most significant first
        for bit in (0..self.bit_length()).rev() {
            remainder.shl1_with_bit(self.test_bit(bit));
            if &remainder >= rhs {
                remainder.sub_in_place(rhs);
                quotient.limbs[bit / LIMB_BITS as usize] |= 1 << (bit % LIMB_BITS as usize);
            }
        }

        quotient.trim();
        remainder.trim();
        (quotient, remainder)
    }

    /// Replace self with the div part of the divmod
    pub fn quotient(&mut self, rhs: &Self) {
        *self = self.divmod(rhs).0;
    }

    /// Replace self with the mod part of the divmod
    pub fn remainder(&mut self, rhs: &Self) {
        *self = self.divmod(rhs).1;
    }

    pub(super) fn div_limbs(&self, rhs: &Self) -> Self {
        self.divmod(rhs).0
    }

    pub(super) fn rem_limbs(&self, rhs: &Self) -> Self {
        self.divmod(rhs).1
    }

    /// Shift left by one bit in place, filling bit 0 with `bit`
    fn shl1_with_bit(&mut self, bit: bool) {
        let mut carry = u32::from(bit);
        for limb in self.limbs.iter_mut() {
            let next = *limb >> (LIMB_BITS - 1);
            *limb = (*limb << 1) | carry;
            carry = next;
        }

        if carry != 0 {
            self.push_limb(carry, None);
        } else if let Some(&top) = self.limbs.last() {
            self.top_bits = limb_bits(top);
        }
    }

    /// Subtract in place, `self` must be at least `rhs`.
    /// The buffer is kept as is so the running remainder never reallocates.
    fn sub_in_place(&mut self, rhs: &Self) {
        debug_assert!(&*self >= rhs, "attempt to subtract with overflow");

        let mut borrow = false;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let r = match rhs.limbs.get(i) {
                Some(&r) => r,
                None if !borrow => break,
                None => 0,
            };
            (*limb, borrow) = borrowing_sub(*limb, r, borrow);
        }

        self.normalize();
    }
}
