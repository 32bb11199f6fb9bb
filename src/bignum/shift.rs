use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use super::storage::headroom;
use super::{BigUint, LIMB_BITS};

/// The most spare limbs a left shift reserves past the limbs it actually needs.
/// Shifts can be huge, so headroom proportional to the result would waste a lot.
const SHIFT_RESERVE_CAP: usize = 50;

impl BigUint {
    pub(super) fn shl_limbs(&self, shift: usize) -> Self {
        if shift == 0 || self.is_zero() {
            return self.clone();
        }

        let zero_limbs = shift / LIMB_BITS as usize;
        let split = (shift % LIMB_BITS as usize) as u32;

        // one more limb than the input for the bits that spill out of the top limb
        let len = self.limbs.len() + zero_limbs + 1;
        let capacity = headroom(len).min(len + SHIFT_RESERVE_CAP);
        if capacity < headroom(len) {
            log::debug!("capping reservation for a {shift} bit left shift at {capacity} limbs");
        }

        let mut out = Self::with_capacity(capacity);
        out.limbs.resize(len, 0);

        if split == 0 {
            out.limbs[zero_limbs..len - 1].copy_from_slice(&self.limbs);
            out.limbs.pop();
            out.top_bits = self.top_bits;
            return out;
        }

        // top down, each slot is assigned before the limb below ORs its spill into it
        for (i, &limb) in self.limbs.iter().enumerate().rev() {
            out.limbs[i + zero_limbs + 1] |= limb >> (LIMB_BITS - split);
            out.limbs[i + zero_limbs] = limb << split;
        }

        if self.top_bits + split > LIMB_BITS {
            out.top_bits = self.top_bits + split - LIMB_BITS;
        } else {
            out.limbs.pop();
            out.top_bits = self.top_bits + split;
        }

        out
    }

    pub(super) fn shr_limbs(&self, shift: usize) -> Self {
        if shift == 0 || self.is_zero() {
            return self.clone();
        }

        let dropped_limbs = shift / LIMB_BITS as usize;
        let split = (shift % LIMB_BITS as usize) as u32;

        // the shift eats every limb, or everything left of the top limb
        let len = self.limbs.len();
        if dropped_limbs >= len || (dropped_limbs == len - 1 && split >= self.top_bits) {
            return Self::zero();
        }

        let kept = &self.limbs[dropped_limbs..];
        let mut out = Self::with_capacity(headroom(kept.len()));

        if split == 0 {
            out.limbs.extend_from_slice(kept);
        } else {
            out.limbs.extend(kept.iter().enumerate().map(|(i, &limb)| {
                let upper = kept
                    .get(i + 1)
                    .map_or(0, |&next| next << (LIMB_BITS - split));
                (limb >> split) | upper
            }));
        }

        out.trim();
        out
    }
}

macro_rules! biguint_shift_impls {
    ($rhs:ty, $trait:ident, $op:ident, $trait_assign:ident, $op_assign:ident, $method:ident) => {
        impl $trait<$rhs> for BigUint {
            type Output = BigUint;

            fn $op(self, rhs: $rhs) -> Self::Output {
                self.$method(rhs as usize)
            }
        }

        impl $trait<$rhs> for &BigUint {
            type Output = BigUint;

            fn $op(self, rhs: $rhs) -> Self::Output {
                self.$method(rhs as usize)
            }
        }

        impl $trait_assign<$rhs> for BigUint {
            fn $op_assign(&mut self, rhs: $rhs) {
                *self = self.$method(rhs as usize);
            }
        }
    };
}

biguint_shift_impls!(usize, Shl, shl, ShlAssign, shl_assign, shl_limbs);
biguint_shift_impls!(u32, Shl, shl, ShlAssign, shl_assign, shl_limbs);
biguint_shift_impls!(usize, Shr, shr, ShrAssign, shr_assign, shr_limbs);
biguint_shift_impls!(u32, Shr, shr, ShrAssign, shr_assign, shr_limbs);
