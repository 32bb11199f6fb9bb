use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Rem, RemAssign, Sub, SubAssign,
};

use super::storage::headroom;
use super::{BigUint, LIMB_BITS};

// we dont have nightly but i can steal from nightly >:)
#[inline]
pub(super) const fn borrowing_sub(x: u32, y: u32, borrow: bool) -> (u32, bool) {
    let (a, b) = x.overflowing_sub(y);
    let (c, d) = a.overflowing_sub(borrow as u32);
    (c, b || d)
}

impl BigUint {
    /// Sum of two numbers. The result is one limb longer than the longer input only if a
    /// carry escapes its top limb.
    pub(super) fn add_limbs(&self, rhs: &Self) -> Self {
        if self.is_zero() {
            return rhs.clone();
        }
        if rhs.is_zero() {
            return self.clone();
        }

        let (long, short) = if self.limbs.len() >= rhs.limbs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let mut out = Self::with_capacity(headroom(long.limbs.len()));
        let mut acc = 0u64;
        for (i, &l) in long.limbs.iter().enumerate() {
            acc += u64::from(l) + u64::from(short.limbs.get(i).copied().unwrap_or(0));
            let carry = acc >> LIMB_BITS;

            // a limb that carries always has a limb pushed above it, so its width never matters
            out.push_limb(acc as u32, (carry != 0).then_some(LIMB_BITS));
            acc = carry;
        }

        if acc != 0 {
            out.push_limb(acc as u32, None);
        }

        out
    }

    /// Difference of two numbers, saturating at zero.
    ///
    /// Computed as `self + !rhs + 1` over exactly `self`'s limbs, dropping the carry out of
    /// the top limb. Limbs past the end of `rhs` complement to all ones.
    pub(super) fn sub_limbs(&self, rhs: &Self) -> Self {
        if rhs.is_zero() {
            return self.clone();
        }
        if self <= rhs {
            return Self::zero();
        }

        let mut out = Self::zeroed(self.limbs.len());

        // the + 1 of the two's complement rides in as the initial carry
        let mut acc = 1u64;
        for (i, (o, &l)) in out.limbs.iter_mut().zip(self.limbs.iter()).enumerate() {
            let complement = !rhs.limbs.get(i).copied().unwrap_or(0);
            acc += u64::from(l) + u64::from(complement);
            *o = acc as u32;
            acc >>= LIMB_BITS;
        }

        out.trim();
        out
    }

    /// Schoolbook product, rippling each partial product's carry as far as it goes
    pub(super) fn mul_limbs(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        let mut out = Self::zeroed(self.limbs.len() + rhs.limbs.len());

        for (i, &r) in rhs.limbs.iter().enumerate() {
            for (j, &l) in self.limbs.iter().enumerate() {
                // (2^32 - 1)^2 + (2^32 - 1) still fits in a u64
                let mut acc = u64::from(l) * u64::from(r);
                let mut k = i + j;
                while acc != 0 {
                    acc += u64::from(out.limbs[k]);
                    out.limbs[k] = acc as u32;
                    acc >>= LIMB_BITS;
                    k += 1;
                }
            }
        }

        out.trim();
        out
    }

    pub(super) fn bitand_limbs(&self, rhs: &Self) -> Self {
        let len = self.limbs.len().min(rhs.limbs.len());
        if len == 0 {
            return Self::zero();
        }

        let mut out = Self::with_capacity(headroom(len));
        out.limbs
            .extend(self.limbs.iter().zip(rhs.limbs.iter()).map(|(l, r)| l & r));
        out.trim();
        out
    }

    pub(super) fn bitor_limbs(&self, rhs: &Self) -> Self {
        self.zip_longest(rhs, |l, r| l | r)
    }

    pub(super) fn bitxor_limbs(&self, rhs: &Self) -> Self {
        self.zip_longest(rhs, |l, r| l ^ r)
    }

    /// Combine limb by limb over the longer of the two, treating missing limbs as zero
    fn zip_longest(&self, rhs: &Self, op: impl Fn(u32, u32) -> u32) -> Self {
        let len = self.limbs.len().max(rhs.limbs.len());
        if len == 0 {
            return Self::zero();
        }

        let mut out = Self::with_capacity(headroom(len));
        out.limbs.extend((0..len).map(|i| {
            let l = self.limbs.get(i).copied().unwrap_or(0);
            let r = rhs.limbs.get(i).copied().unwrap_or(0);
            op(l, r)
        }));
        out.trim();
        out
    }
}

macro_rules! impl_from_for_biguint {
    ($uX:ty) => {
        impl From<$uX> for BigUint {
            fn from(value: $uX) -> Self {
                let mut value = u128::from(value);
                let mut out = Self::zero();
                while value != 0 {
                    out.push_limb(value as u32, None);
                    value >>= LIMB_BITS;
                }
                out
            }
        }
    };
}

impl_from_for_biguint!(u128);
impl_from_for_biguint!(u64);
impl_from_for_biguint!(u32);
impl_from_for_biguint!(u16);
impl_from_for_biguint!(u8);

/// Every operator computes a fresh value from borrowed inputs. The assigning forms compute
/// that value first and then move it over the receiver.
macro_rules! biguint_arith_impls {
    ($trait:ident, $op:ident, $trait_assign:ident, $op_assign:ident, $method:ident) => {
        impl $trait<BigUint> for BigUint {
            type Output = BigUint;

            fn $op(self, rhs: BigUint) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl $trait<&BigUint> for BigUint {
            type Output = BigUint;

            fn $op(self, rhs: &BigUint) -> Self::Output {
                self.$method(rhs)
            }
        }

        impl $trait<BigUint> for &BigUint {
            type Output = BigUint;

            fn $op(self, rhs: BigUint) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl $trait<&BigUint> for &BigUint {
            type Output = BigUint;

            fn $op(self, rhs: &BigUint) -> Self::Output {
                self.$method(rhs)
            }
        }

        impl $trait_assign<BigUint> for BigUint {
            fn $op_assign(&mut self, rhs: BigUint) {
                *self = self.$method(&rhs);
            }
        }

        impl $trait_assign<&BigUint> for BigUint {
            fn $op_assign(&mut self, rhs: &BigUint) {
                *self = self.$method(rhs);
            }
        }
    };
}

biguint_arith_impls!(Add, add, AddAssign, add_assign, add_limbs);
biguint_arith_impls!(Sub, sub, SubAssign, sub_assign, sub_limbs);
biguint_arith_impls!(Mul, mul, MulAssign, mul_assign, mul_limbs);
biguint_arith_impls!(Div, div, DivAssign, div_assign, div_limbs);
biguint_arith_impls!(Rem, rem, RemAssign, rem_assign, rem_limbs);
biguint_arith_impls!(BitAnd, bitand, BitAndAssign, bitand_assign, bitand_limbs);
biguint_arith_impls!(BitOr, bitor, BitOrAssign, bitor_assign, bitor_limbs);
biguint_arith_impls!(BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor_limbs);

impl Sum for BigUint {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigUint> for BigUint {
    fn sum<I: Iterator<Item = &'a BigUint>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Product for BigUint {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigUint> for BigUint {
    fn product<I: Iterator<Item = &'a BigUint>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bignums() {
        let a = BigUint::from(0u32);
        assert!(a.is_zero());
        assert_eq!(a.capacity(), 0);

        let a = BigUint::from(0b101u8);
        assert_eq!(a.limbs(), &[0b101]);
        assert_eq!(a.top_bits(), 3);

        let a = BigUint::from(u32::MAX);
        assert_eq!(a.limbs(), &[u32::MAX]);
        assert_eq!(a.top_bits(), 32);

        let a = BigUint::from(1u64 << 40);
        assert_eq!(a.limbs(), &[0, 1 << 8]);
        assert_eq!(a.top_bits(), 9);

        let a = BigUint::from(u128::MAX);
        assert_eq!(a.limbs(), &[u32::MAX; 4]);
    }

    #[test]
    fn test_add_bignums() {
        let a = BigUint::from(5u8);
        let b = BigUint::from(6u8);
        assert_eq!(&a + &b, BigUint::from(11u8));

        assert!((BigUint::zero() + BigUint::zero()).is_zero());
        assert_eq!(BigUint::zero() + &a, a);
        assert_eq!(&a + BigUint::zero(), a);

        let a = BigUint::from(u32::MAX);
        let b = BigUint::from(1u8);
        let c = a + b;
        assert_eq!(c.limbs(), &[0, 1]);
        assert_eq!(c.top_bits(), 1);

        let a = BigUint::from(u64::MAX);
        let b = BigUint::from(u64::MAX);
        assert_eq!(a + b, BigUint::from(u128::from(u64::MAX) * 2));

        let a = BigUint::from_limbs(&[u32::MAX, u32::MAX, u32::MAX]);
        let b = BigUint::from(1u8);
        let c = &b + &a;
        assert_eq!(c.limbs(), &[0, 0, 0, 1]);
    }

    #[test]
    fn test_add_assign_bignums() {
        let mut a = BigUint::from(5u8);
        let b = BigUint::from(6u8);
        a += &b;
        assert_eq!(a, BigUint::from(11u8));

        let mut a = BigUint::from(u32::MAX);
        a += BigUint::from(1u8);
        assert_eq!(a.limbs(), &[0, 1]);

        let mut a = BigUint::zero();
        a += BigUint::zero();
        assert!(a.is_zero());
    }

    #[test]
    fn test_sub_bignums() {
        let a = BigUint::from(5u8);
        let b = BigUint::from(6u8);
        assert!((&b - &a).is_one());

        // saturates instead of wrapping
        assert!((&a - &b).is_zero());
        assert!((&a - &a).is_zero());
        assert!((BigUint::zero() - &a).is_zero());
        assert_eq!(&a - BigUint::zero(), a);

        let a = BigUint::from(1u64 << 32);
        let b = BigUint::from(1u8);
        let c = a - b;
        assert_eq!(c, BigUint::from(u32::MAX));
        assert_eq!(c.num_limbs(), 1);

        let a = BigUint::from_limbs(&[0, 0, 0, 1]);
        let b = BigUint::from(1u8);
        assert_eq!(a - b, BigUint::from_limbs(&[u32::MAX; 3]));

        let a = BigUint::from_limbs(&[u32::MAX / 2, 1]);
        let b = BigUint::from(u32::MAX);
        assert_eq!(a - b, BigUint::from(1u32 << 31));
    }

    #[test]
    fn test_sub_assign_bignums() {
        let mut b = BigUint::from(6u8);
        b -= BigUint::from(5u8);
        assert!(b.is_one());

        let mut a = BigUint::from(u64::MAX);
        a -= BigUint::from(u64::MAX);
        assert!(a.is_zero());
        assert_eq!(a.capacity(), 0);

        let mut a = BigUint::from(3u8);
        a -= BigUint::from(u128::MAX);
        assert!(a.is_zero());
    }

    #[test]
    fn test_mul_bignums() {
        let a = BigUint::from(5u8);
        let b = BigUint::from(6u8);
        assert_eq!(&b * &a, BigUint::from(30u8));

        assert!((&a * BigUint::zero()).is_zero());
        assert!((BigUint::zero() * &a).is_zero());
        assert_eq!(BigUint::one() * BigUint::from(0b111u8), BigUint::from(0b111u8));

        let a = BigUint::from(1u64 << 32);
        let b = BigUint::from(10u8);
        assert_eq!(a * b, BigUint::from_limbs(&[0, 10]));

        let a = BigUint::from(u32::MAX);
        let b = BigUint::from(u32::MAX);
        assert_eq!(a * b, BigUint::from(u64::from(u32::MAX) * u64::from(u32::MAX)));

        let a = BigUint::from(u64::MAX);
        let c = &a * &a;
        assert_eq!(c.limbs(), &[1, 0, u32::MAX - 1, u32::MAX]);

        let a = BigUint::from(0xb4830d2b3cc4b4bb_u64);
        let b = BigUint::from(0x4d847515b57d26be_u64);
        assert_eq!(
            a * b,
            BigUint::from(0xb4830d2b3cc4b4bb_u128 * 0x4d847515b57d26be_u128)
        );
    }

    #[test]
    fn test_mul_assign_bignums() {
        let mut a = BigUint::from(5u8);
        a *= BigUint::from(6u8);
        assert_eq!(a, BigUint::from(30u8));

        let mut a = BigUint::from(u64::MAX);
        let b = a.clone();
        a *= b;
        assert_eq!(a.limbs(), &[1, 0, u32::MAX - 1, u32::MAX]);
    }

    #[test]
    fn test_bitand_bignums() {
        let a = BigUint::from_limbs(&[0b1100, u32::MAX]);
        let b = BigUint::from(0b1010u8);
        assert_eq!(&a & &b, BigUint::from(0b1000u8));

        let b = BigUint::from_limbs(&[0b0011, 0]);
        assert!((&a & &b).is_zero());
        assert!((&a & BigUint::zero()).is_zero());
    }

    #[test]
    fn test_bitor_bignums() {
        let a = BigUint::from_limbs(&[0b1100, 1]);
        let b = BigUint::from(0b1010u8);
        assert_eq!(&a | &b, BigUint::from_limbs(&[0b1110, 1]));
        assert_eq!(&a | BigUint::zero(), a);
    }

    #[test]
    fn test_bitxor_bignums() {
        let a = BigUint::from_limbs(&[0b1100, 1]);
        let b = BigUint::from_limbs(&[0b1010, 1]);
        let c = &a ^ &b;
        assert_eq!(c, BigUint::from(0b0110u8));
        assert_eq!(c.num_limbs(), 1);
        assert!((&a ^ &a).is_zero());
    }

    #[test]
    fn test_bit_assign_bignums() {
        let mut a = BigUint::from(0b1100u8);
        a |= BigUint::from(0b0011u8);
        assert_eq!(a, BigUint::from(0b1111u8));
        a &= BigUint::from(0b0110u8);
        assert_eq!(a, BigUint::from(0b0110u8));
        a ^= BigUint::from(0b0110u8);
        assert!(a.is_zero());
    }

    #[test]
    fn test_sum_product_bignums() {
        let nums: Vec<BigUint> = (1u8..=5).map(BigUint::from).collect();
        assert_eq!(nums.iter().sum::<BigUint>(), BigUint::from(15u8));
        assert_eq!(nums.iter().product::<BigUint>(), BigUint::from(120u8));
        assert_eq!(nums.into_iter().sum::<BigUint>(), BigUint::from(15u8));
        assert!(Vec::<BigUint>::new().into_iter().product::<BigUint>().is_one());
    }

    #[test]
    fn test_borrowing_sub() {
        assert_eq!(borrowing_sub(5, 3, false), (2, false));
        assert_eq!(borrowing_sub(5, 5, true), (u32::MAX, true));
        assert_eq!(borrowing_sub(0, 0, true), (u32::MAX, true));
        assert_eq!(borrowing_sub(0, u32::MAX, false), (1, true));
    }
}
