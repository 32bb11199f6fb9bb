#![allow(unused)]

use aint::BigUint;
use num_bigint::BigUint as Oracle;
use proptest::prelude::*;

/// Parse binary digits, panicking on bad input
pub fn bin(s: &str) -> BigUint {
    s.parse().expect("test input should be binary digits")
}

pub fn to_oracle(n: &BigUint) -> Oracle {
    Oracle::from_slice(n.limbs())
}

pub fn from_oracle(n: &Oracle) -> BigUint {
    BigUint::from_limbs(&n.to_u32_digits())
}

/// Check the representation invariants every value has to uphold
pub fn assert_normalized(n: &BigUint) {
    match n.limbs().last() {
        None => assert_eq!(n.top_bits(), 0, "zero with non-zero top_bits"),
        Some(&top) => {
            assert_ne!(top, 0, "{n:?} has a zero top limb");
            assert_eq!(n.top_bits(), 32 - top.leading_zeros(), "{n:?} has stale top_bits");
        }
    }
    assert!(n.capacity() >= n.num_limbs());
}

/// Numbers of up to `max_limbs` limbs, leaning on the values that sit at limb boundaries
pub fn biguint(max_limbs: usize) -> impl Strategy<Value = BigUint> {
    let limb = prop_oneof![
        Just(0u32),
        Just(1u32),
        Just(u32::MAX),
        Just(1u32 << 31),
        any::<u32>(),
    ];
    prop::collection::vec(limb, 0..=max_limbs).prop_map(|limbs| BigUint::from_limbs(&limbs))
}

/// Non-zero numbers of up to `max_limbs` limbs
pub fn nonzero_biguint(max_limbs: usize) -> impl Strategy<Value = BigUint> {
    biguint(max_limbs).prop_filter("divisor must be non-zero", |n| !n.is_zero())
}
