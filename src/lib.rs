//! Arbitrary precision unsigned integers built on 32-bit limbs, with a binary digit
//! text format for reading and writing them.
// #![deny(missing_docs)]

pub mod bignum;
pub mod error;

pub use bignum::BigUint;
pub use error::ParseBigUintError;
