use std::cmp::Ordering;

use super::BigUint;

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Normalised numbers order by limb count, then by the width of the top limb, and only
/// then limb by limb from the top down
impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then(self.top_bits.cmp(&other.top_bits))
            .then_with(|| {
                self.limbs
                    .iter()
                    .zip(other.limbs.iter())
                    .rev()
                    .map(|(a, b)| a.cmp(b))
                    .find(|ordering| *ordering != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl PartialEq<u32> for BigUint {
    fn eq(&self, other: &u32) -> bool {
        self.to_u32() == Some(*other)
    }
}

impl PartialOrd<u32> for BigUint {
    fn partial_cmp(&self, other: &u32) -> Option<Ordering> {
        match self.to_u32() {
            Some(value) => value.partial_cmp(other),
            None => Some(Ordering::Greater),
        }
    }
}
