use std::collections::BTreeMap;

use num::BigInt;

pub type Count = num::BigUint;
pub type BigRatio = num::BigRational;
pub type DieMap<K> = BTreeMap<K, Count>;
pub type Entry<'a, K> = std::collections::btree_map::Entry<'a, K, Count>;

#[inline]
pub fn die_map<K>() -> DieMap<K> {
    DieMap::new()
}

/// Exact probability from a count over a denominator. Reduced on
/// construction; `denom` must be nonzero.
#[inline]
pub fn ratio(numer: Count, denom: Count) -> BigRatio {
    BigRatio::new(BigInt::from(numer), BigInt::from(denom))
}
