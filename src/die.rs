use itertools::Itertools;
use num::bigint::RandBigInt;
use num::traits::One;
use rand::RngCore;

use crate::util::{die_map, ratio, BigRatio, Count, DieMap, Entry};
use crate::value::Value;

/// Exact discrete distribution over outcomes of type `K`.
///
/// Probabilities are stored as integer counts over a shared denominator, so
/// every combination step is exact; [`Die::probabilities`] exposes them as
/// reduced rationals. Outcomes are unique and kept in sorted order, and the
/// counts of a well-formed die sum to the denominator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die<K>
where
    K: Value,
{
    outcomes: Vec<(K, Count)>,
    denom: Count,
}

impl<K> Die<K>
where
    K: Value,
{
    /// A die that always produces `value`.
    #[must_use]
    pub fn single(value: K) -> Self {
        Self::new(Count::one(), vec![(value, Count::one())])
    }

    /// A fair die over `values`. Repeated values merge into one outcome
    /// with the corresponding share of the total.
    #[must_use]
    pub fn uniform<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self::weighted(values.into_iter().map(|v| (v, 1)))
    }

    /// A die from `(face, weight)` pairs; the denominator is the weight sum.
    #[must_use]
    pub fn weighted<I>(faces: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
    {
        let mut map = die_map();
        for (face, weight) in faces {
            *map.entry(face).or_default() += Count::from(weight);
        }
        let denom = map.values().sum();
        Self::from_map(denom, map)
    }

    #[must_use]
    pub fn denom(&self) -> &Count {
        &self.denom
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Count)> {
        self.outcomes.iter().map(|(k, c)| (k, c))
    }

    /// Exact probability of one outcome; zero when it is not in the support.
    #[must_use]
    pub fn probability_of(&self, value: &K) -> BigRatio {
        let numer = self
            .outcomes
            .iter()
            .find(|(k, _)| k == value)
            .map(|(_, c)| c.clone())
            .unwrap_or_default();
        ratio(numer, self.denom.clone())
    }

    /// All outcomes with their exact probabilities.
    #[must_use]
    pub fn probabilities(&self) -> Vec<(K, BigRatio)> {
        self.outcomes
            .iter()
            .map(|(k, c)| (*k, ratio(c.clone(), self.denom.clone())))
            .collect()
    }

    /// Total probability mass; exactly one for any well-formed die.
    #[must_use]
    pub fn total(&self) -> BigRatio {
        ratio(self.outcomes.iter().map(|(_, c)| c).sum(), self.denom.clone())
    }

    /// Most probable outcome(s).
    #[must_use]
    pub fn modes(&self) -> Vec<K> {
        self.outcomes
            .iter()
            .max_set_by_key(|(_, c)| c)
            .into_iter()
            .map(|(k, _)| *k)
            .collect()
    }

    #[must_use]
    pub fn map<F, U>(&self, op: F) -> Die<U>
    where
        F: Fn(&K) -> U,
        U: Value,
    {
        let mut outcomes = die_map();
        for (k, c) in &self.outcomes {
            match outcomes.entry(op(k)) {
                Entry::Vacant(e) => {
                    e.insert(c.clone());
                }
                Entry::Occupied(mut e) => {
                    *e.get_mut() += c;
                }
            }
        }
        Die::from_map(self.denom.clone(), outcomes)
    }

    /// Joint distribution of two independent dice, merged through `op`.
    ///
    /// Visits the full cross product once; outcomes that `op` maps to the
    /// same value coalesce by count addition, so the result conserves total
    /// probability exactly.
    #[must_use]
    pub fn combine_with<F, T, U>(&self, other: &Die<T>, op: F) -> Die<U>
    where
        F: Fn(&K, &T) -> U,
        T: Value,
        U: Value,
    {
        let mut outcomes = die_map();
        for (k1, c1) in &self.outcomes {
            for (k2, c2) in &other.outcomes {
                match outcomes.entry(op(k1, k2)) {
                    Entry::Vacant(e) => {
                        e.insert(c1 * c2);
                    }
                    Entry::Occupied(mut e) => {
                        *e.get_mut() += c1 * c2;
                    }
                }
            }
        }
        Die::from_map(&self.denom * &other.denom, outcomes)
    }

    /// Draws one outcome at random, weighted by probability.
    #[must_use]
    pub fn sample<G>(&self, rng: &mut G) -> K
    where
        G: RngCore,
    {
        let x = rng.gen_biguint_below(&self.denom);
        let mut pos = Count::default();
        for (k, c) in &self.outcomes {
            pos += c;
            if x < pos {
                return *k;
            }
        }
        unreachable!("counts sum to the denominator")
    }

    fn from_map(denom: Count, map: DieMap<K>) -> Self {
        Self::new(denom, map.into_iter().collect())
    }

    fn new(denom: Count, outcomes: Vec<(K, Count)>) -> Self {
        Self { outcomes, denom }
    }
}
