use std::collections::BTreeMap;
use std::iter;

use thiserror::Error;

use crate::catalogue::{Catalogue, DieKind};
use crate::die::Die;
use crate::MAX_POOL_DICE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("pool contains no dice")]
    Empty,
    #[error("die {0} is not in the catalogue")]
    UnknownDie(String),
    #[error("pool of {0} dice exceeds the maximum of {MAX_POOL_DICE}")]
    TooManyDice(usize),
}

/// A multiset of dice selected for one roll. Pure configuration: the counts
/// carry no probability semantics until [`Pool::roll`] folds them against a
/// catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool<C>
where
    C: DieKind,
{
    counts: BTreeMap<C, usize>,
}

impl<C> Pool<C>
where
    C: DieKind,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Builds a pool from per-colour counts, enforcing the size cap.
    pub fn configure<I>(counts: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = (C, usize)>,
    {
        let mut pool = Self::new();
        for (colour, n) in counts {
            if n != 0 {
                *pool.counts.entry(colour).or_default() += n;
            }
        }
        let total = pool.total_dice();
        if total > MAX_POOL_DICE {
            return Err(PoolError::TooManyDice(total));
        }
        Ok(pool)
    }

    /// Adds one die, refusing to grow past the cap.
    pub fn add(&mut self, colour: C) -> Result<(), PoolError> {
        if self.total_dice() == MAX_POOL_DICE {
            return Err(PoolError::TooManyDice(MAX_POOL_DICE + 1));
        }
        *self.counts.entry(colour).or_default() += 1;
        Ok(())
    }

    /// Removes one die of `colour`; no-op when none is present.
    pub fn remove(&mut self, colour: C) {
        if let Some(n) = self.counts.get_mut(&colour) {
            *n -= 1;
            if *n == 0 {
                self.counts.remove(&colour);
            }
        }
    }

    #[must_use]
    pub fn count(&self, colour: C) -> usize {
        self.counts.get(&colour).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_dice(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, usize)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }

    /// Folds the pool's face distributions into the joint distribution of
    /// the whole roll. Die order cannot affect the result, so counts are
    /// simply expanded and folded left to right.
    pub fn roll(&self, catalogue: &Catalogue<C>) -> Result<Die<C::Face>, PoolError> {
        let mut dice = Vec::with_capacity(self.total_dice());
        for (&colour, &n) in &self.counts {
            let faces = catalogue
                .get(colour)
                .ok_or_else(|| PoolError::UnknownDie(format!("{colour:?}")))?;
            dice.extend(iter::repeat(faces).take(n));
        }
        let (first, rest) = dice.split_first().ok_or(PoolError::Empty)?;
        Ok(rest.iter().fold((*first).clone(), |acc, &die| {
            acc.combine_with(die, |&a, &b| C::merge(a, b))
        }))
    }

    /// Largest achievable stat total: declared per-die maxima times counts.
    /// Bounds the threshold sweep on a chart axis.
    #[must_use]
    pub fn stat_max(&self, stat: C::Stat) -> u32 {
        self.counts
            .iter()
            .map(|(&colour, &n)| colour.stat_max(stat) * n as u32)
            .sum()
    }

    /// Smallest achievable stat total, from the declared per-die minima.
    #[must_use]
    pub fn stat_min(&self, stat: C::Stat) -> u32 {
        self.counts
            .iter()
            .map(|(&colour, &n)| colour.stat_min(stat) * n as u32)
            .sum()
    }

    /// Whether the rolled distribution can contain the miss outcome, i.e.
    /// any selected die has a miss face. Charts reserve an extra slot when
    /// this holds.
    #[must_use]
    pub fn can_miss(&self, catalogue: &Catalogue<C>) -> bool {
        self.counts.keys().any(|&colour| {
            catalogue
                .get(colour)
                .is_some_and(|faces| faces.iter().any(|(&f, _)| C::is_miss(f)))
        })
    }
}

impl<C> Default for Pool<C>
where
    C: DieKind,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use num::traits::One;

    use super::*;
    use crate::catalogue::{attack_catalogue, defense_catalogue, AttackColour, DefenseColour};
    use crate::outcome::{AttackFace, AttackStat, DefenseStat};
    use crate::util::{ratio, BigRatio, Count};

    fn frac(n: u32, d: u32) -> BigRatio {
        ratio(Count::from(n), Count::from(d))
    }

    #[test]
    fn single_red_roll_is_the_red_die() {
        let pool = Pool::configure([(AttackColour::Red, 1)]).unwrap();
        let roll = pool.roll(attack_catalogue()).unwrap();
        assert_eq!(roll.len(), 4);
        assert_eq!(roll.probability_of(&AttackFace::hit(1, 0, 0)), frac(1, 6));
        assert_eq!(roll.probability_of(&AttackFace::hit(2, 0, 0)), frac(1, 2));
        assert_eq!(roll.probability_of(&AttackFace::hit(3, 0, 0)), frac(1, 6));
        assert_eq!(roll.probability_of(&AttackFace::hit(3, 0, 1)), frac(1, 6));
    }

    #[test]
    fn empty_pool_cannot_roll() {
        let pool = Pool::<AttackColour>::new();
        assert_eq!(pool.roll(attack_catalogue()), Err(PoolError::Empty));
    }

    #[test]
    fn missing_catalogue_entry_is_reported() {
        let empty = Catalogue::<AttackColour>::new([]);
        let pool = Pool::configure([(AttackColour::Red, 1)]).unwrap();
        assert_eq!(
            pool.roll(&empty),
            Err(PoolError::UnknownDie("Red".to_owned()))
        );
    }

    #[test]
    fn configure_rejects_oversized_pools() {
        let result = Pool::configure([(AttackColour::Red, 5), (AttackColour::Blue, 3)]);
        assert_eq!(result, Err(PoolError::TooManyDice(8)));
    }

    #[test]
    fn add_stops_at_the_cap() {
        let mut pool = Pool::new();
        for _ in 0..MAX_POOL_DICE {
            pool.add(AttackColour::Green).unwrap();
        }
        assert!(pool.add(AttackColour::Red).is_err());
        assert_eq!(pool.total_dice(), MAX_POOL_DICE);
    }

    #[test]
    fn remove_is_a_no_op_when_absent() {
        let mut pool = Pool::configure([(AttackColour::Red, 1)]).unwrap();
        pool.remove(AttackColour::Blue);
        pool.remove(AttackColour::Red);
        pool.remove(AttackColour::Red);
        assert!(pool.is_empty());
    }

    #[test]
    fn roll_is_independent_of_die_order() {
        let catalogue = attack_catalogue();
        let dice = [AttackColour::Red, AttackColour::Blue, AttackColour::Yellow];
        let expected = Pool::configure(dice.map(|c| (c, 1)))
            .unwrap()
            .roll(catalogue)
            .unwrap();

        for perm in dice.iter().permutations(dice.len()) {
            let folded = perm
                .iter()
                .map(|&&c| catalogue.get(c).unwrap())
                .cloned()
                .reduce(|a, b| a.combine_with(&b, |&x, &y| x.merge(y)))
                .unwrap();
            assert_eq!(folded, expected);
        }

        // Right association agrees with the left fold.
        let red = catalogue.get(AttackColour::Red).unwrap();
        let blue = catalogue.get(AttackColour::Blue).unwrap();
        let yellow = catalogue.get(AttackColour::Yellow).unwrap();
        let right = red.combine_with(
            &blue.combine_with(yellow, |&x, &y| x.merge(y)),
            |&x, &y| x.merge(y),
        );
        assert_eq!(right, expected);
    }

    #[test]
    fn roll_conserves_probability() {
        let pool = Pool::configure([
            (AttackColour::Red, 2),
            (AttackColour::Blue, 2),
            (AttackColour::Green, 1),
        ])
        .unwrap();
        let roll = pool.roll(attack_catalogue()).unwrap();
        assert_eq!(roll.total(), BigRatio::one());
    }

    #[test]
    fn miss_mass_absorbs_across_dice() {
        // One blue with anything miss-free keeps exactly the blue miss mass.
        let pool = Pool::configure([(AttackColour::Blue, 1), (AttackColour::Red, 1)]).unwrap();
        let roll = pool.roll(attack_catalogue()).unwrap();
        assert_eq!(roll.probability_of(&AttackFace::Miss), frac(1, 6));

        // Two blues: 1/6 + 1/6 - 1/36.
        let pool = Pool::configure([(AttackColour::Blue, 2)]).unwrap();
        let roll = pool.roll(attack_catalogue()).unwrap();
        assert_eq!(roll.probability_of(&AttackFace::Miss), frac(11, 36));
    }

    #[test]
    fn stat_bounds_scale_with_counts() {
        let pool = Pool::configure([(AttackColour::Red, 2), (AttackColour::Blue, 1)]).unwrap();
        assert_eq!(pool.stat_max(AttackStat::Heart), 8);
        assert_eq!(pool.stat_max(AttackStat::Range), 6);
        assert_eq!(pool.stat_min(AttackStat::Heart), 3);

        let defense =
            Pool::configure([(DefenseColour::Black, 1), (DefenseColour::Grey, 1)]).unwrap();
        assert_eq!(defense.stat_max(DefenseStat::Shield), 7);
        assert_eq!(defense.stat_min(DefenseStat::Shield), 0);
    }

    #[test]
    fn can_miss_tracks_blue_dice() {
        let catalogue = attack_catalogue();
        let pool = Pool::configure([(AttackColour::Red, 2)]).unwrap();
        assert!(!pool.can_miss(catalogue));

        let pool = Pool::configure([(AttackColour::Red, 1), (AttackColour::Blue, 1)]).unwrap();
        assert!(pool.can_miss(catalogue));

        assert!(!Pool::configure([(DefenseColour::Black, 2)])
            .unwrap()
            .can_miss(defense_catalogue()));
    }
}
