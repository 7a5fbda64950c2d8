use bon::Builder;

use crate::die::Die;
use crate::outcome::{AttackFace, DefenseFace};
use crate::util::{ratio, BigRatio, Count};
use crate::value::Value;

/// Comparison mode for one stat threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cmp {
    Exact,
    AtLeast,
    AtMost,
}

/// One stat comparison. The default, `at_least(0)`, matches every hit, so
/// leaving a stat unspecified in a query places no constraint on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Threshold {
    cmp: Cmp,
    value: u32,
}

impl Threshold {
    #[must_use]
    pub fn exact(value: u32) -> Self {
        Self {
            cmp: Cmp::Exact,
            value,
        }
    }

    #[must_use]
    pub fn at_least(value: u32) -> Self {
        Self {
            cmp: Cmp::AtLeast,
            value,
        }
    }

    #[must_use]
    pub fn at_most(value: u32) -> Self {
        Self {
            cmp: Cmp::AtMost,
            value,
        }
    }

    #[must_use]
    pub fn matches(self, actual: u32) -> bool {
        match self.cmp {
            Cmp::Exact => actual == self.value,
            Cmp::AtLeast => actual >= self.value,
            Cmp::AtMost => actual <= self.value,
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::at_least(0)
    }
}

/// Outcomes matched by a query, with their exact combined probability.
/// The probability is a sub-total of the distribution and so may be
/// anything in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<K>
where
    K: Value,
{
    pub outcomes: Vec<K>,
    pub probability: BigRatio,
}

/// Sums the probability mass of every outcome satisfying `predicate`.
#[must_use]
pub fn select_where<K, P>(die: &Die<K>, predicate: P) -> Selection<K>
where
    K: Value,
    P: Fn(&K) -> bool,
{
    let mut outcomes = Vec::new();
    let mut numer = Count::default();
    for (k, c) in die.iter() {
        if predicate(k) {
            outcomes.push(*k);
            numer += c;
        }
    }
    Selection {
        outcomes,
        probability: ratio(numer, die.denom().clone()),
    }
}

/// Selects only the absorbing miss outcome of an attack roll. Misses are
/// queried on their own and never through stat thresholds.
#[must_use]
pub fn select_miss(die: &Die<AttackFace>) -> Selection<AttackFace> {
    select_where(die, |&face| face.is_miss())
}

/// Threshold query over an attack roll: every specified stat comparison
/// must hold. Misses never match, whatever the thresholds.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(start_fn(name = "new"), finish_fn(vis = ""))]
pub struct AttackQuery {
    #[builder(default)]
    heart: Threshold,
    #[builder(default)]
    range: Threshold,
    #[builder(default)]
    surge: Threshold,
}

impl AttackQuery {
    #[must_use]
    pub fn matches(&self, face: AttackFace) -> bool {
        match face {
            AttackFace::Miss => false,
            AttackFace::Hit {
                heart,
                range,
                surge,
            } => {
                self.heart.matches(heart) && self.range.matches(range) && self.surge.matches(surge)
            }
        }
    }

    #[must_use]
    pub fn select(&self, die: &Die<AttackFace>) -> Selection<AttackFace> {
        select_where(die, |&face| self.matches(face))
    }
}

impl<S> AttackQueryBuilder<S>
where
    S: attack_query_builder::State,
    S: attack_query_builder::IsComplete,
{
    pub fn select(self, die: &Die<AttackFace>) -> Selection<AttackFace> {
        self.build().select(die)
    }
}

/// Threshold query over a defense roll.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(start_fn(name = "new"), finish_fn(vis = ""))]
pub struct DefenseQuery {
    #[builder(default)]
    shield: Threshold,
}

impl DefenseQuery {
    #[must_use]
    pub fn matches(&self, face: DefenseFace) -> bool {
        self.shield.matches(face.shield)
    }

    #[must_use]
    pub fn select(&self, die: &Die<DefenseFace>) -> Selection<DefenseFace> {
        select_where(die, |&face| self.matches(face))
    }
}

impl<S> DefenseQueryBuilder<S>
where
    S: defense_query_builder::State,
    S: defense_query_builder::IsComplete,
{
    pub fn select(self, die: &Die<DefenseFace>) -> Selection<DefenseFace> {
        self.build().select(die)
    }
}
