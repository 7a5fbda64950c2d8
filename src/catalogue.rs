use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::die::Die;
use crate::outcome::{AttackFace, AttackStat, DefenseFace, DefenseStat};
use crate::value::Value;

/// A die colour: a catalogue identity tied to its outcome shape, the rule
/// for merging two independent results, and the declared per-stat bounds
/// used for chart axes.
pub trait DieKind: Value {
    type Face: Value;
    type Stat: Copy;

    /// Componentwise sum of two independent results.
    fn merge(a: Self::Face, b: Self::Face) -> Self::Face;

    /// Whether a face is the absorbing miss.
    fn is_miss(_face: Self::Face) -> bool {
        false
    }

    /// Declared smallest stat value a single die of this colour can roll.
    /// For blue this ignores the miss face, so it is a declared table
    /// rather than something derived from the face list.
    fn stat_min(self, stat: Self::Stat) -> u32;

    /// Declared largest stat value a single die of this colour can roll.
    fn stat_max(self, stat: Self::Stat) -> u32;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttackColour {
    Red,
    Yellow,
    Blue,
    Green,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DefenseColour {
    Black,
    Grey,
    Brown,
}

/// Immutable face tables for one family of dice.
#[derive(Debug, Clone)]
pub struct Catalogue<C>
where
    C: DieKind,
{
    entries: BTreeMap<C, Die<C::Face>>,
}

impl<C> Catalogue<C>
where
    C: DieKind,
{
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, Die<C::Face>)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn get(&self, colour: C) -> Option<&Die<C::Face>> {
        self.entries.get(&colour)
    }

    #[must_use]
    pub fn contains(&self, colour: C) -> bool {
        self.entries.contains_key(&colour)
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, &Die<C::Face>)> {
        self.entries.iter().map(|(c, die)| (*c, die))
    }
}

impl DieKind for AttackColour {
    type Face = AttackFace;
    type Stat = AttackStat;

    fn merge(a: AttackFace, b: AttackFace) -> AttackFace {
        a.merge(b)
    }

    fn is_miss(face: AttackFace) -> bool {
        face.is_miss()
    }

    fn stat_min(self, stat: AttackStat) -> u32 {
        match stat {
            AttackStat::Heart => match self {
                Self::Red => 1,
                Self::Yellow => 0,
                Self::Blue => 1,
                Self::Green => 0,
            },
            AttackStat::Range => match self {
                Self::Red => 0,
                Self::Yellow => 0,
                Self::Blue => 2,
                Self::Green => 0,
            },
            AttackStat::Surge => 0,
        }
    }

    fn stat_max(self, stat: AttackStat) -> u32 {
        match stat {
            AttackStat::Heart => match self {
                Self::Red => 3,
                Self::Yellow => 2,
                Self::Blue => 2,
                Self::Green => 1,
            },
            AttackStat::Range => match self {
                Self::Red => 0,
                Self::Yellow => 2,
                Self::Blue => 6,
                Self::Green => 1,
            },
            AttackStat::Surge => 1,
        }
    }
}

impl DieKind for DefenseColour {
    type Face = DefenseFace;
    type Stat = DefenseStat;

    fn merge(a: DefenseFace, b: DefenseFace) -> DefenseFace {
        a.merge(b)
    }

    fn stat_min(self, _stat: DefenseStat) -> u32 {
        0
    }

    fn stat_max(self, _stat: DefenseStat) -> u32 {
        match self {
            Self::Black => 4,
            Self::Grey => 3,
            Self::Brown => 2,
        }
    }
}

static ATTACK: Lazy<Catalogue<AttackColour>> = Lazy::new(|| {
    Catalogue::new([
        (
            AttackColour::Red,
            Die::weighted([
                (AttackFace::hit(1, 0, 0), 1),
                (AttackFace::hit(2, 0, 0), 3),
                (AttackFace::hit(3, 0, 0), 1),
                (AttackFace::hit(3, 0, 1), 1),
            ]),
        ),
        (
            AttackColour::Yellow,
            Die::uniform([
                AttackFace::hit(0, 1, 1),
                AttackFace::hit(1, 1, 0),
                AttackFace::hit(1, 2, 0),
                AttackFace::hit(1, 0, 1),
                AttackFace::hit(2, 0, 0),
                AttackFace::hit(2, 0, 1),
            ]),
        ),
        (
            AttackColour::Blue,
            Die::uniform([
                AttackFace::Miss,
                AttackFace::hit(1, 5, 0),
                AttackFace::hit(1, 6, 1),
                AttackFace::hit(2, 2, 1),
                AttackFace::hit(2, 3, 0),
                AttackFace::hit(2, 4, 0),
            ]),
        ),
        (
            AttackColour::Green,
            Die::uniform([
                AttackFace::hit(0, 0, 1),
                AttackFace::hit(0, 1, 1),
                AttackFace::hit(1, 0, 0),
                AttackFace::hit(1, 1, 0),
                AttackFace::hit(1, 0, 1),
                AttackFace::hit(1, 1, 1),
            ]),
        ),
    ])
});

static DEFENSE: Lazy<Catalogue<DefenseColour>> = Lazy::new(|| {
    Catalogue::new([
        (
            DefenseColour::Black,
            Die::weighted([
                (DefenseFace::new(0), 1),
                (DefenseFace::new(2), 3),
                (DefenseFace::new(3), 1),
                (DefenseFace::new(4), 1),
            ]),
        ),
        (
            DefenseColour::Grey,
            Die::weighted([
                (DefenseFace::new(0), 1),
                (DefenseFace::new(1), 3),
                (DefenseFace::new(2), 1),
                (DefenseFace::new(3), 1),
            ]),
        ),
        (
            DefenseColour::Brown,
            Die::weighted([
                (DefenseFace::new(0), 3),
                (DefenseFace::new(1), 2),
                (DefenseFace::new(2), 1),
            ]),
        ),
    ])
});

pub fn attack_catalogue() -> &'static Catalogue<AttackColour> {
    &ATTACK
}

pub fn defense_catalogue() -> &'static Catalogue<DefenseColour> {
    &DEFENSE
}
