/// One face of an attack die, or the combined result of a whole attack
/// roll: a hit with measured stats, or the absorbing miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttackFace {
    Miss,
    Hit { heart: u32, range: u32, surge: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttackStat {
    Heart,
    Range,
    Surge,
}

/// One face of a defense die, or a combined defense roll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DefenseFace {
    pub shield: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DefenseStat {
    Shield,
}

impl AttackFace {
    #[must_use]
    pub fn hit(heart: u32, range: u32, surge: u32) -> Self {
        Self::Hit {
            heart,
            range,
            surge,
        }
    }

    #[must_use]
    pub fn is_miss(self) -> bool {
        matches!(self, Self::Miss)
    }

    /// Stat value of a hit; `None` for a miss.
    #[must_use]
    pub fn stat(self, stat: AttackStat) -> Option<u32> {
        match self {
            Self::Miss => None,
            Self::Hit {
                heart,
                range,
                surge,
            } => Some(match stat {
                AttackStat::Heart => heart,
                AttackStat::Range => range,
                AttackStat::Surge => surge,
            }),
        }
    }

    /// Componentwise sum of two independent results; a miss on either side
    /// absorbs the pair.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Miss, _) | (_, Self::Miss) => Self::Miss,
            (
                Self::Hit {
                    heart: h1,
                    range: r1,
                    surge: s1,
                },
                Self::Hit {
                    heart: h2,
                    range: r2,
                    surge: s2,
                },
            ) => Self::Hit {
                heart: h1 + h2,
                range: r1 + r2,
                surge: s1 + s2,
            },
        }
    }
}

impl DefenseFace {
    #[must_use]
    pub fn new(shield: u32) -> Self {
        Self { shield }
    }

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            shield: self.shield + other.shield,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sums_hit_stats() {
        let a = AttackFace::hit(2, 3, 0);
        let b = AttackFace::hit(1, 0, 1);
        assert_eq!(a.merge(b), AttackFace::hit(3, 3, 1));
    }

    #[test]
    fn miss_absorbs_any_hit() {
        let hit = AttackFace::hit(3, 0, 1);
        assert_eq!(hit.merge(AttackFace::Miss), AttackFace::Miss);
        assert_eq!(AttackFace::Miss.merge(hit), AttackFace::Miss);
        assert_eq!(AttackFace::Miss.merge(AttackFace::Miss), AttackFace::Miss);
    }

    #[test]
    fn stat_is_none_for_miss() {
        assert_eq!(AttackFace::Miss.stat(AttackStat::Heart), None);
        assert_eq!(AttackFace::hit(1, 2, 3).stat(AttackStat::Range), Some(2));
    }

    #[test]
    fn defense_merge_adds_shields() {
        assert_eq!(
            DefenseFace::new(2).merge(DefenseFace::new(3)),
            DefenseFace::new(5)
        );
    }
}
