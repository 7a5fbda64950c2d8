mod catalogue;
mod die;
mod outcome;
mod pool;
mod print;
mod query;
mod util;
mod value;

pub use catalogue::{
    attack_catalogue, defense_catalogue, AttackColour, Catalogue, DefenseColour, DieKind,
};
pub use die::Die;
pub use outcome::{AttackFace, AttackStat, DefenseFace, DefenseStat};
pub use pool::{Pool, PoolError};
pub use print::{format_percent, format_probability};
pub use query::{select_miss, select_where, AttackQuery, Cmp, DefenseQuery, Selection, Threshold};
pub use util::{BigRatio, Count};
pub use value::Value;

/// Most dice a single pool may hold.
pub const MAX_POOL_DICE: usize = 7;
