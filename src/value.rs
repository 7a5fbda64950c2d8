use std::fmt::Debug;

pub trait Value: Sized + Send + Sync + Debug + Copy + PartialEq + Eq + PartialOrd + Ord {}

impl<T> Value for T where T: Sized + Send + Sync + Debug + Copy + PartialEq + Eq + PartialOrd + Ord {}
