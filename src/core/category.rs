//! Scoring categories and per-category storage.
//!
//! ## ScoreCategory
//!
//! The ten fixed scoring slots of Thirty. `Low` scores every die showing
//! at most its target; every other category scores disjoint groups of
//! dice summing exactly to its target.
//!
//! ## CategoryMap
//!
//! Fixed-size per-category storage indexed by `ScoreCategory` for O(1)
//! access. Iteration always follows declaration order.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Number of scoring categories.
pub const CATEGORY_COUNT: usize = 10;

/// One of the ten scoring categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreCategory {
    Low,
    Fours,
    Fives,
    Sixes,
    Sevens,
    Eights,
    Nines,
    Tens,
    Elevens,
    Twelves,
}

impl ScoreCategory {
    /// All categories in declaration order.
    pub const ALL: [ScoreCategory; CATEGORY_COUNT] = [
        ScoreCategory::Low,
        ScoreCategory::Fours,
        ScoreCategory::Fives,
        ScoreCategory::Sixes,
        ScoreCategory::Sevens,
        ScoreCategory::Eights,
        ScoreCategory::Nines,
        ScoreCategory::Tens,
        ScoreCategory::Elevens,
        ScoreCategory::Twelves,
    ];

    /// The category's target.
    ///
    /// For `Low` this is the highest die value that counts; for the others
    /// it is the exact sum each group of dice must reach.
    #[must_use]
    pub const fn target(self) -> u32 {
        match self {
            ScoreCategory::Low => 3,
            ScoreCategory::Fours => 4,
            ScoreCategory::Fives => 5,
            ScoreCategory::Sixes => 6,
            ScoreCategory::Sevens => 7,
            ScoreCategory::Eights => 8,
            ScoreCategory::Nines => 9,
            ScoreCategory::Tens => 10,
            ScoreCategory::Elevens => 11,
            ScoreCategory::Twelves => 12,
        }
    }

    /// Position in declaration order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ScoreCategory::Low => "Low",
            ScoreCategory::Fours => "Fours",
            ScoreCategory::Fives => "Fives",
            ScoreCategory::Sixes => "Sixes",
            ScoreCategory::Sevens => "Sevens",
            ScoreCategory::Eights => "Eights",
            ScoreCategory::Nines => "Nines",
            ScoreCategory::Tens => "Tens",
            ScoreCategory::Elevens => "Elevens",
            ScoreCategory::Twelves => "Twelves",
        }
    }

    /// Iterate over all categories in declaration order.
    pub fn all() -> impl Iterator<Item = ScoreCategory> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown score category: {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for ScoreCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Per-category data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use thirty::core::{CategoryMap, ScoreCategory};
///
/// let mut claimed: CategoryMap<bool> = CategoryMap::with_value(false);
/// claimed[ScoreCategory::Sixes] = true;
///
/// assert!(claimed[ScoreCategory::Sixes]);
/// assert!(!claimed[ScoreCategory::Low]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryMap<T> {
    data: [T; CATEGORY_COUNT],
}

impl<T> CategoryMap<T> {
    /// Create a new CategoryMap with values from a factory function.
    pub fn new(factory: impl Fn(ScoreCategory) -> T) -> Self {
        Self {
            data: ScoreCategory::ALL.map(factory),
        }
    }

    /// Create a new CategoryMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new CategoryMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, category: ScoreCategory) -> &T {
        &self.data[category.index()]
    }

    pub fn get_mut(&mut self, category: ScoreCategory) -> &mut T {
        &mut self.data[category.index()]
    }

    /// Iterate over (ScoreCategory, &T) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoreCategory, &T)> {
        ScoreCategory::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (ScoreCategory, &mut T) pairs in declaration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ScoreCategory, &mut T)> {
        ScoreCategory::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over the values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Default> Default for CategoryMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<ScoreCategory> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: ScoreCategory) -> &Self::Output {
        self.get(category)
    }
}

impl<T> IndexMut<ScoreCategory> for CategoryMap<T> {
    fn index_mut(&mut self, category: ScoreCategory) -> &mut Self::Output {
        self.get_mut(category)
    }
}
