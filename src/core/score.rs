//! Claimable score slots.

use serde::{Deserialize, Serialize};

use super::category::ScoreCategory;

/// The score slot for one category.
///
/// A slot is claimed at most once; after that its score is frozen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    category: ScoreCategory,
    score: u32,
    claimed: bool,
}

impl CategoryScore {
    /// Create an unclaimed slot scoring zero.
    #[must_use]
    pub const fn new(category: ScoreCategory) -> Self {
        Self {
            category,
            score: 0,
            claimed: false,
        }
    }

    #[must_use]
    pub fn category(&self) -> ScoreCategory {
        self.category
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Record `score` and freeze the slot.
    ///
    /// Returns `false` and leaves the slot untouched if it was already claimed.
    pub fn claim(&mut self, score: u32) -> bool {
        if self.claimed {
            return false;
        }
        self.score = score;
        self.claimed = true;
        true
    }
}
