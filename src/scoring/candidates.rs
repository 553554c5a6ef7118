//! Per-category candidate scores for the current roll.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::core::{CategoryMap, ScoreCategory};

/// The score each category would receive if claimed now.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidateScores {
    scores: CategoryMap<u32>,
}

impl CandidateScores {
    #[must_use]
    pub fn new(scores: CategoryMap<u32>) -> Self {
        Self { scores }
    }

    #[must_use]
    pub fn get(&self, category: ScoreCategory) -> u32 {
        self.scores[category]
    }

    /// Iterate over (category, score) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoreCategory, u32)> + '_ {
        self.scores.iter().map(|(c, &s)| (c, s))
    }

    /// Highest-scoring category among `available`.
    ///
    /// Ties go to the category listed first. Returns `None` if `available`
    /// is empty.
    #[must_use]
    pub fn best(&self, available: &[ScoreCategory]) -> Option<(ScoreCategory, u32)> {
        available
            .iter()
            .map(|&c| (c, self.get(c)))
            .fold(None, |best, (c, s)| match best {
                Some((_, best_score)) if best_score >= s => best,
                _ => Some((c, s)),
            })
    }

    #[must_use]
    pub fn as_map(&self) -> &CategoryMap<u32> {
        &self.scores
    }
}

impl Index<ScoreCategory> for CandidateScores {
    type Output = u32;

    fn index(&self, category: ScoreCategory) -> &Self::Output {
        &self.scores[category]
    }
}
