//! Exact-sum grouping search over die values.
//!
//! ## Rules
//!
//! - `Low` scores the sum of every die showing at most 3.
//! - Every other category with target `T` scores `T` for each disjoint
//!   group of dice summing exactly to `T`.
//!
//! ## Search
//!
//! Values are sorted descending, then groups are taken one at a time until
//! none is found or every die is used. The group taken is the exact-sum
//! subset whose highest position is smallest. Among subsets sharing that
//! highest position, the one leaving out earlier positions first wins:
//! position 0 is dropped whenever the rest can still reach the target,
//! then position 1, and so on.
//!
//! This is the group a walk over every position subset would find, running
//! one greedy pass (close on an exact value, take a smaller one, skip a
//! larger one) over each subset in that order. Subset-sum reachability
//! tables reach it in `O(n * T)` per group instead of `O(2^n)`.
//!
//! The grouping is greedy and deterministic but not a guaranteed-optimal
//! partition: an earlier group can consume dice that a different choice
//! would have left for two later groups. That is the game's scoring rule
//! as played; do not replace it with an optimal solver.

use smallvec::SmallVec;

use super::candidates::CandidateScores;
use crate::core::{CategoryMap, ScoreCategory};

/// Dice values of one exact-sum group.
pub type Group = SmallVec<[u8; 6]>;

/// Positions of one group in the sorted values, ascending.
type Positions = SmallVec<[usize; 6]>;

/// Mark every sum reached by adding `value` to an already reachable sum.
fn add_value(reachable: &mut [bool], value: usize) {
    for sum in (value..reachable.len()).rev() {
        if reachable[sum - value] {
            reachable[sum] = true;
        }
    }
}

/// The first subset of `values` summing to `need`, dropping earlier
/// positions first. The caller guarantees such a subset exists.
fn earliest_subset(values: &[u8], need: usize) -> Positions {
    // suffix[i][s]: some subset of values[i..] sums to s.
    let mut suffix = vec![vec![false; need + 1]; values.len() + 1];
    suffix[values.len()][0] = true;
    for i in (0..values.len()).rev() {
        let (head, tail) = suffix.split_at_mut(i + 1);
        head[i].copy_from_slice(&tail[0]);
        add_value(&mut head[i], usize::from(values[i]));
    }

    let mut picked = Positions::new();
    let mut remaining = need;
    for (i, &value) in values.iter().enumerate() {
        if remaining == 0 {
            break;
        }
        if !suffix[i + 1][remaining] {
            picked.push(i);
            remaining -= usize::from(value);
        }
    }
    picked
}

/// Find the next group in `values` (sorted descending).
fn find_group(values: &[u8], target: u32) -> Option<Positions> {
    let total: u32 = values.iter().map(|&v| u32::from(v)).sum();
    if target > total {
        return None;
    }

    let target = target as usize;
    // reachable[s]: some subset of the positions before `max` sums to s.
    let mut reachable = vec![false; target + 1];
    reachable[0] = true;

    for (max, &value) in values.iter().enumerate() {
        let value = usize::from(value);
        if value <= target && reachable[target - value] {
            let mut group = earliest_subset(&values[..max], target - value);
            group.push(max);
            return Some(group);
        }
        add_value(&mut reachable, value);
    }

    None
}

/// Sum of every value at most the `Low` target.
#[must_use]
pub fn low_score(values: &[u8]) -> u32 {
    let limit = ScoreCategory::Low.target();
    values
        .iter()
        .map(|&v| u32::from(v))
        .filter(|&v| v <= limit)
        .sum()
}

/// Find disjoint exact-sum groups in `values`.
#[must_use]
pub fn find_groups(values: &[u8], target: u32) -> Vec<Group> {
    CombinationFinder::new().groups(values, target)
}

/// Computes the best achievable score of every category for a roll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CombinationFinder;

impl CombinationFinder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Candidate score of every category for `values`.
    ///
    /// Pure: the same values always produce the same scores.
    #[must_use]
    pub fn candidate_scores(&self, values: &[u8]) -> CandidateScores {
        CandidateScores::new(CategoryMap::new(|category| {
            self.score_for(values, category)
        }))
    }

    /// Candidate score of one category for `values`.
    #[must_use]
    pub fn score_for(&self, values: &[u8], category: ScoreCategory) -> u32 {
        match category {
            ScoreCategory::Low => low_score(values),
            _ => {
                let target = category.target();
                target * self.groups(values, target).len() as u32
            }
        }
    }

    /// Disjoint groups of `values` each summing exactly to `target`,
    /// in the order they were found.
    #[must_use]
    pub fn groups(&self, values: &[u8], target: u32) -> Vec<Group> {
        let mut remaining: Vec<u8> = values.to_vec();
        remaining.sort_unstable_by(|a, b| b.cmp(a));

        let mut groups = Vec::new();

        while let Some(positions) = find_group(&remaining, target) {
            let group: Group = positions.iter().map(|&i| remaining[i]).collect();
            for &i in positions.iter().rev() {
                remaining.remove(i);
            }
            groups.push(group);
        }

        groups
    }
}
