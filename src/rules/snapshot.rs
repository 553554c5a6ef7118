//! Immutable score sheet copies.
//!
//! A presentation layer that moves between a play screen and a results
//! screen hands a `ScoreSnapshot` across instead of the engine itself.
//! Snapshots encode to a compact binary form for that hand-off.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{CategoryMap, CategoryScore, ScoreCategory};

/// Snapshot encoding errors.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to encode score snapshot: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode score snapshot: {0}")]
    Decode(#[source] bincode::Error),
}

/// A frozen copy of all ten score slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    slots: CategoryMap<CategoryScore>,
}

impl ScoreSnapshot {
    /// Copy the given slots.
    #[must_use]
    pub fn from_scores(slots: &CategoryMap<CategoryScore>) -> Self {
        Self {
            slots: slots.clone(),
        }
    }

    /// The sheet of a game that has not claimed anything yet.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slots: CategoryMap::new(CategoryScore::new),
        }
    }

    #[must_use]
    pub fn get(&self, category: ScoreCategory) -> &CategoryScore {
        &self.slots[category]
    }

    /// Iterate over slots in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryScore> {
        self.slots.values()
    }

    /// Sum of all ten scores.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.iter().map(CategoryScore::score).sum()
    }

    /// True once every slot is claimed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.iter().all(CategoryScore::is_claimed)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode a snapshot, rejecting any slot stored under another category.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes).map_err(SnapshotError::Decode)?;

        if let Some((key, slot)) = snapshot
            .slots
            .iter()
            .find(|(key, slot)| slot.category() != *key)
        {
            return Err(SnapshotError::Decode(Box::new(bincode::ErrorKind::Custom(
                format!("slot {} holds a {} score", key, slot.category()),
            ))));
        }

        Ok(snapshot)
    }
}

impl Default for ScoreSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
