//! Game rules: the turn state machine and score sheet snapshots.
//!
//! `ThirtyGame` is the only type that mutates game state. Callers read its
//! state, issue roll/hold/select/claim commands, and take `ScoreSnapshot`
//! copies when they need the results somewhere else.

pub mod engine;
pub mod snapshot;

pub use engine::{ClaimError, GamePhase, ThirtyGame};
pub use snapshot::{ScoreSnapshot, SnapshotError};
