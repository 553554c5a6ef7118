//! Candidate score computation.
//!
//! `CombinationFinder` turns a roll into the score each category would
//! receive if it were claimed now.

pub mod candidates;
pub mod combinations;

pub use candidates::CandidateScores;
pub use combinations::{find_groups, low_score, CombinationFinder, Group};
