//! # thirty
//!
//! Rules engine for the dice game Thirty.
//!
//! Six dice are rolled up to three times per turn; between rolls any die
//! can be held. Each turn ends by claiming one of ten categories, each
//! claimable once. `Low` scores every die showing 1-3; the others score
//! their target for each disjoint group of dice summing exactly to it.
//!
//! ## Design Principles
//!
//! 1. **Caller-owned state**: A game is an explicitly constructed
//!    `ThirtyGame` value. There is no global session.
//!
//! 2. **Categories as keys**: Per-category data lives in `CategoryMap`,
//!    indexed by `ScoreCategory`, never by raw position.
//!
//! 3. **Permissive commands**: Out-of-range holds and rolls past the limit
//!    are ignored. Only claiming a claimed category is reported, and only
//!    an invalid configuration is fatal.
//!
//! 4. **Deterministic**: A seeded game replays identically.
//!
//! ## Modules
//!
//! - `core`: Dice, categories, score slots, RNG, configuration
//! - `scoring`: Exact-sum grouping search and candidate scores
//! - `rules`: Turn state machine and score sheet snapshots
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ```
//! use thirty::{GameConfig, ScoreCategory, ThirtyGame};
//!
//! let mut game = ThirtyGame::new(GameConfig::default(), 42).unwrap();
//! game.toggle_hold(0);
//! game.roll();
//!
//! game.select_category(ScoreCategory::Sevens);
//! let score = game.claim().unwrap();
//! assert_eq!(game.category_scores()[ScoreCategory::Sevens].score(), score);
//! assert_eq!(game.roll_count(), 1);
//! ```

pub mod core;
pub mod rules;
pub mod scoring;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CategoryMap, CategoryScore, ConfigError, Die, DieFace, GameConfig, GameRng, ScoreCategory,
};

pub use crate::scoring::{CandidateScores, CombinationFinder};

pub use crate::rules::{ClaimError, GamePhase, ScoreSnapshot, SnapshotError, ThirtyGame};
