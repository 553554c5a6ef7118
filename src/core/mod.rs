//! Core game types: dice, categories, score slots, RNG, configuration.
//!
//! These are the leaf building blocks the scoring search and the rules
//! engine are assembled from.

pub mod category;
pub mod config;
pub mod die;
pub mod rng;
pub mod score;

pub use category::{CategoryMap, ScoreCategory, UnknownCategory, CATEGORY_COUNT};
pub use config::{ConfigError, GameConfig, DEFAULT_DIE_COUNT, DEFAULT_MAX_ROLLS};
pub use die::{Die, DieFace, InvalidDieValue};
pub use rng::GameRng;
pub use score::CategoryScore;
