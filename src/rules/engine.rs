//! Turn and category state machine.
//!
//! A turn is up to `max_rolls` rolls of the dice followed by a claim. The
//! first roll of each turn happens automatically: at construction for the
//! first turn, and as part of a successful claim for every later one.
//! Between rolls any die can be held to keep its value.
//!
//! The game is finished once every category is claimed. A finished game
//! stays finished; `restart` builds a fresh engine.

use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, trace};

use super::snapshot::ScoreSnapshot;
use crate::core::{
    CategoryMap, CategoryScore, ConfigError, Die, DieFace, GameConfig, GameRng, ScoreCategory,
};
use crate::scoring::{CandidateScores, CombinationFinder};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// At least one category is still unclaimed.
    InProgress,
    /// Every category has been claimed.
    Finished,
}

/// Why a claim was rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("category {0} has already been claimed")]
    AlreadyClaimed(ScoreCategory),
}

/// One game of Thirty.
///
/// Owns the dice, the ten score slots and the RNG. Every roll refreshes the
/// candidate scores, so reads never see scores for an older roll.
#[derive(Clone, Debug)]
pub struct ThirtyGame {
    config: GameConfig,
    rng: GameRng,
    finder: CombinationFinder,
    dice: SmallVec<[Die; 6]>,
    scores: CategoryMap<CategoryScore>,
    candidates: CandidateScores,
    selected: ScoreCategory,
    roll_count: u32,
}

impl ThirtyGame {
    /// Start a game with a seeded RNG.
    ///
    /// Fails only if `config` is invalid.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config, GameRng::new(seed)))
    }

    /// Start a game with an RNG seeded from entropy.
    pub fn from_entropy(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config, GameRng::from_entropy()))
    }

    /// A fresh game with the same configuration.
    #[must_use]
    pub fn restart(&self, seed: u64) -> Self {
        Self::start(self.config, GameRng::new(seed))
    }

    fn start(config: GameConfig, mut rng: GameRng) -> Self {
        let dice: SmallVec<[Die; 6]> = (0..config.die_count).map(|_| Die::new(&mut rng)).collect();
        let mut game = Self {
            config,
            rng,
            finder: CombinationFinder::new(),
            dice,
            scores: CategoryMap::new(CategoryScore::new),
            candidates: CandidateScores::default(),
            selected: ScoreCategory::Low,
            roll_count: 1,
        };
        game.refresh_candidates();

        debug!(
            seed = game.rng.seed(),
            die_count = config.die_count,
            max_rolls = config.max_rolls,
            "started game"
        );
        game
    }

    // === Reads ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    #[must_use]
    pub fn dice_values(&self) -> Vec<u8> {
        self.dice.iter().map(Die::value).collect()
    }

    #[must_use]
    pub fn held_flags(&self) -> Vec<bool> {
        self.dice.iter().map(Die::is_held).collect()
    }

    #[must_use]
    pub fn die_faces(&self) -> Vec<DieFace> {
        self.dice.iter().map(Die::face).collect()
    }

    #[must_use]
    pub fn category_scores(&self) -> &CategoryMap<CategoryScore> {
        &self.scores
    }

    /// Unclaimed categories in declaration order.
    #[must_use]
    pub fn available_categories(&self) -> Vec<ScoreCategory> {
        self.scores
            .iter()
            .filter(|(_, slot)| !slot.is_claimed())
            .map(|(category, _)| category)
            .collect()
    }

    /// Score each category would receive for the current dice.
    #[must_use]
    pub fn candidate_scores(&self) -> &CandidateScores {
        &self.candidates
    }

    /// Rolls taken this turn, counting the automatic first roll.
    #[must_use]
    pub fn roll_count(&self) -> u32 {
        self.roll_count
    }

    #[must_use]
    pub fn selected_category(&self) -> ScoreCategory {
        self.selected
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.any_unclaimed() {
            GamePhase::InProgress
        } else {
            GamePhase::Finished
        }
    }

    /// Sum of all claimed scores.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.scores.values().map(CategoryScore::score).sum()
    }

    #[must_use]
    pub fn is_roll_allowed(&self) -> bool {
        self.roll_count < self.config.max_rolls && self.any_unclaimed()
    }

    #[must_use]
    pub fn is_claim_allowed(&self) -> bool {
        self.any_unclaimed()
    }

    /// Dice can be held whenever a claim is still possible.
    #[must_use]
    pub fn is_hold_allowed(&self) -> bool {
        self.is_claim_allowed()
    }

    /// Immutable copy of the score sheet.
    #[must_use]
    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot::from_scores(&self.scores)
    }

    // === Commands ===

    /// Flip a die's held flag.
    ///
    /// Ignored for an out-of-range index or once the game is finished.
    pub fn toggle_hold(&mut self, index: usize) {
        if !self.is_hold_allowed() {
            return;
        }
        if let Some(die) = self.dice.get_mut(index) {
            die.toggle_held();
            trace!(index, held = die.is_held(), "toggled hold");
        }
    }

    /// Roll every unheld die. Ignored when no roll is allowed.
    pub fn roll(&mut self) {
        if !self.is_roll_allowed() {
            return;
        }
        self.roll_count += 1;
        for die in &mut self.dice {
            die.roll(&mut self.rng);
        }
        self.refresh_candidates();

        trace!(
            roll = self.roll_count,
            dice = ?self.dice_values(),
            "rolled"
        );
    }

    /// Choose the category the next claim records.
    ///
    /// Any category may be selected; claiming a claimed one fails.
    pub fn select_category(&mut self, category: ScoreCategory) {
        self.selected = category;
    }

    /// Record the current candidate score in the selected category.
    ///
    /// On success the next turn starts: dice are released and rolled once,
    /// so `roll_count` is 1 afterwards. Returns the recorded score.
    pub fn claim(&mut self) -> Result<u32, ClaimError> {
        let category = self.selected;
        let score = self.candidates.get(category);

        if !self.scores[category].claim(score) {
            debug!(%category, "rejected claim");
            return Err(ClaimError::AlreadyClaimed(category));
        }
        debug!(%category, score, total = self.total_score(), "claimed");

        self.start_turn();
        if self.phase() == GamePhase::Finished {
            debug!(total = self.total_score(), "game finished");
        }
        Ok(score)
    }

    // The opening roll of a turn ignores `is_roll_allowed`, also after the final claim.
    fn start_turn(&mut self) {
        for die in &mut self.dice {
            die.release();
            die.roll(&mut self.rng);
        }
        self.roll_count = 1;
        self.refresh_candidates();
    }

    fn refresh_candidates(&mut self) {
        let values = self.dice_values();
        self.candidates = self.finder.candidate_scores(&values);
    }

    fn any_unclaimed(&self) -> bool {
        self.scores.values().any(|slot| !slot.is_claimed())
    }
}
