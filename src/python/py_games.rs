//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::rules::{GamePhase, ScoreSnapshot, ThirtyGame};

use super::py_core::PyScoreCategory;

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e))
}

/// Python wrapper for ThirtyGame.
#[pyclass(name = "ThirtyGame")]
pub struct PyThirtyGame {
    game: ThirtyGame,
}

#[pymethods]
impl PyThirtyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - die_count: Number of dice (at least 1)
    /// - max_rolls: Rolls per turn, counting the first (at least 1)
    /// - seed: RNG seed for deterministic games; entropy if omitted
    #[new]
    #[pyo3(signature = (die_count = 6, max_rolls = 3, seed = None))]
    fn new(die_count: usize, max_rolls: u32, seed: Option<u64>) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_die_count(die_count)
            .with_max_rolls(max_rolls);
        let game = match seed {
            Some(seed) => ThirtyGame::new(config, seed),
            None => ThirtyGame::from_entropy(config),
        }
        .map_err(value_error)?;
        Ok(Self { game })
    }

    #[getter]
    fn dice_values(&self) -> Vec<u8> {
        self.game.dice_values()
    }

    #[getter]
    fn held_flags(&self) -> Vec<bool> {
        self.game.held_flags()
    }

    /// Asset names of the dice, e.g. "white4" or "red2".
    #[getter]
    fn die_faces(&self) -> Vec<String> {
        self.game
            .die_faces()
            .into_iter()
            .map(|face| face.asset_name())
            .collect()
    }

    /// Claimed score of every category, in declaration order.
    #[getter]
    fn scores(&self) -> Vec<(PyScoreCategory, u32, bool)> {
        self.game
            .category_scores()
            .iter()
            .map(|(c, slot)| (PyScoreCategory(c), slot.score(), slot.is_claimed()))
            .collect()
    }

    #[getter]
    fn available_categories(&self) -> Vec<PyScoreCategory> {
        self.game
            .available_categories()
            .into_iter()
            .map(PyScoreCategory)
            .collect()
    }

    #[getter]
    fn candidate_scores(&self) -> Vec<(PyScoreCategory, u32)> {
        self.game
            .candidate_scores()
            .iter()
            .map(|(c, s)| (PyScoreCategory(c), s))
            .collect()
    }

    #[getter]
    fn selected_category(&self) -> PyScoreCategory {
        PyScoreCategory(self.game.selected_category())
    }

    #[getter]
    fn roll_count(&self) -> u32 {
        self.game.roll_count()
    }

    #[getter]
    fn total_score(&self) -> u32 {
        self.game.total_score()
    }

    fn is_roll_allowed(&self) -> bool {
        self.game.is_roll_allowed()
    }

    fn is_claim_allowed(&self) -> bool {
        self.game.is_claim_allowed()
    }

    fn is_finished(&self) -> bool {
        self.game.phase() == GamePhase::Finished
    }

    fn toggle_hold(&mut self, index: usize) {
        self.game.toggle_hold(index);
    }

    fn roll(&mut self) {
        self.game.roll();
    }

    fn select_category(&mut self, category: &PyScoreCategory) {
        self.game.select_category(category.0);
    }

    /// Claim the selected category. Returns False if it was already claimed.
    fn claim(&mut self) -> bool {
        self.game.claim().is_ok()
    }

    /// Copy of the score sheet for a results screen.
    fn snapshot(&self) -> PyScoreSnapshot {
        PyScoreSnapshot(self.game.snapshot())
    }

    /// Start over with the same configuration.
    #[pyo3(signature = (seed = 42))]
    fn restart(&mut self, seed: u64) {
        self.game = self.game.restart(seed);
    }

    fn __repr__(&self) -> String {
        let status = match self.game.phase() {
            GamePhase::InProgress => "in progress",
            GamePhase::Finished => "finished",
        };
        format!(
            "ThirtyGame(dice={:?}, roll={}, total={}, status={})",
            self.game.dice_values(),
            self.game.roll_count(),
            self.game.total_score(),
            status
        )
    }
}

/// Python wrapper for ScoreSnapshot.
#[pyclass(name = "ScoreSnapshot")]
#[derive(Clone)]
pub struct PyScoreSnapshot(pub ScoreSnapshot);

#[pymethods]
impl PyScoreSnapshot {
    /// An all-zero sheet.
    #[new]
    fn new() -> Self {
        Self(ScoreSnapshot::empty())
    }

    /// Scores in declaration order.
    #[getter]
    fn scores(&self) -> Vec<u32> {
        self.0.iter().map(|slot| slot.score()).collect()
    }

    #[getter]
    fn total(&self) -> u32 {
        self.0.total()
    }

    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        self.0.to_bytes().map_err(value_error)
    }

    #[staticmethod]
    fn from_bytes(bytes: Vec<u8>) -> PyResult<Self> {
        ScoreSnapshot::from_bytes(&bytes).map(Self).map_err(value_error)
    }

    fn __repr__(&self) -> String {
        format!("ScoreSnapshot(total={})", self.0.total())
    }
}
