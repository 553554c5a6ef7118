//! Python bindings for the Thirty rules engine.
//!
//! A Python presentation layer drives the engine through these wrappers.
//!
//! # Quick Start
//!
//! ```python
//! import thirty
//!
//! game = thirty.ThirtyGame(seed=42)
//! game.toggle_hold(0)
//! game.roll()
//!
//! game.select_category(thirty.ScoreCategory("sevens"))
//! if not game.claim():
//!     print("already claimed")
//!
//! results = game.snapshot()
//! print(results.total)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// thirty: rules engine for the dice game Thirty.
#[pymodule]
fn thirty(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyScoreCategory>()?;
    m.add_class::<PyThirtyGame>()?;
    m.add_class::<PyScoreSnapshot>()?;

    Ok(())
}
