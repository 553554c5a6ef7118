//! A single six-sided die and its display lookup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rng::{GameRng, DIE_FACES};

/// A die value outside `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("die value {0} is not in 1..=6")]
pub struct InvalidDieValue(pub u8);

/// Wire shape shared by `Die` and `DieFace`; checked before either is built.
#[derive(Deserialize)]
struct RawDie {
    value: u8,
    held: bool,
}

/// A six-sided die that can be held to keep it out of the next roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDie")]
pub struct Die {
    value: u8,
    held: bool,
}

impl Die {
    /// Create an unheld die with a freshly rolled value.
    pub fn new(rng: &mut GameRng) -> Self {
        Self {
            value: rng.roll_die(),
            held: false,
        }
    }

    /// Create an unheld die showing `value`.
    ///
    /// Returns `None` if `value` is not a face of a six-sided die.
    #[must_use]
    pub fn with_value(value: u8) -> Option<Self> {
        (1..=DIE_FACES).contains(&value).then_some(Self { value, held: false })
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Re-roll the die. Held dice keep their value.
    pub fn roll(&mut self, rng: &mut GameRng) {
        if !self.held {
            self.value = rng.roll_die();
        }
    }

    pub fn toggle_held(&mut self) {
        self.held = !self.held;
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    #[must_use]
    pub fn face(&self) -> DieFace {
        DieFace {
            value: self.value,
            held: self.held,
        }
    }
}

impl TryFrom<RawDie> for Die {
    type Error = InvalidDieValue;

    fn try_from(raw: RawDie) -> Result<Self, Self::Error> {
        let mut die = Self::with_value(raw.value).ok_or(InvalidDieValue(raw.value))?;
        die.held = raw.held;
        Ok(die)
    }
}

/// Opaque display identifier for a die: one of 12 (value, held) faces.
///
/// The engine assigns no meaning to faces; a presentation layer maps
/// them onto whatever assets it draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDie")]
pub struct DieFace {
    value: u8,
    held: bool,
}

impl DieFace {
    /// Total number of distinct faces.
    pub const COUNT: usize = DIE_FACES as usize * 2;

    /// Look up the face for a die state.
    #[must_use]
    pub fn of(value: u8, held: bool) -> Option<Self> {
        (1..=DIE_FACES).contains(&value).then_some(Self { value, held })
    }

    /// Dense identifier in `0..12`: unheld faces first, then held.
    #[must_use]
    pub fn id(self) -> usize {
        usize::from(self.held) * DIE_FACES as usize + (self.value - 1) as usize
    }

    /// Asset name: `white1`..`white6` for unheld dice, `red1`..`red6` for held.
    #[must_use]
    pub fn asset_name(self) -> String {
        let colour = if self.held { "red" } else { "white" };
        format!("{}{}", colour, self.value)
    }
}

impl TryFrom<RawDie> for DieFace {
    type Error = InvalidDieValue;

    fn try_from(raw: RawDie) -> Result<Self, Self::Error> {
        Self::of(raw.value, raw.held).ok_or(InvalidDieValue(raw.value))
    }
}
