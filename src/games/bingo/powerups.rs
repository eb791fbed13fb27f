//! Power-up kinds and the per-game charge inventory.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A limited-use action that alters selection state outside normal play.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PowerUp {
    /// Reveal a cell that would complete a line.
    Hint,
    /// Remove the most recently marked cell.
    Undo,
    /// Mark a random unmarked cell.
    #[strum(to_string = "auto_mark", serialize = "auto")]
    AutoMark,
}

/// Number of charges granted for each power-up at the start of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Allotment {
    /// Hint charges.
    #[serde(default = "default_hint")]
    hint: u8,
    /// Undo charges.
    #[serde(default = "default_undo")]
    undo: u8,
    /// Auto-mark charges.
    #[serde(default = "default_auto_mark")]
    auto_mark: u8,
}

fn default_hint() -> u8 {
    3
}

fn default_undo() -> u8 {
    3
}

fn default_auto_mark() -> u8 {
    2
}

impl Allotment {
    /// Charges granted for the given kind.
    pub fn count(&self, kind: PowerUp) -> u8 {
        match kind {
            PowerUp::Hint => self.hint,
            PowerUp::Undo => self.undo,
            PowerUp::AutoMark => self.auto_mark,
        }
    }
}

impl Default for Allotment {
    fn default() -> Self {
        Self {
            hint: default_hint(),
            undo: default_undo(),
            auto_mark: default_auto_mark(),
        }
    }
}

/// Remaining charges per power-up. Counters only ever go down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpInventory {
    allotment: Allotment,
    remaining: BTreeMap<PowerUp, u8>,
}

impl PowerUpInventory {
    /// Creates a full inventory from the allotment.
    #[instrument]
    pub fn new(allotment: Allotment) -> Self {
        let remaining = PowerUp::iter()
            .map(|kind| (kind, allotment.count(kind)))
            .collect();
        Self {
            allotment,
            remaining,
        }
    }

    /// Returns the allotment this inventory started from.
    pub fn allotment(&self) -> &Allotment {
        &self.allotment
    }

    /// Charges left for the given kind.
    pub fn remaining(&self, kind: PowerUp) -> u8 {
        self.remaining.get(&kind).copied().unwrap_or(0)
    }

    /// Checks if at least one charge is left.
    pub fn is_available(&self, kind: PowerUp) -> bool {
        self.remaining(kind) > 0
    }

    /// Spends one charge.
    ///
    /// Returns `false` and leaves the inventory untouched when the
    /// power-up is exhausted.
    #[instrument(skip(self))]
    pub fn consume(&mut self, kind: PowerUp) -> bool {
        match self.remaining.get_mut(&kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                debug!(%kind, remaining = *count, "Power-up charge consumed");
                true
            }
            _ => {
                debug!(%kind, "Power-up exhausted");
                false
            }
        }
    }
}

impl Default for PowerUpInventory {
    fn default() -> Self {
        Self::new(Allotment::default())
    }
}
