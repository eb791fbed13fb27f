//! Power-up counters stay within the allotment.

use super::super::{GameSession, PowerUp};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: no power-up has more charges than it was granted.
pub struct InventoryBoundedInvariant;

impl Invariant<GameSession> for InventoryBoundedInvariant {
    fn holds(session: &GameSession) -> bool {
        let inventory = session.inventory();
        PowerUp::iter().all(|kind| inventory.remaining(kind) <= inventory.allotment().count(kind))
    }

    fn description() -> &'static str {
        "Power-up counters never exceed the allotment"
    }
}
