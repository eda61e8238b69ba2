//! Hold slot - one piece set aside, usable once per spawned piece.

use crate::pieces::Piece;
use crate::queue::PieceQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldSlot {
    held: Option<Piece>,
    can_hold: bool,
}

impl HoldSlot {
    pub fn new() -> Self {
        Self {
            held: None,
            can_hold: true,
        }
    }

    pub fn held(&self) -> Option<&Piece> {
        self.held.as_ref()
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    /// Set `active` aside and return the piece that replaces it.
    ///
    /// With an empty slot the replacement comes from `queue`; otherwise the
    /// held piece comes back at the spawn position, keeping its mask. Either
    /// way the slot is locked until [`HoldSlot::rearm`]. Returns `None`, with
    /// slot and queue untouched, while locked.
    pub fn hold(&mut self, active: Piece, queue: &mut PieceQueue) -> Option<Piece> {
        if !self.can_hold {
            return None;
        }

        let next = match self.held.replace(active) {
            Some(previous) => previous.at_spawn(),
            None => queue.dequeue_next(),
        };
        self.can_hold = false;
        Some(next)
    }

    /// Allow one more hold. Only a natural spawn re-arms the slot.
    pub fn rearm(&mut self) {
        self.can_hold = true;
    }
}

impl Default for HoldSlot {
    fn default() -> Self {
        Self::new()
    }
}
