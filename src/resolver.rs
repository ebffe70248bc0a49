//! Applying a guess to the opponent's board.

use crate::board::Board;
use crate::cell::Cell;
use crate::common::{BoardError, Shot};
use crate::ship::ShipKind;

/// What happened when a guess was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub cell: Cell,
    pub shot: Shot,
    /// Ship whose last hitpoint this guess removed.
    pub sunk: Option<ShipKind>,
}

impl Resolution {
    pub fn is_hit(&self) -> bool {
        self.shot == Shot::Hit
    }
}

/// Resolve `attacker`'s guess at `cell` against `defender`.
///
/// A hit marks the attacker's guess grid and takes a hitpoint from the
/// defending ship; reaching zero reports that ship as sunk. A miss only marks
/// the guess grid. Repeated guesses are rejected before anything changes.
pub fn resolve_guess(
    attacker: &mut Board,
    defender: &mut Board,
    cell: Cell,
) -> Result<Resolution, BoardError> {
    if attacker.is_guessed(cell) {
        return Err(BoardError::AlreadyGuessed);
    }
    let resolution = match defender.ship_at(cell) {
        Some(kind) => {
            let remaining = defender.decrement_hp(kind)?;
            attacker.mark_guess(cell, Shot::Hit)?;
            Resolution {
                cell,
                shot: Shot::Hit,
                sunk: (remaining == 0).then_some(kind),
            }
        }
        None => {
            attacker.mark_guess(cell, Shot::Miss)?;
            Resolution {
                cell,
                shot: Shot::Miss,
                sunk: None,
            }
        }
    };
    log::debug!("guess {} -> {:?}, sunk {:?}", cell, resolution.shot, resolution.sunk);
    Ok(resolution)
}
