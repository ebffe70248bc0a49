//! Random fleet placement.

use rand::Rng;

use crate::board::Board;
use crate::cell::Cell;
use crate::common::{BoardError, PlacementError};
use crate::config::{BOARD_SIZE, SHIPS};
use crate::ship::{Orientation, ShipKind};

/// End cell of a `len`-long run from `start`, or `None` past the edge.
pub fn run_end(start: Cell, len: usize, orientation: Orientation) -> Option<Cell> {
    let (row, col) = match orientation {
        Orientation::Horizontal => (start.row(), start.col() + len - 1),
        Orientation::Vertical => (start.row() + len - 1, start.col()),
    };
    Cell::new(row, col).ok()
}

/// Find a free straight run for `kind`.
///
/// The start cell is drawn from the square where a run of this length fits
/// in either orientation, and must be unoccupied. A random orientation is
/// tried first and the other one second; if both are blocked a new start
/// cell is drawn. The loop only ends on success, which the standard fleet
/// on a 10×10 board always allows.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    kind: ShipKind,
) -> Result<(Cell, Cell), BoardError> {
    if board.is_placed(kind) {
        return Err(PlacementError::AlreadyPlaced.into());
    }
    let span = BOARD_SIZE as usize - kind.length();
    loop {
        let start = match Cell::new(rng.random_range(0..=span), rng.random_range(0..=span)) {
            Ok(cell) if !board.is_occupied(cell) => cell,
            _ => continue,
        };
        let first = if rng.random() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        for orientation in [first, first.flipped()] {
            let Some(end) = run_end(start, kind.length(), orientation) else {
                continue;
            };
            if board.validate_placement(kind, start, end).is_ok() {
                return Ok((start, end));
            }
        }
    }
}

/// Place every ship not yet on `board`, largest first.
pub fn place_fleet<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> Result<(), BoardError> {
    for kind in SHIPS {
        if board.is_placed(kind) {
            continue;
        }
        let (start, end) = random_placement(rng, board, kind)?;
        log::debug!("placing {} at {}-{}", kind, start, end);
        board.place_ship(kind, start, end)?;
    }
    Ok(())
}
