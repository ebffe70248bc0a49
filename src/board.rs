//! Per-player board: where my ships are, and where I have guessed.

use core::fmt;

use crate::bitboard::Grid;
use crate::cell::Cell;
use crate::common::{BoardError, PlacementError, Shot};
use crate::config::{NUM_CELLS, NUM_SHIPS, SHIPS};
use crate::ship::ShipKind;

/// What a rendered cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    Empty,
    Ship(ShipKind),
    Shot(Shot),
}

impl CellMark {
    pub fn symbol(self) -> char {
        match self {
            CellMark::Empty => ' ',
            CellMark::Ship(kind) => kind.marker(),
            CellMark::Shot(shot) => shot.marker(),
        }
    }
}

/// One player's board.
///
/// The ship-layout grid and the guess grid are kept apart: the layout holds
/// this player's own ships, the guess grid holds this player's shots at the
/// opponent. Hitpoints belong to the ships in the layout.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    layout: [Option<ShipKind>; NUM_CELLS],
    occupied: Grid,
    hits: Grid,
    misses: Grid,
    hp: [u8; NUM_SHIPS],
    placed: [bool; NUM_SHIPS],
}

impl Board {
    /// Create an empty board with every ship at full hitpoints.
    pub fn new() -> Self {
        Board {
            layout: [None; NUM_CELLS],
            occupied: Grid::new(),
            hits: Grid::new(),
            misses: Grid::new(),
            hp: SHIPS.map(|kind| kind.length() as u8),
            placed: [false; NUM_SHIPS],
        }
    }

    /// Check that `kind` fits on the straight run from `start` to `end`
    /// (inclusive, either order) and return the run's cells.
    pub fn validate_placement(
        &self,
        kind: ShipKind,
        start: Cell,
        end: Cell,
    ) -> Result<Run, PlacementError> {
        if self.placed[kind.index()] {
            return Err(PlacementError::AlreadyPlaced);
        }
        let run = Run::between(start, end).ok_or(PlacementError::Diagonal)?;
        if run.len() != kind.length() {
            return Err(PlacementError::WrongLength {
                expected: kind.length(),
                found: run.len(),
            });
        }
        if run.cells().any(|c| self.occupied.contains(c)) {
            return Err(PlacementError::Overlaps);
        }
        Ok(run)
    }

    /// Write `kind` onto every cell between `start` and `end` inclusive.
    /// Invalid placements are rejected before the board changes.
    pub fn place_ship(&mut self, kind: ShipKind, start: Cell, end: Cell) -> Result<(), BoardError> {
        let run = self.validate_placement(kind, start, end)?;
        for cell in run.cells() {
            self.layout[cell.index()] = Some(kind);
            self.occupied.insert(cell);
        }
        self.placed[kind.index()] = true;
        Ok(())
    }

    /// Whether `kind` has been placed.
    pub fn is_placed(&self, kind: ShipKind) -> bool {
        self.placed[kind.index()]
    }

    /// `true` once the whole fleet is on the board.
    pub fn fleet_placed(&self) -> bool {
        self.placed.iter().all(|&p| p)
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupied.contains(cell)
    }

    /// Ship occupying `cell`, if any.
    pub fn ship_at(&self, cell: Cell) -> Option<ShipKind> {
        self.layout[cell.index()]
    }

    /// This player's guess at `cell` against the opponent.
    pub fn guess_at(&self, cell: Cell) -> Option<Shot> {
        if self.hits.contains(cell) {
            Some(Shot::Hit)
        } else if self.misses.contains(cell) {
            Some(Shot::Miss)
        } else {
            None
        }
    }

    pub fn is_guessed(&self, cell: Cell) -> bool {
        self.guess_at(cell).is_some()
    }

    /// Record a resolved guess. A cell is guessed at most once.
    pub fn mark_guess(&mut self, cell: Cell, shot: Shot) -> Result<(), BoardError> {
        if self.is_guessed(cell) {
            return Err(BoardError::AlreadyGuessed);
        }
        match shot {
            Shot::Hit => self.hits.insert(cell),
            Shot::Miss => self.misses.insert(cell),
        };
        Ok(())
    }

    /// Take one hitpoint from `kind` and return what is left.
    pub fn decrement_hp(&mut self, kind: ShipKind) -> Result<u8, BoardError> {
        let hp = &mut self.hp[kind.index()];
        if *hp == 0 {
            return Err(BoardError::ShipAlreadySunk(kind));
        }
        *hp -= 1;
        Ok(*hp)
    }

    /// Remaining hitpoints of `kind`.
    pub fn hp(&self, kind: ShipKind) -> u8 {
        self.hp[kind.index()]
    }

    /// Sum of hitpoints over the fleet.
    pub fn remaining_hp(&self) -> usize {
        self.hp.iter().map(|&h| h as usize).sum()
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.hp.iter().all(|&h| h == 0)
    }

    /// Cells this player has hit.
    pub fn hits(&self) -> Grid {
        self.hits
    }

    /// Cells this player has missed.
    pub fn misses(&self) -> Grid {
        self.misses
    }

    /// Every cell this player has guessed.
    pub fn guesses(&self) -> Grid {
        self.hits | self.misses
    }

    /// Occupancy mask of this player's ships.
    pub fn ship_map(&self) -> Grid {
        self.occupied
    }

    /// Ship layout only.
    pub fn ships_view(&self) -> [CellMark; NUM_CELLS] {
        core::array::from_fn(|i| match self.layout[i] {
            Some(kind) => CellMark::Ship(kind),
            None => CellMark::Empty,
        })
    }

    /// Guess grid only.
    pub fn guesses_view(&self) -> [CellMark; NUM_CELLS] {
        core::array::from_fn(|i| {
            Cell::from_index(i)
                .and_then(|c| self.guess_at(c))
                .map_or(CellMark::Empty, CellMark::Shot)
        })
    }

    /// Own ships with the opponent's guesses laid over them: a ship cell the
    /// opponent has guessed shows the hit mark, everything else shows the
    /// layout. Display only.
    pub fn merge_for_display(own: &Board, opponent: &Board) -> [CellMark; NUM_CELLS] {
        core::array::from_fn(|i| match (own.layout[i], Cell::from_index(i)) {
            (Some(kind), Some(cell)) => opponent
                .guess_at(cell)
                .map_or(CellMark::Ship(kind), CellMark::Shot),
            _ => CellMark::Empty,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  hp: {:?}\n}}",
            self.occupied, self.hits, self.misses, self.hp
        )
    }
}

/// A straight, axis-aligned run of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    start: Cell,
    end: Cell,
}

impl Run {
    /// Run covering `a` to `b` inclusive, normalised so that `start` is the
    /// top/left end. `None` if the cells share neither row nor column.
    pub fn between(a: Cell, b: Cell) -> Option<Self> {
        if a.row() != b.row() && a.col() != b.col() {
            return None;
        }
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Some(Run { start, end })
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end.row() - self.start.row()) + (self.end.col() - self.start.col()) + 1
    }

    /// Cells from `start` to `end`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let Run { start, end } = *self;
        let horizontal = start.row() == end.row();
        (0..self.len()).filter_map(move |i| {
            if horizontal {
                Cell::new(start.row(), start.col() + i).ok()
            } else {
                Cell::new(start.row() + i, start.col()).ok()
            }
        })
    }
}
