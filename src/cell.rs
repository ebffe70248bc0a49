//! Board coordinates.
//!
//! Cells are stored as a row-major linear index with a row stride of
//! `BOARD_SIZE`, so that a cardinal step is a signed offset of ±1 or ±10.

use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, NUM_CELLS};

const SIZE: usize = BOARD_SIZE as usize;

/// A single square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// Cell at (`row`, `col`).
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= SIZE || col >= SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Cell((row * SIZE + col) as u8))
    }

    /// Cell from its linear index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < NUM_CELLS).then(|| Cell(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / SIZE
    }

    pub fn col(self) -> usize {
        self.index() % SIZE
    }

    /// Hunt parity: `true` for cells where `row + col` is odd.
    pub fn is_odd(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Neighbouring cell one step in `dir`, or `None` at the board edge.
    ///
    /// Row wrap-around is treated as leaving the board: stepping right from
    /// column 9 does not land in column 0 of the next row.
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (row, col) = (self.row(), self.col());
        match dir {
            Direction::Right if col + 1 < SIZE => Some(Cell(self.0 + 1)),
            Direction::Left if col > 0 => Some(Cell(self.0 - 1)),
            Direction::Down if row + 1 < SIZE => Some(Cell(self.0 + BOARD_SIZE)),
            Direction::Up if row > 0 => Some(Cell(self.0 - BOARD_SIZE)),
            _ => None,
        }
    }

    /// In-bounds cardinal neighbours.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }

    /// Iterator over every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..NUM_CELLS as u8).map(Cell)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col() as u8) as char;
        write!(f, "{}{}", col, self.row() + 1)
    }
}

/// Parses positions such as `A1` or `j10` (column letter, then row number).
impl FromStr for Cell {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_ch = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or(BoardError::InvalidPosition)?
            .to_ascii_uppercase();
        let row: usize = chars
            .as_str()
            .parse()
            .map_err(|_| BoardError::InvalidPosition)?;
        if row == 0 {
            return Err(BoardError::InvalidPosition);
        }
        let col = (col_ch as u8 - b'A') as usize;
        Cell::new(row - 1, col).map_err(|_| BoardError::InvalidPosition)
    }
}

/// Direction of travel on the linearised board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Signed linear offset of one step.
    pub const fn offset(self) -> isize {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
            Direction::Down => BOARD_SIZE as isize,
            Direction::Up => -(BOARD_SIZE as isize),
        }
    }

    pub const fn reverse(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    /// Direction of a single step from `from` to `to`, if they are cardinal
    /// neighbours.
    pub fn between(from: Cell, to: Cell) -> Option<Self> {
        Direction::ALL
            .into_iter()
            .find(|&d| from.step(d) == Some(to))
    }
}
