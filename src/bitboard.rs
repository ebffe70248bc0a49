//! A fixed-size bitboard used for guess grids and ship occupancy.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are an
//! `N×N` grid packed into an unsigned integer `T`, addressed by [`Cell`].

use core::fmt;
use core::ops::{BitOr, Not};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::cell::Cell;
use crate::config::BOARD_SIZE;

/// Unsigned integer usable as bitboard storage.
pub trait Word: PrimInt + Unsigned + Zero {}

impl<T: PrimInt + Unsigned + Zero> Word for T {}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T: Word, const N: usize> {
    bits: T,
}

/// The board used throughout the game.
pub type Grid = BitBoard<u128, { BOARD_SIZE as usize }>;

impl<T: Word, const N: usize> BitBoard<T, N> {
    const BOARD_BITS: usize = N * N;

    /// Empty board.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == core::mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Bit position of `cell`, or `None` if this board is too small for it.
    #[inline]
    fn bit(cell: Cell) -> Option<usize> {
        (cell.row() < N && cell.col() < N).then(|| cell.row() * N + cell.col())
    }

    /// Returns the number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether `cell` is set. Cells outside the board read as unset.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        Self::bit(cell).is_some_and(|i| ((self.bits >> i) & T::one()) != T::zero())
    }

    /// Sets `cell`. Returns `false` if it lies outside this board.
    #[inline]
    pub fn insert(&mut self, cell: Cell) -> bool {
        match Self::bit(cell) {
            Some(i) => {
                self.bits = self.bits | (T::one() << i);
                true
            }
            None => false,
        }
    }

    /// Iterator over the set cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + Clone + '_ {
        (0..Self::BOARD_BITS)
            .filter(move |&i| ((self.bits >> i) & T::one()) != T::zero())
            .filter_map(|i| Cell::new(i / N, i % N).ok())
    }
}

impl<T: Word, const N: usize> fmt::Debug for BitBoard<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", core::any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Word, const N: usize> BitOr for BitBoard<T, N> {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard { bits: self.bits | rhs.bits }
    }
}

/// Inverts the board within its `N×N` bounds.
impl<T: Word, const N: usize> Not for BitBoard<T, N> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard { bits: !self.bits & Self::mask() }
    }
}
