// Target selection for the automated opponent.
//
// The informed strategy hunts on odd-parity cells, then works outward from
// each hit using a candidate stack of neighbouring cells and a direction of
// travel once two hits line up. No heap allocation beyond the stack.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::cell::{Cell, Direction};
use crate::common::{Shot, StackError};
use crate::config::STACK_CAPACITY;
use crate::resolver::Resolution;
use crate::stack::BoundedStack;

/// Where the targeting state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No direction and nothing queued: the next guess is a parity hunt.
    Idle,
    /// No direction, but neighbours of earlier hits are queued.
    Hunting,
    /// Following a line of hits in one direction.
    Tracking,
    /// The line was reversed once to find the ship's other end.
    Reversing,
}

/// How a guess was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Random odd-parity cell.
    Hunt,
    /// Next cell along the current direction.
    Track,
    /// Popped from the candidate stack.
    Checkout,
    /// Any unguessed cell, picked by the naive strategy.
    Random,
}

/// Pick a uniformly random unguessed cell.
pub fn random_unguessed<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Option<Cell> {
    pick(rng, (!board.guesses()).cells())
}

/// Pick a uniformly random unguessed cell with odd `row + col`.
///
/// Every ship is at least two long, so each one covers an odd cell. If the
/// odd cells are exhausted the choice falls back to any unguessed cell.
pub fn hunt<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Option<Cell> {
    let open = !board.guesses();
    pick(rng, open.cells().filter(|c| c.is_odd())).or_else(|| pick(rng, open.cells()))
}

fn pick<R, I>(rng: &mut R, cells: I) -> Option<Cell>
where
    R: Rng + ?Sized,
    I: Iterator<Item = Cell> + Clone,
{
    let count = cells.clone().count();
    if count == 0 {
        return None;
    }
    cells.clone().nth(rng.random_range(0..count))
}

/// Result of walking along a line from a known hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    /// First unguessed cell, and the hit just before it.
    Open { target: Cell, pivot: Cell },
    /// The line ends in a miss or the board edge.
    Blocked,
}

/// Step from `from` in `dir` over cells already hit.
fn walk(board: &Board, from: Cell, dir: Direction) -> Walk {
    let mut prev = from;
    loop {
        let Some(next) = prev.step(dir) else {
            return Walk::Blocked;
        };
        match board.guess_at(next) {
            None => return Walk::Open { target: next, pivot: prev },
            Some(Shot::Hit) => prev = next,
            Some(Shot::Miss) => return Walk::Blocked,
        }
    }
}

/// State carried between turns by the informed strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetingState {
    last_hit: Option<Cell>,
    orientation: Option<Direction>,
    candidates: BoundedStack<Cell>,
    running_hits: usize,
    flipped: bool,
    last_move: Option<Move>,
}

impl TargetingState {
    /// Fresh state. Fails only if the candidate stack cannot be allocated.
    pub fn new() -> Result<Self, StackError> {
        Ok(Self {
            last_hit: None,
            orientation: None,
            candidates: BoundedStack::new(STACK_CAPACITY)?,
            running_hits: 0,
            flipped: false,
            last_move: None,
        })
    }

    /// Forget everything about the previous game. Keeps the stack storage.
    pub fn reset(&mut self) {
        self.last_hit = None;
        self.orientation = None;
        self.candidates.clear();
        self.running_hits = 0;
        self.flipped = false;
        self.last_move = None;
    }

    pub fn last_hit(&self) -> Option<Cell> {
        self.last_hit
    }

    pub fn orientation(&self) -> Option<Direction> {
        self.orientation
    }

    /// Queued cells, bottom of the stack first.
    pub fn candidates(&self) -> &[Cell] {
        self.candidates.as_slice()
    }

    /// Hits on ships that are not sunk yet.
    pub fn running_hits(&self) -> usize {
        self.running_hits
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// How the most recent guess was chosen.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn phase(&self) -> Phase {
        match (self.orientation, self.flipped) {
            (Some(_), true) => Phase::Reversing,
            (Some(_), false) => Phase::Tracking,
            (None, _) if self.candidates.is_empty() => Phase::Idle,
            (None, _) => Phase::Hunting,
        }
    }

    /// Choose the next cell to guess on `board`'s guess grid.
    ///
    /// A line that turns out to be blocked at both ends is dropped and the
    /// choice is made again within the same call, so every call yields at
    /// most one guess.
    pub fn select<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &Board) -> Option<Cell> {
        loop {
            if self.orientation.is_none() && self.candidates.is_empty() {
                self.last_move = Some(Move::Hunt);
                return hunt(rng, board);
            }
            match (self.orientation, self.last_hit) {
                (Some(dir), Some(pivot)) => {
                    if let Some(target) = self.track(board, pivot, dir) {
                        self.last_move = Some(Move::Track);
                        return Some(target);
                    }
                    log::debug!("line through {} is blocked both ways", pivot);
                    self.orientation = None;
                    self.flipped = false;
                    continue;
                }
                (Some(_), None) => {
                    self.orientation = None;
                    continue;
                }
                (None, _) => {}
            }
            match self.candidates.pop() {
                Ok(cell) if !board.is_guessed(cell) => {
                    self.last_move = Some(Move::Checkout);
                    return Some(cell);
                }
                // Guessed since it was queued, or the stack just drained.
                _ => continue,
            }
        }
    }

    /// Choose a uniformly random unguessed cell. [`TargetingState::observe`]
    /// still counts hits found this way but queues no neighbours for them.
    pub fn select_random<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &Board) -> Option<Cell> {
        self.last_move = Some(Move::Random);
        random_unguessed(rng, board)
    }

    /// Stop following the current line. Queued candidates and hit counts stay.
    pub fn drop_line(&mut self) {
        self.orientation = None;
        self.flipped = false;
    }

    /// Next cell along `dir` from `pivot`, reversing once at a dead end.
    fn track(&mut self, board: &Board, pivot: Cell, dir: Direction) -> Option<Cell> {
        if let Walk::Open { target, pivot } = walk(board, pivot, dir) {
            self.last_hit = Some(pivot);
            return Some(target);
        }
        let reversed = dir.reverse();
        self.orientation = Some(reversed);
        self.flipped = true;
        match walk(board, pivot, reversed) {
            Walk::Open { target, pivot } => {
                self.last_hit = Some(pivot);
                Some(target)
            }
            Walk::Blocked => None,
        }
    }

    /// Update the state with the outcome of the guess chosen by
    /// [`TargetingState::select`]. `board` must already show the guess.
    pub fn observe<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &Board, result: &Resolution) {
        let cell = result.cell;
        match result.shot {
            Shot::Hit => {
                self.running_hits += 1;
                match result.sunk {
                    None => {
                        if matches!(self.last_move, Some(Move::Checkout | Move::Track)) {
                            let dir = self.last_hit.and_then(|prev| Direction::between(prev, cell));
                            if let Some(dir) = dir {
                                if self.orientation.is_none() {
                                    self.flipped = false;
                                }
                                self.orientation = Some(dir);
                            }
                        }
                        if self.last_move != Some(Move::Random) {
                            self.enqueue_neighbors(rng, board, cell);
                        }
                    }
                    Some(kind) => {
                        self.running_hits = self.running_hits.saturating_sub(kind.length());
                        if self.running_hits == 0 {
                            self.candidates.clear();
                        }
                        self.orientation = None;
                        self.flipped = false;
                        log::debug!("sank {}, {} hits outstanding", kind, self.running_hits);
                    }
                }
                self.last_hit = Some(cell);
            }
            Shot::Miss => match (self.orientation, self.last_hit) {
                (Some(dir), Some(pivot)) if !self.flipped => {
                    let reversed = dir.reverse();
                    match walk(board, pivot, reversed) {
                        Walk::Open { pivot, .. } => {
                            self.orientation = Some(reversed);
                            self.last_hit = Some(pivot);
                            self.flipped = true;
                        }
                        Walk::Blocked => {
                            self.orientation = None;
                            self.flipped = false;
                        }
                    }
                }
                _ => {
                    self.orientation = None;
                    self.flipped = false;
                }
            },
        }
    }

    /// Queue the unguessed neighbours of a hit, in shuffled order, skipping
    /// the direction already being tracked.
    fn enqueue_neighbors<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &Board, cell: Cell) {
        let mut dirs = Direction::ALL;
        dirs.shuffle(rng);
        for dir in dirs {
            if Some(dir) == self.orientation {
                continue;
            }
            let Some(next) = cell.step(dir) else {
                continue;
            };
            if board.is_guessed(next) || self.candidates.contains(next) {
                continue;
            }
            // A full stack logs and drops the cell.
            if self.candidates.push(next).is_ok() {
                log::trace!("queued {} next to {}", next, cell);
            }
        }
    }
}
