//! Common types: guess outcomes and the error enums shared by the core.

use core::fmt;

use crate::ship::ShipKind;

/// Outcome of a single guess as recorded in a guess grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    Hit,
    Miss,
}

impl Shot {
    /// Character used for this mark on a rendered board.
    pub const fn marker(self) -> char {
        match self {
            Shot::Hit => 'X',
            Shot::Miss => 'O',
        }
    }
}

/// Reasons a ship placement is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Start and end share neither a row nor a column.
    Diagonal,
    /// The run between start and end does not match the ship's length.
    WrongLength { expected: usize, found: usize },
    /// The run crosses a cell that already holds a ship.
    Overlaps,
    /// This ship is already on the board.
    AlreadyPlaced,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Diagonal => write!(f, "Cannot place ships diagonally"),
            PlacementError::WrongLength { expected, found } => write!(
                f,
                "Cannot fit ship in given positions (needs {} cells, got {})",
                expected, found
            ),
            PlacementError::Overlaps => write!(f, "Ships cannot overlap"),
            PlacementError::AlreadyPlaced => write!(f, "Ship is already placed on the board"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Position string could not be parsed.
    InvalidPosition,
    /// Ship placement rejected before any mutation.
    InvalidPlacement(PlacementError),
    /// Guess was already made at this position.
    AlreadyGuessed,
    /// A hit landed on a cell whose ship has no hitpoints left.
    ShipAlreadySunk(ShipKind),
}

impl From<PlacementError> for BoardError {
    fn from(err: PlacementError) -> Self {
        BoardError::InvalidPlacement(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            BoardError::InvalidPosition => {
                write!(f, "Invalid position, use a column A-J followed by a row 1-10")
            }
            BoardError::InvalidPlacement(e) => write!(f, "{}", e),
            BoardError::AlreadyGuessed => write!(f, "Already guessed at this position"),
            BoardError::ShipAlreadySunk(kind) => write!(f, "{} is already sunk", kind),
        }
    }
}

/// Errors from the bounded candidate stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// Push dropped because the stack is at capacity.
    Full,
    /// Pop on an empty stack.
    Empty,
    /// Backing storage could not be reserved.
    Allocation,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::Full => write!(f, "Stack is full"),
            StackError::Empty => write!(f, "Stack is empty"),
            StackError::Allocation => write!(f, "Could not allocate stack storage"),
        }
    }
}

/// Errors from driving a game turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A winner has already been decided.
    GameOver,
    /// The attacker has no unguessed cells left.
    NoTargetsLeft,
    /// The player stopped providing input.
    Aborted,
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::NoTargetsLeft => write!(f, "No unguessed cells left"),
            GameError::Aborted => write!(f, "Player left the game"),
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for StackError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
