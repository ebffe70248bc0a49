use crate::{
    ai::TargetingState,
    board::Board,
    cell::Cell,
    common::{GameError, StackError},
    game::{Game, TurnReport},
    placement,
    resolver::Resolution,
    BoardError,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Name used for the automated opponent.
pub const CPU_NAME: &str = "CPU";

/// Strategy used by [`AiPlayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Any unguessed cell, uniformly at random.
    Naive,
    /// Parity hunt plus directional tracking.
    #[default]
    Informed,
}

/// Automated opponent.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    difficulty: Difficulty,
    state: TargetingState,
}

impl AiPlayer {
    /// Fails only if the targeting scratch stack cannot be allocated.
    pub fn new(difficulty: Difficulty) -> Result<Self, StackError> {
        Ok(Self {
            difficulty,
            state: TargetingState::new()?,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Switch strategy, possibly mid-game. Any line being followed is
    /// dropped and the hit count carries over.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            log::debug!("{} switches to {:?}", CPU_NAME, difficulty);
            self.state.drop_line();
            self.difficulty = difficulty;
        }
    }

    pub fn state(&self) -> &TargetingState {
        &self.state
    }

    /// Play this player's turn in `game`.
    pub fn take_turn(&mut self, game: &mut Game, rng: &mut SmallRng) -> Result<TurnReport, GameError> {
        game.play_turn(self, rng)
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        CPU_NAME
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        placement::place_fleet(rng, board)
    }

    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Result<Cell, GameError> {
        let cell = match self.difficulty {
            Difficulty::Naive => self.state.select_random(rng, board),
            Difficulty::Informed => self.state.select(rng, board),
        };
        cell.ok_or(GameError::NoTargetsLeft)
    }

    fn handle_guess_result(&mut self, rng: &mut SmallRng, board: &Board, result: &Resolution) {
        self.state.observe(rng, board, result);
        log::debug!(
            "{} ({:?}) {:?} at {}, phase {:?}",
            CPU_NAME,
            self.difficulty,
            result.shot,
            result.cell,
            self.state.phase()
        );
    }

    fn reset(&mut self) {
        self.state.reset();
    }
}
