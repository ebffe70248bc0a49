use crate::{board::Board, cell::Cell, common::GameError, resolver::Resolution, BoardError};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Name shown in prompts and results.
    fn name(&self) -> &str;

    /// Place all ships onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next target given this player's own board, whose guess grid
    /// holds every earlier guess.
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Result<Cell, GameError>;

    /// Inform the player of the result of its last guess. `board` already
    /// shows the guess.
    fn handle_guess_result(&mut self, _rng: &mut SmallRng, _board: &Board, _result: &Resolution) {}

    /// Inform the player of an opponent guess against its board.
    fn handle_opponent_guess(&mut self, _mine: &Board, _theirs: &Board, _result: &Resolution) {}

    /// Drop any per-game state before a new game.
    fn reset(&mut self) {}
}
