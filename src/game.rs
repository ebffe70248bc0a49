//! A two-player game session: both boards, whose turn it is, and who won.

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    cell::Cell,
    common::{BoardError, GameError, Shot},
    player::Player,
    resolver::{resolve_guess, Resolution},
    ship::ShipKind,
};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::One, Seat::Two];

    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Seat),
}

/// Everything a caller needs to know about one resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub attacker: Seat,
    pub cell: Cell,
    pub shot: Shot,
    pub sunk: Option<ShipKind>,
    /// Set when this guess sank the defender's last ship.
    pub winner: Option<Seat>,
}

/// Core game state holding both players' boards.
#[derive(Debug, Clone)]
pub struct Game {
    boards: [Board; 2],
    turn: Seat,
    winner: Option<Seat>,
    guesses: [usize; 2],
}

impl Game {
    /// Create a game with empty boards; `first` guesses first.
    pub fn new(first: Seat) -> Self {
        Self {
            boards: [Board::new(), Board::new()],
            turn: first,
            winner: None,
            guesses: [0; 2],
        }
    }

    pub fn board(&self, seat: Seat) -> &Board {
        &self.boards[seat.index()]
    }

    /// Mutable reference to a player's board for ship placement.
    pub fn board_mut(&mut self, seat: Seat) -> &mut Board {
        &mut self.boards[seat.index()]
    }

    /// Let `player` place its fleet on `seat`'s board.
    pub fn setup(&mut self, seat: Seat, player: &mut dyn Player, rng: &mut SmallRng) -> Result<(), BoardError> {
        player.place_ships(rng, self.board_mut(seat))
    }

    pub fn place_ship(&mut self, seat: Seat, kind: ShipKind, start: Cell, end: Cell) -> Result<(), BoardError> {
        self.board_mut(seat).place_ship(kind, start, end)
    }

    pub fn ship_at(&self, seat: Seat, cell: Cell) -> Option<ShipKind> {
        self.board(seat).ship_at(cell)
    }

    pub fn guess_at(&self, seat: Seat, cell: Cell) -> Option<Shot> {
        self.board(seat).guess_at(cell)
    }

    pub fn mark_guess(&mut self, seat: Seat, cell: Cell, shot: Shot) -> Result<(), BoardError> {
        self.board_mut(seat).mark_guess(cell, shot)
    }

    pub fn decrement_ship_hp(&mut self, seat: Seat, kind: ShipKind) -> Result<u8, BoardError> {
        self.board_mut(seat).decrement_hp(kind)
    }

    pub fn is_fully_sunk(&self, seat: Seat) -> bool {
        self.board(seat).all_sunk()
    }

    /// Whose turn it is.
    pub fn current(&self) -> Seat {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(seat) => GameStatus::Won(seat),
            None => GameStatus::InProgress,
        }
    }

    /// Number of guesses `seat` has made.
    pub fn guess_count(&self, seat: Seat) -> usize {
        self.guesses[seat.index()]
    }

    /// Attacker's board and defender's board, both mutable.
    fn split(&mut self, attacker: Seat) -> (&mut Board, &mut Board) {
        let [one, two] = &mut self.boards;
        match attacker {
            Seat::One => (one, two),
            Seat::Two => (two, one),
        }
    }

    /// Ask `player`, sitting in the current seat, for a guess and resolve it.
    ///
    /// The win check runs after every resolved guess. The turn passes to
    /// the other seat unless the game is over.
    pub fn play_turn(&mut self, player: &mut dyn Player, rng: &mut SmallRng) -> Result<TurnReport, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        let attacker = self.turn;
        let cell = player.select_target(rng, self.board(attacker))?;
        let (mine, theirs) = self.split(attacker);
        let result = resolve_guess(mine, theirs, cell)?;
        self.guesses[attacker.index()] += 1;
        player.handle_guess_result(rng, self.board(attacker), &result);

        let winner = self.is_fully_sunk(attacker.other()).then_some(attacker);
        match winner {
            Some(seat) => {
                log::info!("{:?} wins after {} guesses", seat, self.guess_count(seat));
                self.winner = Some(seat);
            }
            None => self.turn = attacker.other(),
        }
        Ok(TurnReport {
            attacker,
            cell,
            shot: result.shot,
            sunk: result.sunk,
            winner,
        })
    }
}

/// Play `game` to the end, alternating between the two players. Each player
/// also hears about the guesses made against it. Returns the winner.
pub fn play_out(
    game: &mut Game,
    players: [&mut dyn Player; 2],
    rng: &mut SmallRng,
) -> Result<Seat, GameError> {
    let [one, two] = players;
    loop {
        let attacker = game.current();
        let (player, opponent) = match attacker {
            Seat::One => (&mut *one, &mut *two),
            Seat::Two => (&mut *two, &mut *one),
        };
        let report = game.play_turn(player, rng)?;
        let result = Resolution {
            cell: report.cell,
            shot: report.shot,
            sunk: report.sunk,
        };
        opponent.handle_opponent_guess(game.board(attacker.other()), game.board(attacker), &result);
        if let Some(winner) = report.winner {
            return Ok(winner);
        }
    }
}

/// Set up a fresh game with `first` to move, let both players place their
/// fleets and play it to the end. Used for automated matches.
pub fn auto_play(
    first: Seat,
    players: [&mut dyn Player; 2],
    rng: &mut SmallRng,
) -> Result<(Game, Seat), GameError> {
    let [one, two] = players;
    let mut game = Game::new(first);
    one.reset();
    two.reset();
    game.setup(Seat::One, one, rng)?;
    game.setup(Seat::Two, two, rng)?;
    let winner = play_out(&mut game, [one, two], rng)?;
    Ok((game, winner))
}
