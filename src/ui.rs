#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    board::{Board, CellMark},
    config::{BOARD_SIZE, NUM_CELLS},
    game::{Game, Seat},
};

const RULE: &str = "   --------------------------------------------------";

/// Render a grid of marks with column letters and row numbers.
pub fn render(marks: &[CellMark; NUM_CELLS]) -> String {
    let size = BOARD_SIZE as usize;
    let mut out = String::new();
    out.push_str("\n   ");
    for c in 0..size {
        let _ = write!(out, "  {}  ", (b'A' + c as u8) as char);
    }
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    for r in 0..size {
        let _ = write!(out, "{:>2} ", r + 1);
        for c in 0..size {
            let _ = write!(out, "| {} |", marks[r * size + c].symbol());
        }
        out.push('\n');
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Where this player's ships are.
pub fn render_ships(board: &Board) -> String {
    render(&board.ships_view())
}

/// This player's guesses against the opponent.
pub fn render_guesses(board: &Board) -> String {
    render(&board.guesses_view())
}

/// This player's ships with the opponent's guesses laid over them.
pub fn render_merged(mine: &Board, theirs: &Board) -> String {
    render(&Board::merge_for_display(mine, theirs))
}

/// Display the opponent board (top) and the player's board (bottom).
pub fn print_player_view(game: &Game, seat: Seat) {
    println!("Opponent board:");
    print!("{}", render_guesses(game.board(seat)));
    println!("\nYour board:");
    print!("{}", render_merged(game.board(seat), game.board(seat.other())));
}
