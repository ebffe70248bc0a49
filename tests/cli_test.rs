#![cfg(feature = "std")]

use std::io::{self, Cursor, Write};

use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    level_from, render_guesses, render_merged, render_ships, Board, Cell, CliPlayer, GameError,
    Player, ShipKind, Shot, SHIPS, TOTAL_SHIP_CELLS,
};

fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    CliPlayer::new("Ann", Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn printed(p: &CliPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8_lossy(p.output()).into_owned()
}

fn cell(s: &str) -> Cell {
    s.parse().unwrap()
}

#[test]
fn places_each_piece_where_asked() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new();
    let mut p = player("c\nA1 A5\nb\nB1 B4\nd\nC1 C3\ns\nD1 D3\np\nE1 E2\n");
    p.place_ships(&mut rng, &mut board).unwrap();

    assert!(board.fleet_placed());
    assert_eq!(board.ship_at(cell("A5")), Some(ShipKind::Carrier));
    assert_eq!(board.ship_at(cell("B4")), Some(ShipKind::Battleship));
    assert_eq!(board.ship_at(cell("E2")), Some(ShipKind::Patrol));
    assert!(printed(&p).contains("All ships placed!"));
}

#[test]
fn bad_placements_are_explained_and_asked_again() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut board = Board::new();
    let mut p = player("x\nc\nA1 B2\nA1 A4\nA1 A5\nc\nb\nA2 A5\n\n\n");
    p.place_ships(&mut rng, &mut board).unwrap();

    let out = printed(&p);
    assert!(out.contains("No such ship."));
    assert!(out.contains("Cannot place ships diagonally"));
    assert!(out.contains("Cannot fit ship in given positions"));
    assert!(out.contains("Ship already placed!"));
    assert!(out.contains("Ships cannot overlap"));
    assert!(board.fleet_placed());
    assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
    assert_eq!(board.ship_at(cell("A1")), Some(ShipKind::Carrier));
}

#[test]
fn closed_input_places_the_rest_randomly() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = Board::new();
    let mut p = player("p\nJ9 J10\n");
    p.place_ships(&mut rng, &mut board).unwrap();
    assert!(SHIPS.iter().all(|&k| board.is_placed(k)));
    assert_eq!(board.ship_at(cell("J10")), Some(ShipKind::Patrol));
}

#[test]
fn guess_input_skips_repeats_and_garbage() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut board = Board::new();
    board.mark_guess(cell("A1"), Shot::Miss).unwrap();
    let mut p = player("a1\nzz\nK3\nb2\n");
    assert_eq!(p.select_target(&mut rng, &board), Ok(cell("B2")));

    let out = printed(&p);
    assert!(out.contains("Already guessed at this position."));
    assert!(out.contains("Invalid position"));
}

#[test]
fn guess_with_closed_input_aborts() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut p = player("");
    assert_eq!(
        p.select_target(&mut rng, &Board::new()),
        Err(GameError::Aborted)
    );
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn failed_output_counts_as_closed_input() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut p = CliPlayer::new("Ann", Cursor::new(b"B7\ny\n".to_vec()), BrokenPipe);
    assert_eq!(
        p.select_target(&mut rng, &Board::new()),
        Err(GameError::Aborted)
    );
    assert!(!p.confirm("Play again?"));

    let mut board = Board::new();
    p.place_ships(&mut rng, &mut board).unwrap();
    assert!(board.fleet_placed());
}

#[test]
fn confirm_accepts_yes_and_no() {
    assert!(player("maybe\ny\n").confirm("Play again?"));
    assert!(!player("N\n").confirm("Play again?"));
    assert!(!player("").confirm("Play again?"));
    let mut p = player("what\nyes\n");
    assert!(p.confirm("Do you want to go first?"));
    assert!(printed(&p).contains("Please answer Y or N."));
}

#[test]
fn rendered_board_has_letters_numbers_and_marks() {
    let mut mine = Board::new();
    mine.place_ship(ShipKind::Submarine, cell("B2"), cell("B4"))
        .unwrap();
    let mut theirs = Board::new();
    theirs.mark_guess(cell("B3"), Shot::Hit).unwrap();
    theirs.mark_guess(cell("C3"), Shot::Miss).unwrap();

    let ships = render_ships(&mine);
    assert!(ships.contains("  A    B    C"));
    assert!(ships.contains(" 2 |   || S |"));
    assert!(ships.contains("10 |"));

    let merged = render_merged(&mine, &theirs);
    assert!(merged.contains(" 3 |   || X ||   |"));
    assert!(merged.contains(" 4 |   || S |"));

    let guesses = render_guesses(&theirs);
    assert!(guesses.contains(" 3 |   || X || O |"));
}

#[test]
fn log_level_defaults_to_warn() {
    assert_eq!(level_from(None), LevelFilter::Warn);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("TRACE")), LevelFilter::Trace);
    assert_eq!(level_from(Some("nonsense")), LevelFilter::Warn);
}
