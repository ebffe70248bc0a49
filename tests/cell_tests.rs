use salvo::{BoardError, Cell, Direction};

fn cell(s: &str) -> Cell {
    s.parse().unwrap()
}

#[test]
fn parses_column_letter_and_row_number() {
    assert_eq!(cell("A1").index(), 0);
    assert_eq!(cell("j10").index(), 99);
    assert_eq!(cell("C4"), Cell::new(3, 2).unwrap());
    assert_eq!(cell(" b7 ").to_string(), "B7");
}

#[test]
fn rejects_malformed_positions() {
    for bad in ["", "A", "A0", "A11", "K1", "1A", "AA1", "A-1"] {
        assert_eq!(bad.parse::<Cell>(), Err(BoardError::InvalidPosition), "{bad:?}");
    }
}

#[test]
fn new_checks_bounds() {
    assert_eq!(
        Cell::new(10, 0),
        Err(BoardError::OutOfBounds { row: 10, col: 0 })
    );
    assert!(Cell::from_index(100).is_none());
    assert_eq!(Cell::all().count(), 100);
}

#[test]
fn step_stops_at_edges_without_wrapping() {
    let right_edge = Cell::new(2, 9).unwrap();
    assert_eq!(right_edge.step(Direction::Right), None);
    assert_eq!(right_edge.step(Direction::Left), Cell::new(2, 8).ok());

    let left_edge = Cell::new(3, 0).unwrap();
    assert_eq!(left_edge.step(Direction::Left), None);

    assert_eq!(cell("A1").step(Direction::Up), None);
    assert_eq!(cell("A10").step(Direction::Down), None);
    assert_eq!(cell("A1").step(Direction::Down), Some(cell("A2")));
}

#[test]
fn direction_offsets_and_reverse() {
    assert_eq!(Direction::Right.offset(), 1);
    assert_eq!(Direction::Left.offset(), -1);
    assert_eq!(Direction::Down.offset(), 10);
    assert_eq!(Direction::Up.offset(), -10);
    for dir in Direction::ALL {
        assert_eq!(dir.reverse().reverse(), dir);
        assert_eq!(dir.reverse().offset(), -dir.offset());
    }
}

#[test]
fn between_only_for_adjacent_cells() {
    assert_eq!(Direction::between(cell("B2"), cell("C2")), Some(Direction::Right));
    assert_eq!(Direction::between(cell("B2"), cell("B1")), Some(Direction::Up));
    assert_eq!(Direction::between(cell("B2"), cell("D2")), None);
    assert_eq!(Direction::between(cell("J1"), cell("A2")), None);
}

#[test]
fn corner_has_two_neighbours() {
    assert_eq!(cell("A1").neighbors().count(), 2);
    assert_eq!(cell("E5").neighbors().count(), 4);
    assert_eq!(cell("J5").neighbors().count(), 3);
}

#[test]
fn parity_follows_row_plus_col() {
    assert!(!cell("A1").is_odd());
    assert!(cell("B1").is_odd());
    assert!(cell("A2").is_odd());
    assert_eq!(Cell::all().filter(|c| c.is_odd()).count(), 50);
}
