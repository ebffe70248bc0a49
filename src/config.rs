use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
pub const NUM_SHIPS: usize = 5;

/// Fleet in placement order (descending length).
pub const SHIPS: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Destroyer,
    ShipKind::Submarine,
    ShipKind::Patrol,
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Capacity of the automated opponent's candidate stack.
pub const STACK_CAPACITY: usize = 20;

/// Convert a ship name string to the canonical ship kind. Matching is
/// case-insensitive and also accepts the single-letter board marker.
pub fn ship_kind_from_name(name: &str) -> Option<ShipKind> {
    SHIPS.iter().copied().find(|kind| {
        kind.name().eq_ignore_ascii_case(name)
            || (name.len() == 1 && name.chars().next().map(|c| c.to_ascii_uppercase()) == Some(kind.marker()))
    })
}
