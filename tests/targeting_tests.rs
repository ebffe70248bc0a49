use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{
    place_fleet, random_unguessed, resolve_guess, Board, Cell, Move, Phase, ShipKind, Shot,
    TargetingState, NUM_CELLS,
};

fn fleet(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    place_fleet(&mut rng, &mut board).unwrap();
    board
}

#[test]
fn fresh_state_is_idle() {
    let state = TargetingState::new().unwrap();
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.running_hits(), 0);
    assert!(state.candidates().is_empty());
    assert_eq!(state.last_hit(), None);
}

#[test]
fn hunt_hit_queues_every_open_neighbour() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut state = TargetingState::new().unwrap();
    let mut attacker = Board::new();
    let target = state.select(&mut rng, &attacker).unwrap();
    assert_eq!(state.last_move(), Some(Move::Hunt));
    assert!(target.is_odd());

    let mut defender = Board::new();
    let other = Cell::new(target.row(), if target.col() < 9 { target.col() + 1 } else { 8 }).unwrap();
    defender.place_ship(ShipKind::Patrol, target, other).unwrap();

    let result = resolve_guess(&mut attacker, &mut defender, target).unwrap();
    state.observe(&mut rng, &attacker, &result);

    let mut queued = state.candidates().to_vec();
    queued.sort();
    let mut expected: Vec<Cell> = target.neighbors().collect();
    expected.sort();
    assert_eq!(queued, expected);
    assert_eq!(state.phase(), Phase::Hunting);
    assert_eq!(state.last_hit(), Some(target));
    assert_eq!(state.running_hits(), 1);
}

#[test]
fn reset_returns_to_idle() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut state = TargetingState::new().unwrap();
    let mut attacker = Board::new();
    let mut defender = fleet(5);
    for _ in 0..30 {
        let cell = state.select(&mut rng, &attacker).unwrap();
        let result = resolve_guess(&mut attacker, &mut defender, cell).unwrap();
        state.observe(&mut rng, &attacker, &result);
    }
    state.reset();
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.running_hits(), 0);
    assert_eq!(state.last_move(), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn informed_play_sinks_the_fleet_without_repeating(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut defender = fleet(seed.wrapping_add(1));
        let mut attacker = Board::new();
        let mut state = TargetingState::new().unwrap();
        let mut hit_yet = false;
        let mut guesses = 0;

        while !defender.all_sunk() {
            let cell = state.select(&mut rng, &attacker);
            prop_assert!(cell.is_some());
            let cell = cell.unwrap();
            prop_assert!(!attacker.is_guessed(cell), "{} guessed twice", cell);
            if !hit_yet {
                prop_assert!(cell.is_odd(), "{} broke parity before the first hit", cell);
            }

            let before = state.running_hits();
            let result = resolve_guess(&mut attacker, &mut defender, cell).unwrap();
            state.observe(&mut rng, &attacker, &result);
            guesses += 1;

            match (result.shot, result.sunk) {
                (Shot::Hit, Some(kind)) => {
                    prop_assert_eq!(state.running_hits(), (before + 1).saturating_sub(kind.length()));
                    prop_assert_eq!(state.orientation(), None);
                    if state.running_hits() == 0 {
                        prop_assert!(state.candidates().is_empty());
                    }
                }
                (Shot::Hit, None) => prop_assert_eq!(state.running_hits(), before + 1),
                (Shot::Miss, _) => prop_assert_eq!(state.running_hits(), before),
            }
            hit_yet |= result.is_hit();
            for queued in state.candidates() {
                prop_assert!(state.candidates().iter().filter(|&c| c == queued).count() == 1);
            }
            prop_assert!(guesses <= NUM_CELLS);
        }
        prop_assert_eq!(attacker.hits().count_ones(), 17);
    }

    #[test]
    fn naive_play_never_repeats(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        for _ in 0..NUM_CELLS {
            let cell = random_unguessed(&mut rng, &board).unwrap();
            prop_assert!(!board.is_guessed(cell));
            board.mark_guess(cell, Shot::Miss).unwrap();
        }
        prop_assert_eq!(random_unguessed(&mut rng, &board), None);
    }
}
