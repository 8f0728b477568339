use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{random_fleet, Battleship, FireResult, FIELD_SIZE};

fn random_board(seed: u64) -> Battleship {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fleet = random_fleet(&mut rng).unwrap();
    Battleship::new(fleet).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_covers_twenty_cells(seed in any::<u64>()) {
        let board = random_board(seed);
        let decks: usize = board.ships().iter().map(|s| s.len()).sum();
        prop_assert_eq!(decks, 20);
    }

    #[test]
    fn empty_cells_always_miss(seed in any::<u64>()) {
        let mut board = random_board(seed);
        for row in 0..FIELD_SIZE {
            for column in 0..FIELD_SIZE {
                if board.ship_at((row, column)).is_none() {
                    prop_assert_eq!(board.fire((row, column)), FireResult::Miss);
                }
            }
        }
    }

    #[test]
    fn sinking_every_deck_sinks_the_fleet(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let decks: Vec<(usize, usize)> = board
            .ships()
            .iter()
            .flat_map(|s| s.decks().iter().map(|d| (d.row, d.column)))
            .collect();
        let mut sunk = 0;
        for (row, column) in decks {
            match board.fire((row, column)) {
                FireResult::Miss => prop_assert!(false, "deck at ({}, {}) missed", row, column),
                FireResult::Hit => {}
                FireResult::Sunk => sunk += 1,
            }
        }
        prop_assert_eq!(sunk, 10);
        prop_assert!(board.all_sunk());
    }
}
