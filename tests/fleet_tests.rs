use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{random_fleet, Battleship, FLEET, FLEET_SIZE};

#[test]
fn test_random_fleet_is_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    assert_eq!(
        random_fleet(&mut rng1).unwrap(),
        random_fleet(&mut rng2).unwrap()
    );
}

#[test]
fn test_random_fleet_validates_across_seeds() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = random_fleet(&mut rng).unwrap();
        assert_eq!(fleet.len(), FLEET_SIZE);
        let board = Battleship::new(fleet)
            .unwrap_or_else(|e| panic!("seed {} produced an invalid fleet: {}", seed, e));
        for rule in FLEET.iter() {
            let found = board
                .ships()
                .iter()
                .filter(|s| s.len() == rule.size())
                .count();
            assert_eq!(found, rule.count(), "seed {}: wrong {} count", seed, rule.label());
        }
    }
}
