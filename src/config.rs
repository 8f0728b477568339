use crate::common::Coord;
use crate::ship::FleetRule;

/// Side length of the square field.
pub const FIELD_SIZE: usize = 10;
/// Total number of ships in a legal fleet.
pub const FLEET_SIZE: usize = 10;

/// Required fleet composition, smallest class first.
pub const FLEET: [FleetRule; 4] = [
    FleetRule::new(1, 4, "single"),
    FleetRule::new(2, 3, "double"),
    FleetRule::new(3, 2, "three"),
    FleetRule::new(4, 1, "four"),
];

/// A known-valid layout used by the demo binary and tests.
pub const DEMO_FLEET: [(Coord, Coord); FLEET_SIZE] = [
    ((0, 0), (0, 3)),
    ((2, 0), (2, 2)),
    ((2, 4), (2, 6)),
    ((2, 8), (2, 9)),
    ((4, 2), (4, 3)),
    ((4, 6), (4, 7)),
    ((6, 0), (6, 0)),
    ((6, 9), (6, 9)),
    ((8, 4), (8, 4)),
    ((8, 8), (8, 8)),
];
