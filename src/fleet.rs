//! Random rule-satisfying fleet layouts.

use rand::Rng;

use crate::bitgrid::BitGrid;
use crate::common::{Coord, FieldError};
use crate::config::{FIELD_SIZE, FLEET, FLEET_SIZE};
use crate::ship::Orientation;

type Grid = BitGrid<u128, FIELD_SIZE>;

const FLEET_ATTEMPTS: usize = 100;
const SHIP_ATTEMPTS: usize = 100;

/// Draw a random fleet layout satisfying the composition and spacing
/// rules, as `(start, end)` endpoint pairs ready for
/// [`Battleship::new`](crate::Battleship::new).
///
/// Classes are placed largest first against a blocked-cell grid that
/// already contains the dilation of every placed ship, so accepted
/// candidates can never touch. Each ship gets a bounded number of
/// attempts and the whole fleet is restarted when one runs dry;
/// exhausting the restarts yields `UnableToPlaceFleet`.
pub fn random_fleet<R: Rng>(rng: &mut R) -> Result<[(Coord, Coord); FLEET_SIZE], FieldError> {
    'fleet: for _ in 0..FLEET_ATTEMPTS {
        let mut blocked = Grid::new();
        let mut placements = [((0, 0), (0, 0)); FLEET_SIZE];
        let mut placed = 0;
        for rule in FLEET.iter().rev() {
            for _ in 0..rule.count() {
                match place_one(rng, &mut blocked, rule.size()) {
                    Some(spec) => {
                        placements[placed] = spec;
                        placed += 1;
                    }
                    None => continue 'fleet,
                }
            }
        }
        return Ok(placements);
    }
    Err(FieldError::UnableToPlaceFleet)
}

/// One bounded placement attempt loop for a ship of `len` decks.
fn place_one<R: Rng>(rng: &mut R, blocked: &mut Grid, len: usize) -> Option<(Coord, Coord)> {
    for _ in 0..SHIP_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_row, max_column) = match orientation {
            Orientation::Horizontal => (FIELD_SIZE - 1, FIELD_SIZE - len),
            Orientation::Vertical => (FIELD_SIZE - len, FIELD_SIZE - 1),
        };
        let row = rng.random_range(0..=max_row);
        let column = rng.random_range(0..=max_column);
        let (start, end) = match orientation {
            Orientation::Horizontal => ((row, column), (row, column + len - 1)),
            Orientation::Vertical => ((row, column), (row + len - 1, column)),
        };

        let mut mask = Grid::new();
        for i in 0..len {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, column + i),
                Orientation::Vertical => (row + i, column),
            };
            mask.set(r, c).ok()?;
        }
        if (*blocked & mask).is_empty() {
            *blocked |= mask.dilated();
            return Some((start, end));
        }
    }
    None
}
