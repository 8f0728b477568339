//! The battleship field: placement, validation, fire resolution.

use alloc::vec::Vec;
use core::fmt;

use crate::bitgrid::BitGrid;
use crate::common::{Coord, FieldError, FieldViolation, FireResult};
use crate::config::{FIELD_SIZE, FLEET, FLEET_SIZE};
use crate::ship::Ship;

type Grid = BitGrid<u128, FIELD_SIZE>;

/// A validated 10×10 field holding the full fleet.
///
/// Ships live in an arena; the field map stores arena indices, one per
/// occupied cell. After a successful `new` the fleet composition and
/// spacing rules hold and the board only changes through [`fire`].
///
/// [`fire`]: Battleship::fire
#[derive(Clone)]
pub struct Battleship {
    ships: Vec<Ship>,
    field: [[Option<usize>; FIELD_SIZE]; FIELD_SIZE],
}

impl Battleship {
    /// Place the fleet described by `placements` (one `(start, end)`
    /// endpoint pair per ship) and validate it.
    ///
    /// Fails with `InvalidCoordinates` for a non-straight ship,
    /// `ShipOutOfBounds` for a deck outside the field,
    /// `CellAlreadyTaken` when two ships claim a cell, and
    /// `InvalidField` when the placed fleet breaks the composition or
    /// spacing rules. A failed construction leaves no usable board.
    pub fn new<I>(placements: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = (Coord, Coord)>,
    {
        let mut ships = Vec::new();
        let mut field = [[None; FIELD_SIZE]; FIELD_SIZE];

        for (start, end) in placements {
            let ship = Ship::new(start, end)?;
            let index = ships.len();
            for deck in ship.decks() {
                let (row, column) = (deck.row, deck.column);
                if row >= FIELD_SIZE || column >= FIELD_SIZE {
                    return Err(FieldError::ShipOutOfBounds { row, column });
                }
                if field[row][column].is_some() {
                    return Err(FieldError::CellAlreadyTaken { row, column });
                }
                field[row][column] = Some(index);
            }
            ships.push(ship);
        }

        let board = Battleship { ships, field };
        board.validate()?;
        Ok(board)
    }

    /// Resolve a shot at `location`.
    ///
    /// A cell outside the field or not covered by any ship is a `Miss`;
    /// firing never fails and re-firing a resolved cell is harmless (a
    /// dead deck of a drowned ship keeps answering `Sunk`).
    pub fn fire(&mut self, location: Coord) -> FireResult {
        let (row, column) = location;
        let index = if row < FIELD_SIZE && column < FIELD_SIZE {
            self.field[row][column]
        } else {
            None
        };
        match index {
            None => FireResult::Miss,
            Some(i) => {
                if self.ships[i].fire(row, column) {
                    FireResult::Sunk
                } else {
                    FireResult::Hit
                }
            }
        }
    }

    /// The fleet, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship covering `location`, if any.
    pub fn ship_at(&self, location: Coord) -> Option<&Ship> {
        let (row, column) = location;
        if row < FIELD_SIZE && column < FIELD_SIZE {
            self.field[row][column].map(|i| &self.ships[i])
        } else {
            None
        }
    }

    /// Returns `true` once every ship is drowned.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_drowned)
    }

    fn validate(&self) -> Result<(), FieldError> {
        self.validate_fleet()?;
        self.validate_spacing()
    }

    /// Fleet composition: 10 distinct ships, per-class counts per
    /// `FLEET`. The first mismatching class determines the error.
    fn validate_fleet(&self) -> Result<(), FieldError> {
        if self.ships.len() != FLEET_SIZE {
            return Err(FieldError::InvalidField(FieldViolation::FleetSize {
                found: self.ships.len(),
            }));
        }
        for rule in FLEET.iter() {
            let found = self.ships.iter().filter(|s| s.len() == rule.size()).count();
            if found != rule.count() {
                return Err(FieldError::InvalidField(FieldViolation::ShipCount {
                    expected: rule.count(),
                    found,
                    label: rule.label(),
                }));
            }
        }
        Ok(())
    }

    /// Spacing: no ship's 3×3 dilation may touch another ship's cells.
    fn validate_spacing(&self) -> Result<(), FieldError> {
        let mut masks: Vec<Grid> = Vec::with_capacity(self.ships.len());
        let mut union = Grid::new();
        for ship in &self.ships {
            let mask = Grid::from_cells(ship.decks().iter().map(|d| (d.row, d.column)))?;
            union |= mask;
            masks.push(mask);
        }
        for mask in &masks {
            let others = union & !*mask;
            if !(mask.dilated() & others).is_empty() {
                return Err(FieldError::InvalidField(FieldViolation::NeighboringShips));
            }
        }
        Ok(())
    }

    /// Dump the field to stdout, one glyph per cell.
    #[cfg(feature = "std")]
    pub fn print_field(&self) {
        std::print!("{}", self);
    }
}

/// Renders the field row by row: `~` empty, `x` cell of a drowned ship,
/// `□` alive deck, `*` dead deck of a ship still afloat.
impl fmt::Display for Battleship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..FIELD_SIZE {
            for column in 0..FIELD_SIZE {
                let glyph = match self.field[row][column] {
                    None => '~',
                    Some(i) => {
                        let ship = &self.ships[i];
                        if ship.is_drowned() {
                            'x'
                        } else if ship.deck(row, column).map_or(false, |d| d.is_alive()) {
                            '\u{25A1}'
                        } else {
                            '*'
                        }
                    }
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Battleship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Battleship {{ ships: {}, field:", self.ships.len())?;
        write!(f, "{}", self)?;
        write!(f, "}}")
    }
}
