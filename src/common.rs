//! Common types: coordinates, fire outcomes and field errors.

use core::fmt;

use crate::bitgrid::GridError;
use crate::config::FLEET_SIZE;

/// A board position as `(row, column)`.
pub type Coord = (usize, usize);

/// Outcome of a fire command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireResult {
    /// No ship at the targeted cell.
    Miss,
    /// A deck was hit but the ship is still afloat.
    Hit,
    /// The shot left the ship with no alive decks.
    Sunk,
}

impl fmt::Display for FireResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireResult::Miss => write!(f, "Miss!"),
            FireResult::Hit => write!(f, "Hit!"),
            FireResult::Sunk => write!(f, "Sunk!"),
        }
    }
}

/// A post-placement validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldViolation {
    /// The field does not hold exactly `FLEET_SIZE` distinct ships.
    FleetSize { found: usize },
    /// Wrong number of ships of one deck size.
    ShipCount {
        expected: usize,
        found: usize,
        label: &'static str,
    },
    /// Two distinct ships occupy touching cells.
    NeighboringShips,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldViolation::FleetSize { found } => {
                write!(
                    f,
                    "the total number of the ships should be {}, found {}",
                    FLEET_SIZE, found
                )
            }
            FieldViolation::ShipCount {
                expected, label, ..
            } => {
                write!(
                    f,
                    "there should be {} {}-deck ship{}",
                    expected,
                    label,
                    if *expected != 1 { "s" } else { "" }
                )
            }
            FieldViolation::NeighboringShips => {
                write!(f, "ships shouldn't be located in the neighboring cells")
            }
        }
    }
}

/// Errors returned while building a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Ship endpoints share neither a row nor a column.
    InvalidCoordinates { start: Coord, end: Coord },
    /// A ship deck falls outside the field.
    ShipOutOfBounds { row: usize, column: usize },
    /// Two ships claim the same cell.
    CellAlreadyTaken { row: usize, column: usize },
    /// Placement finished but the field breaks a fleet rule.
    InvalidField(FieldViolation),
    /// The random generator ran out of attempts.
    UnableToPlaceFleet,
    /// Underlying grid error.
    Grid(GridError),
}

impl From<GridError> for FieldError {
    fn from(err: GridError) -> Self {
        FieldError::Grid(err)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidCoordinates { start, end } => {
                write!(
                    f,
                    "ship endpoints {:?} and {:?} share neither row nor column",
                    start, end
                )
            }
            FieldError::ShipOutOfBounds { row, column } => {
                write!(f, "ship deck ({}, {}) is outside the field", row, column)
            }
            FieldError::CellAlreadyTaken { row, column } => {
                write!(f, "cell ({}, {}) is already taken", row, column)
            }
            FieldError::InvalidField(violation) => write!(f, "{}", violation),
            FieldError::UnableToPlaceFleet => {
                write!(f, "unable to place a rule-satisfying fleet")
            }
            FieldError::Grid(err) => write!(f, "grid error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}
