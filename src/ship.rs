//! Ships and their decks.

use alloc::vec::Vec;

use crate::common::{Coord, FieldError};

/// Orientation of a ship on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One fleet-composition rule: how many ships of a given deck count the
/// field must carry, plus the label used in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetRule {
    size: usize,
    count: usize,
    label: &'static str,
}

impl FleetRule {
    /// Create a new fleet rule.
    pub const fn new(size: usize, count: usize, label: &'static str) -> Self {
        Self { size, count, label }
    }

    /// Deck count of the ship class.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Required number of ships of this class.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Human label ("single", "double", ...).
    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// One cell of a ship. Decks are never removed, only flagged dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    pub row: usize,
    pub column: usize,
    alive: bool,
}

impl Deck {
    fn new(row: usize, column: usize) -> Self {
        Deck {
            row,
            column,
            alive: true,
        }
    }

    /// Whether the deck has not been hit yet.
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// A straight run of decks, drowned once every deck is dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    decks: Vec<Deck>,
    drowned: bool,
}

impl Ship {
    /// Build a ship spanning the inclusive range between `start` and
    /// `end`. The endpoints must share a row or a column; their order
    /// does not matter. Equal endpoints yield a 1-deck ship.
    pub fn new(start: Coord, end: Coord) -> Result<Self, FieldError> {
        let (start_row, start_column) = start;
        let (end_row, end_column) = end;

        let mut decks = Vec::new();
        if start_row == end_row {
            let (lo, hi) = ordered(start_column, end_column);
            for column in lo..=hi {
                decks.push(Deck::new(start_row, column));
            }
        } else if start_column == end_column {
            let (lo, hi) = ordered(start_row, end_row);
            for row in lo..=hi {
                decks.push(Deck::new(row, start_column));
            }
        } else {
            return Err(FieldError::InvalidCoordinates { start, end });
        }

        Ok(Ship {
            decks,
            drowned: false,
        })
    }

    /// The ship's decks in axis order.
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Number of decks.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Always false: a ship carries at least one deck.
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Whether every deck is dead.
    pub fn is_drowned(&self) -> bool {
        self.drowned
    }

    /// The deck at (`row`, `column`), if it belongs to this ship.
    pub fn deck(&self, row: usize, column: usize) -> Option<&Deck> {
        self.decks
            .iter()
            .find(|d| d.row == row && d.column == column)
    }

    /// Orientation of the run. A single deck counts as horizontal.
    pub fn orientation(&self) -> Orientation {
        match self.decks.as_slice() {
            [first, second, ..] if first.column == second.column => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }

    /// Marks the deck at (`row`, `column`) dead and reports whether the
    /// ship is now drowned. Callers resolve the target to this ship
    /// before firing; a coordinate outside the ship breaks that
    /// contract. Re-firing a dead deck keeps reporting the drowned
    /// state.
    pub fn fire(&mut self, row: usize, column: usize) -> bool {
        debug_assert!(
            self.deck(row, column).is_some(),
            "fired at ({}, {}) which is not a deck of this ship",
            row,
            column
        );
        if let Some(deck) = self
            .decks
            .iter_mut()
            .find(|d| d.row == row && d.column == column)
        {
            deck.alive = false;
        }
        if self.decks.iter().all(|d| !d.alive) {
            self.drowned = true;
        }
        self.drowned
    }
}

#[inline]
fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
