//! A fixed-size occupancy grid packed into an unsigned integer.
//!
//! `no_std` friendly and allocation free. An `N×N` grid is stored in the
//! bits of `T`, row-major; `N * N` must not exceed the bit width of `T`
//! (a 10×10 grid fits in a `u128`). Besides the usual set/get and bitwise
//! combinators, `dilated` grows every occupied cell to its 3×3
//! neighborhood, which is the primitive the ship-spacing rule and the
//! random fleet generator are built on.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is out of bounds [0..N).
    OutOfBounds { row: usize, column: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, column } => {
                write!(f, "grid index out of bounds: row={}, column={}", row, column)
            }
        }
    }
}

/// An N×N occupancy grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty grid (all cells clear).
    #[inline]
    pub fn new() -> Self {
        debug_assert!(N * N <= mem::size_of::<T>() * 8, "N*N exceeds bits of T");
        BitGrid { bits: T::zero() }
    }

    /// Number of occupied cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` when no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Reads the cell at (`row`, `column`).
    pub fn get(&self, row: usize, column: usize) -> Result<bool, GridError> {
        self.check_bounds(row, column)?;
        Ok(((self.bits >> (row * N + column)) & T::one()) != T::zero())
    }

    /// Marks the cell at (`row`, `column`) occupied.
    pub fn set(&mut self, row: usize, column: usize) -> Result<(), GridError> {
        self.check_bounds(row, column)?;
        self.bits = self.bits | (T::one() << (row * N + column));
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, row: usize, column: usize) -> Result<(), GridError> {
        if row >= N || column >= N {
            Err(GridError::OutOfBounds { row, column })
        } else {
            Ok(())
        }
    }

    /// Builds a grid from an iterator of `(row, column)` positions.
    pub fn from_cells<I>(iter: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new();
        for (row, column) in iter {
            grid.set(row, column)?;
        }
        Ok(grid)
    }

    /// Iterator over the occupied cells, row-major.
    #[inline]
    pub fn cells(&self) -> Cells<'_, T, N> {
        Cells { grid: self, idx: 0 }
    }

    /// Returns the grid with every occupied cell grown to its 3×3
    /// neighborhood, clamped at the edges. A ship mask dilated this way
    /// covers exactly the cells no other ship may occupy.
    pub fn dilated(&self) -> Self {
        let mut out = *self;
        for (row, column) in self.cells() {
            let r_hi = if row + 1 < N { row + 1 } else { row };
            let c_hi = if column + 1 < N { column + 1 } else { column };
            for r in row.saturating_sub(1)..=r_hi {
                for c in column.saturating_sub(1)..=c_hi {
                    out.bits = out.bits | (T::one() << (r * N + c));
                }
            }
        }
        out
    }

    #[inline]
    fn board_mask() -> T {
        if N * N == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << (N * N)) - T::one()
        }
    }
}

impl<T, const N: usize> Default for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the occupied cells of a grid.
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitGrid<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.grid.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        BitGrid {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        BitGrid {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

/// Inversion within the N×N board bounds.
impl<T, const N: usize> Not for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitGrid {
            bits: !self.bits & Self::board_mask(),
        }
    }
}

impl<T, const N: usize> fmt::Debug for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}>:", N)?;
        for row in 0..N {
            for column in 0..N {
                let cell = if ((self.bits >> (row * N + column)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '·'
                };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
