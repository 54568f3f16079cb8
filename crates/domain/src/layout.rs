// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-floor capacity grids.
//!
//! Every floor is a `rows x columns` matrix of slot counts bounded by the
//! floor's height. All floors of a layout share the same dimensions, and the
//! only way to change them is [`Layout::resize`], which rewrites every floor
//! at once.
//!
//! Layout operations take `&self` and return a new value, so a rejected
//! operation leaves the original layout untouched.

use crate::address::MAX_COLUMNS;
use crate::error::DomainError;
use crate::types::Cell;
use serde::{Deserialize, Serialize};

/// Height given to floors created by [`Layout::add_floor`].
pub const DEFAULT_FLOOR_HEIGHT: u32 = 3;

/// One layer of the warehouse grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    /// Maximum number of slots any cell on this floor may hold.
    height: u32,
    /// Slot counts, indexed `[row][column]`.
    matrix: Vec<Vec<u32>>,
}

impl Floor {
    /// Creates an all-zero floor.
    ///
    /// # Errors
    ///
    /// Returns an error if `height` is zero or either dimension is zero.
    pub fn new(rows: usize, columns: usize, height: u32) -> Result<Self, DomainError> {
        validate_height(height)?;
        validate_dimensions(rows, columns)?;
        Ok(Self {
            height,
            matrix: vec![vec![0; columns]; rows],
        })
    }

    /// Creates a floor from an existing matrix.
    ///
    /// The matrix is checked as a standalone floor, so dimension and height
    /// errors report floor index 0.
    ///
    /// # Errors
    ///
    /// Returns an error if `height` is zero, the matrix is empty or ragged,
    /// or any cell exceeds `height`.
    pub fn from_matrix(height: u32, matrix: Vec<Vec<u32>>) -> Result<Self, DomainError> {
        validate_height(height)?;
        let rows: usize = matrix.len();
        let columns: usize = matrix.first().map_or(0, Vec::len);
        validate_dimensions(rows, columns)?;

        let floor: Self = Self { height, matrix };
        check_floor(0, &floor, rows, columns)?;
        Ok(floor)
    }

    /// Returns the floor's maximum height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.matrix.len()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.matrix.first().map_or(0, Vec::len)
    }

    /// Returns the raw slot-count matrix.
    #[must_use]
    pub fn matrix(&self) -> &[Vec<u32>] {
        &self.matrix
    }

    /// Returns the slot count of a cell, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, cell: Cell) -> Option<u32> {
        self.matrix
            .get(cell.row)
            .and_then(|row| row.get(cell.column))
            .copied()
    }

    /// Checks that a cell lies inside the grid.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellOutOfBounds` otherwise.
    pub fn check_cell(&self, cell: Cell) -> Result<(), DomainError> {
        if cell.row < self.rows() && cell.column < self.columns() {
            Ok(())
        } else {
            Err(DomainError::CellOutOfBounds {
                row: cell.row,
                column: cell.column,
                rows: self.rows(),
                columns: self.columns(),
            })
        }
    }

    /// Writes a slot count, clamped to the floor height.
    ///
    /// Returns the value actually stored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellOutOfBounds` if the cell is outside the grid.
    pub fn write_clamped(&mut self, cell: Cell, value: u32) -> Result<u32, DomainError> {
        self.check_cell(cell)?;
        let stored: u32 = value.min(self.height);
        self.matrix[cell.row][cell.column] = stored;
        Ok(stored)
    }

    /// Total number of slots on this floor.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.matrix
            .iter()
            .flatten()
            .map(|&value| u64::from(value))
            .sum()
    }

    fn resized(&self, rows: usize, columns: usize) -> Self {
        let mut matrix: Vec<Vec<u32>> = vec![vec![0; columns]; rows];
        for (new_row, old_row) in matrix.iter_mut().zip(&self.matrix) {
            for (new_cell, old_cell) in new_row.iter_mut().zip(old_row) {
                *new_cell = *old_cell;
            }
        }
        Self {
            height: self.height,
            matrix,
        }
    }

    fn with_height(&self, height: u32) -> Self {
        Self {
            height,
            matrix: self
                .matrix
                .iter()
                .map(|row| row.iter().map(|&value| value.min(height)).collect())
                .collect(),
        }
    }
}

/// An ordered, non-empty stack of floors with shared dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Rows shared by every floor.
    rows: usize,
    /// Columns shared by every floor.
    columns: usize,
    /// The floors, bottom first.
    floors: Vec<Floor>,
}

impl Layout {
    /// Creates a single-floor layout of zeros.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are zero, the column count exceeds
    /// the addressable range, or `height` is zero.
    pub fn new(rows: usize, columns: usize, height: u32) -> Result<Self, DomainError> {
        validate_column_count(columns)?;
        let floor: Floor = Floor::new(rows, columns, height)?;
        Ok(Self {
            rows,
            columns,
            floors: vec![floor],
        })
    }

    /// Builds a layout from existing floors.
    ///
    /// Dimensions are taken from the first floor and every other floor must
    /// match them.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or any floor fails
    /// [`validate_layout`](crate::validate_layout).
    pub fn from_floors(floors: Vec<Floor>) -> Result<Self, DomainError> {
        let first: &Floor = floors.first().ok_or(DomainError::EmptyLayout)?;
        let layout: Self = Self {
            rows: first.rows(),
            columns: first.columns(),
            floors,
        };
        crate::validation::validate_layout(&layout)?;
        Ok(layout)
    }

    /// Returns the shared row count.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the shared column count.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns all floors.
    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Returns the number of floors.
    #[must_use]
    pub const fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Returns one floor.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FloorNotFound` for an unknown index.
    pub fn floor(&self, floor: usize) -> Result<&Floor, DomainError> {
        let floor_count: usize = self.floors.len();
        self.floors
            .get(floor)
            .ok_or(DomainError::FloorNotFound { floor, floor_count })
    }

    /// Returns one floor for cell writes.
    ///
    /// A `Floor` exposes no way to change its dimensions, so handing out a
    /// mutable reference cannot break the shared-dimension invariant.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FloorNotFound` for an unknown index.
    pub fn floor_mut(&mut self, floor: usize) -> Result<&mut Floor, DomainError> {
        let floor_count: usize = self.floors.len();
        self.floors
            .get_mut(floor)
            .ok_or(DomainError::FloorNotFound { floor, floor_count })
    }

    /// Total number of slots across all floors.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.floors.iter().map(Floor::capacity).sum()
    }

    /// Resizes every floor to `rows x columns`.
    ///
    /// The top-left overlap of the old and new grids is preserved; every
    /// other cell is zero. Shrinking discards data outside the new bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or `columns` exceeds the
    /// number of labelable columns.
    pub fn resize(&self, rows: usize, columns: usize) -> Result<Self, DomainError> {
        validate_dimensions(rows, columns)?;
        validate_column_count(columns)?;

        Ok(Self {
            rows,
            columns,
            floors: self
                .floors
                .iter()
                .map(|floor| floor.resized(rows, columns))
                .collect(),
        })
    }

    /// Replaces a floor's height and clamps its cells down to it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHeight` if `height` is zero, or
    /// `DomainError::FloorNotFound` for an unknown floor.
    pub fn set_floor_height(&self, floor: usize, height: u32) -> Result<Self, DomainError> {
        validate_height(height)?;
        let target: &Floor = self.floor(floor)?;

        let mut next: Self = self.clone();
        next.floors[floor] = target.with_height(height);
        Ok(next)
    }

    /// Appends an all-zero floor of [`DEFAULT_FLOOR_HEIGHT`].
    #[must_use]
    pub fn add_floor(&self) -> Self {
        let mut next: Self = self.clone();
        next.floors.push(Floor {
            height: DEFAULT_FLOOR_HEIGHT,
            matrix: vec![vec![0; self.columns]; self.rows],
        });
        next
    }

    /// Removes a floor and re-clamps the caller's current-floor pointer.
    ///
    /// Returns the new layout and the adjusted pointer: if `current_floor`
    /// no longer exists it moves to the new last floor.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LastFloor` when only one floor remains, or
    /// `DomainError::FloorNotFound` for an unknown index.
    pub fn remove_floor(
        &self,
        floor: usize,
        current_floor: usize,
    ) -> Result<(Self, usize), DomainError> {
        if self.floors.len() == 1 {
            return Err(DomainError::LastFloor);
        }
        self.floor(floor)?;

        let mut next: Self = self.clone();
        next.floors.remove(floor);

        let last: usize = next.floors.len() - 1;
        Ok((next, current_floor.min(last)))
    }
}

/// Checks one floor against the layout's declared dimensions and its height.
pub(crate) fn check_floor(
    index: usize,
    floor: &Floor,
    rows: usize,
    columns: usize,
) -> Result<(), DomainError> {
    validate_height(floor.height)?;

    if floor.matrix.len() != rows {
        return Err(DomainError::DimensionMismatch {
            floor: index,
            expected_rows: rows,
            expected_columns: columns,
            actual_rows: floor.matrix.len(),
            actual_columns: floor.columns(),
        });
    }

    for (row, cells) in floor.matrix.iter().enumerate() {
        if cells.len() != columns {
            return Err(DomainError::DimensionMismatch {
                floor: index,
                expected_rows: rows,
                expected_columns: columns,
                actual_rows: floor.matrix.len(),
                actual_columns: cells.len(),
            });
        }
        if let Some((column, &value)) = cells
            .iter()
            .enumerate()
            .find(|&(_, &value)| value > floor.height)
        {
            return Err(DomainError::CellExceedsHeight {
                floor: index,
                row,
                column,
                value,
                height: floor.height,
            });
        }
    }

    Ok(())
}

const fn validate_height(height: u32) -> Result<(), DomainError> {
    if height < 1 {
        return Err(DomainError::InvalidHeight { height });
    }
    Ok(())
}

const fn validate_dimensions(rows: usize, columns: usize) -> Result<(), DomainError> {
    if rows == 0 || columns == 0 {
        return Err(DomainError::InvalidDimensions { rows, columns });
    }
    Ok(())
}

const fn validate_column_count(columns: usize) -> Result<(), DomainError> {
    if columns > MAX_COLUMNS {
        // The first unlabelable column is the one that would be added.
        return Err(DomainError::ColumnOutOfRange {
            column: MAX_COLUMNS,
        });
    }
    Ok(())
}
