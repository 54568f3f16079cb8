// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Upper bound on the `group` axis, supplied by whoever knows how many shelf
/// bays share a cell footprint. `None` leaves the axis unchecked.
pub type GroupBound = Option<usize>;

/// Identifies the warehouse a layout and its occupancy belong to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId {
    value: String,
}

impl WarehouseId {
    /// Creates a new `WarehouseId`.
    ///
    /// Surrounding whitespace is trimmed; case is preserved.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A `(row, column)` position on a single floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// The grid row.
    pub row: usize,
    /// The grid column.
    pub column: usize,
}

impl Cell {
    /// Creates a new `Cell`.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// The full address of one storage slot.
///
/// Equality, hashing and ordering consider all five fields; there is no
/// partial match between coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// The floor index.
    pub floor: usize,
    /// The grid row on that floor.
    pub row: usize,
    /// The grid column on that floor.
    pub column: usize,
    /// The shelf bay sharing the cell footprint.
    pub group: usize,
    /// The front-to-back slot within the bay.
    pub depth: usize,
}

impl Coordinate {
    /// Creates a new `Coordinate`.
    ///
    /// # Arguments
    ///
    /// * `floor` - The floor index
    /// * `row` - The grid row
    /// * `column` - The grid column
    /// * `group` - The shelf bay index
    /// * `depth` - The slot position within the bay
    #[must_use]
    pub const fn new(floor: usize, row: usize, column: usize, group: usize, depth: usize) -> Self {
        Self {
            floor,
            row,
            column,
            group,
            depth,
        }
    }

    /// Returns the grid cell this coordinate sits in.
    #[must_use]
    pub const fn cell(&self) -> Cell {
        Cell::new(self.row, self.column)
    }
}

/// A coordinate that is still being picked.
///
/// Fields are filled in one at a time while the user narrows down a
/// location. Missing fields stay missing; they never default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialCoordinate {
    /// The floor index, if chosen.
    pub floor: Option<usize>,
    /// The grid row, if chosen.
    pub row: Option<usize>,
    /// The grid column, if chosen.
    pub column: Option<usize>,
    /// The shelf bay index, if chosen.
    pub group: Option<usize>,
    /// The slot depth, if chosen.
    pub depth: Option<usize>,
}

impl PartialCoordinate {
    /// Creates an empty partial coordinate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            floor: None,
            row: None,
            column: None,
            group: None,
            depth: None,
        }
    }

    /// Sets the floor.
    #[must_use]
    pub const fn floor(mut self, floor: usize) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Sets the row.
    #[must_use]
    pub const fn row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Sets the column.
    #[must_use]
    pub const fn column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Sets the group.
    #[must_use]
    pub const fn group(mut self, group: usize) -> Self {
        self.group = Some(group);
        self
    }

    /// Sets the depth.
    #[must_use]
    pub const fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Returns `true` when every field has been chosen.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.floor.is_some()
            && self.row.is_some()
            && self.column.is_some()
            && self.group.is_some()
            && self.depth.is_some()
    }

    /// Builds the full coordinate, or `None` while any field is missing.
    #[must_use]
    pub const fn build(&self) -> Option<Coordinate> {
        match (self.floor, self.row, self.column, self.group, self.depth) {
            (Some(floor), Some(row), Some(column), Some(group), Some(depth)) => {
                Some(Coordinate::new(floor, row, column, group, depth))
            }
            _ => None,
        }
    }
}

impl From<Coordinate> for PartialCoordinate {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            floor: Some(coordinate.floor),
            row: Some(coordinate.row),
            column: Some(coordinate.column),
            group: Some(coordinate.group),
            depth: Some(coordinate.depth),
        }
    }
}
