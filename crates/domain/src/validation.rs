// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::layout::{Floor, Layout, check_floor};
use crate::types::{Coordinate, GroupBound};

/// Validates the structural invariants of a layout.
///
/// This is run on every layout that enters the system from outside (for
/// example when loaded from storage), since deserialization cannot enforce
/// the invariants by itself.
///
/// # Arguments
///
/// * `layout` - The layout to validate
///
/// # Errors
///
/// Returns an error if:
/// - The layout has no floors
/// - The declared dimensions are zero
/// - A floor's matrix dimensions differ from the declared rows/columns
/// - A floor's height is zero
/// - A cell holds more slots than its floor's height
pub fn validate_layout(layout: &Layout) -> Result<(), DomainError> {
    if layout.floors().is_empty() {
        return Err(DomainError::EmptyLayout);
    }

    if layout.rows() == 0 || layout.columns() == 0 {
        return Err(DomainError::InvalidDimensions {
            rows: layout.rows(),
            columns: layout.columns(),
        });
    }

    for (index, floor) in layout.floors().iter().enumerate() {
        check_floor(index, floor, layout.rows(), layout.columns())?;
    }

    Ok(())
}

/// Validates that a coordinate addresses an existing slot.
///
/// The `group` axis is only checked when a bound is supplied; the grid
/// itself says nothing about how many bays share a cell.
///
/// # Arguments
///
/// * `layout` - The layout the coordinate should belong to
/// * `coordinate` - The coordinate to check
/// * `group_bound` - Exclusive upper bound for `group`, if known
///
/// # Errors
///
/// Returns `DomainError::CoordinateOutOfBounds` if:
/// - The floor does not exist
/// - The row or column is outside the grid
/// - The depth is not below the cell's capacity
/// - The group is not below the supplied bound
pub fn validate_coordinate(
    layout: &Layout,
    coordinate: &Coordinate,
    group_bound: GroupBound,
) -> Result<(), DomainError> {
    let floor: &Floor =
        layout
            .floor(coordinate.floor)
            .map_err(|_| DomainError::CoordinateOutOfBounds {
                reason: format!(
                    "floor {} does not exist (layout has {} floor(s))",
                    coordinate.floor,
                    layout.floor_count()
                ),
            })?;

    let capacity: u32 =
        floor
            .cell(coordinate.cell())
            .ok_or_else(|| DomainError::CoordinateOutOfBounds {
                reason: format!(
                    "cell ({}, {}) is outside the {}x{} grid",
                    coordinate.row,
                    coordinate.column,
                    layout.rows(),
                    layout.columns()
                ),
            })?;

    let within_depth: bool = u32::try_from(coordinate.depth).is_ok_and(|depth| depth < capacity);
    if !within_depth {
        return Err(DomainError::CoordinateOutOfBounds {
            reason: format!(
                "depth {} is not below the capacity {} of cell ({}, {}) on floor {}",
                coordinate.depth, capacity, coordinate.row, coordinate.column, coordinate.floor
            ),
        });
    }

    if let Some(bound) = group_bound.filter(|&bound| coordinate.group >= bound) {
        return Err(DomainError::CoordinateOutOfBounds {
            reason: format!(
                "group {} is not below the bay count {bound}",
                coordinate.group
            ),
        });
    }

    Ok(())
}
