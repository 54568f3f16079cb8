// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Automatic slot suggestion.

use crate::error::CoreError;
use shelfgrid_domain::{Coordinate, GroupBound, Layout, WarehouseId, validate_coordinate};
use std::collections::BTreeSet;
use tracing::debug;

/// Suggests free slots for a number of items.
///
/// Implementations must return exactly `count` distinct coordinates, none of
/// which appear in `excluding`, or fail. Callers check this with
/// [`verify_suggestions`] rather than trusting it.
pub trait AutoAssigner {
    /// Suggests `count` free slots in a warehouse.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InsufficientCapacity` if fewer than `count` free
    /// slots exist, or any other error the implementation encounters.
    fn suggest(
        &self,
        warehouse: &WarehouseId,
        count: usize,
        excluding: &BTreeSet<Coordinate>,
    ) -> Result<Vec<Coordinate>, CoreError>;
}

/// Checks an auto-assigner's answer against its contract.
///
/// # Arguments
///
/// * `layout` - The layout the suggestions must fit
/// * `group_bound` - Exclusive bound for the group axis, if known
/// * `count` - The number of slots requested
/// * `excluding` - Slots that must not be suggested
/// * `suggestions` - The assigner's answer
///
/// # Errors
///
/// Returns `CoreError::InsufficientCapacity` if the answer is short, or
/// `CoreError::AssignerContractViolation` if it is too long, names a slot
/// outside the layout, names an excluded slot, or repeats a slot.
pub fn verify_suggestions(
    layout: &Layout,
    group_bound: GroupBound,
    count: usize,
    excluding: &BTreeSet<Coordinate>,
    suggestions: &[Coordinate],
) -> Result<(), CoreError> {
    if suggestions.len() < count {
        return Err(CoreError::InsufficientCapacity {
            requested: count,
            available: suggestions.len(),
        });
    }
    if suggestions.len() > count {
        return Err(CoreError::AssignerContractViolation {
            reason: format!(
                "{} suggestion(s) returned for {count} item(s)",
                suggestions.len()
            ),
        });
    }

    let mut seen: BTreeSet<Coordinate> = BTreeSet::new();
    for coordinate in suggestions {
        validate_coordinate(layout, coordinate, group_bound).map_err(|err| {
            CoreError::AssignerContractViolation {
                reason: err.to_string(),
            }
        })?;
        if excluding.contains(coordinate) {
            return Err(CoreError::AssignerContractViolation {
                reason: format!("suggested slot {coordinate:?} is already taken"),
            });
        }
        if !seen.insert(*coordinate) {
            return Err(CoreError::AssignerContractViolation {
                reason: format!("suggested slot {coordinate:?} more than once"),
            });
        }
    }

    Ok(())
}

/// Picks the first free slots in scan order over a layout snapshot.
///
/// Slots are visited floor, row, column, group, then depth, so suggestions
/// fill one cell from the front before moving to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstFitAssigner {
    layout: Layout,
    groups: usize,
}

impl FirstFitAssigner {
    /// Creates an assigner over a layout.
    ///
    /// # Arguments
    ///
    /// * `layout` - The layout to scan
    /// * `group_bound` - Bays per cell; `None` scans group 0 only
    #[must_use]
    pub fn new(layout: Layout, group_bound: GroupBound) -> Self {
        Self {
            layout,
            groups: group_bound.unwrap_or(1),
        }
    }

    fn free_slots<'a>(
        &'a self,
        excluding: &'a BTreeSet<Coordinate>,
    ) -> impl Iterator<Item = Coordinate> + 'a {
        let groups: usize = self.groups;
        self.layout
            .floors()
            .iter()
            .enumerate()
            .flat_map(move |(floor_index, floor)| {
                floor
                    .matrix()
                    .iter()
                    .enumerate()
                    .flat_map(move |(row, cells)| {
                        cells.iter().enumerate().flat_map(move |(column, &slots)| {
                            (0..groups).flat_map(move |group| {
                                (0..usize::try_from(slots).unwrap_or_default()).map(move |depth| {
                                    Coordinate::new(floor_index, row, column, group, depth)
                                })
                            })
                        })
                    })
            })
            .filter(move |coordinate| !excluding.contains(coordinate))
    }
}

impl AutoAssigner for FirstFitAssigner {
    fn suggest(
        &self,
        warehouse: &WarehouseId,
        count: usize,
        excluding: &BTreeSet<Coordinate>,
    ) -> Result<Vec<Coordinate>, CoreError> {
        let suggestions: Vec<Coordinate> = self.free_slots(excluding).take(count).collect();
        debug!(
            warehouse = %warehouse,
            requested = count,
            found = suggestions.len(),
            "First-fit scan finished"
        );

        if suggestions.len() < count {
            return Err(CoreError::InsufficientCapacity {
                requested: count,
                available: suggestions.len(),
            });
        }
        Ok(suggestions)
    }
}
