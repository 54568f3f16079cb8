// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Picking slots for the items of one multi-item operation.
//!
//! Each item has an entry in the working list. Picking a slot for an item
//! reserves it, so no two items of the operation can share a slot and no
//! item can land on a committed slot. Nothing here is persisted; the host
//! commits the finished list however it sees fit.

use crate::assigner::{AutoAssigner, verify_suggestions};
use crate::color::{ColorAssignment, project_colors};
use crate::error::CoreError;
use crate::occupancy::OccupancyIndex;
use shelfgrid_domain::{Coordinate, GroupBound, Layout, WarehouseId, validate_coordinate};
use std::collections::BTreeSet;
use tracing::debug;

/// The working list of a multi-item operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSession {
    slots: Vec<Option<Coordinate>>,
    active: Option<usize>,
    occupancy: OccupancyIndex,
    group_bound: GroupBound,
}

impl AssignmentSession {
    /// Starts an assignment for `item_count` items with nothing picked.
    ///
    /// Any reservations already held by `occupancy` are dropped.
    ///
    /// # Arguments
    ///
    /// * `item_count` - Number of items to place
    /// * `occupancy` - The committed occupancy of the warehouse
    /// * `group_bound` - Bays per cell, if known
    #[must_use]
    pub fn new(item_count: usize, mut occupancy: OccupancyIndex, group_bound: GroupBound) -> Self {
        occupancy.clear_reservations();
        Self {
            slots: vec![None; item_count],
            active: if item_count > 0 { Some(0) } else { None },
            occupancy,
            group_bound,
        }
    }

    /// The working list.
    #[must_use]
    pub fn slots(&self) -> &[Option<Coordinate>] {
        &self.slots
    }

    /// The item currently being picked.
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// The occupancy including this operation's reservations.
    #[must_use]
    pub const fn occupancy(&self) -> &OccupancyIndex {
        &self.occupancy
    }

    /// The bays-per-cell bound picks are checked against.
    #[must_use]
    pub const fn group_bound(&self) -> GroupBound {
        self.group_bound
    }

    /// Returns `true` once every item has a slot.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Makes `index` the item being picked.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ItemNotFound` for an unknown index.
    pub fn set_active(&mut self, index: usize) -> Result<(), CoreError> {
        self.check_index(index)?;
        self.active = Some(index);
        Ok(())
    }

    /// Picks a slot for an item.
    ///
    /// The item's previous slot, if any, is released and returned. Picking
    /// the slot the item already holds changes nothing.
    ///
    /// # Arguments
    ///
    /// * `index` - The item
    /// * `coordinate` - The slot to pick
    /// * `layout` - The layout the slot must exist in
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The item does not exist
    /// - The coordinate is outside the layout
    /// - The slot is occupied or reserved by another item
    pub fn assign(
        &mut self,
        index: usize,
        coordinate: Coordinate,
        layout: &Layout,
    ) -> Result<Option<Coordinate>, CoreError> {
        self.check_index(index)?;
        validate_coordinate(layout, &coordinate, self.group_bound)?;

        let previous: Option<Coordinate> = self.slots[index];
        if previous == Some(coordinate) {
            return Ok(previous);
        }
        if self.occupancy.is_occupied(&coordinate) {
            return Err(CoreError::SlotConflict { coordinate });
        }

        if let Some(old) = previous {
            self.occupancy.release(&old);
        }
        self.occupancy.reserve(coordinate);
        self.slots[index] = Some(coordinate);

        debug!(index, ?coordinate, ?previous, "Item slot picked");
        Ok(previous)
    }

    /// Clears an item's slot, releasing its reservation.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ItemNotFound` for an unknown index.
    pub fn unassign(&mut self, index: usize) -> Result<Option<Coordinate>, CoreError> {
        self.check_index(index)?;
        let previous: Option<Coordinate> = self.slots[index].take();
        if let Some(old) = previous {
            self.occupancy.release(&old);
            debug!(index, coordinate = ?old, "Item slot cleared");
        }
        Ok(previous)
    }

    /// Fills every item without a slot using an auto-assigner.
    ///
    /// The assigner is told to avoid everything occupied or reserved, and its
    /// answer is verified before anything is reserved. Returns the
    /// `(item, slot)` pairs that were filled, in item order.
    ///
    /// # Errors
    ///
    /// Returns the assigner's error, or the verification error, leaving the
    /// working list unchanged.
    pub fn auto_assign<A: AutoAssigner>(
        &mut self,
        assigner: &A,
        warehouse: &WarehouseId,
        layout: &Layout,
    ) -> Result<Vec<(usize, Coordinate)>, CoreError> {
        let unassigned: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(index, _)| index)
            .collect();

        if unassigned.is_empty() {
            return Ok(Vec::new());
        }

        let excluding: BTreeSet<Coordinate> = self.occupancy.excluded();
        let suggestions: Vec<Coordinate> =
            assigner.suggest(warehouse, unassigned.len(), &excluding)?;
        verify_suggestions(
            layout,
            self.group_bound,
            unassigned.len(),
            &excluding,
            &suggestions,
        )?;

        let filled: Vec<(usize, Coordinate)> = unassigned.into_iter().zip(suggestions).collect();
        for &(index, coordinate) in &filled {
            self.occupancy.reserve(coordinate);
            self.slots[index] = Some(coordinate);
        }

        debug!(warehouse = %warehouse, filled = filled.len(), "Auto-assignment applied");
        Ok(filled)
    }

    /// Clears every pick that no longer fits `layout`.
    ///
    /// Called after the layout under an assignment changes shape. Returns the
    /// items that lost their slot.
    pub fn retain_valid(&mut self, layout: &Layout) -> Vec<usize> {
        let mut cleared: Vec<usize> = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let stale: Option<Coordinate> = slot
                .filter(|coordinate| validate_coordinate(layout, coordinate, self.group_bound).is_err());
            if let Some(coordinate) = stale {
                self.occupancy.release(&coordinate);
                *slot = None;
                cleared.push(index);
            }
        }
        if !cleared.is_empty() {
            debug!(?cleared, "Picks outside the new layout cleared");
        }
        cleared
    }

    /// The colour projection of the working list.
    #[must_use]
    pub fn colors(&self) -> Vec<ColorAssignment> {
        project_colors(&self.slots, self.active)
    }

    const fn check_index(&self, index: usize) -> Result<(), CoreError> {
        if index >= self.slots.len() {
            return Err(CoreError::ItemNotFound {
                index,
                item_count: self.slots.len(),
            });
        }
        Ok(())
    }
}
