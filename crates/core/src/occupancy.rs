// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Committed and tentative slot occupancy.
//!
//! The occupied set comes from storage and is read-only for an editing
//! session. The reserved set holds the slots picked for items of an
//! operation that has not been committed yet. A coordinate is taken if it
//! appears in either set, compared on all five fields.

use shelfgrid_domain::Coordinate;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Returns `true` if the coordinate is occupied or reserved.
#[must_use]
pub fn is_occupied(
    coordinate: &Coordinate,
    occupied: &BTreeSet<Coordinate>,
    reserved: &BTreeSet<Coordinate>,
) -> bool {
    occupied.contains(coordinate) || reserved.contains(coordinate)
}

/// Returns the reserved set with `coordinate` added.
///
/// Reserving an already reserved coordinate returns an equal set.
#[must_use]
pub fn reserve(coordinate: Coordinate, reserved: &BTreeSet<Coordinate>) -> BTreeSet<Coordinate> {
    let mut next: BTreeSet<Coordinate> = reserved.clone();
    next.insert(coordinate);
    next
}

/// Returns the reserved set with `coordinate` removed.
///
/// Releasing a coordinate that is not reserved returns an equal set.
#[must_use]
pub fn release(coordinate: &Coordinate, reserved: &BTreeSet<Coordinate>) -> BTreeSet<Coordinate> {
    let mut next: BTreeSet<Coordinate> = reserved.clone();
    next.remove(coordinate);
    next
}

/// Occupancy for one editing session: a shared committed set plus an owned
/// reservation overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyIndex {
    occupied: Arc<BTreeSet<Coordinate>>,
    reserved: BTreeSet<Coordinate>,
}

impl OccupancyIndex {
    /// Creates an index over a shared occupied set with no reservations.
    ///
    /// # Arguments
    ///
    /// * `occupied` - The committed occupied set
    #[must_use]
    pub const fn new(occupied: Arc<BTreeSet<Coordinate>>) -> Self {
        Self {
            occupied,
            reserved: BTreeSet::new(),
        }
    }

    /// Creates an index from an owned occupied set.
    #[must_use]
    pub fn from_occupied(occupied: BTreeSet<Coordinate>) -> Self {
        Self::new(Arc::new(occupied))
    }

    /// Returns `true` if the coordinate is occupied or reserved.
    #[must_use]
    pub fn is_occupied(&self, coordinate: &Coordinate) -> bool {
        is_occupied(coordinate, &self.occupied, &self.reserved)
    }

    /// Returns `true` if the coordinate is in the committed set.
    #[must_use]
    pub fn is_committed(&self, coordinate: &Coordinate) -> bool {
        self.occupied.contains(coordinate)
    }

    /// Returns `true` if the coordinate is tentatively reserved.
    #[must_use]
    pub fn is_reserved(&self, coordinate: &Coordinate) -> bool {
        self.reserved.contains(coordinate)
    }

    /// Reserves a coordinate. Returns `false` if it was already reserved.
    pub fn reserve(&mut self, coordinate: Coordinate) -> bool {
        self.reserved.insert(coordinate)
    }

    /// Releases a reservation. Returns `false` if it was not reserved.
    pub fn release(&mut self, coordinate: &Coordinate) -> bool {
        self.reserved.remove(coordinate)
    }

    /// The tentative reservations.
    #[must_use]
    pub const fn reserved(&self) -> &BTreeSet<Coordinate> {
        &self.reserved
    }

    /// The committed occupied set.
    #[must_use]
    pub fn occupied(&self) -> &BTreeSet<Coordinate> {
        &self.occupied
    }

    /// Every coordinate an auto-assigner must not return.
    #[must_use]
    pub fn excluded(&self) -> BTreeSet<Coordinate> {
        self.occupied.union(&self.reserved).copied().collect()
    }

    /// Drops every reservation.
    pub fn clear_reservations(&mut self) {
        self.reserved.clear();
    }
}
