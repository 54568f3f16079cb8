// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use shelfgrid_domain::Coordinate;

/// How the renderer marks a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTier {
    /// The slot of the item currently being picked.
    Focused,
    /// A slot picked for another item of the same operation.
    Reserved,
    /// Anything else.
    Unmarked,
}

/// The colour tier of one assigned slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAssignment {
    /// The slot.
    pub coordinate: Coordinate,
    /// Its tier.
    pub tier: ColorTier,
}

/// Projects the working list of an assignment onto colour tiers.
///
/// Every assigned entry is `Reserved` except the one at `active`, which is
/// `Focused`. Unassigned entries are skipped. The projection is rebuilt from
/// scratch each call, so it never carries stale tiers.
///
/// # Arguments
///
/// * `working` - Per-item coordinates, `None` where nothing is picked yet
/// * `active` - The index of the item being picked, if any
#[must_use]
pub fn project_colors(
    working: &[Option<Coordinate>],
    active: Option<usize>,
) -> Vec<ColorAssignment> {
    working
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            entry.map(|coordinate| ColorAssignment {
                coordinate,
                tier: if Some(index) == active {
                    ColorTier::Focused
                } else {
                    ColorTier::Reserved
                },
            })
        })
        .collect()
}

/// Looks up the tier of a coordinate in a projection.
///
/// Coordinates absent from the projection are `Unmarked`. If the same
/// coordinate appears more than once, `Focused` wins.
#[must_use]
pub fn tier_of(assignments: &[ColorAssignment], coordinate: &Coordinate) -> ColorTier {
    let mut tier: ColorTier = ColorTier::Unmarked;
    for assignment in assignments.iter().filter(|a| a.coordinate == *coordinate) {
        if assignment.tier == ColorTier::Focused {
            return ColorTier::Focused;
        }
        tier = assignment.tier;
    }
    tier
}
