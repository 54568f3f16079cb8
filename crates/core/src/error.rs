// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shelfgrid_domain::{Coordinate, DomainError};

/// Errors that can occur during layout transitions and slot assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The selected shelf count must be at least 1.
    InvalidShelfCount {
        /// The rejected count.
        count: u32,
    },
    /// The slot is already occupied or reserved by another item.
    SlotConflict {
        /// The contested coordinate.
        coordinate: Coordinate,
    },
    /// Not enough free slots to place every requested item.
    InsufficientCapacity {
        /// The number of slots requested.
        requested: usize,
        /// The number of free slots found.
        available: usize,
    },
    /// An auto-assigner returned a suggestion that breaks its contract.
    AssignerContractViolation {
        /// Description of the violation.
        reason: String,
    },
    /// The referenced item is not part of the assignment.
    ItemNotFound {
        /// The requested item index.
        index: usize,
        /// The number of items in the assignment.
        item_count: usize,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidShelfCount { count } => {
                write!(f, "Invalid shelf count {count}: must be at least 1")
            }
            Self::SlotConflict { coordinate } => {
                write!(
                    f,
                    "Slot (floor {}, row {}, column {}, group {}, depth {}) is already taken",
                    coordinate.floor,
                    coordinate.row,
                    coordinate.column,
                    coordinate.group,
                    coordinate.depth
                )
            }
            Self::InsufficientCapacity {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Insufficient capacity: {requested} slot(s) requested, {available} available"
                )
            }
            Self::AssignerContractViolation { reason } => {
                write!(f, "Auto-assigner contract violation: {reason}")
            }
            Self::ItemNotFound { index, item_count } => {
                write!(
                    f,
                    "Item {index} not found: assignment has {item_count} item(s)"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
