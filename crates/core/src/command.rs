// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::selection::CellWrite;
use serde::{Deserialize, Serialize};

/// A command represents an editing intent as data only.
///
/// Commands are the only way to request layout changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Resize every floor's grid.
    Resize {
        /// The new row count.
        rows: usize,
        /// The new column count.
        columns: usize,
    },
    /// Change one floor's maximum height, clamping its cells.
    SetFloorHeight {
        /// The floor to change.
        floor: usize,
        /// The new height.
        height: u32,
    },
    /// Append an empty floor.
    AddFloor,
    /// Remove a floor.
    RemoveFloor {
        /// The floor to remove.
        floor: usize,
    },
    /// Switch the floor that selection gestures apply to.
    SelectFloor {
        /// The floor to edit.
        floor: usize,
    },
    /// Change the slot count written by add gestures.
    SetShelfCount {
        /// The new count.
        count: u32,
    },
    /// Write a batch of cell values produced by a selection gesture.
    WriteCells {
        /// The floor the cells belong to.
        floor: usize,
        /// The writes, in the order they happened.
        writes: Vec<CellWrite>,
    },
}

impl Command {
    /// Returns the journal name of this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Resize { .. } => "Resize",
            Self::SetFloorHeight { .. } => "SetFloorHeight",
            Self::AddFloor => "AddFloor",
            Self::RemoveFloor { .. } => "RemoveFloor",
            Self::SelectFloor { .. } => "SelectFloor",
            Self::SetShelfCount { .. } => "SetShelfCount",
            Self::WriteCells { .. } => "WriteCells",
        }
    }
}
