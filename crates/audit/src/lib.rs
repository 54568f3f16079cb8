// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::{Deserialize, Serialize};
use shelfgrid_domain::{Layout, WarehouseId};

/// Represents whoever issued a layout edit.
///
/// The core does not authenticate anyone; an editor is an opaque label
/// supplied by the host (a user name, a terminal id, "system").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Editor {
    /// The identifier of the editor.
    pub id: String,
    /// The kind of editor (e.g., "user", "system", "import").
    pub kind: String,
}

impl Editor {
    /// Creates a new Editor.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier of the editor
    /// * `kind` - The kind of editor
    #[must_use]
    pub const fn new(id: String, kind: String) -> Self {
        Self { id, kind }
    }

    /// Editor used for changes the system makes on its own behalf.
    #[must_use]
    pub fn system() -> Self {
        Self::new(String::from("system"), String::from("system"))
    }
}

/// Represents the specific edit performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the action (e.g., "`Resize`", "`WriteCells`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A summary of a layout at one point in time.
///
/// Snapshots record shape and totals rather than the full matrices, which
/// keeps journal entries small while still showing what an edit changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Number of floors.
    pub floor_count: usize,
    /// Rows shared by every floor.
    pub rows: usize,
    /// Columns shared by every floor.
    pub columns: usize,
    /// Total slot count across all floors.
    pub capacity: u64,
    /// The floor being edited.
    pub current_floor: usize,
}

impl LayoutSnapshot {
    /// Summarises a layout.
    ///
    /// # Arguments
    ///
    /// * `layout` - The layout to summarise
    /// * `current_floor` - The floor being edited
    #[must_use]
    pub fn of(layout: &Layout, current_floor: usize) -> Self {
        Self {
            floor_count: layout.floor_count(),
            rows: layout.rows(),
            columns: layout.columns(),
            capacity: layout.capacity(),
            current_floor,
        }
    }
}

impl std::fmt::Display for LayoutSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "floors={},rows={},columns={},capacity={},current_floor={}",
            self.floor_count, self.rows, self.columns, self.capacity, self.current_floor
        )
    }
}

/// An immutable journal entry describing one layout transition.
///
/// Every successful transition produces exactly one event recording:
/// - Which warehouse was edited
/// - Who issued the edit (editor)
/// - What was done (action)
/// - The layout summary before and after
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The warehouse whose layout changed.
    pub warehouse: WarehouseId,
    /// The editor who issued the change.
    pub editor: Editor,
    /// The action that was performed.
    pub action: Action,
    /// The layout before the transition.
    pub before: LayoutSnapshot,
    /// The layout after the transition.
    pub after: LayoutSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `warehouse` - The warehouse whose layout changed
    /// * `editor` - The editor who issued the change
    /// * `action` - The action that was performed
    /// * `before` - The layout before the transition
    /// * `after` - The layout after the transition
    #[must_use]
    pub const fn new(
        warehouse: WarehouseId,
        editor: Editor,
        action: Action,
        before: LayoutSnapshot,
        after: LayoutSnapshot,
    ) -> Self {
        Self {
            warehouse,
            editor,
            action,
            before,
            after,
        }
    }
}
