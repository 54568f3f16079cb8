// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shelfgrid_audit::{AuditEvent, LayoutSnapshot};
use shelfgrid_domain::{DomainError, Floor, Layout, WarehouseId};

/// Shelf count used for new editing sessions.
pub const DEFAULT_SHELF_COUNT: u32 = 1;

/// The layout being edited, plus the editor's own settings.
///
/// State is exclusively owned by one editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    /// The warehouse this layout belongs to.
    pub warehouse: WarehouseId,
    /// The layout under edit.
    pub layout: Layout,
    /// The floor selection gestures apply to.
    pub current_floor: usize,
    /// The slot count written by add gestures (clamped to floor height on write).
    pub shelf_count: u32,
}

impl EditorState {
    /// Creates editor state for a freshly loaded layout.
    ///
    /// # Arguments
    ///
    /// * `warehouse` - The warehouse the layout belongs to
    /// * `layout` - The layout to edit
    #[must_use]
    pub const fn new(warehouse: WarehouseId, layout: Layout) -> Self {
        Self {
            warehouse,
            layout,
            current_floor: 0,
            shelf_count: DEFAULT_SHELF_COUNT,
        }
    }

    /// Returns the floor gestures currently apply to.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FloorNotFound` if the pointer is stale.
    pub fn current(&self) -> Result<&Floor, DomainError> {
        self.layout.floor(self.current_floor)
    }

    /// Summarises the state for the edit journal.
    #[must_use]
    pub fn to_snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::of(&self.layout, self.current_floor)
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: EditorState,
    /// The journal entry recording this transition.
    pub audit_event: AuditEvent,
}
