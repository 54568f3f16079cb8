// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};
use shelfgrid::{ColorAssignment, GestureEffect, Modifiers, Rect};
use shelfgrid_audit::AuditEvent;
use shelfgrid_domain::{Coordinate, GroupBound, Layout, WarehouseId};
use time::OffsetDateTime;

/// API request to create a fresh single-floor layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLayoutRequest {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Floor height; the server default is used when absent.
    #[serde(default)]
    pub height: Option<u32>,
}

/// API response describing a stored layout version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRecordResponse {
    /// The warehouse.
    pub warehouse: WarehouseId,
    /// The stored version.
    pub version: u64,
    /// When the version was written.
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,
    /// Number of floors.
    pub floor_count: usize,
    /// Shared row count.
    pub rows: usize,
    /// Shared column count.
    pub columns: usize,
    /// Total slots across all floors.
    pub capacity: u64,
}

/// Everything a renderer needs to draw the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutView {
    /// The warehouse.
    pub warehouse: WarehouseId,
    /// The layout under edit, including unsaved changes.
    pub layout: Layout,
    /// The floor being edited.
    pub current_floor: usize,
    /// The slot count add gestures write.
    pub shelf_count: u32,
    /// The highlighted rectangle of a range gesture.
    pub selection: Option<Rect>,
    /// Whether a gesture is in progress.
    pub gesture_active: bool,
    /// The stored version the session is based on.
    pub version: u64,
    /// Committed occupancy.
    pub occupied: Vec<Coordinate>,
}

/// API response after applying a layout command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The journal entry for the change.
    pub event: AuditEvent,
    /// Items of an assignment in progress whose pick no longer fits.
    pub cleared_items: Vec<usize>,
    /// The editor after the change.
    pub view: LayoutView,
}

/// A pointer or keyboard event from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PointerEvent {
    /// The pointer was pressed on a cell.
    Down {
        /// The cell row.
        row: usize,
        /// The cell column.
        column: usize,
        /// Modifiers held at press time.
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// The pointer moved onto a cell.
    Enter {
        /// The cell row.
        row: usize,
        /// The cell column.
        column: usize,
    },
    /// The pointer was released.
    Up,
    /// The set of held modifiers changed.
    Modifiers {
        /// The modifiers now held.
        modifiers: Modifiers,
    },
}

/// API response to a pointer event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerResponse {
    /// What the event did.
    pub effect: GestureEffect,
    /// The journal entry, if the event wrote cells.
    pub event: Option<AuditEvent>,
    /// Items of an assignment in progress whose pick no longer fits.
    pub cleared_items: Vec<usize>,
}

/// API request to save the session's layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Overwrite whatever is stored instead of checking the version.
    #[serde(default)]
    pub force: bool,
}

/// API response after closing an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseSessionResponse {
    /// The warehouse.
    pub warehouse: WarehouseId,
    /// The stored version the session was last based on.
    pub version: u64,
    /// Changes made since the last save, now dropped.
    pub unsaved_changes: usize,
}

/// API request to begin a multi-item assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginAssignmentRequest {
    /// Number of items to place.
    pub item_count: usize,
    /// Bays per cell, if known.
    #[serde(default)]
    pub group_bound: GroupBound,
}

/// API request to pick or clear one item's slot.
///
/// Give a coordinate, or a scanned location code, or neither to clear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRequest {
    /// The slot as a coordinate.
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
    /// The slot as a location code.
    #[serde(default)]
    pub code: Option<String>,
}

/// API request to change the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetActiveRequest {
    /// The item to focus.
    pub index: usize,
}

/// One item of an assignment as shown to the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentItem {
    /// The item index.
    pub index: usize,
    /// The picked slot.
    pub coordinate: Option<Coordinate>,
    /// The picked slot's location code.
    pub code: Option<String>,
}

/// The state of an assignment in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentView {
    /// Every item, in order.
    pub items: Vec<AssignmentItem>,
    /// The item being picked.
    pub active: Option<usize>,
    /// Whether every item has a slot.
    pub complete: bool,
    /// The colour projection.
    pub colors: Vec<ColorAssignment>,
}

/// API response after an auto-assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoAssignResponse {
    /// The items that were filled.
    pub filled: Vec<AssignmentItem>,
    /// The assignment afterwards.
    pub assignment: AssignmentView,
}

/// API response for the colour projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorsResponse {
    /// Marked slots; anything absent is unmarked.
    pub colors: Vec<ColorAssignment>,
}

/// Query for formatting or parsing a location code.
///
/// Either `code` is given and parsed, or the coordinate fields are
/// formatted (missing fields render as `??`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeQuery {
    /// A code to parse.
    #[serde(default)]
    pub code: Option<String>,
    /// Floor index.
    #[serde(default)]
    pub floor: Option<usize>,
    /// Row index.
    #[serde(default)]
    pub row: Option<usize>,
    /// Column index.
    #[serde(default)]
    pub column: Option<usize>,
    /// Group index.
    #[serde(default)]
    pub group: Option<usize>,
    /// Depth index.
    #[serde(default)]
    pub depth: Option<usize>,
}

/// API response for a location code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeResponse {
    /// The formatted code.
    pub code: String,
    /// The coordinate, when every field is known.
    pub coordinate: Option<Coordinate>,
}
