// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One editor's working copy of a warehouse layout.
//!
//! An `EditingSession` owns the editor state, the in-progress selection
//! gesture, the committed occupancy it was opened with, and an optional
//! multi-item assignment. Changes stay in the session until they are saved.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::input::{resolve_location, validate_group_bound, validate_item_count};
use crate::request_response::{
    AssignmentItem, AssignmentView, AutoAssignResponse, BeginAssignmentRequest,
    CloseSessionResponse, CommandResponse, LayoutView, PickRequest, PointerEvent, PointerResponse,
};
use shelfgrid::{
    AssignmentSession, ColorAssignment, Command, EditorState, FirstFitAssigner, GestureEffect,
    OccupancyIndex, SelectionSession, TransitionResult, apply,
};
use shelfgrid_audit::{AuditEvent, Editor};
use shelfgrid_domain::{Cell, Coordinate, Floor, GroupBound, Layout, WarehouseId, format_code};
use shelfgrid_persistence::LayoutRecord;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A warehouse layout open for editing.
#[derive(Debug, Clone)]
pub struct EditingSession {
    state: EditorState,
    selection: SelectionSession,
    occupancy: OccupancyIndex,
    version: u64,
    journal: Vec<AuditEvent>,
    saved_changes: usize,
    assignment: Option<AssignmentSession>,
}

impl EditingSession {
    /// Opens a session on a stored layout.
    ///
    /// # Arguments
    ///
    /// * `warehouse` - The warehouse being edited
    /// * `record` - The stored layout and its version
    /// * `occupied` - The committed occupancy of the warehouse
    #[must_use]
    pub fn new(warehouse: WarehouseId, record: LayoutRecord, occupied: BTreeSet<Coordinate>) -> Self {
        Self {
            state: EditorState::new(warehouse, record.layout),
            selection: SelectionSession::new(),
            occupancy: OccupancyIndex::new(Arc::new(occupied)),
            version: record.version,
            journal: Vec::new(),
            saved_changes: 0,
            assignment: None,
        }
    }

    /// The editor state.
    #[must_use]
    pub const fn state(&self) -> &EditorState {
        &self.state
    }

    /// The stored version this session is based on.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Every change applied since the session was opened, oldest first.
    #[must_use]
    pub fn journal(&self) -> &[AuditEvent] {
        &self.journal
    }

    /// The assignment in progress, if any.
    #[must_use]
    pub const fn assignment(&self) -> Option<&AssignmentSession> {
        self.assignment.as_ref()
    }

    /// Records that the session's layout was stored as `record`.
    pub fn mark_saved(&mut self, record: &LayoutRecord) {
        self.version = record.version;
        self.saved_changes = self.journal.len();
        info!(
            warehouse = %self.state.warehouse,
            version = record.version,
            changes = self.journal.len(),
            "Layout saved"
        );
    }

    /// Changes applied since the last save.
    #[must_use]
    pub fn unsaved_changes(&self) -> usize {
        self.journal.len() - self.saved_changes
    }

    /// Ends the session, dropping any unsaved changes.
    #[must_use]
    pub fn close(self) -> CloseSessionResponse {
        let unsaved_changes: usize = self.unsaved_changes();
        if unsaved_changes > 0 {
            warn!(
                warehouse = %self.state.warehouse,
                unsaved_changes,
                "Closing session with unsaved changes"
            );
        }
        info!(warehouse = %self.state.warehouse, version = self.version, "Session closed");
        CloseSessionResponse {
            warehouse: self.state.warehouse,
            version: self.version,
            unsaved_changes,
        }
    }

    /// Renders the session for the renderer.
    #[must_use]
    pub fn view(&self) -> LayoutView {
        LayoutView {
            warehouse: self.state.warehouse.clone(),
            layout: self.state.layout.clone(),
            current_floor: self.state.current_floor,
            shelf_count: self.state.shelf_count,
            selection: self.selection.selection(),
            gesture_active: self.selection.is_active(),
            version: self.version,
            occupied: self.occupancy.occupied().iter().copied().collect(),
        }
    }

    /// Applies a layout command.
    ///
    /// Any command other than a shelf-count change or a cell write abandons
    /// the gesture in progress. A command that reshapes the layout also
    /// clears assignment picks that no longer fit.
    ///
    /// # Errors
    ///
    /// Returns the translated core error; the session is unchanged.
    pub fn execute(&mut self, command: Command, editor: Editor) -> Result<CommandResponse, ApiError> {
        let reshapes: bool = !matches!(
            command,
            Command::SetShelfCount { .. } | Command::SelectFloor { .. }
        );
        let moves_floor: bool = !matches!(
            command,
            Command::SetShelfCount { .. } | Command::WriteCells { .. }
        );

        let event: AuditEvent = self.commit(command, editor)?;

        if moves_floor {
            self.selection.reset();
        }
        let cleared_items: Vec<usize> = match self.assignment.as_mut() {
            Some(assignment) if reshapes => assignment.retain_valid(&self.state.layout),
            _ => Vec::new(),
        };

        Ok(CommandResponse {
            event,
            cleared_items,
            view: self.view(),
        })
    }

    /// Delivers a pointer or modifier event to the selection gesture.
    ///
    /// The gesture runs against a scratch copy of the current floor; any
    /// cells it writes are then committed as one `WriteCells` command, and
    /// assignment picks on cells that lost their slots are cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is outside the floor; nothing changes.
    pub fn pointer(&mut self, event: PointerEvent, editor: Editor) -> Result<PointerResponse, ApiError> {
        let floor: usize = self.state.current_floor;
        let shelf_count: u32 = self.state.shelf_count;
        let mut scratch: Floor = self
            .state
            .current()
            .map_err(translate_domain_error)?
            .clone();

        let effect: GestureEffect = match event {
            PointerEvent::Down {
                row,
                column,
                modifiers,
            } => self
                .selection
                .pointer_down(&mut scratch, Cell::new(row, column), modifiers, shelf_count),
            PointerEvent::Enter { row, column } => {
                self.selection
                    .pointer_enter(&mut scratch, Cell::new(row, column), shelf_count)
            }
            PointerEvent::Up => self.selection.pointer_up(&mut scratch, shelf_count),
            PointerEvent::Modifiers { modifiers } => {
                self.selection
                    .modifiers_changed(&mut scratch, modifiers, shelf_count)
            }
        }
        .map_err(|err| {
            warn!(warehouse = %self.state.warehouse, error = %err, "Pointer event rejected");
            translate_core_error(err)
        })?;

        if effect.writes.is_empty() {
            return Ok(PointerResponse {
                effect,
                event: None,
                cleared_items: Vec::new(),
            });
        }

        let command: Command = Command::WriteCells {
            floor,
            writes: effect.writes.clone(),
        };
        let event: AuditEvent = self.commit(command, editor)?;
        let cleared_items: Vec<usize> = self
            .assignment
            .as_mut()
            .map(|assignment| assignment.retain_valid(&self.state.layout))
            .unwrap_or_default();

        Ok(PointerResponse {
            effect,
            event: Some(event),
            cleared_items,
        })
    }

    /// Starts a multi-item assignment, replacing any in progress.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an unusable item count or a
    /// group bound of zero.
    pub fn begin_assignment(
        &mut self,
        request: BeginAssignmentRequest,
    ) -> Result<AssignmentView, ApiError> {
        let item_count: usize = validate_item_count(request.item_count)?;
        let group_bound: GroupBound = validate_group_bound(request.group_bound)?;
        if self.assignment.is_some() {
            debug!(warehouse = %self.state.warehouse, "Replacing assignment in progress");
        }

        self.assignment = Some(AssignmentSession::new(
            item_count,
            self.occupancy.clone(),
            group_bound,
        ));
        info!(warehouse = %self.state.warehouse, item_count, "Assignment started");
        self.assignment_view()
    }

    /// Picks, re-picks or clears the slot of one item.
    ///
    /// # Errors
    ///
    /// Returns an error if no assignment is in progress, the input is
    /// malformed, the slot is outside the layout, or the slot is taken.
    pub fn pick(&mut self, index: usize, request: &PickRequest) -> Result<AssignmentView, ApiError> {
        let location: Option<Coordinate> =
            resolve_location(request.coordinate, request.code.as_deref())?;
        let layout: &Layout = &self.state.layout;
        let assignment: &mut AssignmentSession = self
            .assignment
            .as_mut()
            .ok_or_else(|| no_assignment(&self.state.warehouse))?;

        match location {
            Some(coordinate) => assignment.assign(index, coordinate, layout),
            None => assignment.unassign(index),
        }
        .map_err(translate_core_error)?;

        self.assignment_view()
    }

    /// Changes the item being picked.
    ///
    /// # Errors
    ///
    /// Returns an error if no assignment is in progress or the item is unknown.
    pub fn set_active(&mut self, index: usize) -> Result<AssignmentView, ApiError> {
        self.assignment_mut()?
            .set_active(index)
            .map_err(translate_core_error)?;
        self.assignment_view()
    }

    /// Fills every unpicked item with the first free slots.
    ///
    /// # Errors
    ///
    /// Returns an error if no assignment is in progress or there is not
    /// enough free capacity.
    pub fn auto_assign(&mut self) -> Result<AutoAssignResponse, ApiError> {
        let warehouse: WarehouseId = self.state.warehouse.clone();
        let layout: &Layout = &self.state.layout;
        let assignment: &mut AssignmentSession = self
            .assignment
            .as_mut()
            .ok_or_else(|| no_assignment(&warehouse))?;

        let assigner: FirstFitAssigner =
            FirstFitAssigner::new(layout.clone(), assignment.group_bound());
        let filled: Vec<(usize, Coordinate)> = assignment
            .auto_assign(&assigner, &warehouse, layout)
            .map_err(|err| {
                warn!(warehouse = %warehouse, error = %err, "Auto-assignment failed");
                translate_core_error(err)
            })?;

        Ok(AutoAssignResponse {
            filled: filled
                .into_iter()
                .map(|(index, coordinate)| assignment_item(index, Some(coordinate)))
                .collect(),
            assignment: self.assignment_view()?,
        })
    }

    /// The colour projection of the assignment in progress.
    ///
    /// Without an assignment nothing is marked.
    #[must_use]
    pub fn colors(&self) -> Vec<ColorAssignment> {
        self.assignment
            .as_ref()
            .map_or_else(Vec::new, AssignmentSession::colors)
    }

    /// Renders the assignment in progress.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if no assignment is in progress.
    pub fn assignment_view(&self) -> Result<AssignmentView, ApiError> {
        let assignment: &AssignmentSession = self
            .assignment
            .as_ref()
            .ok_or_else(|| no_assignment(&self.state.warehouse))?;

        Ok(AssignmentView {
            items: assignment
                .slots()
                .iter()
                .enumerate()
                .map(|(index, slot)| assignment_item(index, *slot))
                .collect(),
            active: assignment.active(),
            complete: assignment.is_complete(),
            colors: assignment.colors(),
        })
    }

    fn assignment_mut(&mut self) -> Result<&mut AssignmentSession, ApiError> {
        self.assignment
            .as_mut()
            .ok_or_else(|| no_assignment(&self.state.warehouse))
    }

    fn commit(&mut self, command: Command, editor: Editor) -> Result<AuditEvent, ApiError> {
        let result: TransitionResult = apply(&self.state, command, editor).map_err(|err| {
            warn!(warehouse = %self.state.warehouse, error = %err, "Command rejected");
            translate_core_error(err)
        })?;

        self.state = result.new_state;
        self.journal.push(result.audit_event.clone());
        Ok(result.audit_event)
    }
}

fn assignment_item(index: usize, coordinate: Option<Coordinate>) -> AssignmentItem {
    AssignmentItem {
        index,
        coordinate,
        code: coordinate.and_then(|coordinate| format_code(&coordinate).ok()),
    }
}

fn no_assignment(warehouse: &WarehouseId) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Assignment"),
        message: format!("No assignment in progress for warehouse '{warehouse}'"),
    }
}
