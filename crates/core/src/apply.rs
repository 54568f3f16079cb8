// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::selection::CellWrite;
use crate::state::{EditorState, TransitionResult};
use shelfgrid_audit::{Action, AuditEvent, Editor, LayoutSnapshot};
use shelfgrid_domain::{Floor, Layout};
use tracing::debug;

/// Applies a command to the current state, producing a new state and audit event.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `editor` - Whoever issued the command
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command is invalid; `state` is unchanged
///
/// # Errors
///
/// Returns an error if:
/// - A dimension or height is zero
/// - The column count exceeds the labelable range
/// - A referenced floor does not exist
/// - The last floor would be removed
/// - A shelf count of zero is selected
/// - A cell write lies outside the grid
pub fn apply(
    state: &EditorState,
    command: Command,
    editor: Editor,
) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();

    let (new_state, details): (EditorState, String) = match command {
        Command::Resize { rows, columns } => {
            let layout: Layout = state.layout.resize(rows, columns)?;
            (
                EditorState {
                    layout,
                    ..state.clone()
                },
                format!(
                    "Resized grid from {}x{} to {rows}x{columns}",
                    state.layout.rows(),
                    state.layout.columns()
                ),
            )
        }
        Command::SetFloorHeight { floor, height } => {
            let previous: u32 = state.layout.floor(floor)?.height();
            let layout: Layout = state.layout.set_floor_height(floor, height)?;
            (
                EditorState {
                    layout,
                    ..state.clone()
                },
                format!("Changed floor {floor} height from {previous} to {height}"),
            )
        }
        Command::AddFloor => {
            let layout: Layout = state.layout.add_floor();
            let added: usize = layout.floor_count() - 1;
            (
                EditorState {
                    layout,
                    ..state.clone()
                },
                format!("Added floor {added}"),
            )
        }
        Command::RemoveFloor { floor } => {
            let (layout, current_floor): (Layout, usize) =
                state.layout.remove_floor(floor, state.current_floor)?;
            (
                EditorState {
                    layout,
                    current_floor,
                    ..state.clone()
                },
                format!("Removed floor {floor}"),
            )
        }
        Command::SelectFloor { floor } => {
            state.layout.floor(floor)?;
            (
                EditorState {
                    current_floor: floor,
                    ..state.clone()
                },
                format!("Selected floor {floor}"),
            )
        }
        Command::SetShelfCount { count } => {
            if count == 0 {
                return Err(CoreError::InvalidShelfCount { count });
            }
            (
                EditorState {
                    shelf_count: count,
                    ..state.clone()
                },
                format!("Set shelf count to {count}"),
            )
        }
        Command::WriteCells { floor, writes } => {
            let mut layout: Layout = state.layout.clone();
            let target: &mut Floor = layout.floor_mut(floor)?;
            for write in &writes {
                let CellWrite { cell, value } = *write;
                target.write_clamped(cell, value)?;
            }
            (
                EditorState {
                    layout,
                    ..state.clone()
                },
                format!("Wrote {} cell(s) on floor {floor}", writes.len()),
            )
        }
    };

    let before: LayoutSnapshot = state.to_snapshot();
    let after: LayoutSnapshot = new_state.to_snapshot();
    debug!(
        warehouse = %state.warehouse,
        command = name,
        %before,
        %after,
        "Layout transition applied"
    );

    let action: Action = Action::new(String::from(name), Some(details));
    let audit_event: AuditEvent = AuditEvent::new(
        state.warehouse.clone(),
        editor,
        action,
        before,
        after,
    );

    Ok(TransitionResult {
        new_state,
        audit_event,
    })
}
