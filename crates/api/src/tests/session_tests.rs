// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{coord, create_test_editor, create_test_session};
use crate::{
    ApiError, AssignmentView, AutoAssignResponse, BeginAssignmentRequest, CloseSessionResponse,
    CommandResponse, EditingSession, PickRequest, PointerEvent, PointerResponse,
};
use shelfgrid::{ColorTier, Command, Modifiers};

fn begin(session: &mut EditingSession, item_count: usize) -> AssignmentView {
    session
        .begin_assignment(BeginAssignmentRequest {
            item_count,
            group_bound: None,
        })
        .unwrap()
}

fn pick_coordinate(coordinate: shelfgrid_domain::Coordinate) -> PickRequest {
    PickRequest {
        coordinate: Some(coordinate),
        code: None,
    }
}

#[tokio::test]
async fn test_open_session_starts_on_first_floor() {
    let session: EditingSession = create_test_session().await;

    assert_eq!(session.version(), 1);
    assert_eq!(session.state().current_floor, 0);
    assert!(session.journal().is_empty());
    assert_eq!(session.view().occupied, vec![coord(0, 0, 0, 0, 0)]);
}

#[tokio::test]
async fn test_toggle_press_is_journaled() {
    let mut session: EditingSession = create_test_session().await;

    let response: PointerResponse = session
        .pointer(
            PointerEvent::Down {
                row: 0,
                column: 0,
                modifiers: Modifiers::none(),
            },
            create_test_editor(),
        )
        .unwrap();

    assert!(response.event.is_some());
    assert_eq!(session.journal().len(), 1);
    assert_eq!(session.state().layout.floors()[0].matrix()[0][0], 0);
}

#[tokio::test]
async fn test_range_add_commits_on_release() {
    let mut session: EditingSession = create_test_session().await;
    session
        .execute(Command::SelectFloor { floor: 1 }, create_test_editor())
        .unwrap();
    session
        .execute(Command::SetShelfCount { count: 2 }, create_test_editor())
        .unwrap();

    session
        .pointer(
            PointerEvent::Down {
                row: 0,
                column: 1,
                modifiers: Modifiers::shift(),
            },
            create_test_editor(),
        )
        .unwrap();
    let moved: PointerResponse = session
        .pointer(PointerEvent::Enter { row: 1, column: 1 }, create_test_editor())
        .unwrap();
    assert!(moved.event.is_none());
    assert!(session.view().selection.is_some());

    let released: PointerResponse = session
        .pointer(PointerEvent::Up, create_test_editor())
        .unwrap();

    assert_eq!(released.effect.writes.len(), 2);
    assert_eq!(
        session.state().layout.floors()[1].matrix(),
        &[vec![2, 2, 1], vec![0, 2, 2]]
    );
    assert_eq!(session.journal().len(), 3);
    assert_eq!(session.view().selection, None);
}

#[tokio::test]
async fn test_released_shift_applies_selection() {
    let mut session: EditingSession = create_test_session().await;
    session
        .execute(Command::SelectFloor { floor: 1 }, create_test_editor())
        .unwrap();

    session
        .pointer(
            PointerEvent::Down {
                row: 0,
                column: 1,
                modifiers: Modifiers::shift(),
            },
            create_test_editor(),
        )
        .unwrap();
    session
        .pointer(
            PointerEvent::Modifiers {
                modifiers: Modifiers::none(),
            },
            create_test_editor(),
        )
        .unwrap();
    assert!(!session.view().gesture_active);
    assert_eq!(session.state().layout.floors()[1].matrix()[0][1], 1);
    assert_eq!(session.journal().len(), 2);

    let released: PointerResponse = session
        .pointer(PointerEvent::Up, create_test_editor())
        .unwrap();

    assert!(released.effect.writes.is_empty());
    assert!(released.event.is_none());
    assert_eq!(session.journal().len(), 2);
}

#[tokio::test]
async fn test_cleared_cell_drops_assignment_pick() {
    let mut session: EditingSession = create_test_session().await;
    begin(&mut session, 2);
    session.pick(0, &pick_coordinate(coord(0, 0, 2, 0, 2))).unwrap();
    session.pick(1, &pick_coordinate(coord(0, 1, 0, 0, 1))).unwrap();

    let pressed: PointerResponse = session
        .pointer(
            PointerEvent::Down {
                row: 0,
                column: 2,
                modifiers: Modifiers::ctrl(),
            },
            create_test_editor(),
        )
        .unwrap();
    assert!(session.view().gesture_active);
    let released: PointerResponse = session
        .pointer(PointerEvent::Up, create_test_editor())
        .unwrap();

    assert_eq!(pressed.cleared_items, vec![0]);
    assert!(released.cleared_items.is_empty());
    assert_eq!(session.state().layout.floors()[0].matrix()[0][2], 0);
    let view: AssignmentView = session.assignment_view().unwrap();
    assert_eq!(view.items[0].coordinate, None);
    assert_eq!(view.items[1].coordinate, Some(coord(0, 1, 0, 0, 1)));
}

#[tokio::test]
async fn test_zero_group_bound_is_rejected() {
    let mut session: EditingSession = create_test_session().await;

    let result: Result<AssignmentView, ApiError> =
        session.begin_assignment(BeginAssignmentRequest {
            item_count: 1,
            group_bound: Some(0),
        });

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "group_bound"
    ));
    assert!(session.assignment().is_none());
}

#[tokio::test]
async fn test_close_reports_unsaved_changes() {
    let mut session: EditingSession = create_test_session().await;
    session
        .execute(Command::SetShelfCount { count: 2 }, create_test_editor())
        .unwrap();
    assert_eq!(session.unsaved_changes(), 1);

    let closed: CloseSessionResponse = session.close();

    assert_eq!(closed.warehouse.value(), "north");
    assert_eq!(closed.version, 1);
    assert_eq!(closed.unsaved_changes, 1);
}

#[tokio::test]
async fn test_out_of_bounds_pointer_is_rejected() {
    let mut session: EditingSession = create_test_session().await;

    let result: Result<PointerResponse, ApiError> = session.pointer(
        PointerEvent::Down {
            row: 9,
            column: 0,
            modifiers: Modifiers::none(),
        },
        create_test_editor(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "cell_within_grid"
    ));
    assert!(session.journal().is_empty());
}

#[tokio::test]
async fn test_floor_change_abandons_gesture() {
    let mut session: EditingSession = create_test_session().await;
    session
        .pointer(
            PointerEvent::Down {
                row: 0,
                column: 0,
                modifiers: Modifiers::shift(),
            },
            create_test_editor(),
        )
        .unwrap();

    let response: CommandResponse = session
        .execute(Command::AddFloor, create_test_editor())
        .unwrap();

    assert_eq!(response.view.selection, None);
    assert_eq!(response.view.layout.floor_count(), 3);
}

#[tokio::test]
async fn test_rejected_command_leaves_session_unchanged() {
    let mut session: EditingSession = create_test_session().await;

    let result: Result<CommandResponse, ApiError> = session.execute(
        Command::SetFloorHeight {
            floor: 0,
            height: 0,
        },
        create_test_editor(),
    );

    assert!(result.is_err());
    assert!(session.journal().is_empty());
    assert_eq!(session.state().layout.floors()[0].height(), 3);
}

#[tokio::test]
async fn test_assignment_requires_begin() {
    let mut session: EditingSession = create_test_session().await;

    let result: Result<AssignmentView, ApiError> = session.set_active(0);

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Assignment"
    ));
    assert!(session.colors().is_empty());
}

#[tokio::test]
async fn test_pick_by_code_and_conflict_on_occupied() {
    let mut session: EditingSession = create_test_session().await;
    begin(&mut session, 2);

    let view: AssignmentView = session
        .pick(
            0,
            &PickRequest {
                coordinate: None,
                code: Some(String::from("F00AB00D00C00")),
            },
        )
        .unwrap();
    assert_eq!(view.items[0].coordinate, Some(coord(0, 0, 1, 0, 0)));
    assert_eq!(view.items[0].code.as_deref(), Some("F00AB00D00C00"));

    let result: Result<AssignmentView, ApiError> =
        session.pick(1, &pick_coordinate(coord(0, 0, 0, 0, 0)));

    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[tokio::test]
async fn test_auto_assign_fills_remaining_items() {
    let mut session: EditingSession = create_test_session().await;
    begin(&mut session, 2);
    session
        .pick(0, &pick_coordinate(coord(0, 0, 1, 0, 0)))
        .unwrap();

    let response: AutoAssignResponse = session.auto_assign().unwrap();

    assert_eq!(response.filled.len(), 1);
    assert_eq!(response.filled[0].index, 1);
    assert_eq!(response.filled[0].code.as_deref(), Some("F00AB00D01C00"));
    assert!(response.assignment.complete);
}

#[tokio::test]
async fn test_colors_track_active_item() {
    let mut session: EditingSession = create_test_session().await;
    begin(&mut session, 2);
    session
        .pick(0, &pick_coordinate(coord(0, 0, 1, 0, 0)))
        .unwrap();
    session
        .pick(1, &pick_coordinate(coord(0, 0, 2, 0, 0)))
        .unwrap();

    let view: AssignmentView = session.set_active(1).unwrap();

    assert_eq!(view.active, Some(1));
    assert_eq!(view.colors[0].tier, ColorTier::Reserved);
    assert_eq!(view.colors[1].tier, ColorTier::Focused);
}

#[tokio::test]
async fn test_clearing_a_pick_releases_it() {
    let mut session: EditingSession = create_test_session().await;
    begin(&mut session, 1);
    session
        .pick(0, &pick_coordinate(coord(0, 0, 1, 0, 0)))
        .unwrap();

    let view: AssignmentView = session.pick(0, &PickRequest::default()).unwrap();

    assert_eq!(view.items[0].coordinate, None);
    assert!(session.colors().is_empty());
}

#[tokio::test]
async fn test_lowering_height_clears_stale_picks() {
    let mut session: EditingSession = create_test_session().await;
    begin(&mut session, 2);
    session
        .pick(0, &pick_coordinate(coord(0, 0, 2, 0, 2)))
        .unwrap();
    session
        .pick(1, &pick_coordinate(coord(0, 0, 2, 0, 1)))
        .unwrap();

    let response: CommandResponse = session
        .execute(
            Command::SetFloorHeight {
                floor: 0,
                height: 2,
            },
            create_test_editor(),
        )
        .unwrap();

    assert_eq!(response.cleared_items, vec![0]);
    let view: AssignmentView = session.assignment_view().unwrap();
    assert_eq!(view.items[1].coordinate, Some(coord(0, 0, 2, 0, 1)));
}

#[test]
fn test_pointer_event_wire_format() {
    let down: PointerEvent =
        serde_json::from_str(r#"{"event":"down","row":0,"column":1}"#).unwrap();
    let released: PointerEvent =
        serde_json::from_str(r#"{"event":"modifiers","modifiers":{"ctrl":true}}"#).unwrap();

    assert_eq!(
        down,
        PointerEvent::Down {
            row: 0,
            column: 1,
            modifiers: Modifiers::none(),
        }
    );
    assert_eq!(
        released,
        PointerEvent::Modifiers {
            modifiers: Modifiers::ctrl(),
        }
    );
}
