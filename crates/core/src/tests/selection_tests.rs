// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CellWrite, CoreError, GestureEffect, GestureMode, Modifiers, Rect, SelectionSession,
    ToggleIntent,
};
use shelfgrid_domain::{Cell, DomainError, Floor};

fn empty_floor() -> Floor {
    Floor::new(3, 3, 2).unwrap()
}

#[test]
fn test_rect_spanning_is_order_independent() {
    let rect: Rect = Rect::spanning(Cell::new(2, 0), Cell::new(0, 1));

    assert_eq!(
        rect,
        Rect {
            top: 0,
            left: 0,
            bottom: 2,
            right: 1
        }
    );
    assert!(rect.contains(Cell::new(1, 1)));
    assert!(!rect.contains(Cell::new(1, 2)));
    assert_eq!(rect.cells().count(), 6);
    assert_eq!(rect.cells().next(), Some(Cell::new(0, 0)));
}

#[test]
fn test_shift_takes_precedence_over_ctrl() {
    let mut floor: Floor = empty_floor();
    let mut session: SelectionSession = SelectionSession::new();
    let modifiers: Modifiers = Modifiers {
        shift: true,
        ctrl: true,
        meta: false,
    };

    session
        .pointer_down(&mut floor, Cell::new(0, 0), modifiers, 1)
        .unwrap();

    assert_eq!(session.mode(), Some(GestureMode::RangeAdd));
}

#[test]
fn test_meta_starts_range_clear() {
    let mut floor: Floor = empty_floor();
    let mut session: SelectionSession = SelectionSession::new();

    session
        .pointer_down(&mut floor, Cell::new(0, 0), Modifiers::meta(), 1)
        .unwrap();

    assert_eq!(session.mode(), Some(GestureMode::RangeClear));
}

#[test]
fn test_toggle_on_empty_cell_adds_along_drag() {
    let mut floor: Floor = empty_floor();
    let mut session: SelectionSession = SelectionSession::new();

    let down: GestureEffect = session
        .pointer_down(&mut floor, Cell::new(0, 0), Modifiers::none(), 5)
        .unwrap();
    session
        .pointer_enter(&mut floor, Cell::new(0, 1), 5)
        .unwrap();
    session
        .pointer_enter(&mut floor, Cell::new(1, 1), 5)
        .unwrap();
    let up: GestureEffect = session.pointer_up(&mut floor, 5).unwrap();

    assert_eq!(session.mode(), None);
    assert_eq!(
        down.writes,
        vec![CellWrite {
            cell: Cell::new(0, 0),
            value: 2
        }]
    );
    assert!(up.writes.is_empty());
    assert!(up.ended);
    assert_eq!(floor.matrix(), &[vec![2, 2, 0], vec![0, 2, 0], vec![0, 0, 0]]);
}

#[test]
fn test_toggle_on_filled_cell_removes_along_drag() {
    let mut floor: Floor = Floor::from_matrix(2, vec![vec![1, 2], vec![2, 0]]).unwrap();
    let mut session: SelectionSession = SelectionSession::new();

    session
        .pointer_down(&mut floor, Cell::new(0, 0), Modifiers::none(), 1)
        .unwrap();
    assert_eq!(
        session.mode(),
        Some(GestureMode::Toggle(ToggleIntent::Remove))
    );
    session
        .pointer_enter(&mut floor, Cell::new(1, 1), 1)
        .unwrap();
    session
        .pointer_enter(&mut floor, Cell::new(1, 0), 1)
        .unwrap();
    session.pointer_up(&mut floor, 1).unwrap();

    assert_eq!(floor.matrix(), &[vec![0, 2], vec![0, 0]]);
}

#[test]
fn test_toggle_shows_no_selection() {
    let mut floor: Floor = empty_floor();
    let mut session: SelectionSession = SelectionSession::new();

    let effect: GestureEffect = session
        .pointer_down(&mut floor, Cell::new(1, 1), Modifiers::none(), 1)
        .unwrap();

    assert_eq!(effect.selection, None);
    assert_eq!(session.selection(), None);
}

#[test]
fn test_range_add_is_visual_until_release() {
    let mut floor: Floor = empty_floor();
    let mut session: SelectionSession = SelectionSession::new();

    session
        .pointer_down(&mut floor, Cell::new(1, 1), Modifiers::shift(), 1)
        .unwrap();
    let moved: GestureEffect = session
        .pointer_enter(&mut floor, Cell::new(2, 2), 1)
        .unwrap();

    assert!(moved.writes.is_empty());
    assert_eq!(moved.selection, Some(Rect::spanning(Cell::new(1, 1), Cell::new(2, 2))));
    assert_eq!(
        session.selection().map(|rect| rect.cells().count()),
        Some(4)
    );
    assert_eq!(floor.capacity(), 0);

    let up: GestureEffect = session.pointer_up(&mut floor, 1).unwrap();

    assert_eq!(up.writes.len(), 4);
    assert_eq!(up.selection, None);
    assert_eq!(floor.matrix(), &[vec![0, 0, 0], vec![0, 1, 1], vec![0, 1, 1]]);
}

#[test]
fn test_range_clear_zeroes_entered_cells_immediately() {
    let mut floor: Floor = Floor::from_matrix(2, vec![vec![2, 2, 2], vec![2, 2, 2]]).unwrap();
    let mut session: SelectionSession = SelectionSession::new();

    let down: GestureEffect = session
        .pointer_down(&mut floor, Cell::new(0, 0), Modifiers::ctrl(), 1)
        .unwrap();
    let moved: GestureEffect = session
        .pointer_enter(&mut floor, Cell::new(1, 1), 1)
        .unwrap();

    assert_eq!(down.writes[0].value, 0);
    assert_eq!(moved.writes[0].cell, Cell::new(1, 1));
    // (0, 1) and (1, 0) are inside the rectangle but not yet visited.
    assert_eq!(floor.matrix(), &[vec![0, 2, 2], vec![2, 0, 2]]);

    session.pointer_up(&mut floor, 1).unwrap();

    assert_eq!(floor.matrix(), &[vec![0, 0, 2], vec![0, 0, 2]]);
}

#[test]
fn test_release_without_gesture_is_noop() {
    let mut floor: Floor = empty_floor();
    let mut session: SelectionSession = SelectionSession::new();

    let effect: GestureEffect = session.pointer_up(&mut floor, 1).unwrap();

    assert!(effect.writes.is_empty());
    assert_eq!(floor.capacity(), 0);
}

#[test]
fn test_enter_without_gesture_is_hover() {
    let mut floor: Floor = empty_floor();
    let mut session: SelectionSession = SelectionSession::new();

    let effect: GestureEffect = session
        .pointer_enter(&mut floor, Cell::new(2, 2), 1)
        .unwrap();

    assert_eq!(effect, GestureEffect::default());
    assert!(!session.is_active());
}

#[test]
fn test_out_of_bounds_press_leaves_session_idle() {
    let mut floor: Floor = empty_floor();
    let mut session: SelectionSession = SelectionSession::new();

    let result: Result<GestureEffect, CoreError> =
        session.pointer_down(&mut floor, Cell::new(3, 0), Modifiers::none(), 1);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::CellOutOfBounds { row: 3, .. }
        ))
    ));
    assert!(!session.is_active());
}

#[test]
fn test_out_of_bounds_enter_keeps_gesture() {
    let mut floor: Floor = empty_floor();
    let mut session: SelectionSession = SelectionSession::new();
    session
        .pointer_down(&mut floor, Cell::new(0, 0), Modifiers::shift(), 1)
        .unwrap();

    assert!(
        session
            .pointer_enter(&mut floor, Cell::new(0, 9), 1)
            .is_err()
    );
    assert_eq!(
        session.selection(),
        Some(Rect::spanning(Cell::new(0, 0), Cell::new(0, 0)))
    );
}

#[test]
fn test_releasing_shift_applies_range_add() {
    let mut floor: Floor = empty_floor();
    let mut session: SelectionSession = SelectionSession::new();
    session
        .pointer_down(&mut floor, Cell::new(0, 0), Modifiers::shift(), 1)
        .unwrap();
    session
        .pointer_enter(&mut floor, Cell::new(1, 2), 1)
        .unwrap();

    let effect: GestureEffect = session
        .modifiers_changed(&mut floor, Modifiers::none(), 1)
        .unwrap();
    let up: GestureEffect = session.pointer_up(&mut floor, 1).unwrap();

    assert!(effect.ended);
    assert_eq!(effect.writes.len(), 6);
    assert!(!session.is_active());
    assert!(up.writes.is_empty());
    assert_eq!(floor.matrix(), &[vec![1, 1, 1], vec![1, 1, 1], vec![0, 0, 0]]);
}

#[test]
fn test_releasing_ctrl_finishes_range_clear() {
    let mut floor: Floor = Floor::from_matrix(1, vec![vec![1, 1, 1]]).unwrap();
    let mut session: SelectionSession = SelectionSession::new();
    session
        .pointer_down(&mut floor, Cell::new(0, 0), Modifiers::ctrl(), 1)
        .unwrap();
    session
        .pointer_enter(&mut floor, Cell::new(0, 2), 1)
        .unwrap();
    assert_eq!(floor.matrix(), &[vec![0, 1, 0]]);

    let effect: GestureEffect = session
        .modifiers_changed(&mut floor, Modifiers::none(), 1)
        .unwrap();

    assert!(effect.ended);
    assert_eq!(floor.matrix(), &[vec![0, 0, 0]]);
}

#[test]
fn test_switching_clear_modifier_keeps_range_clear() {
    let mut floor: Floor = empty_floor();
    let mut session: SelectionSession = SelectionSession::new();
    session
        .pointer_down(&mut floor, Cell::new(0, 0), Modifiers::ctrl(), 1)
        .unwrap();

    let effect: GestureEffect = session
        .modifiers_changed(&mut floor, Modifiers::meta(), 1)
        .unwrap();

    assert!(!effect.ended);
    assert_eq!(session.mode(), Some(GestureMode::RangeClear));
}

#[test]
fn test_toggle_ignores_modifier_changes() {
    let mut floor: Floor = empty_floor();
    let mut session: SelectionSession = SelectionSession::new();
    session
        .pointer_down(&mut floor, Cell::new(0, 0), Modifiers::none(), 1)
        .unwrap();

    let effect: GestureEffect = session
        .modifiers_changed(&mut floor, Modifiers::shift(), 1)
        .unwrap();

    assert!(!effect.ended);
    assert!(session.is_active());
}

#[test]
fn test_new_press_abandons_stale_gesture() {
    let mut floor: Floor = empty_floor();
    let mut session: SelectionSession = SelectionSession::new();
    session
        .pointer_down(&mut floor, Cell::new(0, 0), Modifiers::shift(), 1)
        .unwrap();
    session
        .pointer_enter(&mut floor, Cell::new(2, 2), 1)
        .unwrap();

    session
        .pointer_down(&mut floor, Cell::new(1, 1), Modifiers::shift(), 1)
        .unwrap();
    session.pointer_up(&mut floor, 1).unwrap();

    assert_eq!(floor.capacity(), 1);
    assert_eq!(floor.cell(Cell::new(1, 1)), Some(1));
}
