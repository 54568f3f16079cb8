// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rectangular selection and bulk cell editing on one floor.
//!
//! A gesture is one press, any number of pointer moves, and one release. The
//! modifiers held at press time choose the gesture mode, which then stays
//! fixed until the gesture ends:
//!
//! - no modifier: toggle. The pressed cell decides whether the gesture adds
//!   shelves (it was empty) or removes them, and every cell the pointer
//!   enters is written immediately.
//! - shift: range-add. The rectangle between anchor and cursor is only
//!   highlighted while dragging; release fills it in one batch.
//! - ctrl or meta: range-clear. Entered cells are zeroed immediately and
//!   release zeroes the whole final rectangle once more.
//!
//! Every value written is clamped to the floor height.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use shelfgrid_domain::{Cell, Floor};
use tracing::debug;

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift is held.
    #[serde(default)]
    pub shift: bool,
    /// Control is held.
    #[serde(default)]
    pub ctrl: bool,
    /// Meta (command) is held.
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            shift: false,
            ctrl: false,
            meta: false,
        }
    }

    /// Only shift held.
    #[must_use]
    pub const fn shift() -> Self {
        Self {
            shift: true,
            ctrl: false,
            meta: false,
        }
    }

    /// Only control held.
    #[must_use]
    pub const fn ctrl() -> Self {
        Self {
            shift: false,
            ctrl: true,
            meta: false,
        }
    }

    /// Only meta held.
    #[must_use]
    pub const fn meta() -> Self {
        Self {
            shift: false,
            ctrl: false,
            meta: true,
        }
    }

    const fn clears(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Whether a toggle gesture adds or removes shelves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleIntent {
    /// The pressed cell was empty; entered cells get the shelf count.
    Add,
    /// The pressed cell held shelves; entered cells are emptied.
    Remove,
}

/// The mode of an active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "intent", rename_all = "snake_case")]
pub enum GestureMode {
    /// Immediate per-cell writes.
    Toggle(ToggleIntent),
    /// Deferred fill of the selected rectangle.
    RangeAdd,
    /// Immediate zeroing plus a final pass over the rectangle.
    RangeClear,
}

/// An inclusive rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// First row (inclusive).
    pub top: usize,
    /// First column (inclusive).
    pub left: usize,
    /// Last row (inclusive).
    pub bottom: usize,
    /// Last column (inclusive).
    pub right: usize,
}

impl Rect {
    /// The inclusive rectangle spanned by two corner cells, in any order.
    #[must_use]
    pub fn spanning(a: Cell, b: Cell) -> Self {
        Self {
            top: a.row.min(b.row),
            left: a.column.min(b.column),
            bottom: a.row.max(b.row),
            right: a.column.max(b.column),
        }
    }

    /// Returns `true` if the cell lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row >= self.top
            && cell.row <= self.bottom
            && cell.column >= self.left
            && cell.column <= self.right
    }

    /// Iterates the covered cells row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (left, right): (usize, usize) = (self.left, self.right);
        (self.top..=self.bottom)
            .flat_map(move |row| (left..=right).map(move |column| Cell::new(row, column)))
    }
}

/// One cell value written by a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellWrite {
    /// The cell written.
    pub cell: Cell,
    /// The value stored, after clamping.
    pub value: u32,
}

/// What a single pointer or keyboard event did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureEffect {
    /// Cell writes performed by this event, in order.
    pub writes: Vec<CellWrite>,
    /// The highlighted rectangle after this event, if any.
    pub selection: Option<Rect>,
    /// `true` if this event ended the gesture.
    pub ended: bool,
}

impl GestureEffect {
    fn ended(writes: Vec<CellWrite>) -> Self {
        Self {
            writes,
            selection: None,
            ended: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Gesture {
    mode: GestureMode,
    anchor: Cell,
    cursor: Cell,
}

impl Gesture {
    fn rect(&self) -> Rect {
        Rect::spanning(self.anchor, self.cursor)
    }

    fn highlight(&self) -> Option<Rect> {
        match self.mode {
            GestureMode::Toggle(_) => None,
            GestureMode::RangeAdd | GestureMode::RangeClear => Some(self.rect()),
        }
    }
}

/// Interaction state for selection gestures on one floor.
///
/// The session is passed explicitly into every event handler; nothing about
/// an in-progress gesture lives anywhere else. Handlers mutate the floor they
/// are given and report the writes they made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSession {
    gesture: Option<Gesture>,
}

impl SelectionSession {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self { gesture: None }
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Returns the mode of the gesture in progress.
    #[must_use]
    pub fn mode(&self) -> Option<GestureMode> {
        self.gesture.map(|gesture| gesture.mode)
    }

    /// Returns the highlighted rectangle, if a range gesture is in progress.
    #[must_use]
    pub fn selection(&self) -> Option<Rect> {
        self.gesture.and_then(|gesture| gesture.highlight())
    }

    /// Abandons any gesture in progress without writing anything further.
    pub fn reset(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            debug!(mode = ?gesture.mode, "Selection gesture abandoned");
        }
    }

    /// Starts a gesture at `cell`.
    ///
    /// A gesture still in progress (a release that never arrived) is
    /// abandoned first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellOutOfBounds` (wrapped) if the cell is not on
    /// the floor; the session is left unchanged.
    pub fn pointer_down(
        &mut self,
        floor: &mut Floor,
        cell: Cell,
        modifiers: Modifiers,
        shelf_count: u32,
    ) -> Result<GestureEffect, CoreError> {
        floor.check_cell(cell)?;
        self.reset();

        let mode: GestureMode = if modifiers.shift {
            GestureMode::RangeAdd
        } else if modifiers.clears() {
            GestureMode::RangeClear
        } else if floor.cell(cell) == Some(0) {
            GestureMode::Toggle(ToggleIntent::Add)
        } else {
            GestureMode::Toggle(ToggleIntent::Remove)
        };

        let gesture: Gesture = Gesture {
            mode,
            anchor: cell,
            cursor: cell,
        };
        debug!(?mode, row = cell.row, column = cell.column, "Selection gesture started");

        let writes: Vec<CellWrite> = match mode {
            GestureMode::Toggle(intent) => vec![write(floor, cell, toggle_value(intent, shelf_count))?],
            GestureMode::RangeClear => vec![write(floor, cell, 0)?],
            GestureMode::RangeAdd => Vec::new(),
        };

        self.gesture = Some(gesture);
        Ok(GestureEffect {
            writes,
            selection: gesture.highlight(),
            ended: false,
        })
    }

    /// Moves the pointer onto `cell`.
    ///
    /// Without a gesture in progress this is a hover and does nothing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellOutOfBounds` (wrapped) if the cell is not on
    /// the floor; the session is left unchanged.
    pub fn pointer_enter(
        &mut self,
        floor: &mut Floor,
        cell: Cell,
        shelf_count: u32,
    ) -> Result<GestureEffect, CoreError> {
        let Some(mut gesture) = self.gesture else {
            return Ok(GestureEffect::default());
        };
        floor.check_cell(cell)?;

        gesture.cursor = cell;
        let writes: Vec<CellWrite> = match gesture.mode {
            GestureMode::Toggle(intent) => vec![write(floor, cell, toggle_value(intent, shelf_count))?],
            GestureMode::RangeClear => vec![write(floor, cell, 0)?],
            GestureMode::RangeAdd => Vec::new(),
        };

        self.gesture = Some(gesture);
        Ok(GestureEffect {
            writes,
            selection: gesture.highlight(),
            ended: false,
        })
    }

    /// Releases the pointer, ending the gesture.
    ///
    /// Range-add fills the selected rectangle with the shelf count and
    /// range-clear zeroes it again. Without a gesture this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the rectangle no longer fits the floor, which can
    /// only happen if the floor was swapped mid-gesture. The session is
    /// reset either way.
    pub fn pointer_up(
        &mut self,
        floor: &mut Floor,
        shelf_count: u32,
    ) -> Result<GestureEffect, CoreError> {
        let Some(gesture) = self.gesture.take() else {
            return Ok(GestureEffect::ended(Vec::new()));
        };

        let value: Option<u32> = match gesture.mode {
            GestureMode::Toggle(_) => None,
            GestureMode::RangeAdd => Some(shelf_count),
            GestureMode::RangeClear => Some(0),
        };

        let writes: Vec<CellWrite> = match value {
            Some(value) => {
                let rect: Rect = gesture.rect();
                floor.check_cell(Cell::new(rect.bottom, rect.right))?;
                rect.cells()
                    .map(|cell| write(floor, cell, value))
                    .collect::<Result<Vec<CellWrite>, CoreError>>()?
            }
            None => Vec::new(),
        };

        debug!(mode = ?gesture.mode, writes = writes.len(), "Selection gesture ended");
        Ok(GestureEffect::ended(writes))
    }

    /// Reacts to a change of held modifiers.
    ///
    /// Releasing the modifier that started a range gesture ends it exactly as
    /// releasing the pointer would: range-add fills the rectangle and
    /// range-clear makes its final zeroing pass. Toggle gestures ignore
    /// modifiers.
    ///
    /// # Errors
    ///
    /// Returns an error if the rectangle no longer fits the floor; the
    /// session is reset either way.
    pub fn modifiers_changed(
        &mut self,
        floor: &mut Floor,
        modifiers: Modifiers,
        shelf_count: u32,
    ) -> Result<GestureEffect, CoreError> {
        let Some(gesture) = self.gesture else {
            return Ok(GestureEffect::default());
        };

        let released: bool = match gesture.mode {
            GestureMode::Toggle(_) => false,
            GestureMode::RangeAdd => !modifiers.shift,
            GestureMode::RangeClear => !modifiers.clears(),
        };

        if released {
            debug!(mode = ?gesture.mode, "Gesture modifier released");
            self.pointer_up(floor, shelf_count)
        } else {
            Ok(GestureEffect {
                writes: Vec::new(),
                selection: gesture.highlight(),
                ended: false,
            })
        }
    }
}

const fn toggle_value(intent: ToggleIntent, shelf_count: u32) -> u32 {
    match intent {
        ToggleIntent::Add => shelf_count,
        ToggleIntent::Remove => 0,
    }
}

fn write(floor: &mut Floor, cell: Cell, value: u32) -> Result<CellWrite, CoreError> {
    let stored: u32 = floor.write_clamped(cell, value)?;
    Ok(CellWrite {
        cell,
        value: stored,
    })
}
