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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod assigner;
mod assignment;
mod color;
mod command;
mod error;
mod occupancy;
mod selection;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use assigner::{AutoAssigner, FirstFitAssigner, verify_suggestions};
pub use assignment::AssignmentSession;
pub use color::{ColorAssignment, ColorTier, project_colors, tier_of};
pub use command::Command;
pub use error::CoreError;
pub use occupancy::{OccupancyIndex, is_occupied, release, reserve};
pub use selection::{
    CellWrite, GestureEffect, GestureMode, Modifiers, Rect, SelectionSession, ToggleIntent,
};
pub use state::{DEFAULT_SHELF_COUNT, EditorState, TransitionResult};
