// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Shelfgrid layout editor.
//!
//! This crate turns requests into editor operations and translates every
//! lower-layer error into an [`ApiError`]. It knows nothing about HTTP; the
//! server crate maps these functions onto routes.

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod input;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{create_layout, location_code, open_session, save_session};
pub use input::{
    InputError, MAX_ASSIGNMENT_ITEMS, parse_warehouse_id, resolve_location, validate_group_bound,
    validate_item_count,
};
pub use request_response::{
    AssignmentItem, AssignmentView, AutoAssignResponse, BeginAssignmentRequest,
    CloseSessionResponse, CodeQuery, CodeResponse, ColorsResponse, CommandResponse, CreateLayoutRequest, LayoutRecordResponse,
    LayoutView, PickRequest, PointerEvent, PointerResponse, SaveRequest, SetActiveRequest,
};
pub use session::EditingSession;
