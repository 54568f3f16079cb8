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

mod address;
mod error;
mod layout;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use address::{
    MAX_COLUMNS, column_label, format_code, format_partial_code, parse_code, parse_column_label,
};
pub use error::DomainError;
pub use layout::{DEFAULT_FLOOR_HEIGHT, Floor, Layout};
pub use types::{Cell, Coordinate, GroupBound, PartialCoordinate, WarehouseId};
pub use validation::{validate_coordinate, validate_layout};
