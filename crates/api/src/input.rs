// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validation of raw request input.
//!
//! Everything here runs before a request touches the editor, so the errors
//! describe malformed requests rather than rule violations.

use shelfgrid_domain::{Coordinate, GroupBound, WarehouseId, parse_code};
use shelfgrid_persistence::validate_storage_key;
use thiserror::Error;

/// Largest number of items a single assignment may place.
pub const MAX_ASSIGNMENT_ITEMS: usize = 1000;

/// Request input errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The warehouse id is empty or contains unsupported characters.
    #[error("Warehouse id '{value}' must be non-empty and use only letters, digits, '-' and '_'")]
    InvalidWarehouseId { value: String },

    /// An assignment must place at least one item and not too many.
    #[error("Item count {count} must be between 1 and {max}")]
    ItemCountOutOfRange { count: usize, max: usize },

    /// A pick named both a coordinate and a location code.
    #[error("Provide either a coordinate or a location code, not both")]
    AmbiguousLocation,

    /// A bay count of zero leaves no slot to pick.
    #[error("Group bound must be at least 1 when given")]
    ZeroGroupBound,

    /// A location code could not be parsed.
    #[error("'{code}' is not a location code of the form F00AA00D00C00")]
    UnparsableCode { code: String },
}

impl InputError {
    /// The request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidWarehouseId { .. } => "warehouse",
            Self::ItemCountOutOfRange { .. } => "item_count",
            Self::ZeroGroupBound => "group_bound",
            Self::AmbiguousLocation => "location",
            Self::UnparsableCode { .. } => "code",
        }
    }
}

/// Parses a warehouse id from a request path.
///
/// # Errors
///
/// Returns `InputError::InvalidWarehouseId` unless the trimmed id is
/// non-empty and made of ASCII letters, digits, `-` and `_`.
pub fn parse_warehouse_id(raw: &str) -> Result<WarehouseId, InputError> {
    let warehouse: WarehouseId = WarehouseId::new(raw);
    validate_storage_key(&warehouse).map_err(|_| InputError::InvalidWarehouseId {
        value: raw.to_string(),
    })?;
    Ok(warehouse)
}

/// Checks the size of a requested assignment.
///
/// # Errors
///
/// Returns `InputError::ItemCountOutOfRange` for zero or more than
/// [`MAX_ASSIGNMENT_ITEMS`] items.
pub const fn validate_item_count(count: usize) -> Result<usize, InputError> {
    if count == 0 || count > MAX_ASSIGNMENT_ITEMS {
        return Err(InputError::ItemCountOutOfRange {
            count,
            max: MAX_ASSIGNMENT_ITEMS,
        });
    }
    Ok(count)
}

/// Checks an optional bay count for an assignment.
///
/// # Errors
///
/// Returns `InputError::ZeroGroupBound` for `Some(0)`.
pub const fn validate_group_bound(group_bound: GroupBound) -> Result<GroupBound, InputError> {
    if matches!(group_bound, Some(0)) {
        return Err(InputError::ZeroGroupBound);
    }
    Ok(group_bound)
}

/// Resolves a pick given either as a coordinate or as a scanned code.
///
/// `Ok(None)` means neither was given, i.e. the pick is being cleared.
///
/// # Errors
///
/// Returns `InputError::AmbiguousLocation` if both are given, or
/// `InputError::UnparsableCode` for a malformed code.
pub fn resolve_location(
    coordinate: Option<Coordinate>,
    code: Option<&str>,
) -> Result<Option<Coordinate>, InputError> {
    match (coordinate, code) {
        (Some(_), Some(_)) => Err(InputError::AmbiguousLocation),
        (Some(coordinate), None) => Ok(Some(coordinate)),
        (None, Some(code)) => parse_code(code)
            .map(Some)
            .map_err(|_| InputError::UnparsableCode {
                code: code.to_string(),
            }),
        (None, None) => Ok(None),
    }
}
