// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::record::LayoutRecord;
use shelfgrid_domain::{Coordinate, Layout, WarehouseId};
use std::collections::BTreeSet;
use std::future::Future;

/// Loads and saves warehouse layouts.
pub trait LayoutStore: Send + Sync {
    /// Loads the current layout of a warehouse.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if nothing is stored, or an
    /// I/O, serialization or validation error.
    fn load(
        &self,
        warehouse: &WarehouseId,
    ) -> impl Future<Output = Result<LayoutRecord, PersistenceError>> + Send;

    /// Saves a layout and returns the stored record.
    ///
    /// # Arguments
    ///
    /// * `warehouse` - The warehouse the layout belongs to
    /// * `layout` - The layout to store
    /// * `expected_version` - The version the caller loaded; `None` skips
    ///   the check and overwrites whatever is stored
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::VersionConflict` on a stale version, or an
    /// I/O or serialization error.
    fn save(
        &self,
        warehouse: &WarehouseId,
        layout: &Layout,
        expected_version: Option<u64>,
    ) -> impl Future<Output = Result<LayoutRecord, PersistenceError>> + Send;
}

/// Lists committed slot occupancy.
pub trait OccupancyStore: Send + Sync {
    /// Returns every occupied coordinate of a warehouse.
    ///
    /// A warehouse with nothing recorded has an empty set.
    ///
    /// # Errors
    ///
    /// Returns an I/O or serialization error.
    fn list_occupied(
        &self,
        warehouse: &WarehouseId,
    ) -> impl Future<Output = Result<BTreeSet<Coordinate>, PersistenceError>> + Send;
}

/// Checks that a warehouse id is usable as a storage key.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidWarehouseId` unless the id is non-empty
/// and made only of ASCII letters, digits, `-` and `_`.
pub fn validate_storage_key(warehouse: &WarehouseId) -> Result<(), PersistenceError> {
    let value: &str = warehouse.value();
    let valid: bool = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(PersistenceError::InvalidWarehouseId(value.to_string()))
    }
}
