// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::record::LayoutRecord;
use crate::store::{LayoutStore, OccupancyStore};
use shelfgrid_domain::{Coordinate, Layout, WarehouseId};
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;
use tracing::debug;

/// A store that keeps layouts and occupancy in process memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    layouts: RwLock<HashMap<WarehouseId, LayoutRecord>>,
    occupied: RwLock<HashMap<WarehouseId, BTreeSet<Coordinate>>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the committed occupancy of a warehouse.
    ///
    /// Committing inventory is outside the editor, so this is how hosts and
    /// tests seed the occupied set.
    pub async fn set_occupied(&self, warehouse: &WarehouseId, occupied: BTreeSet<Coordinate>) {
        debug!(warehouse = %warehouse, count = occupied.len(), "Occupancy replaced");
        self.occupied.write().await.insert(warehouse.clone(), occupied);
    }
}

impl LayoutStore for InMemoryStore {
    async fn load(&self, warehouse: &WarehouseId) -> Result<LayoutRecord, PersistenceError> {
        self.layouts
            .read()
            .await
            .get(warehouse)
            .cloned()
            .ok_or_else(|| PersistenceError::NotFound(warehouse.value().to_string()))
    }

    async fn save(
        &self,
        warehouse: &WarehouseId,
        layout: &Layout,
        expected_version: Option<u64>,
    ) -> Result<LayoutRecord, PersistenceError> {
        let mut layouts = self.layouts.write().await;
        let record: LayoutRecord =
            LayoutRecord::next(layouts.get(warehouse), layout, expected_version)?;
        layouts.insert(warehouse.clone(), record.clone());

        debug!(warehouse = %warehouse, version = record.version, "Layout saved in memory");
        Ok(record)
    }
}

impl OccupancyStore for InMemoryStore {
    async fn list_occupied(
        &self,
        warehouse: &WarehouseId,
    ) -> Result<BTreeSet<Coordinate>, PersistenceError> {
        Ok(self
            .occupied
            .read()
            .await
            .get(warehouse)
            .cloned()
            .unwrap_or_default())
    }
}
