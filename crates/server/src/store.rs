// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The store backend chosen at startup.

use shelfgrid_domain::{Coordinate, Layout, WarehouseId};
use shelfgrid_persistence::{
    InMemoryStore, JsonFileStore, LayoutRecord, LayoutStore, OccupancyStore, PersistenceError,
};
use std::collections::BTreeSet;

/// Either an in-memory store or a JSON directory store.
#[derive(Debug)]
pub enum AppStore {
    /// Nothing survives a restart.
    Memory(InMemoryStore),
    /// One JSON file per warehouse under a data directory.
    File(JsonFileStore),
}

impl LayoutStore for AppStore {
    async fn load(&self, warehouse: &WarehouseId) -> Result<LayoutRecord, PersistenceError> {
        match self {
            Self::Memory(store) => store.load(warehouse).await,
            Self::File(store) => store.load(warehouse).await,
        }
    }

    async fn save(
        &self,
        warehouse: &WarehouseId,
        layout: &Layout,
        expected_version: Option<u64>,
    ) -> Result<LayoutRecord, PersistenceError> {
        match self {
            Self::Memory(store) => store.save(warehouse, layout, expected_version).await,
            Self::File(store) => store.save(warehouse, layout, expected_version).await,
        }
    }
}

impl OccupancyStore for AppStore {
    async fn list_occupied(
        &self,
        warehouse: &WarehouseId,
    ) -> Result<BTreeSet<Coordinate>, PersistenceError> {
        match self {
            Self::Memory(store) => store.list_occupied(warehouse).await,
            Self::File(store) => store.list_occupied(warehouse).await,
        }
    }
}
