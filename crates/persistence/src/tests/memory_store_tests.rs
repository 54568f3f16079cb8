// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{coord, create_test_layout, create_test_warehouse};
use crate::{InMemoryStore, LayoutRecord, LayoutStore, OccupancyStore, PersistenceError};
use shelfgrid_domain::{Coordinate, Layout, WarehouseId};
use std::collections::BTreeSet;

#[tokio::test]
async fn test_load_unknown_warehouse_is_not_found() {
    let store: InMemoryStore = InMemoryStore::new();

    let result: Result<LayoutRecord, PersistenceError> =
        store.load(&create_test_warehouse()).await;

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::NotFound(String::from("north"))
    );
}

#[tokio::test]
async fn test_save_then_load_round_trips() {
    let store: InMemoryStore = InMemoryStore::new();
    let layout: Layout = create_test_layout();

    let saved: LayoutRecord = store
        .save(&create_test_warehouse(), &layout, None)
        .await
        .unwrap();
    let loaded: LayoutRecord = store.load(&create_test_warehouse()).await.unwrap();

    assert_eq!(saved, loaded);
    assert_eq!(loaded.layout, layout);
}

#[tokio::test]
async fn test_concurrent_editors_detect_conflict() {
    let store: InMemoryStore = InMemoryStore::new();
    let warehouse: WarehouseId = create_test_warehouse();
    let layout: Layout = create_test_layout();
    store.save(&warehouse, &layout, None).await.unwrap();

    let first: LayoutRecord = store.load(&warehouse).await.unwrap();
    let second: LayoutRecord = store.load(&warehouse).await.unwrap();

    store
        .save(&warehouse, &layout.add_floor(), Some(first.version))
        .await
        .unwrap();
    let result: Result<LayoutRecord, PersistenceError> =
        store.save(&warehouse, &layout, Some(second.version)).await;

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::VersionConflict {
            expected: 1,
            actual: 2
        }
    );
    assert_eq!(store.load(&warehouse).await.unwrap().layout.floor_count(), 3);
}

#[tokio::test]
async fn test_save_without_version_overwrites() {
    let store: InMemoryStore = InMemoryStore::new();
    let warehouse: WarehouseId = create_test_warehouse();
    store
        .save(&warehouse, &create_test_layout(), None)
        .await
        .unwrap();

    let record: LayoutRecord = store
        .save(&warehouse, &Layout::new(1, 1, 1).unwrap(), None)
        .await
        .unwrap();

    assert_eq!(record.version, 2);
    assert_eq!(record.layout.rows(), 1);
}

#[tokio::test]
async fn test_occupancy_defaults_to_empty() {
    let store: InMemoryStore = InMemoryStore::new();

    let occupied: BTreeSet<Coordinate> =
        store.list_occupied(&create_test_warehouse()).await.unwrap();

    assert!(occupied.is_empty());
}

#[tokio::test]
async fn test_occupancy_is_per_warehouse() {
    let store: InMemoryStore = InMemoryStore::new();
    let occupied: BTreeSet<Coordinate> = BTreeSet::from([coord(0, 0, 0, 0, 0)]);
    store
        .set_occupied(&create_test_warehouse(), occupied.clone())
        .await;

    assert_eq!(
        store.list_occupied(&create_test_warehouse()).await.unwrap(),
        occupied
    );
    assert!(
        store
            .list_occupied(&WarehouseId::new("south"))
            .await
            .unwrap()
            .is_empty()
    );
}
