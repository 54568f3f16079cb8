// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EditingSession, open_session};
use shelfgrid_audit::Editor;
use shelfgrid_domain::{Coordinate, Floor, Layout, WarehouseId};
use shelfgrid_persistence::{InMemoryStore, LayoutStore};
use std::collections::BTreeSet;

pub fn create_test_editor() -> Editor {
    Editor::new(String::from("picker-7"), String::from("user"))
}

pub fn create_test_warehouse() -> WarehouseId {
    WarehouseId::new("north")
}

/// Two floors of 2x3: floor 0 has height 3, floor 1 has height 2.
pub fn create_test_layout() -> Layout {
    Layout::from_floors(vec![
        Floor::from_matrix(3, vec![vec![1, 2, 3], vec![3, 2, 1]]).unwrap(),
        Floor::from_matrix(2, vec![vec![2, 0, 1], vec![0, 1, 2]]).unwrap(),
    ])
    .unwrap()
}

pub fn coord(floor: usize, row: usize, column: usize, group: usize, depth: usize) -> Coordinate {
    Coordinate::new(floor, row, column, group, depth)
}

/// A store holding the test layout (version 1) with one occupied slot.
pub async fn create_seeded_store() -> InMemoryStore {
    let store: InMemoryStore = InMemoryStore::new();
    store
        .save(&create_test_warehouse(), &create_test_layout(), None)
        .await
        .unwrap();
    store
        .set_occupied(
            &create_test_warehouse(),
            BTreeSet::from([coord(0, 0, 0, 0, 0)]),
        )
        .await;
    store
}

pub async fn create_test_session() -> EditingSession {
    let store: InMemoryStore = create_seeded_store().await;
    open_session(&store, create_test_warehouse()).await.unwrap()
}
