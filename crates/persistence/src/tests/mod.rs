// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod memory_store_tests;

use shelfgrid_domain::{Coordinate, Floor, Layout, WarehouseId};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique per-test data directories.
static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn create_test_warehouse() -> WarehouseId {
    WarehouseId::new("north")
}

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

/// Returns a fresh, not yet created directory under the system temp dir.
pub fn unique_data_dir() -> PathBuf {
    let id: u64 = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "shelfgrid-persistence-{}-{id}",
        std::process::id()
    ))
}
