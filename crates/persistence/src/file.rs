// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::record::LayoutRecord;
use crate::store::{LayoutStore, OccupancyStore, validate_storage_key};
use shelfgrid_domain::{Coordinate, Layout, WarehouseId, validate_layout};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// A store that keeps one JSON document per warehouse and record kind.
///
/// Files live directly under the data directory:
///
/// - `layout-<warehouse>.json` holds a [`LayoutRecord`]
/// - `occupancy-<warehouse>.json` holds an array of coordinates
///
/// Saves go through a temporary file and a rename, so readers never see a
/// half-written layout.
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
    /// Serializes the version check and the write of concurrent saves.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Io` if the directory cannot be created.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let root: PathBuf = root.into();
        tokio::fs::create_dir_all(&root).await?;
        info!(root = %root.display(), "JSON file store opened");
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    /// Replaces the committed occupancy of a warehouse.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not a valid key or the file cannot be
    /// written.
    pub async fn set_occupied(
        &self,
        warehouse: &WarehouseId,
        occupied: &BTreeSet<Coordinate>,
    ) -> Result<(), PersistenceError> {
        let path: PathBuf = self.path_for("occupancy", warehouse)?;
        let bytes: Vec<u8> = serde_json::to_vec_pretty(occupied)?;
        let _guard = self.write_lock.lock().await;
        write_atomically(&path, &bytes).await?;
        debug!(warehouse = %warehouse, count = occupied.len(), "Occupancy written");
        Ok(())
    }

    fn path_for(&self, kind: &str, warehouse: &WarehouseId) -> Result<PathBuf, PersistenceError> {
        validate_storage_key(warehouse)?;
        Ok(self.root.join(format!("{kind}-{}.json", warehouse.value())))
    }

    async fn read_record(&self, path: &Path) -> Result<Option<LayoutRecord>, PersistenceError> {
        let bytes: Vec<u8> = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let record: LayoutRecord = serde_json::from_slice(&bytes)?;
        validate_layout(&record.layout)?;
        Ok(Some(record))
    }
}

impl LayoutStore for JsonFileStore {
    async fn load(&self, warehouse: &WarehouseId) -> Result<LayoutRecord, PersistenceError> {
        let path: PathBuf = self.path_for("layout", warehouse)?;
        let record: Option<LayoutRecord> = self.read_record(&path).await?;
        record.ok_or_else(|| PersistenceError::NotFound(warehouse.value().to_string()))
    }

    async fn save(
        &self,
        warehouse: &WarehouseId,
        layout: &Layout,
        expected_version: Option<u64>,
    ) -> Result<LayoutRecord, PersistenceError> {
        let path: PathBuf = self.path_for("layout", warehouse)?;
        let _guard = self.write_lock.lock().await;

        let current: Option<LayoutRecord> = self.read_record(&path).await?;
        let record: LayoutRecord = LayoutRecord::next(current.as_ref(), layout, expected_version)?;
        let bytes: Vec<u8> = serde_json::to_vec_pretty(&record)?;
        write_atomically(&path, &bytes).await?;

        debug!(
            warehouse = %warehouse,
            version = record.version,
            path = %path.display(),
            "Layout written"
        );
        Ok(record)
    }
}

impl OccupancyStore for JsonFileStore {
    async fn list_occupied(
        &self,
        warehouse: &WarehouseId,
    ) -> Result<BTreeSet<Coordinate>, PersistenceError> {
        let path: PathBuf = self.path_for("occupancy", warehouse)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeSet::new()),
            Err(err) => Err(err.into()),
        }
    }
}

async fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), PersistenceError> {
    let temp: PathBuf = path.with_extension("json.tmp");
    tokio::fs::write(&temp, bytes).await?;
    tokio::fs::rename(&temp, path).await?;
    Ok(())
}
