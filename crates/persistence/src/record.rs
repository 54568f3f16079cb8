// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use shelfgrid_domain::Layout;
use time::OffsetDateTime;

/// A stored layout together with its concurrency token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRecord {
    /// The layout.
    pub layout: Layout,
    /// Incremented on every save; the first save produces version 1.
    pub version: u64,
    /// When this version was written.
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,
}

impl LayoutRecord {
    /// Builds the record that replaces `current` when `layout` is saved.
    ///
    /// # Arguments
    ///
    /// * `current` - The currently stored record, if any
    /// * `layout` - The layout being saved
    /// * `expected_version` - The version the caller loaded, if it wants a check
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::VersionConflict` if `expected_version` is
    /// given and differs from the stored version (0 when nothing is stored).
    pub fn next(
        current: Option<&Self>,
        layout: &Layout,
        expected_version: Option<u64>,
    ) -> Result<Self, PersistenceError> {
        let actual: u64 = current.map_or(0, |record| record.version);
        if let Some(expected) = expected_version.filter(|&expected| expected != actual) {
            return Err(PersistenceError::VersionConflict { expected, actual });
        }

        Ok(Self {
            layout: layout.clone(),
            version: actual + 1,
            saved_at: OffsetDateTime::now_utc(),
        })
    }
}
