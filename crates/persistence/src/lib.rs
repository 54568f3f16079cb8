// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Shelfgrid warehouse layout engine.
//!
//! Layouts and committed occupancy are read and written through two async
//! traits, [`LayoutStore`] and [`OccupancyStore`]. Two implementations are
//! provided:
//!
//! - [`InMemoryStore`] keeps everything in process memory and is used for
//!   tests and throwaway servers
//! - [`JsonFileStore`] keeps one JSON document per warehouse and record kind
//!   under a data directory
//!
//! ## Concurrent edits
//!
//! Every stored layout carries a version that increases by one on each save.
//! A caller that passes the version it loaded to [`LayoutStore::save`] gets
//! `PersistenceError::VersionConflict` if someone else saved in between.
//! A caller that passes `None` overwrites unconditionally.
//!
//! ## Validation
//!
//! Layouts read back from storage are run through
//! [`shelfgrid_domain::validate_layout`] before they are returned, so a
//! hand-edited or truncated file surfaces as `InvalidRecord` rather than as
//! a broken grid in the editor.

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod file;
mod memory;
mod record;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use record::LayoutRecord;
pub use store::{LayoutStore, OccupancyStore, validate_storage_key};
