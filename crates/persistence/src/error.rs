// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shelfgrid_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// No layout is stored for the warehouse.
    NotFound(String),
    /// The stored layout changed since it was loaded.
    VersionConflict {
        /// The version the caller loaded.
        expected: u64,
        /// The version currently stored (0 if nothing is stored).
        actual: u64,
    },
    /// The warehouse identifier cannot be used as a storage key.
    InvalidWarehouseId(String),
    /// Reading or writing the backing storage failed.
    Io(String),
    /// Serialization/deserialization error.
    Serialization(String),
    /// A stored layout violates the layout invariants.
    InvalidRecord(DomainError),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(warehouse) => {
                write!(f, "No layout stored for warehouse '{warehouse}'")
            }
            Self::VersionConflict { expected, actual } => {
                write!(
                    f,
                    "Version conflict: expected version {expected}, but version {actual} is stored"
                )
            }
            Self::InvalidWarehouseId(warehouse) => {
                write!(
                    f,
                    "Invalid warehouse id '{warehouse}': only letters, digits, '-' and '_' are allowed"
                )
            }
            Self::Io(msg) => write!(f, "Storage I/O error: {msg}"),
            Self::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            Self::InvalidRecord(err) => write!(f, "Stored layout is invalid: {err}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::InvalidRecord(err)
    }
}
