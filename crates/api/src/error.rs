// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::input::InputError;
use shelfgrid::CoreError;
use shelfgrid_domain::DomainError;
use shelfgrid_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The request conflicts with the current state of a resource.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        Self::InvalidInput {
            field: String::from(err.field()),
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound(_) => Self::ResourceNotFound {
                resource_type: String::from("Layout"),
                message: err.to_string(),
            },
            PersistenceError::VersionConflict { .. } => Self::Conflict {
                message: err.to_string(),
            },
            PersistenceError::InvalidWarehouseId(_) => Self::InvalidInput {
                field: String::from("warehouse"),
                message: err.to_string(),
            },
            PersistenceError::Io(_)
            | PersistenceError::Serialization(_)
            | PersistenceError::InvalidRecord(_) => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let rule: &str = match &err {
        DomainError::FloorNotFound { .. } => {
            return ApiError::ResourceNotFound {
                resource_type: String::from("Floor"),
                message: err.to_string(),
            };
        }
        DomainError::InvalidColumnLabel(_) | DomainError::InvalidLocationCode(_) => {
            return ApiError::InvalidInput {
                field: String::from("code"),
                message: err.to_string(),
            };
        }
        DomainError::InvalidHeight { .. } => "positive_floor_height",
        DomainError::LastFloor => "at_least_one_floor",
        DomainError::DimensionMismatch { .. } => "shared_floor_dimensions",
        DomainError::InvalidDimensions { .. } => "positive_grid_dimensions",
        DomainError::EmptyLayout => "non_empty_layout",
        DomainError::CellExceedsHeight { .. } => "cell_within_height",
        DomainError::CellOutOfBounds { .. } => "cell_within_grid",
        DomainError::ColumnOutOfRange { .. } => "labelable_column",
        DomainError::CoordinateOutOfBounds { .. } => "coordinate_within_layout",
    };

    ApiError::DomainRuleViolation {
        rule: String::from(rule),
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidShelfCount { .. } => ApiError::DomainRuleViolation {
            rule: String::from("positive_shelf_count"),
            message: err.to_string(),
        },
        CoreError::SlotConflict { .. } => ApiError::Conflict {
            message: err.to_string(),
        },
        CoreError::InsufficientCapacity { .. } => ApiError::DomainRuleViolation {
            rule: String::from("sufficient_capacity"),
            message: err.to_string(),
        },
        CoreError::AssignerContractViolation { .. } => ApiError::Internal {
            message: err.to_string(),
        },
        CoreError::ItemNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Item"),
            message: err.to_string(),
        },
    }
}
