// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during layout and address validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A floor height below 1 was requested.
    InvalidHeight {
        /// The rejected height.
        height: u32,
    },
    /// Attempted to remove the only remaining floor.
    LastFloor,
    /// The referenced floor does not exist.
    FloorNotFound {
        /// The requested floor index.
        floor: usize,
        /// The number of floors in the layout.
        floor_count: usize,
    },
    /// A floor's matrix does not match the layout's declared dimensions.
    DimensionMismatch {
        /// The floor whose matrix diverges.
        floor: usize,
        /// The rows declared by the layout.
        expected_rows: usize,
        /// The columns declared by the layout.
        expected_columns: usize,
        /// The rows found in the floor matrix.
        actual_rows: usize,
        /// The columns found in the offending matrix row.
        actual_columns: usize,
    },
    /// Rows or columns of zero were requested.
    InvalidDimensions {
        /// The requested row count.
        rows: usize,
        /// The requested column count.
        columns: usize,
    },
    /// A layout without any floors was supplied.
    EmptyLayout,
    /// A cell holds more slots than its floor allows.
    CellExceedsHeight {
        /// The floor index.
        floor: usize,
        /// The cell row.
        row: usize,
        /// The cell column.
        column: usize,
        /// The stored slot count.
        value: u32,
        /// The floor's maximum height.
        height: u32,
    },
    /// A cell outside the floor grid was addressed.
    CellOutOfBounds {
        /// The requested row.
        row: usize,
        /// The requested column.
        column: usize,
        /// The floor's row count.
        rows: usize,
        /// The floor's column count.
        columns: usize,
    },
    /// The column cannot be rendered as a two-letter label.
    ColumnOutOfRange {
        /// The rejected column index.
        column: usize,
    },
    /// A column label is not two letters in `AA..ZZ`.
    InvalidColumnLabel(String),
    /// A location code does not follow the fixed-width format.
    InvalidLocationCode(String),
    /// A coordinate does not address an existing slot in the layout.
    CoordinateOutOfBounds {
        /// Description of the violated bound.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHeight { height } => {
                write!(f, "Invalid floor height {height}: height must be at least 1")
            }
            Self::LastFloor => write!(f, "Cannot remove the last remaining floor"),
            Self::FloorNotFound { floor, floor_count } => {
                write!(
                    f,
                    "Floor {floor} not found: layout has {floor_count} floor(s)"
                )
            }
            Self::DimensionMismatch {
                floor,
                expected_rows,
                expected_columns,
                actual_rows,
                actual_columns,
            } => {
                write!(
                    f,
                    "Floor {floor} is {actual_rows}x{actual_columns} but the layout is {expected_rows}x{expected_columns}"
                )
            }
            Self::InvalidDimensions { rows, columns } => {
                write!(
                    f,
                    "Invalid grid dimensions {rows}x{columns}: rows and columns must be at least 1"
                )
            }
            Self::EmptyLayout => write!(f, "A layout must contain at least one floor"),
            Self::CellExceedsHeight {
                floor,
                row,
                column,
                value,
                height,
            } => {
                write!(
                    f,
                    "Cell ({row}, {column}) on floor {floor} holds {value} slots, exceeding floor height {height}"
                )
            }
            Self::CellOutOfBounds {
                row,
                column,
                rows,
                columns,
            } => {
                write!(
                    f,
                    "Cell ({row}, {column}) is outside the {rows}x{columns} grid"
                )
            }
            Self::ColumnOutOfRange { column } => {
                write!(
                    f,
                    "Column {column} cannot be labelled: at most 676 columns are addressable"
                )
            }
            Self::InvalidColumnLabel(label) => write!(f, "Invalid column label: '{label}'"),
            Self::InvalidLocationCode(code) => write!(f, "Invalid location code: '{code}'"),
            Self::CoordinateOutOfBounds { reason } => {
                write!(f, "Coordinate out of bounds: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
