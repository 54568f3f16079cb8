// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-readable location codes.
//!
//! A location code has the shape `F<floor><column label><row>D<depth>C<group>`,
//! for example `F00AB03D00C02`. Numeric fields are zero-padded to two digits
//! and the column is a fixed two-letter label. Codes are meant for display
//! and scanning; the tuple is always the source of truth.

use crate::error::DomainError;
use crate::types::{Coordinate, PartialCoordinate};

/// Number of columns a two-letter label can address (`AA` through `ZZ`).
pub const MAX_COLUMNS: usize = 26 * 26;

/// Placeholder rendered for a field that is missing or cannot be shown.
const UNKNOWN_FIELD: &str = "??";

/// Length of a code whose numeric fields all fit in two digits.
const STRICT_CODE_LEN: usize = 13;

/// Returns the two-letter label for a column index.
///
/// The first letter is `'A' + column / 26` and the second is
/// `'A' + column % 26`, so `0 -> "AA"`, `25 -> "AZ"`, `26 -> "BA"`.
///
/// # Errors
///
/// Returns `DomainError::ColumnOutOfRange` for columns at or beyond
/// [`MAX_COLUMNS`].
pub fn column_label(column: usize) -> Result<String, DomainError> {
    if column >= MAX_COLUMNS {
        return Err(DomainError::ColumnOutOfRange { column });
    }

    // Both quotients are below 26, so the narrowing cannot truncate.
    #[allow(clippy::cast_possible_truncation)]
    let first: char = char::from(b'A' + (column / 26) as u8);
    #[allow(clippy::cast_possible_truncation)]
    let second: char = char::from(b'A' + (column % 26) as u8);

    Ok([first, second].iter().collect())
}

/// Parses a two-letter column label back into its column index.
///
/// Labels are case-insensitive.
///
/// # Errors
///
/// Returns `DomainError::InvalidColumnLabel` unless the input is exactly two
/// ASCII letters.
pub fn parse_column_label(label: &str) -> Result<usize, DomainError> {
    let bytes: Vec<u8> = label.trim().to_ascii_uppercase().into_bytes();

    match bytes.as_slice() {
        [first, second] if first.is_ascii_uppercase() && second.is_ascii_uppercase() => {
            Ok(usize::from(first - b'A') * 26 + usize::from(second - b'A'))
        }
        _ => Err(DomainError::InvalidColumnLabel(label.to_string())),
    }
}

/// Formats a complete coordinate as a location code.
///
/// # Errors
///
/// Returns `DomainError::ColumnOutOfRange` if the column has no label.
pub fn format_code(coordinate: &Coordinate) -> Result<String, DomainError> {
    let label: String = column_label(coordinate.column)?;
    Ok(format!(
        "F{:02}{label}{:02}D{:02}C{:02}",
        coordinate.floor, coordinate.row, coordinate.depth, coordinate.group
    ))
}

/// Formats a possibly incomplete coordinate as a location code.
///
/// Every missing field renders as `??` in place of its digits, and so does a
/// column that has no label. This never fails, so a half-picked location can
/// always be displayed.
#[must_use]
pub fn format_partial_code(partial: &PartialCoordinate) -> String {
    let label: String = partial
        .column
        .and_then(|column| column_label(column).ok())
        .unwrap_or_else(|| String::from(UNKNOWN_FIELD));

    format!(
        "F{}{label}{}D{}C{}",
        padded(partial.floor),
        padded(partial.row),
        padded(partial.depth),
        padded(partial.group)
    )
}

/// Parses a scanned location code.
///
/// Only the strict 13-character form is accepted, i.e. codes whose numeric
/// fields all fit in two digits. Letters are case-insensitive.
///
/// # Errors
///
/// Returns `DomainError::InvalidLocationCode` if the code does not match
/// `F##LL##D##C##`.
pub fn parse_code(code: &str) -> Result<Coordinate, DomainError> {
    let normalized: String = code.trim().to_ascii_uppercase();
    let invalid = || DomainError::InvalidLocationCode(code.to_string());

    if normalized.len() != STRICT_CODE_LEN || !normalized.is_ascii() {
        return Err(invalid());
    }

    let bytes: &[u8] = normalized.as_bytes();
    if bytes[0] != b'F' || bytes[7] != b'D' || bytes[10] != b'C' {
        return Err(invalid());
    }

    let floor: usize = two_digits(&bytes[1..3]).ok_or_else(invalid)?;
    let column: usize = parse_column_label(&normalized[3..5]).map_err(|_| invalid())?;
    let row: usize = two_digits(&bytes[5..7]).ok_or_else(invalid)?;
    let depth: usize = two_digits(&bytes[8..10]).ok_or_else(invalid)?;
    let group: usize = two_digits(&bytes[11..13]).ok_or_else(invalid)?;

    Ok(Coordinate::new(floor, row, column, group, depth))
}

fn padded(field: Option<usize>) -> String {
    field.map_or_else(|| String::from(UNKNOWN_FIELD), |value| format!("{value:02}"))
}

fn two_digits(bytes: &[u8]) -> Option<usize> {
    match bytes {
        [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            Some(usize::from(tens - b'0') * 10 + usize::from(ones - b'0'))
        }
        _ => None,
    }
}
