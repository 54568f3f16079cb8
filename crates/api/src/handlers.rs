// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operations that cross the storage boundary.

use crate::error::{ApiError, translate_domain_error};
use crate::input::InputError;
use crate::request_response::{
    CodeQuery, CodeResponse, CreateLayoutRequest, LayoutRecordResponse, SaveRequest,
};
use crate::session::EditingSession;
use shelfgrid_domain::{
    Coordinate, Layout, PartialCoordinate, WarehouseId, format_code, format_partial_code,
    parse_code,
};
use shelfgrid_persistence::{LayoutRecord, LayoutStore, OccupancyStore};
use std::collections::BTreeSet;
use tracing::info;

/// Creates and stores a fresh single-floor layout of zeros.
///
/// Creation never overwrites: if the warehouse already has a layout the
/// request fails with a conflict.
///
/// # Arguments
///
/// * `store` - The layout store
/// * `warehouse` - The warehouse to create the layout for
/// * `request` - The grid dimensions and optional height
/// * `default_height` - Height used when the request gives none
///
/// # Errors
///
/// Returns an error if the dimensions or height are invalid, a layout
/// already exists, or the store fails.
pub async fn create_layout<S: LayoutStore>(
    store: &S,
    warehouse: &WarehouseId,
    request: &CreateLayoutRequest,
    default_height: u32,
) -> Result<LayoutRecordResponse, ApiError> {
    let height: u32 = request.height.unwrap_or(default_height);
    let layout: Layout =
        Layout::new(request.rows, request.columns, height).map_err(translate_domain_error)?;

    let record: LayoutRecord = store.save(warehouse, &layout, Some(0)).await?;
    info!(
        warehouse = %warehouse,
        rows = request.rows,
        columns = request.columns,
        height,
        "Layout created"
    );
    Ok(record_response(warehouse, &record))
}

/// Opens an editing session on the stored layout and occupancy.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the warehouse has no layout, or
/// the translated store error.
pub async fn open_session<S: LayoutStore + OccupancyStore>(
    store: &S,
    warehouse: WarehouseId,
) -> Result<EditingSession, ApiError> {
    let record: LayoutRecord = store.load(&warehouse).await?;
    let occupied: BTreeSet<Coordinate> = store.list_occupied(&warehouse).await?;

    info!(
        warehouse = %warehouse,
        version = record.version,
        occupied = occupied.len(),
        "Editing session opened"
    );
    Ok(EditingSession::new(warehouse, record, occupied))
}

/// Stores the session's layout.
///
/// Unless `force` is set, the save fails if someone else stored a newer
/// version since the session was opened or last saved.
///
/// # Errors
///
/// Returns `ApiError::Conflict` on a stale version, or the translated store
/// error.
pub async fn save_session<S: LayoutStore>(
    store: &S,
    session: &mut EditingSession,
    request: SaveRequest,
) -> Result<LayoutRecordResponse, ApiError> {
    let expected_version: Option<u64> = if request.force {
        None
    } else {
        Some(session.version())
    };
    let warehouse: WarehouseId = session.state().warehouse.clone();

    let record: LayoutRecord = store
        .save(&warehouse, &session.state().layout, expected_version)
        .await?;
    session.mark_saved(&record);
    Ok(record_response(&warehouse, &record))
}

/// Formats or parses a location code.
///
/// With `code` set the code is parsed and returned in canonical form.
/// Otherwise the coordinate fields are formatted; a complete coordinate must
/// have a labelable column, while missing fields render as `??`.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if both forms are given or the code is
/// malformed, or a rule violation for an unlabelable column.
pub fn location_code(query: &CodeQuery) -> Result<CodeResponse, ApiError> {
    let partial: PartialCoordinate = PartialCoordinate {
        floor: query.floor,
        row: query.row,
        column: query.column,
        group: query.group,
        depth: query.depth,
    };

    if let Some(code) = query.code.as_deref() {
        if partial != PartialCoordinate::new() {
            return Err(InputError::AmbiguousLocation.into());
        }
        let coordinate: Coordinate = parse_code(code).map_err(translate_domain_error)?;
        let code: String = format_code(&coordinate).map_err(translate_domain_error)?;
        return Ok(CodeResponse {
            code,
            coordinate: Some(coordinate),
        });
    }

    match partial.build() {
        Some(coordinate) => Ok(CodeResponse {
            code: format_code(&coordinate).map_err(translate_domain_error)?,
            coordinate: Some(coordinate),
        }),
        None => Ok(CodeResponse {
            code: format_partial_code(&partial),
            coordinate: None,
        }),
    }
}

fn record_response(warehouse: &WarehouseId, record: &LayoutRecord) -> LayoutRecordResponse {
    LayoutRecordResponse {
        warehouse: warehouse.clone(),
        version: record.version,
        saved_at: record.saved_at,
        floor_count: record.layout.floor_count(),
        rows: record.layout.rows(),
        columns: record.layout.columns(),
        capacity: record.layout.capacity(),
    }
}
