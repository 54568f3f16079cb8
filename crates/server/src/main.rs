// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod editor;
mod live;
mod store;

#[cfg(test)]
mod tests;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use shelfgrid::Command;
use shelfgrid_api::{
    ApiError, AssignmentView, AutoAssignResponse, BeginAssignmentRequest, CloseSessionResponse,
    CodeQuery, CodeResponse, ColorsResponse, CommandResponse, CreateLayoutRequest, EditingSession, LayoutRecordResponse,
    LayoutView, PickRequest, PointerEvent, PointerResponse, SaveRequest, SetActiveRequest,
    create_layout, location_code, open_session, parse_warehouse_id, save_session,
};
use shelfgrid_domain::{DEFAULT_FLOOR_HEIGHT, WarehouseId};
use shelfgrid_persistence::{InMemoryStore, JsonFileStore};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::editor::EditorIdentity;
use crate::live::{LiveEvent, LiveEventBroadcaster, live_events_handler};
use crate::store::AppStore;

/// Shelfgrid Server - HTTP server for the warehouse shelf layout editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory for JSON layout files. If not provided, layouts are kept in memory.
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Floor height used when a layout is created without one
    #[arg(long, default_value_t = DEFAULT_FLOOR_HEIGHT)]
    default_height: u32,
}

/// Application state shared across handlers.
///
/// Open editing sessions are keyed by warehouse and guarded by one mutex, so
/// events for a warehouse are handled one at a time in arrival order.
#[derive(Clone)]
struct AppState {
    /// The layout and occupancy store.
    store: Arc<AppStore>,
    /// Open editing sessions.
    sessions: Arc<Mutex<HashMap<WarehouseId, EditingSession>>>,
    /// Change notifications for connected renderers.
    live: Arc<LiveEventBroadcaster>,
    /// Height of newly created layouts when the request gives none.
    default_height: u32,
}

impl AppState {
    fn new(store: AppStore, default_height: u32) -> Self {
        Self {
            store: Arc::new(store),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            live: Arc::new(LiveEventBroadcaster::new()),
            default_height,
        }
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok` while the server is serving.
    status: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

fn warehouse_from_path(raw: &str) -> Result<WarehouseId, HttpError> {
    parse_warehouse_id(raw).map_err(|err| HttpError::from(ApiError::from(err)))
}

fn no_session(warehouse: &WarehouseId) -> HttpError {
    HttpError {
        status: StatusCode::NOT_FOUND,
        message: format!("Session not found: no editing session open for warehouse '{warehouse}'"),
    }
}

/// Handler for GET `/health`.
#[allow(clippy::unused_async)]
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for PUT `/warehouses/{id}/layout`.
///
/// Creates and stores a fresh single-floor layout.
async fn handle_create_layout(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateLayoutRequest>,
) -> Result<Json<LayoutRecordResponse>, HttpError> {
    let warehouse: WarehouseId = warehouse_from_path(&id)?;
    let response: LayoutRecordResponse = create_layout(
        app_state.store.as_ref(),
        &warehouse,
        &req,
        app_state.default_height,
    )
    .await?;

    app_state
        .live
        .broadcast(&LiveEvent::LayoutCreated { warehouse });
    Ok(Json(response))
}

/// Handler for POST `/warehouses/{id}/session`.
///
/// Opens (or reopens, discarding unsaved changes) the warehouse's editing
/// session.
async fn handle_open_session(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LayoutView>, HttpError> {
    let warehouse: WarehouseId = warehouse_from_path(&id)?;
    let session: EditingSession =
        open_session(app_state.store.as_ref(), warehouse.clone()).await?;
    let view: LayoutView = session.view();

    let mut sessions = app_state.sessions.lock().await;
    if sessions.insert(warehouse.clone(), session).is_some() {
        info!(warehouse = %warehouse, "Replaced open editing session");
    }
    drop(sessions);

    app_state.live.broadcast(&LiveEvent::SessionOpened {
        warehouse,
        version: view.version,
    });
    Ok(Json(view))
}

/// Handler for DELETE `/warehouses/{id}/session`.
///
/// Closes the warehouse's editing session, dropping unsaved changes.
async fn handle_close_session(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CloseSessionResponse>, HttpError> {
    let warehouse: WarehouseId = warehouse_from_path(&id)?;
    let mut sessions = app_state.sessions.lock().await;
    let session: EditingSession = sessions
        .remove(&warehouse)
        .ok_or_else(|| no_session(&warehouse))?;
    drop(sessions);

    let response: CloseSessionResponse = session.close();
    app_state.live.broadcast(&LiveEvent::SessionClosed {
        warehouse,
        unsaved_changes: response.unsaved_changes,
    });
    Ok(Json(response))
}

/// Handler for GET `/warehouses/{id}/view`.
async fn handle_get_view(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LayoutView>, HttpError> {
    let warehouse: WarehouseId = warehouse_from_path(&id)?;
    let sessions = app_state.sessions.lock().await;
    let session: &EditingSession = sessions
        .get(&warehouse)
        .ok_or_else(|| no_session(&warehouse))?;
    Ok(Json(session.view()))
}

/// Handler for POST `/warehouses/{id}/commands`.
async fn handle_command(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    EditorIdentity(editor): EditorIdentity,
    Json(command): Json<Command>,
) -> Result<Json<CommandResponse>, HttpError> {
    let warehouse: WarehouseId = warehouse_from_path(&id)?;
    let mut sessions = app_state.sessions.lock().await;
    let session: &mut EditingSession = sessions
        .get_mut(&warehouse)
        .ok_or_else(|| no_session(&warehouse))?;

    let response: CommandResponse = session.execute(command, editor)?;
    drop(sessions);

    app_state.live.broadcast(&LiveEvent::LayoutEdited {
        warehouse: warehouse.clone(),
        action: response.event.action.name.clone(),
        editor: response.event.editor.id.clone(),
    });
    if !response.cleared_items.is_empty() {
        app_state
            .live
            .broadcast(&LiveEvent::AssignmentChanged { warehouse });
    }
    Ok(Json(response))
}

/// Handler for POST `/warehouses/{id}/pointer`.
async fn handle_pointer(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    EditorIdentity(editor): EditorIdentity,
    Json(event): Json<PointerEvent>,
) -> Result<Json<PointerResponse>, HttpError> {
    let warehouse: WarehouseId = warehouse_from_path(&id)?;
    let mut sessions = app_state.sessions.lock().await;
    let session: &mut EditingSession = sessions
        .get_mut(&warehouse)
        .ok_or_else(|| no_session(&warehouse))?;

    let response: PointerResponse = session.pointer(event, editor)?;
    drop(sessions);

    if let Some(event) = &response.event {
        app_state.live.broadcast(&LiveEvent::LayoutEdited {
            warehouse: warehouse.clone(),
            action: event.action.name.clone(),
            editor: event.editor.id.clone(),
        });
    }
    if !response.cleared_items.is_empty() {
        app_state
            .live
            .broadcast(&LiveEvent::AssignmentChanged { warehouse });
    }
    Ok(Json(response))
}

/// Handler for POST `/warehouses/{id}/save`.
///
/// Stores the session's layout, failing with 409 if a newer version was
/// saved meanwhile unless `force` is set.
async fn handle_save(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SaveRequest>,
) -> Result<Json<LayoutRecordResponse>, HttpError> {
    let warehouse: WarehouseId = warehouse_from_path(&id)?;
    let mut sessions = app_state.sessions.lock().await;
    let session: &mut EditingSession = sessions
        .get_mut(&warehouse)
        .ok_or_else(|| no_session(&warehouse))?;

    let response: LayoutRecordResponse =
        save_session(app_state.store.as_ref(), session, req).await?;
    drop(sessions);

    app_state.live.broadcast(&LiveEvent::LayoutSaved {
        warehouse,
        version: response.version,
    });
    Ok(Json(response))
}

/// Handler for POST `/warehouses/{id}/assignment`.
async fn handle_begin_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<BeginAssignmentRequest>,
) -> Result<Json<AssignmentView>, HttpError> {
    let warehouse: WarehouseId = warehouse_from_path(&id)?;
    let mut sessions = app_state.sessions.lock().await;
    let session: &mut EditingSession = sessions
        .get_mut(&warehouse)
        .ok_or_else(|| no_session(&warehouse))?;

    let view: AssignmentView = session.begin_assignment(req)?;
    drop(sessions);

    app_state
        .live
        .broadcast(&LiveEvent::AssignmentChanged { warehouse });
    Ok(Json(view))
}

/// Handler for PUT `/warehouses/{id}/assignment/{index}`.
///
/// Picks the item's slot by coordinate or scanned code, or clears it when
/// the body names neither.
async fn handle_pick(
    AxumState(app_state): AxumState<AppState>,
    Path((id, index)): Path<(String, usize)>,
    Json(req): Json<PickRequest>,
) -> Result<Json<AssignmentView>, HttpError> {
    let warehouse: WarehouseId = warehouse_from_path(&id)?;
    let mut sessions = app_state.sessions.lock().await;
    let session: &mut EditingSession = sessions
        .get_mut(&warehouse)
        .ok_or_else(|| no_session(&warehouse))?;

    let view: AssignmentView = session.pick(index, &req)?;
    drop(sessions);

    app_state
        .live
        .broadcast(&LiveEvent::AssignmentChanged { warehouse });
    Ok(Json(view))
}

/// Handler for POST `/warehouses/{id}/assignment/active`.
async fn handle_set_active(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SetActiveRequest>,
) -> Result<Json<AssignmentView>, HttpError> {
    let warehouse: WarehouseId = warehouse_from_path(&id)?;
    let mut sessions = app_state.sessions.lock().await;
    let session: &mut EditingSession = sessions
        .get_mut(&warehouse)
        .ok_or_else(|| no_session(&warehouse))?;

    Ok(Json(session.set_active(req.index)?))
}

/// Handler for POST `/warehouses/{id}/assignment/auto`.
async fn handle_auto_assign(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AutoAssignResponse>, HttpError> {
    let warehouse: WarehouseId = warehouse_from_path(&id)?;
    let mut sessions = app_state.sessions.lock().await;
    let session: &mut EditingSession = sessions
        .get_mut(&warehouse)
        .ok_or_else(|| no_session(&warehouse))?;

    let response: AutoAssignResponse = session.auto_assign()?;
    drop(sessions);

    app_state
        .live
        .broadcast(&LiveEvent::AssignmentChanged { warehouse });
    Ok(Json(response))
}

/// Handler for GET `/warehouses/{id}/colors`.
async fn handle_get_colors(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ColorsResponse>, HttpError> {
    let warehouse: WarehouseId = warehouse_from_path(&id)?;
    let sessions = app_state.sessions.lock().await;
    let session: &EditingSession = sessions
        .get(&warehouse)
        .ok_or_else(|| no_session(&warehouse))?;

    Ok(Json(ColorsResponse {
        colors: session.colors(),
    }))
}

/// Handler for GET `/codes`.
///
/// Formats a (possibly partial) coordinate, or parses `code`.
#[allow(clippy::unused_async)]
async fn handle_location_code(
    Query(query): Query<CodeQuery>,
) -> Result<Json<CodeResponse>, HttpError> {
    Ok(Json(location_code(&query)?))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/codes", get(handle_location_code))
        .route("/live", get(live_events_handler))
        .route("/warehouses/{id}/layout", put(handle_create_layout))
        .route(
            "/warehouses/{id}/session",
            post(handle_open_session).delete(handle_close_session),
        )
        .route("/warehouses/{id}/view", get(handle_get_view))
        .route("/warehouses/{id}/commands", post(handle_command))
        .route("/warehouses/{id}/pointer", post(handle_pointer))
        .route("/warehouses/{id}/save", post(handle_save))
        .route("/warehouses/{id}/assignment", post(handle_begin_assignment))
        .route(
            "/warehouses/{id}/assignment/active",
            post(handle_set_active),
        )
        .route("/warehouses/{id}/assignment/auto", post(handle_auto_assign))
        .route("/warehouses/{id}/assignment/{index}", put(handle_pick))
        .route("/warehouses/{id}/colors", get(handle_get_colors))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Shelfgrid Server");

    let store: AppStore = if let Some(data_dir) = &args.data_dir {
        info!("Using JSON layout files in: {}", data_dir.display());
        AppStore::File(JsonFileStore::open(data_dir.clone()).await?)
    } else {
        info!("Using in-memory layout store");
        AppStore::Memory(InMemoryStore::new())
    };

    let app: Router = build_router(AppState::new(store, args.default_height));

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
