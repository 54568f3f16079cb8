// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Editor attribution for incoming requests.
//!
//! The server does not authenticate anyone. The host names the editor in the
//! `x-editor` header and that label is carried into the audit journal.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use shelfgrid_audit::Editor;
use tracing::{debug, warn};

/// Header naming the editor behind a request.
pub const EDITOR_HEADER: &str = "x-editor";

/// Extractor for the editor issuing a request.
///
/// A missing header falls back to [`Editor::system`].
///
/// ```ignore
/// async fn my_handler(EditorIdentity(editor): EditorIdentity) { ... }
/// ```
pub struct EditorIdentity(pub Editor);

impl<S: Send + Sync> FromRequestParts<S> for EditorIdentity {
    type Rejection = EditorError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(EDITOR_HEADER) else {
            debug!("No editor header, attributing to system");
            return Ok(Self(Editor::system()));
        };

        let id: &str = value
            .to_str()
            .map_err(|_| {
                warn!("Editor header is not valid ASCII");
                EditorError::InvalidHeader
            })?
            .trim();
        if id.is_empty() {
            warn!("Editor header is empty");
            return Err(EditorError::InvalidHeader);
        }

        Ok(Self(Editor::new(id.to_string(), String::from("user"))))
    }
}

/// Editor extraction errors.
#[derive(Debug)]
pub enum EditorError {
    /// The header is present but unusable.
    InvalidHeader,
}

impl IntoResponse for EditorError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidHeader => (
                StatusCode::BAD_REQUEST,
                "The x-editor header must be a non-empty ASCII name",
            )
                .into_response(),
        }
    }
}
