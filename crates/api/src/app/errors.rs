//! Wire errors and the domain-to-wire translation.
//!
//! Wire errors carry a stable tag and an HTTP status, nothing else. Every
//! domain error variant maps to exactly one wire error; the `match` arms
//! below are exhaustive with no catch-all, so a new domain variant without a
//! registered translation stops compiling here.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use captiond_core::Defect;
use captiond_jobs::JobError;
use captiond_media::MediaError;

/// Client-visible error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    JobNotFound,
    JobResultNotFound,
    MediaNotFound,
    MediaEmpty,
}

impl WireError {
    /// Stable identifying tag serialized to clients.
    pub fn tag(self) -> &'static str {
        match self {
            WireError::JobNotFound => "JobNotFound",
            WireError::JobResultNotFound => "JobResultNotFound",
            WireError::MediaNotFound => "MediaNotFound",
            WireError::MediaEmpty => "MediaEmpty",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            WireError::JobNotFound | WireError::JobResultNotFound | WireError::MediaNotFound => {
                StatusCode::NOT_FOUND
            }
            WireError::MediaEmpty => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<&JobError> for WireError {
    fn from(err: &JobError) -> Self {
        match err {
            JobError::NotFound { .. } => WireError::JobNotFound,
            JobError::ResultNotFound { .. } => WireError::JobResultNotFound,
        }
    }
}

impl From<&MediaError> for WireError {
    fn from(err: &MediaError) -> Self {
        match err {
            MediaError::Parsing { .. } => WireError::MediaNotFound,
            MediaError::Empty { .. } => WireError::MediaEmpty,
        }
    }
}

impl IntoResponse for WireError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.tag() }))).into_response()
    }
}

/// Render a defect: generic failure, no internal detail disclosed.
pub fn defect_response(defect: Defect) -> Response {
    tracing::error!(error = %defect, "request terminated by defect");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal" })),
    )
        .into_response()
}
