//! Boundary handlers for the Jobs endpoints.
//!
//! Each handler invokes exactly one orchestration operation and translates
//! its outcome to the wire; no validation, persistence, or business
//! computation happens here.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use captiond_jobs::JobId;

use crate::app::services::AppServices;
use crate::app::{
    dto,
    errors::{self, WireError},
};

pub async fn list_jobs(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.jobs.list_jobs().await {
        Ok(jobs) => {
            let items = jobs.iter().map(dto::job_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "jobs": items }))).into_response()
        }
        Err(defect) => errors::defect_response(defect),
    }
}

pub async fn get_job(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
) -> axum::response::Response {
    match services.jobs.get_job(JobId(id)).await {
        Ok(job) => (StatusCode::OK, Json(dto::job_to_json(&job))).into_response(),
        Err(err) => WireError::from(&err).into_response(),
    }
}

pub async fn get_job_result(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
) -> axum::response::Response {
    match services.jobs.get_job_result(JobId(id)).await {
        Ok(result) => (StatusCode::OK, Json(dto::result_to_json(&result))).into_response(),
        Err(err) => WireError::from(&err).into_response(),
    }
}
