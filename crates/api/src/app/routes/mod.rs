use axum::{
    Router,
    routing::{get, post},
};

pub mod jobs;
pub mod media;
pub mod system;

/// Router for the `/media` surface.
pub fn router() -> Router {
    Router::new()
        .route("/parse", post(media::parse))
        .route("/jobs", get(jobs::list_jobs))
        .route("/job/:id", get(jobs::get_job))
        .route("/job/:id/result", get(jobs::get_job_result))
}
