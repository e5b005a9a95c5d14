//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: orchestration layer (one operation per use case)
//! - `routes/`: boundary layer (one handler per endpoint)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: wire errors and the domain-to-wire translation

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use captiond_infra::{InMemoryJobStore, StubMediaParser};

use crate::app::services::{AppServices, JobService, MediaService};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Composition root: wire the access layer into the orchestration layer and
/// hand everything to the routing tree (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let job_store = Arc::new(InMemoryJobStore::with_fixtures());
    let parser = Arc::new(StubMediaParser::new());

    let services = Arc::new(AppServices {
        jobs: JobService::new(job_store),
        media: MediaService::new(parser),
    });

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/media", routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
