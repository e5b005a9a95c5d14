//! Job domain errors.

use thiserror::Error;

use crate::job::JobId;

/// Domain-level failures for the Jobs resource.
///
/// Closed set: the boundary layer matches on it exhaustively, so a new
/// variant without a wire mapping stops compiling there. The two variants
/// are deliberately distinct — an unknown id and a known-but-unfinished job
/// must never be conflated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum JobError {
    /// No job exists under the requested id.
    #[error("job {id} not found")]
    NotFound { id: JobId },

    /// The job exists but has not completed, so no result is available yet.
    #[error("no result available for job {job_id}")]
    ResultNotFound { job_id: JobId },
}
