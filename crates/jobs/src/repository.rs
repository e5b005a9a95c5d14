//! Access-layer contract for the Jobs resource.

use async_trait::async_trait;

use crate::error::JobError;
use crate::job::{Job, JobId, JobResult};

/// Read access to job records.
///
/// Implementations own the translation from backend-shaped failures into
/// [`JobError`]; no storage error is ever visible to callers. Business rules
/// and retries do not live behind this trait.
#[async_trait]
pub trait JobsRepository: Send + Sync {
    /// Every known job, ordered by ascending id.
    async fn list_all(&self) -> Result<Vec<Job>, JobError>;

    /// Resolve a single job. A missing record becomes `JobError::NotFound`.
    async fn get_by_id(&self, id: JobId) -> Result<Job, JobError>;

    /// Resolve the result of a completed job.
    ///
    /// Resolution always goes through [`get_by_id`](Self::get_by_id), so an
    /// unknown id fails with `NotFound`. An existing job that has not
    /// completed fails with `ResultNotFound`: availability is gated strictly
    /// on `JobStatus::Completed`, and the job record itself is the one
    /// authoritative source for that check.
    async fn get_result(&self, id: JobId) -> Result<JobResult, JobError> {
        let job = self.get_by_id(id).await?;
        job.result()
            .cloned()
            .ok_or(JobError::ResultNotFound { job_id: id })
    }
}
