//! Orchestration layer: one operation per use case.
//!
//! Each operation composes access-layer calls, applies any cross-cutting
//! business rule, annotates the current span with primitive-valued fields,
//! logs failures unconditionally, and then applies its failure policy:
//! propagate (the caller can act on the error) or fatal (any domain error
//! is a defect). The policy is a static property of the use case.

use std::sync::Arc;

use captiond_core::Defect;
use captiond_jobs::{Job, JobError, JobId, JobResult, JobsRepository};
use captiond_media::{MediaError, MediaParser, ParseRequest, SubtitleSegment};

/// Orchestration operations for the Jobs resource.
#[derive(Clone)]
pub struct JobService {
    repo: Arc<dyn JobsRepository>,
}

impl JobService {
    pub fn new(repo: Arc<dyn JobsRepository>) -> Self {
        Self { repo }
    }

    /// List every job.
    ///
    /// Fatal policy: no failure here is client-actionable, so any domain
    /// error escalates to a [`Defect`].
    #[tracing::instrument(skip(self), fields(job.count = tracing::field::Empty))]
    pub async fn list_jobs(&self) -> Result<Vec<Job>, Defect> {
        match self.repo.list_all().await {
            Ok(jobs) => {
                tracing::Span::current().record("job.count", jobs.len() as u64);
                Ok(jobs)
            }
            Err(err) => {
                tracing::error!(error = %err, "listing jobs failed");
                Err(Defect::escalate(err))
            }
        }
    }

    /// Fetch one job by id. Propagate policy: `NotFound` tells the caller
    /// which id missed.
    #[tracing::instrument(skip(self), fields(job.id = %id))]
    pub async fn get_job(&self, id: JobId) -> Result<Job, JobError> {
        self.repo.get_by_id(id).await.inspect_err(|err| {
            tracing::error!(error = %err, "fetching job failed");
        })
    }

    /// Fetch the result of a completed job. Propagate policy.
    #[tracing::instrument(skip(self), fields(job.id = %id))]
    pub async fn get_job_result(&self, id: JobId) -> Result<JobResult, JobError> {
        self.repo.get_result(id).await.inspect_err(|err| {
            tracing::error!(error = %err, "fetching job result failed");
        })
    }
}

/// Orchestration operations for the Media resource.
#[derive(Clone)]
pub struct MediaService {
    parser: Arc<dyn MediaParser>,
}

impl MediaService {
    pub fn new(parser: Arc<dyn MediaParser>) -> Self {
        Self { parser }
    }

    /// Parse media into subtitle segments. Propagate policy.
    ///
    /// Business rule: an empty payload is rejected before the parser runs.
    #[tracing::instrument(
        skip(self, request),
        fields(media.language = %request.language(), media.source = %request.source_label())
    )]
    pub async fn parse(&self, request: ParseRequest) -> Result<Vec<SubtitleSegment>, MediaError> {
        if request.is_empty() {
            let err = MediaError::Empty {
                reason: "request carries no media to parse".to_string(),
            };
            tracing::error!(error = %err, "media parse rejected");
            return Err(err);
        }

        self.parser.parse(request).await.inspect_err(|err| {
            tracing::error!(error = %err, "media parse failed");
        })
    }
}

/// Orchestration services shared with the boundary layer via `Extension`.
pub struct AppServices {
    pub jobs: JobService,
    pub media: MediaService,
}
