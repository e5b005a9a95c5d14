use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job identifier. Assigned at submission by the upstream processing system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl core::fmt::Display for JobId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for JobId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Job lifecycle status.
///
/// Transitions run `pending -> in-progress -> completed` and are driven by
/// the processing system; this crate only consumes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
}

impl JobStatus {
    fn stage(self) -> u8 {
        match self {
            JobStatus::Pending => 0,
            JobStatus::InProgress => 1,
            JobStatus::Completed => 2,
        }
    }

    /// Whether moving to `next` keeps the lifecycle monotonic.
    ///
    /// Regressions and self-transitions are rejected; skipping straight to
    /// `completed` is allowed since the processing system reports state, not
    /// individual steps.
    pub fn can_transition_to(self, next: JobStatus) -> bool {
        next.stage() > self.stage()
    }

    pub fn is_completed(self) -> bool {
        self == JobStatus::Completed
    }
}

impl core::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            JobStatus::Pending => "pending",
            JobStatus::InProgress => "in-progress",
            JobStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// The output of a completed job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    pub job_id: JobId,
    pub transcript: String,
}

/// One unit of asynchronous work.
///
/// A result is present if and only if the job has completed. The invariant
/// is enforced by construction: the three constructors below are the only
/// way to build a record, and returned values are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    id: JobId,
    name: String,
    status: JobStatus,
    created_at: DateTime<Utc>,
    result: Option<JobResult>,
}

impl Job {
    pub fn pending(id: JobId, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            status: JobStatus::Pending,
            created_at,
            result: None,
        }
    }

    pub fn in_progress(id: JobId, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            status: JobStatus::InProgress,
            created_at,
            result: None,
        }
    }

    pub fn completed(
        id: JobId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        transcript: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            status: JobStatus::Completed,
            created_at,
            result: Some(JobResult {
                job_id: id,
                transcript: transcript.into(),
            }),
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The job's result; `Some` exactly when `status` is `completed`.
    pub fn result(&self) -> Option<&JobResult> {
        self.result.as_ref()
    }
}
