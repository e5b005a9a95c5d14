use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard};

use async_trait::async_trait;
use chrono::Utc;

use captiond_jobs::{Job, JobError, JobId, JobsRepository};

/// In-memory job records standing in for the real job store.
///
/// Intended for dev/tests. Lookups that come back empty are translated to
/// `JobError::NotFound` right here; no backend-shaped failure escapes this
/// type.
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    records: RwLock<BTreeMap<JobId, Job>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the fixture dataset served until real persistence
    /// lands: job 1 mid-flight, job 2 finished, job 3 still queued.
    pub fn with_fixtures() -> Self {
        let store = Self::new();
        let now = Utc::now();
        store.insert(Job::in_progress(JobId(1), "transcribe welcome.mp4", now));
        store.insert(Job::completed(
            JobId(2),
            "transcribe briefing.mp4",
            now,
            "welcome everyone, this briefing covers the quarterly roadmap",
        ));
        store.insert(Job::pending(JobId(3), "transcribe keynote.mp4", now));
        store
    }

    /// Insert or replace a record. Fixture/test hook; the request pipeline
    /// never writes.
    pub fn insert(&self, job: Job) {
        self.write().insert(job.id(), job);
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<JobId, Job>> {
        // A poisoned lock still holds consistent data (writes are whole-record
        // inserts), so reads proceed.
        match self.records.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<JobId, Job>> {
        match self.records.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl JobsRepository for InMemoryJobStore {
    async fn list_all(&self) -> Result<Vec<Job>, JobError> {
        // BTreeMap iteration gives ascending id order for free.
        Ok(self.read().values().cloned().collect())
    }

    async fn get_by_id(&self, id: JobId) -> Result<Job, JobError> {
        self.read().get(&id).cloned().ok_or(JobError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use captiond_jobs::JobStatus;

    #[tokio::test]
    async fn listing_returns_jobs_in_id_order() {
        let store = InMemoryJobStore::with_fixtures();

        let jobs = store.list_all().await.unwrap();
        let ids: Vec<u64> = jobs.iter().map(|j| j.id().0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn result_succeeds_iff_job_exists_and_completed() {
        let store = InMemoryJobStore::with_fixtures();

        for job in store.list_all().await.unwrap() {
            let outcome = store.get_result(job.id()).await;
            if job.status() == JobStatus::Completed {
                assert!(outcome.is_ok(), "completed job {} must have a result", job.id());
            } else {
                assert_eq!(
                    outcome.unwrap_err(),
                    JobError::ResultNotFound { job_id: job.id() },
                    "unfinished job {} must yield ResultNotFound",
                    job.id()
                );
            }
        }
    }

    #[tokio::test]
    async fn missing_ids_fail_with_not_found_on_both_operations() {
        let store = InMemoryJobStore::with_fixtures();
        let missing = JobId(999);

        assert_eq!(
            store.get_by_id(missing).await.unwrap_err(),
            JobError::NotFound { id: missing }
        );
        assert_eq!(
            store.get_result(missing).await.unwrap_err(),
            JobError::NotFound { id: missing }
        );
    }

    #[tokio::test]
    async fn completed_result_carries_the_transcript() {
        let store = InMemoryJobStore::with_fixtures();

        let result = store.get_result(JobId(2)).await.unwrap();
        assert_eq!(result.job_id, JobId(2));
        assert!(!result.transcript.is_empty());
    }
}
