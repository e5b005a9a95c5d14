//! Request/response DTOs and JSON mapping helpers.

use serde::Deserialize;
use serde_json::json;

use captiond_jobs::{Job, JobResult};
use captiond_media::SubtitleSegment;

/// JSON body of the reference-based parse request.
#[derive(Debug, Deserialize)]
pub struct ParseUrlRequest {
    pub url: String,
    pub language: String,
}

pub fn job_to_json(job: &Job) -> serde_json::Value {
    json!({
        "id": job.id(),
        "name": job.name(),
        "status": job.status(),
        "created_at": job.created_at(),
    })
}

pub fn result_to_json(result: &JobResult) -> serde_json::Value {
    json!({
        "job_id": result.job_id,
        "transcript": result.transcript,
    })
}

pub fn segments_to_json(segments: &[SubtitleSegment]) -> serde_json::Value {
    json!({ "segments": segments })
}

#[cfg(test)]
mod tests {
    use super::*;
    use captiond_jobs::JobId;
    use chrono::Utc;

    #[test]
    fn job_json_uses_kebab_case_status_and_no_result_field() {
        let job = Job::in_progress(JobId(1), "transcribe welcome.mp4", Utc::now());
        let value = job_to_json(&job);

        assert_eq!(value["id"], 1);
        assert_eq!(value["status"], "in-progress");
        assert!(value.get("result").is_none());
    }
}
