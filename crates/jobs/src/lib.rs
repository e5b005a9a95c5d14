//! `captiond-jobs` — the asynchronous Job entity and its access contract.
//!
//! Pure domain crate: no transport or storage concerns live here.

pub mod error;
pub mod job;
pub mod repository;

pub use error::JobError;
pub use job::{Job, JobId, JobResult, JobStatus};
pub use repository::JobsRepository;
