//! `captiond-infra` — stand-in backends for the access layer.
//!
//! Everything here serves fixed data. The real job store and the real
//! transcription engine plug in behind the same traits later; nothing above
//! the access contracts changes when they do.

pub mod jobs;
pub mod media;

pub use jobs::InMemoryJobStore;
pub use media::StubMediaParser;
